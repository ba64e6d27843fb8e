use std::fmt;

use crate::ast::Token;

/// Character offset into the pointer text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Position(pub usize);

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Malformed input found while scanning.
#[derive(Debug, Clone, PartialEq)]
pub struct LexError {
    pub message: String,
    pub position: Position,
}

impl fmt::Display for LexError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} at position {}", self.message, self.position)
    }
}

impl std::error::Error for LexError {}

pub struct Lexer {
    input: Vec<char>,
    position: usize,
}

impl Lexer {
    pub fn new(input: &str) -> Self {
        Lexer {
            input: input.chars().collect(),
            position: 0,
        }
    }

    /// Offset of the next character to be scanned.
    pub fn position(&self) -> Position {
        Position(self.position)
    }

    /// The full input text.
    pub fn source(&self) -> String {
        self.input.iter().collect()
    }

    fn current_char(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    fn peek_char(&self, offset: usize) -> Option<char> {
        self.input.get(self.position + offset).copied()
    }

    fn advance(&mut self) {
        self.position += 1;
    }

    pub fn next_token(&mut self) -> Result<Token, LexError> {
        match self.current_char() {
            None => Ok(Token::Eof),
            Some('/') => {
                self.advance();
                Ok(Token::Slash)
            }
            Some('~') => match self.peek_char(1) {
                Some(digit @ ('0' | '1')) => {
                    self.advance();
                    self.advance();
                    Ok(Token::Escape(digit))
                }
                Some(ch) => Err(LexError {
                    message: format!("Invalid escape sequence '~{}' (expected '~0' or '~1')", ch),
                    position: self.position(),
                }),
                None => Err(LexError {
                    message: "Unterminated escape sequence: '~' at end of input".to_string(),
                    position: self.position(),
                }),
            },
            Some(ch) => {
                self.advance();
                Ok(Token::Char(ch))
            }
        }
    }
}

#[test]
fn test_escapes() {
    let mut lexer = Lexer::new("/a~1b~0");
    assert_eq!(lexer.next_token(), Ok(Token::Slash));
    assert_eq!(lexer.next_token(), Ok(Token::Char('a')));
    assert_eq!(lexer.next_token(), Ok(Token::Escape('1')));
    assert_eq!(lexer.next_token(), Ok(Token::Char('b')));
    assert_eq!(lexer.next_token(), Ok(Token::Escape('0')));
    assert_eq!(lexer.next_token(), Ok(Token::Eof));
}

#[test]
fn test_bad_escape_position() {
    let mut lexer = Lexer::new("/ab~2");
    for _ in 0..3 {
        lexer.next_token().unwrap();
    }
    let err = lexer.next_token().unwrap_err();
    assert_eq!(err.position, Position(3));
}
