use std::fmt;

use log::debug;

use crate::{
    ast::{Node, Rule, Token},
    ir::{extract_pointer, extract_relative},
    lexer::{LexError, Lexer, Position},
    pointer::{JsonPointer, RelativeJsonPointer},
};

/// Errors raised while turning pointer text into a pointer.
#[derive(Debug, Clone, PartialEq)]
pub enum ParseError {
    /// The text does not match the grammar
    Syntax {
        input: String,
        position: Position,
        message: String,
    },

    /// The parse tree does not have the shape the extractors expect
    Structure(String),
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::Syntax {
                input,
                position,
                message,
            } => write!(
                f,
                "Syntax error in {:?} at position {}: {}",
                input, position, message
            ),
            ParseError::Structure(msg) => write!(f, "Malformed parse tree: {}", msg),
        }
    }
}

impl std::error::Error for ParseError {}

/// Recursive-descent matcher for both pointer grammars.
///
/// Produces labeled [`Node`] trees; see [`crate::ast`] for their shape.
pub struct Parser {
    lexer: Lexer,
    input: String,
    current_token: Token,
    current_position: Position,
}

impl Parser {
    pub fn new(mut lexer: Lexer) -> Result<Self, ParseError> {
        let input = lexer.source();
        let current_position = lexer.position();
        let current_token = lexer
            .next_token()
            .map_err(|e| lex_to_parse_error(&input, e))?;
        Ok(Parser {
            lexer,
            input,
            current_token,
            current_position,
        })
    }

    fn advance(&mut self) -> Result<(), ParseError> {
        self.current_position = self.lexer.position();
        self.current_token = self
            .lexer
            .next_token()
            .map_err(|e| lex_to_parse_error(&self.input, e))?;
        Ok(())
    }

    fn error(&self, message: String) -> ParseError {
        ParseError::Syntax {
            input: self.input.clone(),
            position: self.current_position,
            message,
        }
    }

    fn expect_eof(&self) -> Result<(), ParseError> {
        match self.current_token {
            Token::Eof => Ok(()),
            ref token => Err(self.error(format!(
                "Unexpected {} (expected end of input)",
                token.describe()
            ))),
        }
    }

    /// Matches a complete JSON pointer; the whole input must be consumed.
    pub fn parse_json_pointer(&mut self) -> Result<Node, ParseError> {
        let node = self.json_pointer()?;
        self.expect_eof()?;
        Ok(node)
    }

    /// Matches a complete relative JSON pointer; the whole input must be consumed.
    pub fn parse_relative_json_pointer(&mut self) -> Result<Node, ParseError> {
        let start = self.current_position;
        let origin = self.origin_specification()?;
        let mut children = vec![origin];

        match self.current_token {
            Token::Char('#') => self.advance()?,
            Token::Slash | Token::Eof => children.push(self.json_pointer()?),
            ref token => {
                return Err(self.error(format!(
                    "Unexpected {} after origin specification (expected '/', '#' or end of input)",
                    token.describe()
                )));
            }
        }
        self.expect_eof()?;

        Ok(Node::new(
            Rule::RelativeJsonPointer,
            self.input.clone(),
            start,
            children,
        ))
    }

    fn json_pointer(&mut self) -> Result<Node, ParseError> {
        let start = self.current_position;
        let mut text = String::new();
        let mut children = Vec::new();

        while self.current_token == Token::Slash {
            self.advance()?;
            let token = self.reference_token()?;
            text.push('/');
            text.push_str(token.value());
            children.push(token);
        }

        Ok(Node::new(Rule::JsonPointer, text, start, children))
    }

    fn reference_token(&mut self) -> Result<Node, ParseError> {
        let start = self.current_position;
        let mut text = String::new();

        while matches!(self.current_token, Token::Escape(_) | Token::Char(_)) {
            self.current_token.push_raw(&mut text);
            self.advance()?;
        }

        Ok(Node::leaf(Rule::ReferenceToken, text, start))
    }

    fn origin_specification(&mut self) -> Result<Node, ParseError> {
        let start = self.current_position;
        let count = self.non_negative_integer()?;
        let mut text = count.value().to_string();
        let mut children = vec![count];

        if matches!(self.current_token, Token::Char('+' | '-')) {
            let manipulation = self.index_manipulation()?;
            text.push_str(manipulation.value());
            children.push(manipulation);
        }

        Ok(Node::new(Rule::OriginSpecification, text, start, children))
    }

    fn index_manipulation(&mut self) -> Result<Node, ParseError> {
        let start = self.current_position;
        let mut text = String::new();
        self.current_token.push_raw(&mut text); // sign
        self.advance()?;

        let digits = self.non_negative_integer()?;
        text.push_str(digits.value());

        Ok(Node::leaf(Rule::IndexManipulation, text, start))
    }

    fn non_negative_integer(&mut self) -> Result<Node, ParseError> {
        let start = self.current_position;
        let mut text = String::new();

        match self.current_token {
            Token::Char('0') => {
                text.push('0');
                self.advance()?;
            }
            Token::Char(ch @ '1'..='9') => {
                text.push(ch);
                self.advance()?;
                while let Token::Char(ch) = self.current_token {
                    if !ch.is_ascii_digit() {
                        break;
                    }
                    text.push(ch);
                    self.advance()?;
                }
            }
            ref token => {
                return Err(self.error(format!(
                    "Unexpected {} (expected a non-negative integer)",
                    token.describe()
                )));
            }
        }

        Ok(Node::leaf(Rule::NonNegativeInteger, text, start))
    }
}

fn lex_to_parse_error(input: &str, e: LexError) -> ParseError {
    ParseError::Syntax {
        input: input.to_string(),
        position: e.position,
        message: e.message,
    }
}

/// Parses JSON pointer text into its decoded segments.
///
/// # Examples
///
/// ```
/// use jsonptr::parse_pointer;
///
/// let ptr = parse_pointer("/a~1b/m~0n").unwrap();
/// assert_eq!(ptr.segments(), ["a/b", "m~n"]);
/// ```
pub fn parse_pointer(text: &str) -> Result<JsonPointer, ParseError> {
    let mut parser = Parser::new(Lexer::new(text))?;
    let node = parser.parse_json_pointer()?;
    let pointer = extract_pointer(&node)?;
    debug!("parsed pointer {:?} into {} segment(s)", text, pointer.len());
    Ok(pointer)
}

/// Parses relative JSON pointer text into a descriptor.
///
/// # Examples
///
/// ```
/// use jsonptr::{parse_relative_pointer, Terminal};
///
/// let rel = parse_relative_pointer("0+1#").unwrap();
/// assert_eq!(rel.ancestors, 0);
/// assert_eq!(rel.index_delta, Some(1));
/// assert_eq!(rel.terminal, Terminal::CurrentKey);
/// ```
pub fn parse_relative_pointer(text: &str) -> Result<RelativeJsonPointer, ParseError> {
    let mut parser = Parser::new(Lexer::new(text))?;
    let node = parser.parse_relative_json_pointer()?;
    let relative = extract_relative(&node)?;
    debug!("parsed relative pointer {:?} as {:?}", text, relative);
    Ok(relative)
}
