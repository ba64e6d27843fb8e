/// Lexical tokens of the pointer grammars.
///
/// Both grammars share one alphabet: a pointer is a run of `/`-separated
/// reference tokens, and the relative form only adds digits, a sign and `#`
/// in front of it. Those are ordinary characters inside a reference token,
/// so the lexer emits them as [`Token::Char`] and leaves the decision to the
/// parser.
#[derive(Debug, Clone, PartialEq)]
pub enum Token {
    /// Segment separator
    ///
    /// # Examples
    /// ```text
    /// /foo/0
    /// ^   ^
    /// ```
    Slash,

    /// Escape sequence, holding the digit after the tilde
    ///
    /// Only `~0` (for `~`) and `~1` (for `/`) exist. The raw form is kept
    /// here; decoding happens when the parse tree is extracted.
    ///
    /// # Examples
    /// ```text
    /// /a~1b   -> Escape('1')
    /// /m~0n   -> Escape('0')
    /// ```
    Escape(char),

    /// Any character other than `/` and `~`
    Char(char),

    /// End of input
    Eof,
}

impl Token {
    /// Appends the source text of this token to `buf`.
    pub fn push_raw(&self, buf: &mut String) {
        match self {
            Token::Slash => buf.push('/'),
            Token::Escape(digit) => {
                buf.push('~');
                buf.push(*digit);
            }
            Token::Char(ch) => buf.push(*ch),
            Token::Eof => {}
        }
    }

    /// Short description used in syntax error messages.
    pub fn describe(&self) -> String {
        match self {
            Token::Slash => "'/'".to_string(),
            Token::Escape(digit) => format!("'~{}'", digit),
            Token::Char(ch) => format!("'{}'", ch),
            Token::Eof => "end of input".to_string(),
        }
    }
}
