use std::fmt;

use crate::lexer::Position;

/// Grammar production a parse-tree node was matched by.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rule {
    /// `json-pointer = *( "/" reference-token )`
    JsonPointer,
    /// `reference-token = *( unescaped / escaped )`
    ReferenceToken,
    /// `relative-json-pointer = origin-specification ( json-pointer / "#" )`
    RelativeJsonPointer,
    /// `origin-specification = non-negative-integer [ index-manipulation ]`
    OriginSpecification,
    /// `non-negative-integer = "0" / %x31-39 *DIGIT`
    NonNegativeInteger,
    /// `index-manipulation = ( "+" / "-" ) non-negative-integer`
    IndexManipulation,
}

impl Rule {
    pub fn name(&self) -> &'static str {
        match self {
            Rule::JsonPointer => "JsonPointer",
            Rule::ReferenceToken => "ReferenceToken",
            Rule::RelativeJsonPointer => "RelativeJsonPointer",
            Rule::OriginSpecification => "OriginSpecification",
            Rule::NonNegativeInteger => "NonNegativeInteger",
            Rule::IndexManipulation => "IndexManipulation",
        }
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A labeled parse-tree node.
///
/// `text` is the raw matched source text, escapes included. Children are
/// kept in match order.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub rule: Rule,
    pub text: String,
    pub position: Position,
    pub children: Vec<Node>,
}

impl Node {
    pub fn new(rule: Rule, text: String, position: Position, children: Vec<Node>) -> Self {
        Node {
            rule,
            text,
            position,
            children,
        }
    }

    /// Node without children.
    pub fn leaf(rule: Rule, text: String, position: Position) -> Self {
        Node::new(rule, text, position, Vec::new())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    pub fn value(&self) -> &str {
        &self.text
    }
}
