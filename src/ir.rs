//! Extraction of pointer values from labeled parse trees.
//!
//! The matcher in [`crate::parser`] guarantees the shapes below, but the
//! extractors still check every tag and number and report a
//! [`ParseError::Structure`] instead of guessing.

use crate::{
    ast::{Node, Rule},
    parser::ParseError,
    pointer::{JsonPointer, RelativeJsonPointer, Terminal},
};

/// Decodes a `JsonPointer` node into its segments.
pub fn extract_pointer(node: &Node) -> Result<JsonPointer, ParseError> {
    expect_rule(node, Rule::JsonPointer)?;

    let mut segments = Vec::with_capacity(node.children().len());
    for child in node.children() {
        match child.rule {
            Rule::ReferenceToken => segments.push(unescape(child.value())),
            other => return Err(unexpected(other, "ReferenceToken")),
        }
    }
    Ok(segments.into_iter().collect())
}

/// Decodes a `RelativeJsonPointer` node into a descriptor.
pub fn extract_relative(node: &Node) -> Result<RelativeJsonPointer, ParseError> {
    expect_rule(node, Rule::RelativeJsonPointer)?;

    let mut ancestors = None;
    let mut index_delta = None;
    let mut suffix = None;

    for child in node.children() {
        match child.rule {
            Rule::OriginSpecification => {
                for part in child.children() {
                    match part.rule {
                        Rule::NonNegativeInteger => {
                            ancestors = Some(parse_count(part, node.value())?)
                        }
                        Rule::IndexManipulation => {
                            index_delta = Some(parse_delta(part, node.value())?)
                        }
                        other => {
                            return Err(unexpected(other, "NonNegativeInteger or IndexManipulation"));
                        }
                    }
                }
            }
            Rule::JsonPointer => suffix = Some(extract_pointer(child)?),
            other => return Err(unexpected(other, "JsonPointer or OriginSpecification")),
        }
    }

    let ancestors = ancestors.ok_or_else(|| {
        ParseError::Structure("relative pointer has no NonNegativeInteger".to_string())
    })?;

    Ok(RelativeJsonPointer {
        ancestors,
        index_delta,
        terminal: suffix.map_or(Terminal::CurrentKey, Terminal::Suffix),
    })
}

/// `~1` must be replaced before `~0`: `~01` decodes to `~1`, not `/`.
fn unescape(raw: &str) -> String {
    raw.replace("~1", "/").replace("~0", "~")
}

/// Numbers that match the grammar but don't fit are syntax errors against
/// `input`, reported at the node's position.
fn parse_count(node: &Node, input: &str) -> Result<usize, ParseError> {
    let text = node.value();
    if !is_digits(text) {
        return Err(ParseError::Structure(format!(
            "expected digits in NonNegativeInteger, got {:?}",
            text
        )));
    }
    text.parse::<usize>()
        .map_err(|e| out_of_range(node, input, "Ancestor count", e))
}

fn parse_delta(node: &Node, input: &str) -> Result<i64, ParseError> {
    let text = node.value();
    let mut chars = text.chars();
    let negative = match chars.next() {
        Some('+') => false,
        Some('-') => true,
        Some(ch) => {
            return Err(ParseError::Structure(format!(
                "expected '+' or '-' in IndexManipulation, got '{}'",
                ch
            )));
        }
        None => {
            return Err(ParseError::Structure(
                "empty IndexManipulation".to_string(),
            ));
        }
    };

    let digits = chars.as_str();
    if !is_digits(digits) {
        return Err(ParseError::Structure(format!(
            "expected digits in IndexManipulation, got {:?}",
            text
        )));
    }
    let magnitude = digits
        .parse::<i64>()
        .map_err(|e| out_of_range(node, input, "Index manipulation", e))?;

    Ok(if negative { -magnitude } else { magnitude })
}

fn out_of_range(node: &Node, input: &str, what: &str, e: std::num::ParseIntError) -> ParseError {
    ParseError::Syntax {
        input: input.to_string(),
        position: node.position,
        message: format!("{} {:?} is out of range ({})", what, node.value(), e),
    }
}

fn is_digits(text: &str) -> bool {
    !text.is_empty() && text.bytes().all(|b| b.is_ascii_digit())
}

fn expect_rule(node: &Node, rule: Rule) -> Result<(), ParseError> {
    if node.rule == rule {
        Ok(())
    } else {
        Err(unexpected(node.rule, rule.name()))
    }
}

fn unexpected(found: Rule, expected: &str) -> ParseError {
    ParseError::Structure(format!("expected {}, got {}", expected, found))
}
