//! Pointer values: the decoded form of pointer text.

use std::{fmt, str::FromStr, sync::LazyLock};

use regex::Regex;
use serde_json::Value;

use crate::{
    evaluator::{EvalError, evaluate, evaluate_relative},
    parser::{ParseError, parse_pointer, parse_relative_pointer},
    value::Resolved,
};

/// Optional sign followed by decimal digits; leading zeros allowed.
static INTEGER_TOKEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?[0-9]+$").expect("integer token pattern is valid")
});

pub(crate) fn is_integer_token(segment: &str) -> bool {
    INTEGER_TOKEN.is_match(segment)
}

/// Reads a segment as an integer. `None` for anything that isn't a plain
/// decimal integer or doesn't fit in an `i64`.
pub(crate) fn integer_value(segment: &str) -> Option<i64> {
    if is_integer_token(segment) {
        segment.parse().ok()
    } else {
        None
    }
}

/// A JSON pointer (RFC 6901): decoded path segments from the document root.
///
/// The empty pointer addresses the whole document.
///
/// # Examples
///
/// ```
/// use jsonptr::JsonPointer;
/// use serde_json::json;
///
/// let ptr: JsonPointer = "/foo/0".parse().unwrap();
/// let doc = json!({ "foo": ["bar", "baz"] });
/// assert_eq!(ptr.eval(&doc).unwrap(), "bar");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct JsonPointer {
    segments: Vec<String>,
}

impl JsonPointer {
    /// The pointer to the whole document.
    pub fn root() -> Self {
        JsonPointer::default()
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.segments.last().map(String::as_str)
    }

    /// Looks the pointer up in `document`.
    pub fn eval<'a>(&self, document: &'a Value) -> Result<&'a Value, EvalError> {
        evaluate(self, document)
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.segments.truncate(len);
    }

    pub(crate) fn set_last(&mut self, segment: String) {
        if let Some(last) = self.segments.last_mut() {
            *last = segment;
        }
    }

    pub(crate) fn append(&mut self, other: &JsonPointer) {
        self.segments.extend(other.segments.iter().cloned());
    }
}

impl<S: Into<String>> FromIterator<S> for JsonPointer {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        JsonPointer {
            segments: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a JsonPointer {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl FromStr for JsonPointer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_pointer(s)
    }
}

/// Writes the pointer text, escaping `~` before `/`.
impl fmt::Display for JsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", segment.replace('~', "~0").replace('/', "~1"))?;
        }
        Ok(())
    }
}

/// What a relative pointer does once it has reached its origin.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Terminal {
    /// Continue into the document along this pointer
    Suffix(JsonPointer),

    /// Report the key or index of the origin within its parent (`#`)
    CurrentKey,
}

/// A relative JSON pointer.
///
/// # Examples
///
/// ```
/// use jsonptr::{JsonPointer, RelativeJsonPointer, Resolved};
/// use serde_json::json;
///
/// let doc = json!({ "foo": ["bar", "baz", "biz"] });
/// let start: JsonPointer = "/foo/1".parse().unwrap();
///
/// let rel: RelativeJsonPointer = "0-1".parse().unwrap();
/// assert_eq!(rel.eval(&start, &doc).unwrap(), Resolved::Value(&json!("bar")));
///
/// let rel: RelativeJsonPointer = "1#".parse().unwrap();
/// assert_eq!(rel.eval(&start, &doc).unwrap(), Resolved::Key("foo".to_string()));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct RelativeJsonPointer {
    /// Number of trailing segments removed from the start pointer
    pub ancestors: usize,

    /// Amount added to the array index left at the end after stripping
    pub index_delta: Option<i64>,

    pub terminal: Terminal,
}

impl RelativeJsonPointer {
    /// Resolves the pointer from `start` within `document`.
    pub fn eval<'a>(
        &self,
        start: &JsonPointer,
        document: &'a Value,
    ) -> Result<Resolved<'a>, EvalError> {
        evaluate_relative(self, start, document)
    }
}

impl FromStr for RelativeJsonPointer {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_relative_pointer(s)
    }
}

impl fmt::Display for RelativeJsonPointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ancestors)?;
        if let Some(delta) = self.index_delta {
            write!(f, "{:+}", delta)?;
        }
        match &self.terminal {
            Terminal::Suffix(pointer) => write!(f, "{}", pointer),
            Terminal::CurrentKey => f.write_str("#"),
        }
    }
}
