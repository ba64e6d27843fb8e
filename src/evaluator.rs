use std::fmt;

use log::trace;
use serde_json::Value;

use crate::{
    pointer::{JsonPointer, RelativeJsonPointer, Terminal, integer_value, is_integer_token},
    value::{Resolved, type_name},
};

/// Errors that can occur while evaluating a pointer against a document.
#[derive(Debug, Clone, PartialEq)]
pub enum EvalError {
    /// Object has no member with this key
    KeyNotFound(String),

    /// Array index outside the array (or not representable at all)
    IndexOutOfBounds { index: String, len: Option<usize> },

    /// Segment used on an array is not an array index
    InvalidArrayIndex(String),

    /// Segment that must be an integer for a relative pointer isn't one
    NonIntegerKey(String),

    /// Attempt to descend into a string, number, boolean or null
    NotContainer { segment: String, found: &'static str },

    /// Relative pointer climbs past the document root
    ReferencesAboveRoot(String),
}

impl fmt::Display for EvalError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EvalError::KeyNotFound(key) => write!(f, "Key not found: {:?}", key),
            EvalError::IndexOutOfBounds {
                index,
                len: Some(len),
            } => write!(
                f,
                "Index out of bounds: {} for array of length {}",
                index, len
            ),
            EvalError::IndexOutOfBounds { index, len: None } => {
                write!(f, "Index out of bounds: {}", index)
            }
            EvalError::InvalidArrayIndex(segment) => {
                write!(f, "Invalid array index: {:?}", segment)
            }
            EvalError::NonIntegerKey(segment) => {
                write!(f, "Non-integer key: {:?} is not an array index", segment)
            }
            EvalError::NotContainer { segment, found } => write!(
                f,
                "Not a container: cannot look up {:?} in a {}",
                segment, found
            ),
            EvalError::ReferencesAboveRoot(msg) => write!(f, "Reference above root: {}", msg),
        }
    }
}

impl std::error::Error for EvalError {}

/// Evaluates a JSON pointer against a document.
///
/// The empty pointer yields the document itself.
///
/// # Examples
///
/// ```
/// use jsonptr::{evaluate, parse_pointer, EvalError};
/// use serde_json::json;
///
/// let doc = json!({ "foo": ["bar", "baz"] });
///
/// let ptr = parse_pointer("/foo/1").unwrap();
/// assert_eq!(evaluate(&ptr, &doc).unwrap(), "baz");
///
/// let ptr = parse_pointer("/missing").unwrap();
/// assert_eq!(
///     evaluate(&ptr, &doc).unwrap_err(),
///     EvalError::KeyNotFound("missing".to_string())
/// );
/// ```
pub fn evaluate<'a>(pointer: &JsonPointer, document: &'a Value) -> Result<&'a Value, EvalError> {
    walk(pointer.segments(), document)
}

fn walk<'a>(segments: &[String], current: &'a Value) -> Result<&'a Value, EvalError> {
    let Some((head, rest)) = segments.split_first() else {
        return Ok(current);
    };
    trace!("walk: {:?} into {}", head, type_name(current));

    let next = match current {
        Value::Object(map) => map
            .get(head)
            .ok_or_else(|| EvalError::KeyNotFound(head.clone()))?,
        Value::Array(items) => &items[array_index(head, items.len())?],
        scalar => {
            return Err(EvalError::NotContainer {
                segment: head.clone(),
                found: type_name(scalar),
            });
        }
    };
    walk(rest, next)
}

/// Resolves an array index segment against an array of length `len`.
///
/// The segment must be a decimal integer (sign and leading zeros allowed).
/// Negative values come out of index manipulation; they are integers, just
/// never in bounds.
fn array_index(segment: &str, len: usize) -> Result<usize, EvalError> {
    if !is_integer_token(segment) {
        return Err(EvalError::InvalidArrayIndex(segment.to_string()));
    }
    match segment.parse::<i64>().ok().and_then(|i| usize::try_from(i).ok()) {
        Some(index) if index < len => Ok(index),
        _ => Err(EvalError::IndexOutOfBounds {
            index: segment.to_string(),
            len: Some(len),
        }),
    }
}

/// Evaluates a relative JSON pointer from `start` against a document.
///
/// Works on a private copy of `start`:
///
/// 1. strip `ancestors` trailing segments,
/// 2. add `index_delta` to the last remaining segment,
/// 3. either walk on along the suffix, or report the key or index of the
///    reached location within its parent.
///
/// # Examples
///
/// ```
/// use jsonptr::{evaluate_relative, parse_pointer, parse_relative_pointer, Resolved};
/// use serde_json::json;
///
/// let doc = json!({ "foo": ["bar", "baz", "biz"] });
/// let start = parse_pointer("/foo/1").unwrap();
///
/// let rel = parse_relative_pointer("0+1#").unwrap();
/// assert_eq!(evaluate_relative(&rel, &start, &doc).unwrap(), Resolved::Index(2));
/// ```
pub fn evaluate_relative<'a>(
    relative: &RelativeJsonPointer,
    start: &JsonPointer,
    document: &'a Value,
) -> Result<Resolved<'a>, EvalError> {
    let mut working = strip_ancestors(start, relative.ancestors)?;

    if let Some(delta) = relative.index_delta {
        adjust_index(&mut working, delta)?;
    }

    match &relative.terminal {
        Terminal::Suffix(suffix) => {
            working.append(suffix);
            trace!("relative: walking {}", working);
            evaluate(&working, document).map(Resolved::Value)
        }
        Terminal::CurrentKey => current_key(&working, document),
    }
}

fn strip_ancestors(start: &JsonPointer, ancestors: usize) -> Result<JsonPointer, EvalError> {
    if ancestors > start.len() {
        return Err(EvalError::ReferencesAboveRoot(format!(
            "cannot go up {} level(s) from {:?}, which is {} level(s) deep",
            ancestors,
            start.to_string(),
            start.len()
        )));
    }
    let mut working = start.clone();
    working.truncate(start.len() - ancestors);
    trace!("relative: stripped {} ancestor(s) to {:?}", ancestors, working.to_string());
    Ok(working)
}

fn adjust_index(working: &mut JsonPointer, delta: i64) -> Result<(), EvalError> {
    let last = working.last().unwrap_or_default();
    let Some(index) = integer_value(last) else {
        return Err(EvalError::NonIntegerKey(last.to_string()));
    };

    let adjusted = index
        .checked_add(delta)
        .ok_or_else(|| EvalError::IndexOutOfBounds {
            index: format!("{}{:+}", index, delta),
            len: None,
        })?;
    trace!("relative: index {} adjusted by {:+} to {}", index, delta, adjusted);
    working.set_last(adjusted.to_string());
    Ok(())
}

fn current_key<'a>(working: &JsonPointer, document: &'a Value) -> Result<Resolved<'a>, EvalError> {
    let Some((last, parent)) = working.segments().split_last() else {
        return Err(EvalError::ReferencesAboveRoot(
            "the document root has no key within a parent".to_string(),
        ));
    };

    // The root counts as an object: its children are named by key
    if parent.is_empty() {
        return Ok(Resolved::Key(last.clone()));
    }

    match walk(parent, document)? {
        Value::Object(_) => Ok(Resolved::Key(last.clone())),
        Value::Array(_) => integer_value(last)
            .map(Resolved::Index)
            .ok_or_else(|| EvalError::NonIntegerKey(last.clone())),
        scalar => Err(EvalError::NotContainer {
            segment: last.clone(),
            found: type_name(scalar),
        }),
    }
}
