//! CLI support for jsonptr
//!
//! `check` parses a pointer (or a relative pointer plus its start location),
//! reads a JSON document and prints what the pointer addresses. Exposed as a
//! library module so other tools can run the same check without the binary.

mod check;

pub use check::{CheckOptions, CheckResult, execute_check};

use std::{fmt, io};

use crate::{EvalError, ParseError};

/// Errors reported by `jsonptr check`
#[derive(Debug)]
pub enum CliError {
    /// The pointer argument is not a valid (relative) JSON pointer
    Pointer(ParseError),
    /// The `--from` start location is not a valid JSON pointer
    StartPointer(ParseError),
    /// The pointer does not resolve in the document
    Eval(EvalError),
    /// The input document is not JSON, or the result can't be printed
    Json(serde_json::Error),
    /// Reading stdin failed
    Io(io::Error),
    /// Evaluation requested without a document
    NoInput,
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::Pointer(e) => write!(f, "Invalid pointer: {}", e),
            CliError::StartPointer(e) => write!(f, "Invalid --from pointer: {}", e),
            CliError::Eval(e) => write!(f, "Pointer does not resolve: {}", e),
            CliError::Json(e) => write!(f, "Invalid JSON: {}", e),
            CliError::Io(e) => write!(f, "IO error: {}", e),
            CliError::NoInput => write!(
                f,
                "No document to evaluate against. Use --input, pipe JSON to stdin, or pass --syntax-only."
            ),
        }
    }
}

impl std::error::Error for CliError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            CliError::Pointer(e) | CliError::StartPointer(e) => Some(e),
            CliError::Eval(e) => Some(e),
            CliError::Json(e) => Some(e),
            CliError::Io(e) => Some(e),
            CliError::NoInput => None,
        }
    }
}

impl From<ParseError> for CliError {
    fn from(e: ParseError) -> Self {
        CliError::Pointer(e)
    }
}

impl From<EvalError> for CliError {
    fn from(e: EvalError) -> Self {
        CliError::Eval(e)
    }
}

impl From<serde_json::Error> for CliError {
    fn from(e: serde_json::Error) -> Self {
        CliError::Json(e)
    }
}

impl From<io::Error> for CliError {
    fn from(e: io::Error) -> Self {
        CliError::Io(e)
    }
}
