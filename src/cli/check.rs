//! Evaluate pointers against JSON input

use log::debug;

use super::CliError;
use crate::{
    JsonPointer, RelativeJsonPointer, evaluate, evaluate_relative, parse_pointer,
    parse_relative_pointer,
};

/// Options for the check command
#[derive(Debug, Clone, Default)]
pub struct CheckOptions {
    /// Pointer text; a relative pointer when `from` is set
    pub pointer: String,
    /// Start location for a relative pointer
    pub from: Option<String>,
    /// JSON input string
    pub input: Option<String>,
    /// Pretty-print the output
    pub pretty: bool,
    /// Only validate syntax, don't evaluate
    pub syntax_only: bool,
}

/// Result of a check operation
#[derive(Debug)]
pub enum CheckResult {
    /// Syntax validation passed; holds the pointer in canonical form
    SyntaxValid(String),
    /// Pointer resolved to this JSON value, key or index
    Success(serde_json::Value),
}

enum Target {
    Absolute(JsonPointer),
    Relative {
        start: JsonPointer,
        relative: RelativeJsonPointer,
    },
}

impl Target {
    fn parse(options: &CheckOptions) -> Result<Self, CliError> {
        match &options.from {
            Some(start) => Ok(Target::Relative {
                start: parse_pointer(start).map_err(CliError::StartPointer)?,
                relative: parse_relative_pointer(&options.pointer)?,
            }),
            None => Ok(Target::Absolute(parse_pointer(&options.pointer)?)),
        }
    }

    fn canonical(&self) -> String {
        match self {
            Target::Absolute(pointer) => pointer.to_string(),
            Target::Relative { relative, .. } => relative.to_string(),
        }
    }
}

/// Execute a check operation
pub fn execute_check(options: &CheckOptions) -> Result<CheckResult, CliError> {
    let target = Target::parse(options)?;

    if options.syntax_only {
        return Ok(CheckResult::SyntaxValid(target.canonical()));
    }

    let json_str = options.input.as_ref().ok_or(CliError::NoInput)?;
    let document: serde_json::Value = serde_json::from_str(json_str)?;

    let output = match &target {
        Target::Absolute(pointer) => evaluate(pointer, &document)?.clone(),
        Target::Relative { start, relative } => {
            debug!("resolving {} from {}", relative, start);
            evaluate_relative(relative, start, &document)?.to_json()
        }
    };
    Ok(CheckResult::Success(output))
}
