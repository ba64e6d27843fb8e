pub mod ast;
pub mod cli;
pub mod evaluator;
pub mod ir;
pub mod lexer;
pub mod parser;
pub mod pointer;
pub mod value;

pub use ast::{Node, Rule, Token};
pub use evaluator::{EvalError, evaluate, evaluate_relative};
pub use lexer::{LexError, Lexer, Position};
pub use parser::{ParseError, Parser, parse_pointer, parse_relative_pointer};
pub use pointer::{JsonPointer, RelativeJsonPointer, Terminal};
pub use value::Resolved;
