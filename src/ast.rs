//! # Pointer Grammars - Syntax Tree
//!
//! This module defines the lexical tokens and the labeled parse tree for the
//! two pointer languages: JSON Pointer (RFC 6901) and Relative JSON Pointer.
//!
//! - **[tokens]** - Lexical tokens produced by the lexer
//! - **[tree]** - Parse-tree nodes, tagged with the grammar rule that matched them
//!
//! ## Grammar
//!
//! ```text
//! json-pointer          = *( "/" reference-token )
//! reference-token       = *( unescaped / escaped )
//! escaped               = "~" ( "0" / "1" )
//! relative-json-pointer = non-negative-integer [ index-manipulation ]
//!                         ( json-pointer / "#" )
//! index-manipulation    = ( "+" / "-" ) non-negative-integer
//! non-negative-integer  = "0" / %x31-39 *DIGIT
//! ```
//!
//! ## Tree Shape
//!
//! `/a~1b/0` parses to:
//!
//! ```text
//! JsonPointer "/a~1b/0"
//! ├── ReferenceToken "a~1b"
//! └── ReferenceToken "0"
//! ```
//!
//! `1+2/x` parses to:
//!
//! ```text
//! RelativeJsonPointer "1+2/x"
//! ├── OriginSpecification "1+2"
//! │   ├── NonNegativeInteger "1"
//! │   └── IndexManipulation "+2"
//! └── JsonPointer "/x"
//!     └── ReferenceToken "x"
//! ```
//!
//! A `#` terminal produces no child after the origin specification.
pub mod tokens;
pub mod tree;

pub use tokens::Token;
pub use tree::{Node, Rule};
