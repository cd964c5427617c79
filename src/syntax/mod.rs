//! Line-level syntax: tokenization, canonicalization, and re-serialization.
//!
//! The rule language is strictly line-oriented. A line decomposes into one
//! keyword and zero or more argument tokens; this module owns both directions
//! of that mapping and nothing above it.

pub mod lexer;
pub mod line;

pub use lexer::split_line;
pub use line::{canonicalize, format_line, parse_line};
