//! sift: a macro-expanding compiler for item filter rule files.
//!
//! Authors write abstract rules that reference reusable named styles
//! (property bundles with positional parameters) and named variables (text
//! substitutions), plus rules matching several base type values at once.
//! [`compile`] expands those abstractions into a flat, fully concrete rule
//! file with deterministic formatting and ordering.

pub mod cli;
pub mod compiler;
pub mod errors;
pub mod styles;
pub mod syntax;
pub mod vars;

pub use compiler::compile;
pub use errors::CompileError;
