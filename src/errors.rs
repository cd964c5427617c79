//! The compiler's error taxonomy.
//!
//! Every failure mode is a variant of [`CompileError`]. Compilation is
//! fail-fast and all-or-nothing: the first error aborts the pass and no
//! partial output is produced, so each variant carries enough context
//! (keyword, line number, style name, argument counts) for the rendered
//! message alone to diagnose the problem.

use miette::Diagnostic;
use thiserror::Error;

/// Unified error type for every compilation failure mode.
#[derive(Debug, Error, Diagnostic)]
pub enum CompileError {
    /// A top-level line whose keyword is none of the recognized statements.
    #[error("unexpected keyword {keyword:?} on line {line}")]
    #[diagnostic(
        code(sift::compile::unexpected_keyword),
        help("top-level lines must start with '#', 'Show', 'Hide', 'DefineStyle', or 'DefineVar'")
    )]
    UnexpectedKeyword { keyword: String, line: usize },

    /// A rule block used two different filter keywords.
    #[error("conflicting filters {first:?} and {second:?} on the same rule")]
    #[diagnostic(
        code(sift::compile::conflicting_filter),
        help("a rule may filter by BaseType or by Prophecy, not both")
    )]
    ConflictingFilter { first: String, second: String },

    /// The same filter value appeared twice within one rule block.
    #[error("duplicate {filter} value {value:?}")]
    #[diagnostic(code(sift::compile::duplicate_filter_value))]
    DuplicateFilterValue { filter: String, value: String },

    /// A `UseStyle` or `DefineStyle` statement without a style name.
    #[error("{statement} is missing a style name")]
    #[diagnostic(
        code(sift::compile::missing_style_name),
        help("expected '{statement} <name> [args...]'")
    )]
    MissingStyleName { statement: &'static str },

    /// `UseStyle` referenced a name never defined by `DefineStyle`.
    #[error("style {name:?} referenced but never defined")]
    #[diagnostic(
        code(sift::compile::unknown_style),
        help("styles must be defined with DefineStyle before they are used")
    )]
    UnknownStyle { name: String },

    /// `UseStyle` supplied the wrong number of positional parameters.
    #[error("style {name:?} expected {expected} values, but received {received}")]
    #[diagnostic(code(sift::compile::arg_count_mismatch))]
    ArgCountMismatch {
        name: String,
        expected: usize,
        received: usize,
    },

    /// `DefineVar` supplied with other than exactly a name and a value.
    #[error("DefineVar expects exactly a name and a value, got {count} arguments")]
    #[diagnostic(code(sift::compile::bad_arity))]
    BadArity { count: usize },
}
