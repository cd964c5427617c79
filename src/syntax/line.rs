//! Canonical line handling: whitespace normalization, keyword/argument
//! decomposition, and re-serialization with the asymmetric quoting rule.

use crate::syntax::lexer::split_line;

/// Trims the line and collapses every run of literal spaces into one space.
///
/// Only the space character is a delimiter in this language, so interior tabs
/// are preserved verbatim. Idempotent.
pub fn canonicalize(input: &str) -> String {
    input
        .trim()
        .split(' ')
        .filter(|part| !part.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}

/// Decomposes a raw line into its keyword and argument tokens.
///
/// The keyword is everything before the first space of the canonical form
/// (empty for a blank line); the remainder, if any, is tokenized by the
/// lexer.
pub fn parse_line(line: &str) -> (String, Vec<String>) {
    let line = canonicalize(line);
    match line.split_once(' ') {
        Some((keyword, rest)) => (keyword.to_string(), split_line(rest)),
        None => (line, Vec::new()),
    }
}

/// Renders a keyword and its arguments back into one canonical output line:
/// four leading spaces, the keyword, then the arguments joined by single
/// spaces.
///
/// An argument is re-quoted only when it is a named literal that would
/// otherwise split apart: non-empty, not a `#` comment tail, containing both
/// a letter and a space. Compound numeric values such as `150 150 0` stay
/// unquoted even though they contain spaces.
pub fn format_line(keyword: &str, args: &[String]) -> String {
    let formatted: Vec<String> = args
        .iter()
        .map(|arg| {
            if needs_quotes(arg) {
                format!("\"{arg}\"")
            } else {
                arg.clone()
            }
        })
        .collect();
    format!("    {} {}", keyword, formatted.join(" "))
}

fn needs_quotes(arg: &str) -> bool {
    !arg.is_empty()
        && !arg.starts_with('#')
        && arg.contains(' ')
        && arg.chars().any(|c| c.is_ascii_alphabetic())
}
