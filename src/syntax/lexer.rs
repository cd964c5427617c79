//! Tokenizes one line of rule text.
//!
//! A double-quoted run is a single token with the quotes removed and interior
//! spaces preserved; any other maximal run of non-space, non-quote characters
//! is one token. There is no escaping inside quotes. An unterminated quote
//! extends to the end of the line: the remainder becomes one token.

use once_cell::sync::Lazy;
use regex::Regex;

/// One alternative per token shape: a closed quoted run, an unterminated
/// quoted run reaching end of line, or a bare word.
static TOKEN_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r#"("[^"]*")|("[^"]*$)|([^ "]+)"#).unwrap());

/// Splits a raw line into tokens, left to right.
///
/// Each token is stripped of residual quote and space characters; tokens that
/// strip to nothing (an empty quoted run, for instance) are dropped, so empty
/// and all-whitespace input both yield an empty sequence.
pub fn split_line(line: &str) -> Vec<String> {
    TOKEN_PATTERN
        .find_iter(line)
        .map(|m| m.as_str().trim_matches(|c| c == '"' || c == ' ').to_string())
        .filter(|token| !token.is_empty())
        .collect()
}
