//! The block compiler: a single pass over the document's lines.
//!
//! Top-level statements are dispatched by keyword; rule blocks and style
//! definitions consume lines until the next statement-introducing keyword,
//! which is left for the outer loop. There is no backtracking beyond that
//! one line of lookahead, and the first error aborts the pass with no
//! partial output. After the scan, variable bindings are substituted across
//! the assembled text in one final pass.

use std::collections::BTreeSet;

use crate::errors::CompileError;
use crate::styles::{PropertyMap, StyleTable};
use crate::syntax::{format_line, parse_line};
use crate::vars::VarTable;

/// Keywords that introduce a new top-level statement and therefore terminate
/// the block or style body currently being consumed.
fn starts_statement(keyword: &str) -> bool {
    matches!(keyword, "Show" | "Hide" | "DefineStyle")
}

/// Cursor over the document's lines with one-line lookahead.
///
/// `peek` returns the current line without consuming it, so block and style
/// consumption can stop at a terminating keyword and leave it for the outer
/// dispatch loop.
struct Cursor<'a> {
    lines: Vec<&'a str>,
    pos: usize,
}

impl<'a> Cursor<'a> {
    fn new(document: &'a str) -> Self {
        Self {
            lines: document.split('\n').collect(),
            pos: 0,
        }
    }

    fn peek(&self) -> Option<&'a str> {
        self.lines.get(self.pos).copied()
    }

    fn advance(&mut self) -> Option<&'a str> {
        let line = self.peek();
        if line.is_some() {
            self.pos += 1;
        }
        line
    }

    /// 1-based number of the line `peek` would return, for diagnostics.
    fn line_number(&self) -> usize {
        self.pos + 1
    }
}

/// Compiles one complete rule document into its flat, fully expanded form.
///
/// A fresh style table and variable table are created per call; the core is
/// stateless between invocations.
pub fn compile(document: &str) -> Result<String, CompileError> {
    let mut cursor = Cursor::new(document);
    let mut styles = StyleTable::new();
    let mut vars = VarTable::new();
    let mut output: Vec<String> = Vec::new();

    while let Some(line) = cursor.peek() {
        let line_number = cursor.line_number();
        let (keyword, args) = parse_line(line);
        match keyword.as_str() {
            "" => {
                cursor.advance();
            }
            "#" => {
                output.push(line.to_string());
                cursor.advance();
            }
            "Show" | "Hide" => compile_block(&mut cursor, &styles, &mut output)?,
            "DefineStyle" => consume_style(&mut cursor, &mut styles)?,
            "DefineVar" => {
                vars.define(&args)?;
                cursor.advance();
            }
            _ => {
                return Err(CompileError::UnexpectedKeyword {
                    keyword: keyword.clone(),
                    line: line_number,
                })
            }
        }
    }

    Ok(vars.substitute(&output.join("\n")))
}

/// Consumes one `Show`/`Hide` rule block and appends its expansion.
///
/// The block accumulates at most one filter keyword (`BaseType` or
/// `Prophecy`) with a set of unique values, and a last-wins property map for
/// every other keyword. On closure the block is emitted once per sorted
/// filter value, or once verbatim when no filter value was given.
fn compile_block(
    cursor: &mut Cursor,
    styles: &StyleTable,
    output: &mut Vec<String>,
) -> Result<(), CompileError> {
    let Some(header) = cursor.advance() else {
        return Ok(());
    };

    let mut filter_keyword: Option<String> = None;
    let mut filter_values: BTreeSet<String> = BTreeSet::new();
    let mut properties = PropertyMap::new();

    while let Some(line) = cursor.peek() {
        let (keyword, args) = parse_line(line);
        match keyword.as_str() {
            "" => {
                cursor.advance();
            }
            "#" => {
                // Comments are interleaved at their original scan position,
                // ahead of the block's own emission.
                output.push(line.to_string());
                cursor.advance();
            }
            k if starts_statement(k) => break,
            "BaseType" | "Prophecy" => {
                if let Some(existing) = &filter_keyword {
                    if *existing != keyword {
                        return Err(CompileError::ConflictingFilter {
                            first: existing.clone(),
                            second: keyword.clone(),
                        });
                    }
                }
                filter_keyword = Some(keyword.clone());
                for value in args {
                    if !filter_values.insert(value.clone()) {
                        return Err(CompileError::DuplicateFilterValue {
                            filter: keyword.clone(),
                            value,
                        });
                    }
                }
                cursor.advance();
            }
            "UseStyle" => {
                let Some((name, values)) = args.split_first() else {
                    return Err(CompileError::MissingStyleName {
                        statement: "UseStyle",
                    });
                };
                // Later UseStyle calls overwrite earlier contributions for a
                // shared keyword.
                properties.extend(styles.apply(name, values)?);
                cursor.advance();
            }
            _ => {
                properties.insert(keyword.clone(), args);
                cursor.advance();
            }
        }
    }

    match &filter_keyword {
        Some(filter) if !filter_values.is_empty() => {
            // The rule is multiplied once per distinct filter value.
            for value in &filter_values {
                output.push(header.to_string());
                output.push(format_line(filter, std::slice::from_ref(value)));
                for (keyword, args) in &properties {
                    output.push(format_line(keyword, args));
                }
                output.push(String::new());
            }
        }
        _ => {
            output.push(header.to_string());
            for (keyword, args) in &properties {
                output.push(format_line(keyword, args));
            }
            output.push(String::new());
        }
    }

    Ok(())
}

/// Consumes one `DefineStyle` statement and registers the definition.
///
/// The header supplies the name and parameter names; every subsequent
/// non-blank line up to the next statement contributes one body entry,
/// last occurrence per keyword winning.
fn consume_style(cursor: &mut Cursor, styles: &mut StyleTable) -> Result<(), CompileError> {
    let Some(header) = cursor.advance() else {
        return Ok(());
    };
    let (_, header_args) = parse_line(header);
    let Some((name, params)) = header_args.split_first() else {
        return Err(CompileError::MissingStyleName {
            statement: "DefineStyle",
        });
    };

    let mut body = PropertyMap::new();
    while let Some(line) = cursor.peek() {
        let (keyword, args) = parse_line(line);
        match keyword.as_str() {
            "" => {
                cursor.advance();
            }
            k if starts_statement(k) => break,
            _ => {
                body.insert(keyword.clone(), args);
                cursor.advance();
            }
        }
    }

    styles.define(name, params.to_vec(), body);
    Ok(())
}
