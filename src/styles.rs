//! Named style definitions and their positional-parameter expansion.
//!
//! A style is a reusable bundle of property lines registered by
//! `DefineStyle` and instantiated into a rule block by `UseStyle`.
//! Substitution is template-style: a body token is replaced only when it is
//! exactly equal to a `[[Param]]` placeholder, never by partial match.

use std::collections::{BTreeMap, HashMap};

use crate::errors::CompileError;

/// The body of a style keeps one argument list per keyword; `BTreeMap` makes
/// keyword iteration lexicographic, which is what keeps expansion output
/// deterministic.
pub type PropertyMap = BTreeMap<String, Vec<String>>;

/// An immutable, registered style: ordered parameter names plus the property
/// lines of its body.
#[derive(Debug, Clone)]
pub struct StyleDefinition {
    params: Vec<String>,
    body: PropertyMap,
}

/// All styles defined so far in one compilation. Owned by a single `compile`
/// call; a fresh table is created per invocation.
#[derive(Debug, Default)]
pub struct StyleTable {
    styles: HashMap<String, StyleDefinition>,
}

impl StyleTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a style, appending the `# Style "<name>"` provenance token
    /// to every body line. The last definition for a name wins.
    pub fn define(&mut self, name: &str, params: Vec<String>, mut body: PropertyMap) {
        let provenance = format!("# Style \"{name}\"");
        for args in body.values_mut() {
            args.push(provenance.clone());
        }
        self.styles
            .insert(name.to_string(), StyleDefinition { params, body });
    }

    /// Instantiates a style with positional argument values, returning the
    /// per-keyword argument lists ready to merge into a rule block.
    pub fn apply(&self, name: &str, values: &[String]) -> Result<PropertyMap, CompileError> {
        let style = self
            .styles
            .get(name)
            .ok_or_else(|| CompileError::UnknownStyle {
                name: name.to_string(),
            })?;

        if values.len() != style.params.len() {
            return Err(CompileError::ArgCountMismatch {
                name: name.to_string(),
                expected: style.params.len(),
                received: values.len(),
            });
        }

        // Bind each parameter, wrapped in its placeholder form, to the
        // positional value supplied by this invocation.
        let bindings: HashMap<String, &String> = style
            .params
            .iter()
            .zip(values)
            .map(|(param, value)| (format!("[[{param}]]"), value))
            .collect();

        let expanded = style
            .body
            .iter()
            .map(|(keyword, tokens)| {
                let line = tokens
                    .iter()
                    .map(|token| match bindings.get(token) {
                        Some(value) => (*value).clone(),
                        None => token.clone(),
                    })
                    .collect();
                (keyword.clone(), line)
            })
            .collect();
        Ok(expanded)
    }
}
