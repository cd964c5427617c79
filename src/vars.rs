//! Document-wide variable bindings.
//!
//! `DefineVar` registers a name/value pair; every `[[name]]` occurrence in
//! the assembled document is replaced with the value in one pass after all
//! blocks have been expanded. Substitution is not recursive: a value that
//! happens to contain another placeholder pattern is left as-is.

use std::collections::HashMap;

use crate::errors::CompileError;

/// All variable bindings of one compilation. Scope is the whole document,
/// never block-local.
#[derive(Debug, Default)]
pub struct VarTable {
    bindings: HashMap<String, String>,
}

impl VarTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a binding from a `DefineVar` argument list. Exactly two
    /// tokens (name and value) are required; redefinition overwrites
    /// silently.
    pub fn define(&mut self, args: &[String]) -> Result<(), CompileError> {
        match args {
            [name, value] => {
                self.bindings.insert(name.clone(), value.clone());
                Ok(())
            }
            _ => Err(CompileError::BadArity { count: args.len() }),
        }
    }

    /// Applies every binding once across the whole text.
    pub fn substitute(&self, text: &str) -> String {
        let mut result = text.to_string();
        for (name, value) in &self.bindings {
            result = result.replace(&format!("[[{name}]]"), value);
        }
        result
    }
}
