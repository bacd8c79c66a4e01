//! Include action implementation

use crate::error::SubstitutionError;
use crate::substitution::{parse_substitutions, Substitution};

/// Include action referencing an externally-defined launch sequence
#[derive(Debug, Clone, PartialEq)]
pub struct IncludeAction {
    pub file: Vec<Substitution>,
    /// Args as Vec to preserve order (later args can reference earlier ones)
    pub args: Vec<(String, String)>,
}

impl IncludeAction {
    /// Build from a file expression that may contain substitutions
    pub fn new(file: &str) -> Result<Self, SubstitutionError> {
        Ok(Self {
            file: parse_substitutions(file)?,
            args: Vec::new(),
        })
    }

    /// Append a forwarded argument, keeping declaration order
    pub fn with_arg(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.args.push((name.into(), value.into()));
        self
    }
}
