//! Launch argument declaration

use crate::error::SubstitutionError;
use crate::substitution::{parse_substitutions, resolve_substitutions, LaunchContext};
use std::collections::HashMap;

/// Declared launch argument with a defaulted value
#[derive(Debug, Clone, PartialEq)]
pub struct DeclareArgumentAction {
    pub name: String,
    /// Default expression, may contain substitutions
    pub default: String,
    pub description: Option<String>,
}

impl DeclareArgumentAction {
    pub fn new(name: impl Into<String>, default: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            default: default.into(),
            description: None,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Apply argument to context
    /// Priority: 1) value already in context, 2) overrides parameter, 3) resolved default
    pub fn apply(
        &self,
        context: &mut LaunchContext,
        overrides: &HashMap<String, String>,
    ) -> Result<(), SubstitutionError> {
        if context.contains(&self.name) {
            return Ok(());
        }

        if let Some(value) = overrides.get(&self.name) {
            context.set_configuration(self.name.clone(), value.clone());
            return Ok(());
        }

        let default = parse_substitutions(&self.default)?;
        let value = resolve_substitutions(&default, context)?;
        context.set_configuration(self.name.clone(), value);
        Ok(())
    }
}
