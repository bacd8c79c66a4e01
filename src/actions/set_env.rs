//! Environment variable action

use crate::error::SubstitutionError;
use crate::substitution::{parse_substitutions, Substitution};

/// Set environment variable action
#[derive(Debug, Clone, PartialEq)]
pub struct SetEnvAction {
    pub name: String,
    pub value: Vec<Substitution>,
}

impl SetEnvAction {
    /// Build from a value expression that may contain substitutions
    pub fn new(name: impl Into<String>, value: &str) -> Result<Self, SubstitutionError> {
        Ok(SetEnvAction {
            name: name.into(),
            value: parse_substitutions(value)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_env_literal() {
        let action = SetEnvAction::new("ROS_DOMAIN_ID", "42").unwrap();
        assert_eq!(action.name, "ROS_DOMAIN_ID");
        assert_eq!(action.value, vec![Substitution::Text("42".to_string())]);
    }

    #[test]
    fn test_set_env_with_substitution() {
        let action = SetEnvAction::new("MY_VAR", "prefix_$(var suffix)").unwrap();
        assert_eq!(action.name, "MY_VAR");
        assert_eq!(action.value.len(), 2);
        assert_eq!(action.value[0], Substitution::Text("prefix_".to_string()));
        assert!(matches!(
            action.value[1],
            Substitution::LaunchConfiguration(_)
        ));
    }

    #[test]
    fn test_set_env_invalid_expression() {
        assert!(SetEnvAction::new("MY_VAR", "$(var incomplete").is_err());
    }
}
