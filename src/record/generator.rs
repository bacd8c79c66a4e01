//! Resolving composed actions into plan records

use crate::actions::{Action, GroupAction, IncludeAction, SetEnvAction};
use crate::error::SubstitutionError;
use crate::record::types::{ActionRecord, GroupRecord};
use crate::substitution::{resolve_substitutions, LaunchContext};

pub struct PlanGenerator;

impl PlanGenerator {
    pub fn generate_set_env(
        action: &SetEnvAction,
        context: &LaunchContext,
    ) -> Result<ActionRecord, SubstitutionError> {
        let value = resolve_substitutions(&action.value, context)?;
        Ok(ActionRecord::SetEnv {
            name: action.name.clone(),
            value,
        })
    }

    pub fn generate_include(
        action: &IncludeAction,
        context: &LaunchContext,
    ) -> Result<ActionRecord, SubstitutionError> {
        let file = resolve_substitutions(&action.file, context)?;
        log::info!("Including launch file: {}", file);
        Ok(ActionRecord::Include {
            file,
            args: action.args.clone(),
        })
    }

    /// Resolve a group, preserving declaration order
    pub fn generate_group(
        group: &GroupAction,
        context: &LaunchContext,
    ) -> Result<GroupRecord, SubstitutionError> {
        let mut actions = Vec::with_capacity(group.actions.len());
        for action in &group.actions {
            let record = match action {
                Action::SetEnv(set_env) => Self::generate_set_env(set_env, context)?,
                Action::Include(include) => Self::generate_include(include, context)?,
            };
            actions.push(record);
        }
        Ok(GroupRecord { actions })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_set_env_resolves_value() {
        let mut context = LaunchContext::new();
        context.set_configuration("log_dir".to_string(), "/tmp/log".to_string());
        let action = SetEnvAction::new("ROS_LOG_DIR", "$(var log_dir)").unwrap();

        let record = PlanGenerator::generate_set_env(&action, &context).unwrap();
        assert_eq!(
            record,
            ActionRecord::SetEnv {
                name: "ROS_LOG_DIR".to_string(),
                value: "/tmp/log".to_string(),
            }
        );
    }

    #[test]
    fn test_generate_include_keeps_args() {
        let context = LaunchContext::new();
        let action = IncludeAction::new("/launch/demo.launch.py")
            .unwrap()
            .with_arg("mode", "simulation")
            .with_arg("record", "false");

        let record = PlanGenerator::generate_include(&action, &context).unwrap();
        match record {
            ActionRecord::Include { file, args } => {
                assert_eq!(file, "/launch/demo.launch.py");
                assert_eq!(args[0], ("mode".to_string(), "simulation".to_string()));
                assert_eq!(args[1], ("record".to_string(), "false".to_string()));
            }
            other => panic!("expected include record, got {:?}", other),
        }
    }

    #[test]
    fn test_generate_group_preserves_order() {
        let context = LaunchContext::new();
        let group = GroupAction::new(vec![
            Action::SetEnv(SetEnvAction::new("ROS_LOG_DIR", "/tmp/log").unwrap()),
            Action::Include(IncludeAction::new("/launch/demo.launch.py").unwrap()),
        ]);

        let record = PlanGenerator::generate_group(&group, &context).unwrap();
        assert_eq!(record.actions.len(), 2);
        assert!(matches!(record.actions[0], ActionRecord::SetEnv { .. }));
        assert!(matches!(record.actions[1], ActionRecord::Include { .. }));
    }

    #[test]
    fn test_generate_group_fails_on_undefined_variable() {
        let context = LaunchContext::new();
        let group = GroupAction::new(vec![Action::SetEnv(
            SetEnvAction::new("ROS_LOG_DIR", "$(var missing)").unwrap(),
        )]);

        assert!(PlanGenerator::generate_group(&group, &context).is_err());
    }
}
