//! scout_mini demo launch composition

use crate::actions::{Action, DeclareArgumentAction, GroupAction, IncludeAction, SetEnvAction};
use crate::condition::record_enabled;
use crate::error::{ComposeError, Result};
use crate::paths;
use crate::record::{self, LaunchPlan, PlanGenerator, ReplayConfiguration};
use crate::substitution::LaunchContext;
use std::collections::{BTreeMap, HashMap};
use std::path::PathBuf;

pub const DEMO_NAME: &str = "tirrex_scout_mini";
pub const ROBOT_NAMESPACE: &str = "scout_mini";
/// Recorded as the origin of replay configurations
pub const SOURCE_ID: &str = "scout_mini.launch";

const DOWNSTREAM_LAUNCH: &str = "$(find-pkg-share tirrex_demo)/launch/demo.launch.py";
const DEFAULT_CONFIG_DIRECTORY: &str = "$(find-pkg-share tirrex_scout_mini)/config";

/// Everything one composition produces
#[derive(Debug, Clone)]
pub struct ComposedDemo {
    pub plan: LaunchPlan,
    /// Present iff recording was requested
    pub replay: Option<ReplayConfiguration>,
}

impl ComposedDemo {
    /// Write the replay configuration, if one was emitted, into the run directory
    pub fn persist_replay(&self) -> Result<Option<PathBuf>> {
        match &self.replay {
            Some(replay) => {
                let run_dir = paths::run_directory(&replay.demo, &replay.timestamp, true);
                record::save_replay_configuration(replay, &run_dir).map(Some)
            }
            None => Ok(None),
        }
    }
}

/// Declared arguments of the scout_mini demo
pub fn declare_arguments() -> Vec<DeclareArgumentAction> {
    vec![
        DeclareArgumentAction::new("mode", "simulation")
            .with_description("Execution mode of the demo"),
        DeclareArgumentAction::new("record", "false")
            .with_description("Record this run for later replay"),
        DeclareArgumentAction::new("demo_config_directory", DEFAULT_CONFIG_DIRECTORY)
            .with_description("Directory holding the demo configuration"),
    ]
}

/// Compose the demo launch plan with the given argument overrides
pub fn compose(overrides: HashMap<String, String>) -> Result<ComposedDemo> {
    compose_at(overrides, paths::demo_timestamp())
}

/// Compose with an explicit run timestamp
pub fn compose_at(overrides: HashMap<String, String>, timestamp: String) -> Result<ComposedDemo> {
    let mut context = LaunchContext::with_overrides(overrides);
    for declaration in declare_arguments() {
        declaration.apply(&mut context, &HashMap::new())?;
    }

    let mode = resolved(&context, "mode")?;
    let record = resolved(&context, "record")?;
    let demo_config_directory = resolved(&context, "demo_config_directory")?;
    let recording = record_enabled(&record);

    let log_directory = paths::log_directory(DEMO_NAME, &timestamp, recording)?;
    let debug_directory = paths::debug_directory(DEMO_NAME, &timestamp, recording)?;
    log::debug!("demo_config_directory: {}", demo_config_directory);
    log::debug!("log_directory: {}", log_directory.display());
    log::debug!("debug_directory: {}", debug_directory.display());

    // ROS_LOG_DIR must be in place before the downstream include starts logging
    let group = GroupAction::new(vec![
        Action::SetEnv(SetEnvAction::new(
            "ROS_LOG_DIR",
            &log_directory.to_string_lossy(),
        )?),
        Action::Include(
            IncludeAction::new(DOWNSTREAM_LAUNCH)?
                .with_arg("demo", DEMO_NAME)
                .with_arg("demo_timestamp", &timestamp)
                .with_arg("demo_config_directory", &demo_config_directory)
                .with_arg("mode", &mode)
                .with_arg("record", &record)
                .with_arg("robot_namespace", ROBOT_NAMESPACE),
        ),
    ]);
    let group = PlanGenerator::generate_group(&group, &context)?;

    let replay = recording.then(|| {
        let mut replay_overrides = BTreeMap::new();
        replay_overrides.insert("mode".to_string(), format!("replay_{}", mode));
        ReplayConfiguration::new(DEMO_NAME, timestamp.clone(), SOURCE_ID, replay_overrides)
    });

    Ok(ComposedDemo {
        plan: LaunchPlan {
            demo: DEMO_NAME.to_string(),
            timestamp,
            log_directory: log_directory.to_string_lossy().into_owned(),
            debug_directory: debug_directory.to_string_lossy().into_owned(),
            group,
        },
        replay,
    })
}

fn resolved(context: &LaunchContext, name: &str) -> Result<String> {
    context
        .get_configuration(name)
        .ok_or_else(|| ComposeError::MissingArgument(name.to_string()))
}
