//! Replay configuration persistence
//!
//! A recorded run leaves a `replay.yaml` next to its log and debug
//! directories, capturing which descriptor produced the run and the
//! arguments to apply when replaying it.

use crate::error::Result;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

pub const REPLAY_FILE_NAME: &str = "replay.yaml";

/// Persisted record of how to replay one recorded run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReplayConfiguration {
    pub demo: String,
    pub timestamp: String,
    /// Launch descriptor that produced the run
    pub source: String,
    /// Arguments to apply on replay
    pub overrides: BTreeMap<String, String>,
}

impl ReplayConfiguration {
    pub fn new(
        demo: impl Into<String>,
        timestamp: impl Into<String>,
        source: impl Into<String>,
        overrides: BTreeMap<String, String>,
    ) -> Self {
        Self {
            demo: demo.into(),
            timestamp: timestamp.into(),
            source: source.into(),
            overrides,
        }
    }
}

/// Write a replay configuration into a run directory
pub fn save_replay_configuration(
    config: &ReplayConfiguration,
    run_directory: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(run_directory)?;
    let path = run_directory.join(REPLAY_FILE_NAME);
    let yaml = serde_yaml::to_string(config)?;
    std::fs::write(&path, yaml)?;
    log::info!("Saved replay configuration: {}", path.display());
    Ok(path)
}

/// Read a replay configuration back from a run directory
pub fn load_replay_configuration(run_directory: &Path) -> Result<ReplayConfiguration> {
    let content = std::fs::read_to_string(run_directory.join(REPLAY_FILE_NAME))?;
    Ok(serde_yaml::from_str(&content)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> ReplayConfiguration {
        let mut overrides = BTreeMap::new();
        overrides.insert("mode".to_string(), "replay_simulation".to_string());
        ReplayConfiguration::new(
            "tirrex_scout_mini",
            "2026-01-01_12-00-00",
            "scout_mini.launch",
            overrides,
        )
    }

    #[test]
    fn test_save_creates_run_directory() {
        let root = tempfile::tempdir().unwrap();
        let run_dir = root.path().join("tirrex_scout_mini/2026-01-01_12-00-00");

        let path = save_replay_configuration(&sample(), &run_dir).unwrap();
        assert!(path.is_file());
        assert_eq!(path.file_name().unwrap(), REPLAY_FILE_NAME);
    }

    #[test]
    fn test_saved_configuration_loads_back() {
        let root = tempfile::tempdir().unwrap();
        let config = sample();

        save_replay_configuration(&config, root.path()).unwrap();
        let loaded = load_replay_configuration(root.path()).unwrap();
        assert_eq!(loaded, config);
    }

    #[test]
    fn test_load_missing_configuration_errors() {
        let root = tempfile::tempdir().unwrap();
        assert!(load_replay_configuration(root.path()).is_err());
    }
}
