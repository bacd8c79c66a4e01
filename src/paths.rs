//! Demo run identity and directory derivation

use crate::error::Result;
use chrono::Local;
use std::path::PathBuf;

pub(crate) const TIMESTAMP_FORMAT: &str = "%Y-%m-%d_%H-%M-%S";

/// Timestamp identifying one demo run, filesystem-safe and sortable
pub fn demo_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Root under which recorded demo runs are kept
///
/// TIRREX_DEMO_HOME overrides the default of ~/.tirrex.
pub fn demos_home() -> PathBuf {
    if let Ok(home) = std::env::var("TIRREX_DEMO_HOME") {
        return PathBuf::from(home);
    }
    if let Ok(home) = std::env::var("HOME") {
        return PathBuf::from(home).join(".tirrex");
    }
    std::env::temp_dir().join("tirrex")
}

/// Directory holding everything one run produces
///
/// Recorded runs live under the demos home, throwaway runs under the
/// system temp directory.
pub fn run_directory(demo: &str, timestamp: &str, record: bool) -> PathBuf {
    let root = if record {
        demos_home()
    } else {
        std::env::temp_dir().join("tirrex_demo")
    };
    root.join(demo).join(timestamp)
}

/// Log directory for a run, created on derivation
pub fn log_directory(demo: &str, timestamp: &str, record: bool) -> Result<PathBuf> {
    let dir = run_directory(demo, timestamp, record).join("log");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

/// Debug directory for a run, created on derivation
pub fn debug_directory(demo: &str, timestamp: &str, record: bool) -> Result<PathBuf> {
    let dir = run_directory(demo, timestamp, record).join("debug");
    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDateTime;

    #[test]
    fn test_timestamp_matches_format() {
        let timestamp = demo_timestamp();
        assert!(NaiveDateTime::parse_from_str(&timestamp, TIMESTAMP_FORMAT).is_ok());
    }

    #[test]
    fn test_unrecorded_run_directory_is_ephemeral() {
        let dir = run_directory("tirrex_scout_mini", "2026-01-01_00-00-00", false);
        assert!(dir.starts_with(std::env::temp_dir().join("tirrex_demo")));
        assert!(dir.ends_with("tirrex_scout_mini/2026-01-01_00-00-00"));
    }

    #[test]
    fn test_recorded_run_directory_under_demos_home() {
        let home = crate::test_support::demo_home();
        let dir = run_directory("tirrex_scout_mini", "2026-01-01_00-00-00", true);
        assert!(dir.starts_with(&home));
    }

    #[test]
    fn test_log_directory_created() {
        let dir = log_directory("tirrex_scout_mini", "2026-01-02_00-00-00", false).unwrap();
        assert!(dir.is_dir());
        assert!(dir.ends_with("log"));
    }

    #[test]
    fn test_debug_directory_created() {
        let dir = debug_directory("tirrex_scout_mini", "2026-01-02_00-00-00", false).unwrap();
        assert!(dir.is_dir());
        assert!(dir.ends_with("debug"));
    }

    #[test]
    fn test_log_and_debug_share_run_directory() {
        let log = log_directory("tirrex_scout_mini", "2026-01-03_00-00-00", false).unwrap();
        let debug = debug_directory("tirrex_scout_mini", "2026-01-03_00-00-00", false).unwrap();
        assert_eq!(log.parent(), debug.parent());
    }
}
