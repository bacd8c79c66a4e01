//! Launch-plan composer for the tirrex scout_mini demo

pub mod actions;
pub mod condition;
pub mod demo;
pub mod error;
pub mod paths;
pub mod record;
pub mod substitution;

pub use demo::{compose, compose_at, declare_arguments, ComposedDemo};
pub use error::{ComposeError, Result, SubstitutionError};

#[cfg(test)]
pub(crate) mod test_support {
    use std::path::PathBuf;
    use std::sync::OnceLock;
    use tempfile::TempDir;

    static AMENT_PREFIX: OnceLock<TempDir> = OnceLock::new();
    static DEMO_HOME: OnceLock<TempDir> = OnceLock::new();

    /// Fake ament prefix exposing the packages the demo resolves
    pub fn ament_prefix() -> PathBuf {
        let dir = AMENT_PREFIX.get_or_init(|| {
            let dir = tempfile::tempdir().unwrap();
            std::fs::create_dir_all(dir.path().join("share/tirrex_demo/launch")).unwrap();
            std::fs::create_dir_all(dir.path().join("share/tirrex_scout_mini/config")).unwrap();
            std::env::set_var("AMENT_PREFIX_PATH", dir.path());
            dir
        });
        dir.path().to_path_buf()
    }

    /// Demos home redirected away from $HOME for the whole test binary
    pub fn demo_home() -> PathBuf {
        let dir = DEMO_HOME.get_or_init(|| {
            let dir = tempfile::tempdir().unwrap();
            std::env::set_var("TIRREX_DEMO_HOME", dir.path());
            dir
        });
        dir.path().to_path_buf()
    }
}
