//! Substitution types and resolution

use crate::error::SubstitutionError;
use crate::substitution::context::LaunchContext;
use std::path::{Path, PathBuf};

/// One parsed fragment of a substitution expression
#[derive(Debug, Clone, PartialEq)]
pub enum Substitution {
    /// Plain text (no substitution)
    Text(String),
    /// $(var name) - launch configuration variable
    LaunchConfiguration(String),
    /// $(env NAME [default]) - environment variable with optional default
    EnvironmentVariable {
        name: String,
        default: Option<String>,
    },
    /// $(find-pkg-share package) - package share directory
    FindPackageShare(String),
}

impl Substitution {
    /// Resolve this fragment to a concrete string
    pub fn resolve(&self, context: &LaunchContext) -> Result<String, SubstitutionError> {
        match self {
            Substitution::Text(text) => Ok(text.clone()),
            Substitution::LaunchConfiguration(name) => context
                .get_configuration(name)
                .ok_or_else(|| SubstitutionError::UndefinedVariable(name.clone())),
            Substitution::EnvironmentVariable { name, default } => {
                std::env::var(name).or_else(|_| {
                    default
                        .clone()
                        .ok_or_else(|| SubstitutionError::UndefinedEnvVar(name.clone()))
                })
            }
            Substitution::FindPackageShare(package) => find_package_share(package)
                .map(|path| path.to_string_lossy().into_owned())
                .ok_or_else(|| SubstitutionError::PackageNotFound(package.clone())),
        }
    }
}

/// Resolve a fragment list to a single string
pub fn resolve_substitutions(
    subs: &[Substitution],
    context: &LaunchContext,
) -> Result<String, SubstitutionError> {
    let mut result = String::new();
    for sub in subs {
        result.push_str(&sub.resolve(context)?);
    }
    Ok(result)
}

/// Locate the share directory of an installed package
///
/// Prefixes listed in AMENT_PREFIX_PATH win over the installed distro tree.
pub fn find_package_share(package: &str) -> Option<PathBuf> {
    if let Ok(prefix_path) = std::env::var("AMENT_PREFIX_PATH") {
        for prefix in prefix_path.split(':').filter(|p| !p.is_empty()) {
            let share = Path::new(prefix).join("share").join(package);
            if share.is_dir() {
                return Some(share);
            }
        }
    }

    if let Ok(distro) = std::env::var("ROS_DISTRO") {
        let share = Path::new("/opt/ros").join(distro).join("share").join(package);
        if share.is_dir() {
            return Some(share);
        }
    }

    // No sourced environment: probe the distros we know about
    for distro in ["jazzy", "iron", "humble"] {
        let share = Path::new("/opt/ros").join(distro).join("share").join(package);
        if share.is_dir() {
            return Some(share);
        }
    }

    None
}
