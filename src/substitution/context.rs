//! Launch context for managing configurations

use std::collections::HashMap;

/// Resolved launch configurations for one composition
#[derive(Debug, Clone)]
pub struct LaunchContext {
    configurations: HashMap<String, String>,
}

impl LaunchContext {
    pub fn new() -> Self {
        Self {
            configurations: HashMap::new(),
        }
    }

    /// Context pre-seeded with caller-supplied values (CLI overrides)
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            configurations: overrides,
        }
    }

    pub fn set_configuration(&mut self, name: String, value: String) {
        self.configurations.insert(name, value);
    }

    pub fn get_configuration(&self, name: &str) -> Option<String> {
        self.configurations.get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.configurations.contains_key(name)
    }

    pub fn configurations(&self) -> &HashMap<String, String> {
        &self.configurations
    }
}

impl Default for LaunchContext {
    fn default() -> Self {
        Self::new()
    }
}
