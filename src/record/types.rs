//! Emitted plan data structures

use serde::{Deserialize, Serialize};

/// One resolved action of the emitted plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum ActionRecord {
    SetEnv {
        name: String,
        value: String,
    },
    Include {
        file: String,
        args: Vec<(String, String)>,
    },
}

/// Ordered action group, executed in declaration order by the host runtime
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GroupRecord {
    pub actions: Vec<ActionRecord>,
}

/// Root structure of the emitted plan document
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LaunchPlan {
    pub demo: String,
    pub timestamp: String,
    pub log_directory: String,
    pub debug_directory: String,
    pub group: GroupRecord,
}

impl LaunchPlan {
    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}
