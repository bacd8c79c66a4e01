//! Record module for the emitted plan and replay persistence

pub mod generator;
pub mod replay;
pub mod types;

pub use generator::PlanGenerator;
pub use replay::{load_replay_configuration, save_replay_configuration, ReplayConfiguration};
pub use types::{ActionRecord, GroupRecord, LaunchPlan};
