//! Group action implementation

use crate::actions::Action;

/// Ordered action group, handed to the host runtime as one unit
#[derive(Debug, Clone, PartialEq)]
pub struct GroupAction {
    pub actions: Vec<Action>,
}

impl GroupAction {
    pub fn new(actions: Vec<Action>) -> Self {
        Self { actions }
    }
}
