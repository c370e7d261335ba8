//! The abort channel

use super::transition::State;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Root result left behind when a task graph is aborted
///
/// The value held by the root before the abort is not preserved.
pub const ABORT_RESULT: i32 = -1;

/// Unrecoverable signal raised by a run step
///
/// Returning one (as `Transition::Abort`) unwinds every node above the root.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{reason}")]
pub struct AbortSignal {
    reason: String,
}

impl AbortSignal {
    pub fn new(reason: impl Into<String>) -> Self {
        Self {
            reason: reason.into(),
        }
    }

    /// A run step was dispatched with a state its task type never records
    pub fn illegal_state(task: &str, state: State) -> Self {
        Self::new(format!("{}: illegal state {}", task, state))
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

/// What the stepper recorded when it handled an abort
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AbortReport {
    /// Name of the node whose run step aborted
    pub node: String,
    /// State that node was running in
    pub state: State,
    pub reason: String,
    /// Number of non-root nodes dropped by the unwind
    pub unwound: usize,
}
