//! Terminal outcome and introspection snapshots

use super::abort::AbortReport;
use super::transition::State;
use serde::{Deserialize, Serialize};

/// Lifecycle of a task graph as seen by its driver
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "t", content = "v")]
pub enum Outcome {
    /// step() has not been called yet
    Pending,
    Running,
    /// The root returned Done with this result
    Completed(i32),
    Aborted(AbortReport),
}

impl Outcome {
    pub fn is_terminal(&self) -> bool {
        matches!(self, Outcome::Completed(_) | Outcome::Aborted(_))
    }

    pub fn abort_report(&self) -> Option<&AbortReport> {
        match self {
            Outcome::Aborted(report) => Some(report),
            _ => None,
        }
    }
}

/// One active node, bottom first
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FrameInfo {
    pub name: String,
    pub state: State,
}

/// Point-in-time view of a coroutine for diagnostics
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    pub ticks: u64,
    pub frames: Vec<FrameInfo>,
    pub result: i32,
    pub outcome: Outcome,
}
