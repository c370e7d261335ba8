//! Run-step transitions and resumption state

use super::abort::AbortSignal;
use crate::engine::node::TaskNode;
use serde::{Deserialize, Serialize};
use std::fmt;

/* ===================== State ===================== */

/// Resumption point of a task node
///
/// Opaque to the engine: only the task type that owns the node gives the
/// value meaning. Task types usually declare their states as constants:
///
/// ```
/// use costack::engine::State;
///
/// const RAMP: State = State(0);
/// const HOLD: State = State(1);
/// # assert_ne!(RAMP, HOLD);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct State(pub i32);

impl State {
    /// State handed to a freshly pushed node on its first run
    pub const INIT: State = State(0);
}

impl From<i32> for State {
    fn from(v: i32) -> Self {
        State(v)
    }
}

impl fmt::Display for State {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/* ===================== Resume ===================== */

/// Everything a run step is told about its own node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Resume {
    /// State recorded by the previous Suspend or Call (INIT on first run)
    pub state: State,
    /// Result slot: the value of the last child that returned to this node
    pub result: i32,
    /// Debug level of the node
    pub debug: u8,
}

/* ===================== Transition ===================== */

/// What a run step asks the stepper to do next
#[derive(Debug)]
pub enum Transition {
    /// Yield; resume at the given state on the next tick
    Suspend(State),
    /// Push the child and resume at the given state once it is done
    Call(State, TaskNode),
    /// Finish this node, handing the result to the caller
    Done(i32),
    /// Tear down the whole task graph
    Abort(AbortSignal),
}

impl Transition {
    pub fn call(resume_at: State, child: TaskNode) -> Self {
        Transition::Call(resume_at, child)
    }

    pub fn abort(reason: impl Into<String>) -> Self {
        Transition::Abort(AbortSignal::new(reason))
    }
}

impl From<AbortSignal> for Transition {
    fn from(signal: AbortSignal) -> Self {
        Transition::Abort(signal)
    }
}

/* ===================== Step Result ===================== */

/// Result of one tick
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Step {
    /// The graph is still active, call step() again
    Continue,
    /// The root completed or the graph was aborted
    Done,
}

impl Step {
    pub fn is_done(self) -> bool {
        self == Step::Done
    }
}
