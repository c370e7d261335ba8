//! Task nodes
//!
//! A `TaskNode` wraps a task type together with the bookkeeping the stepper
//! needs: its name, its recorded state, its result slot and a debug level.

use super::types::{Resume, State, Transition};
use std::fmt;
use tracing::debug;

/* ===================== Task ===================== */

/// A unit of cooperative work
///
/// `run` performs one bounded increment and returns a transition. It is
/// usually a `match` on `resume.state`; returning `Suspend` or `Call` is the
/// only way to give control back to the driver.
pub trait Task {
    fn run(&mut self, resume: Resume) -> Transition;
}

impl<F> Task for F
where
    F: FnMut(Resume) -> Transition,
{
    fn run(&mut self, resume: Resume) -> Transition {
        self(resume)
    }
}

/* ===================== TaskNode ===================== */

pub struct TaskNode {
    name: String,
    state: State,
    result: i32,
    debug: u8,
    task: Box<dyn Task>,
}

impl TaskNode {
    /// Create a node that starts in `State::INIT`
    pub fn new(name: impl Into<String>, task: impl Task + 'static) -> Self {
        TaskNode {
            name: name.into(),
            state: State::INIT,
            result: 0,
            debug: 0,
            task: Box::new(task),
        }
    }

    /// Set the debug level; any level above 0 logs the node's transitions
    pub fn with_debug(mut self, level: u8) -> Self {
        self.debug = level;
        if level > 0 {
            debug!(node = %self.name, "coroutine created");
        }
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn state(&self) -> State {
        self.state
    }

    /// Result slot: the last child's result, or the final result of a root
    pub fn result(&self) -> i32 {
        self.result
    }

    pub fn debug(&self) -> u8 {
        self.debug
    }

    pub(crate) fn set_state(&mut self, state: State) {
        self.state = state;
    }

    pub(crate) fn set_result(&mut self, result: i32) {
        self.result = result;
    }

    /// Invoke the task's run step at the recorded state
    pub(crate) fn run(&mut self) -> Transition {
        let resume = Resume {
            state: self.state,
            result: self.result,
            debug: self.debug,
        };
        self.task.run(resume)
    }
}

impl fmt::Debug for TaskNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TaskNode")
            .field("name", &self.name)
            .field("state", &self.state)
            .field("result", &self.result)
            .field("debug", &self.debug)
            .finish_non_exhaustive()
    }
}
