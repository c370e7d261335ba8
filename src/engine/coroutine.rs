//! Coroutine handle
//!
//! The `Coroutine` is what a driver holds: the root node plus the call stack
//! above it and the terminal outcome. The driver owns the root through this
//! handle; the engine only ever drops nodes on the call stack.

use super::exec_loop;
use super::node::TaskNode;
use super::stack::CallStack;
use super::types::{FrameInfo, Outcome, Snapshot, State, Step};

/* ===================== Coroutine ===================== */

#[derive(Debug)]
pub struct Coroutine {
    /// Bottom of the stack, never dropped by the engine
    pub(crate) root: TaskNode,

    /// Calls above the root
    pub(crate) stack: CallStack,

    pub(crate) outcome: Outcome,

    /// Number of run steps invoked so far
    pub(crate) ticks: u64,
}

impl Coroutine {
    /// Wrap a root node; nothing runs until the first `step()`
    pub fn new(root: TaskNode) -> Self {
        Coroutine {
            root,
            stack: CallStack::new(),
            outcome: Outcome::Pending,
            ticks: 0,
        }
    }

    /// Advance the graph by one run step
    pub fn step(&mut self) -> Step {
        exec_loop::step(self)
    }

    /// Step until done and return the root's final result
    pub fn run_until_done(&mut self) -> i32 {
        exec_loop::run_until_done(self)
    }

    /* ----- introspection ----- */

    /// Node that the next step() will run
    pub fn top(&self) -> &TaskNode {
        self.stack.top().unwrap_or(&self.root)
    }

    pub(crate) fn top_mut(&mut self) -> &mut TaskNode {
        match self.stack.top_mut() {
            Some(node) => node,
            None => &mut self.root,
        }
    }

    pub fn top_name(&self) -> &str {
        self.top().name()
    }

    pub fn top_state(&self) -> State {
        self.top().state()
    }

    /// Debug level of the graph (the root's)
    pub fn debug(&self) -> u8 {
        self.root.debug()
    }

    /// Number of active nodes including the root; 0 once the graph is done
    pub fn depth(&self) -> usize {
        if self.is_done() {
            0
        } else {
            self.stack.len() + 1
        }
    }

    pub fn is_done(&self) -> bool {
        self.outcome.is_terminal()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// The root's result slot
    ///
    /// Holds the final result once the root completed, `ABORT_RESULT` after
    /// an abort.
    pub fn result(&self) -> i32 {
        self.root.result()
    }

    pub fn outcome(&self) -> &Outcome {
        &self.outcome
    }

    pub fn root(&self) -> &TaskNode {
        &self.root
    }

    /// Give the root back to the caller, dropping any calls still active
    pub fn into_root(self) -> TaskNode {
        self.root
    }

    pub fn snapshot(&self) -> Snapshot {
        let frames = if self.is_done() {
            Vec::new()
        } else {
            std::iter::once(&self.root)
                .chain(self.stack.iter())
                .map(|node| FrameInfo {
                    name: node.name().to_string(),
                    state: node.state(),
                })
                .collect()
        };

        Snapshot {
            ticks: self.ticks,
            frames,
            result: self.result(),
            outcome: self.outcome.clone(),
        }
    }
}
