//! Sequential roots
//!
//! A `Chain` holds a running root plus the roots queued behind it. When the
//! running root completes the next queued root starts on the following tick.
//! An abort ends the whole chain: queued roots never start.

use crate::engine::{Coroutine, Outcome, Step, TaskNode};
use std::collections::VecDeque;
use tracing::{debug, warn};

#[derive(Debug)]
pub struct Chain {
    current: Coroutine,
    pending: VecDeque<TaskNode>,
    outcomes: Vec<Outcome>,
    done: bool,
}

impl Chain {
    pub fn new(root: TaskNode) -> Self {
        Chain {
            current: Coroutine::new(root),
            pending: VecDeque::new(),
            outcomes: Vec::new(),
            done: false,
        }
    }

    /// Queue a root to start after the ones already in the chain
    pub fn start_next(&mut self, next: TaskNode) {
        self.pending.push_back(next);
    }

    pub fn step(&mut self) -> Step {
        if self.done {
            return Step::Done;
        }

        if self.current.step() == Step::Continue {
            return Step::Continue;
        }

        let outcome = self.current.outcome().clone();
        let aborted = matches!(outcome, Outcome::Aborted(_));
        self.outcomes.push(outcome);

        if aborted {
            if !self.pending.is_empty() {
                warn!(
                    skipped = self.pending.len(),
                    "chain aborted, queued roots dropped"
                );
            }
            self.pending.clear();
            self.done = true;
            return Step::Done;
        }

        match self.pending.pop_front() {
            Some(next) => {
                debug!(node = %next.name(), "chain starting next root");
                self.current = Coroutine::new(next);
                Step::Continue
            }
            None => {
                self.done = true;
                Step::Done
            }
        }
    }

    pub fn run_until_done(&mut self) -> i32 {
        while self.step() == Step::Continue {}
        self.result()
    }

    /// Result of the root that ran last
    pub fn result(&self) -> i32 {
        self.current.result()
    }

    pub fn current(&self) -> &Coroutine {
        &self.current
    }

    /// Outcomes of the roots that finished, in order
    pub fn outcomes(&self) -> &[Outcome] {
        &self.outcomes
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }
}
