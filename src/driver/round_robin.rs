//! Round-robin interleaving of independent task graphs

use crate::engine::{Coroutine, Step, TaskNode};
use std::collections::VecDeque;
use std::fmt;
use tracing::debug;

/// Handle returned when a graph is added to a `RoundRobin`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GraphId(pub usize);

impl fmt::Display for GraphId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Graph({})", self.0)
    }
}

/// Steps every active graph once per round, in insertion order
#[derive(Debug, Default)]
pub struct RoundRobin {
    active: VecDeque<(GraphId, Coroutine)>,
    finished: Vec<(GraphId, Coroutine)>,
    next_id: usize,
}

impl RoundRobin {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn spawn(&mut self, root: TaskNode) -> GraphId {
        let id = GraphId(self.next_id);
        self.next_id += 1;
        self.active.push_back((id, Coroutine::new(root)));
        id
    }

    /// One round: a single step for each active graph
    ///
    /// Returns the number of graphs still active afterwards.
    pub fn tick(&mut self) -> usize {
        for _ in 0..self.active.len() {
            let Some((id, mut co)) = self.active.pop_front() else {
                break;
            };
            match co.step() {
                Step::Continue => self.active.push_back((id, co)),
                Step::Done => {
                    debug!(graph = %id, result = co.result(), "graph finished");
                    self.finished.push((id, co));
                }
            }
        }
        self.active.len()
    }

    /// Run rounds until every graph is done; returns the number of rounds
    pub fn run_until_idle(&mut self) -> usize {
        let mut rounds = 0;
        while !self.active.is_empty() {
            self.tick();
            rounds += 1;
        }
        rounds
    }

    pub fn active(&self) -> usize {
        self.active.len()
    }

    pub fn is_idle(&self) -> bool {
        self.active.is_empty()
    }

    pub fn get(&self, id: GraphId) -> Option<&Coroutine> {
        self.active
            .iter()
            .chain(self.finished.iter())
            .find(|(gid, _)| *gid == id)
            .map(|(_, co)| co)
    }

    /// Take the graphs that finished so far, in completion order
    pub fn take_finished(&mut self) -> Vec<(GraphId, Coroutine)> {
        std::mem::take(&mut self.finished)
    }
}
