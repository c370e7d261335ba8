//! Logical call stack
//!
//! Holds every node above the root, bottom first. The last element is the
//! innermost active call; its caller is the element below it, or the root
//! when the stack holds a single node. Nodes are owned by the stack and
//! dropped as soon as they are popped.

use super::node::TaskNode;

#[derive(Debug, Default)]
pub struct CallStack {
    frames: Vec<TaskNode>,
}

impl CallStack {
    pub fn new() -> Self {
        Self { frames: Vec::new() }
    }

    pub fn push(&mut self, node: TaskNode) {
        self.frames.push(node);
    }

    pub fn pop(&mut self) -> Option<TaskNode> {
        self.frames.pop()
    }

    pub fn top(&self) -> Option<&TaskNode> {
        self.frames.last()
    }

    pub fn top_mut(&mut self) -> Option<&mut TaskNode> {
        self.frames.last_mut()
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Bottom-first iteration over the active calls
    pub fn iter(&self) -> impl Iterator<Item = &TaskNode> {
        self.frames.iter()
    }

    /// Drop every node, innermost first; returns how many were dropped
    pub fn unwind(&mut self) -> usize {
        let mut dropped = 0;
        while let Some(node) = self.frames.pop() {
            drop(node);
            dropped += 1;
        }
        dropped
    }
}
