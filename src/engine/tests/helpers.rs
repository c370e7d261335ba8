//! Test helpers for engine tests
//!
//! Small task builders plus a wrapper that counts how often a node is dropped.

use crate::engine::{Resume, Task, TaskNode, Transition};
use std::cell::{Cell, RefCell};
use std::rc::Rc;

/// Shared drop counter
pub type Drops = Rc<Cell<usize>>;

pub fn drops() -> Drops {
    Rc::new(Cell::new(0))
}

/// Wraps a task and counts drops of the node that owns it
pub struct Tracked<T> {
    inner: T,
    drops: Drops,
}

impl<T: Task> Task for Tracked<T> {
    fn run(&mut self, resume: Resume) -> Transition {
        self.inner.run(resume)
    }
}

impl<T> Drop for Tracked<T> {
    fn drop(&mut self) {
        self.drops.set(self.drops.get() + 1);
    }
}

pub fn tracked(name: &str, drops: &Drops, task: impl Task + 'static) -> TaskNode {
    TaskNode::new(
        name,
        Tracked {
            inner: task,
            drops: drops.clone(),
        },
    )
}

/// A node that finishes on its first run
pub fn leaf(name: &str, result: i32) -> TaskNode {
    TaskNode::new(name, move |_: Resume| Transition::Done(result))
}

/// Records every Resume a task was run with
pub type Seen = Rc<RefCell<Vec<Resume>>>;

pub fn seen() -> Seen {
    Rc::new(RefCell::new(Vec::new()))
}

pub fn recording<F>(seen: &Seen, mut f: F) -> impl Task + 'static
where
    F: FnMut(Resume) -> Transition + 'static,
{
    let seen = seen.clone();
    move |resume: Resume| {
        seen.borrow_mut().push(resume);
        f(resume)
    }
}
