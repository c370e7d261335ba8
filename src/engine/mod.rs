//! # Engine - Stack-Driven Cooperative Coroutines
//!
//! ## Core Principles
//!
//! 1. **Stack-driven execution**: every active call lives in a `CallStack`
//!    above the root, no recursion and no OS stack switching
//! 2. **One node per tick**: `step()` runs only the top of the stack
//! 3. **Explicit transitions**: a run step returns `Transition`
//!    (suspend / call / done / abort) and the stepper applies it
//! 4. **Centralized abort**: `Transition::Abort` is handled in one place and
//!    unwinds everything above the root
//!
//! ## Example
//!
//! ```
//! use costack::engine::{Coroutine, State, Step, TaskNode, Transition};
//!
//! let root = TaskNode::new("root", |resume: costack::engine::Resume| match resume.state {
//!     State(0) => Transition::Suspend(State(1)),
//!     _ => Transition::Done(42),
//! });
//! let mut co = Coroutine::new(root);
//!
//! assert_eq!(co.step(), Step::Continue);
//! assert_eq!(co.step(), Step::Done);
//! assert_eq!(co.result(), 42);
//! ```

pub mod coroutine;
pub mod exec_loop;
pub mod node;
pub mod stack;
pub mod types;

#[cfg(test)]
mod tests;

// Re-export commonly used items
pub use coroutine::Coroutine;
pub use exec_loop::{run_until_done, step};
pub use node::{Task, TaskNode};
pub use stack::CallStack;
pub use types::{
    AbortReport, AbortSignal, FrameInfo, Outcome, Resume, Snapshot, State, Step, Transition,
    ABORT_RESULT,
};
