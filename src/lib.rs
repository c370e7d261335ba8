pub mod cli;
pub mod config;
pub mod driver;
pub mod engine;
pub mod tasks;

// Re-export main types
pub use engine::{
    AbortSignal, Coroutine, Outcome, Resume, State, Step, Task, TaskNode, Transition,
    ABORT_RESULT,
};
