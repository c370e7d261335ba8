//! Type definitions for the engine
//!
//! - Transitions returned by a run step (Transition, Resume, State)
//! - The per-tick step result (Step)
//! - The abort channel (AbortSignal, AbortReport)
//! - Terminal outcome and introspection (Outcome, Snapshot)

pub mod abort;
pub mod outcome;
pub mod transition;

pub use abort::{AbortReport, AbortSignal, ABORT_RESULT};
pub use outcome::{FrameInfo, Outcome, Snapshot};
pub use transition::{Resume, State, Step, Transition};
