//! Drivers
//!
//! The engine only advances a graph when asked to. These drivers decide when:
//!
//! - `RoundRobin` interleaves independent graphs, one tick each per round
//! - `Chain` runs roots one after another, starting the next once the
//!   current one completes
//! - `run_paced` ticks a single graph on a tokio interval
//!
//! For back-to-back ticking of a single graph use `engine::run_until_done`.

pub mod chain;
pub mod paced;
pub mod round_robin;

pub use chain::Chain;
pub use paced::run_paced;
pub use round_robin::{GraphId, RoundRobin};

#[cfg(test)]
mod tests;
