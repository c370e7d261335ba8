//! Demonstration task types
//!
//! A `Triangle` ramps a shared signal up to a threshold, calls a nested
//! `Rectangle` that holds it in a square wave, then ramps back down to zero.
//! The rectangle aborts the whole graph if the signal crosses the high limit.

pub mod rectangle;
pub mod triangle;

pub use rectangle::{HoldParams, Rectangle};
pub use triangle::Triangle;

use crate::engine::AbortSignal;
use std::cell::Cell;
use std::rc::Rc;

/// Integer shared between a task and the tasks it calls
pub type Signal = Rc<Cell<i32>>;

pub fn signal(initial: i32) -> Signal {
    Rc::new(Cell::new(initial))
}

/// Add `delta` to the signal and return the new value
///
/// Leaves the signal untouched and aborts if the sum leaves `i32` range.
pub(crate) fn bump(signal: &Signal, delta: i32) -> Result<i32, AbortSignal> {
    let v = signal
        .get()
        .checked_add(delta)
        .ok_or_else(|| AbortSignal::new("signal overflow"))?;
    signal.set(v);
    Ok(v)
}
