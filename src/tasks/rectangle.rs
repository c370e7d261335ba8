//! Square-wave hold

use super::{bump, Signal};
use crate::engine::{AbortSignal, Resume, State, Task, TaskNode, Transition};
use serde::{Deserialize, Serialize};

const INIT: State = State(0);
const HIGH: State = State(1);
const LOW: State = State(2);

/// Shape of the hold
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct HoldParams {
    /// Step added on a rising edge and removed on a falling edge
    pub size: i32,
    /// Number of high/low periods
    pub count: u32,
    /// Ticks spent in each half period
    pub period: u32,
    /// The graph aborts when the first rising edge reaches this value
    pub high_limit: i32,
}

impl Default for HoldParams {
    fn default() -> Self {
        HoldParams {
            size: 2,
            count: 2,
            period: 3,
            high_limit: 8,
        }
    }
}

/// Raises the signal by `size`, holds it for `period` ticks, lowers it for
/// `period` ticks, `count` times. Ends one below where it started.
pub struct Rectangle {
    params: HoldParams,
    remaining: u32,
    elapsed: u32,
    signal: Signal,
}

impl Rectangle {
    pub fn new(params: HoldParams, signal: Signal) -> Self {
        Rectangle {
            params,
            remaining: params.count,
            elapsed: 0,
            signal,
        }
    }

    pub fn into_node(self, debug: u8) -> TaskNode {
        TaskNode::new("Rectangle", self).with_debug(debug)
    }

    /// Count one tick of the current half period; true once it is over
    fn period_elapsed(&mut self) -> bool {
        self.elapsed += 1;
        if self.elapsed >= self.params.period {
            self.elapsed = 0;
            true
        } else {
            false
        }
    }

    fn advance(&mut self, state: State) -> Result<Transition, AbortSignal> {
        match state {
            INIT => {
                let level = bump(&self.signal, self.params.size)?;
                if level >= self.params.high_limit {
                    return Err(AbortSignal::new(format!(
                        "high limit {} exceeded",
                        self.params.high_limit
                    )));
                }
                Ok(Transition::Suspend(HIGH))
            }
            HIGH => {
                if self.period_elapsed() {
                    bump(&self.signal, -self.params.size)?;
                    return Ok(Transition::Suspend(LOW));
                }
                Ok(Transition::Suspend(HIGH))
            }
            LOW => {
                if !self.period_elapsed() {
                    return Ok(Transition::Suspend(LOW));
                }
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining > 0 {
                    bump(&self.signal, self.params.size)?;
                    Ok(Transition::Suspend(HIGH))
                } else {
                    bump(&self.signal, -1)?;
                    Ok(Transition::Done(0))
                }
            }
            other => Err(AbortSignal::illegal_state("Rectangle", other)),
        }
    }
}

impl Task for Rectangle {
    fn run(&mut self, resume: Resume) -> Transition {
        self.advance(resume.state).unwrap_or_else(Transition::from)
    }
}
