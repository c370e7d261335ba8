//! Ramp up, hold, ramp down

use super::{bump, HoldParams, Rectangle, Signal};
use crate::engine::{AbortSignal, Resume, State, Task, TaskNode, Transition};

const INC: State = State(0);
const DEC: State = State(1);

/// Ramps the signal up by one per tick until it reaches `size`, calls a
/// `Rectangle` hold, then ramps down to zero. Repeats `waves` times and
/// returns 0.
pub struct Triangle {
    size: i32,
    remaining: u32,
    hold: HoldParams,
    signal: Signal,
}

impl Triangle {
    pub fn new(waves: u32, size: i32, hold: HoldParams, signal: Signal) -> Self {
        Triangle {
            size,
            remaining: waves,
            hold,
            signal,
        }
    }

    pub fn into_node(self, debug: u8) -> TaskNode {
        TaskNode::new("Triangle", self).with_debug(debug)
    }

    fn advance(&mut self, resume: Resume) -> Result<Transition, AbortSignal> {
        match resume.state {
            INC => {
                if bump(&self.signal, 1)? >= self.size {
                    let hold = Rectangle::new(self.hold, self.signal.clone())
                        .into_node(resume.debug.saturating_sub(1));
                    return Ok(Transition::call(DEC, hold));
                }
                Ok(Transition::Suspend(INC))
            }
            DEC => {
                if bump(&self.signal, -1)? > 0 {
                    return Ok(Transition::Suspend(DEC));
                }
                self.remaining = self.remaining.saturating_sub(1);
                if self.remaining > 0 {
                    Ok(Transition::Suspend(INC))
                } else {
                    Ok(Transition::Done(0))
                }
            }
            other => Err(AbortSignal::illegal_state("Triangle", other)),
        }
    }
}

impl Task for Triangle {
    fn run(&mut self, resume: Resume) -> Transition {
        self.advance(resume).unwrap_or_else(Transition::from)
    }
}
