//! Core stepping loop
//!
//! This module contains the step() function - the heart of the engine.
//! Each call runs exactly one node (the top of the stack) and applies the
//! transition it returns to the stack.
//!
//! ## Function Organization
//! 1. run_until_done() - Top-level driver (calls step repeatedly)
//! 2. step() - One tick (dispatches to the transition handlers)
//! 3. suspend() / call() / complete() / abort() - Stack mutations

use super::coroutine::Coroutine;
use super::node::TaskNode;
use super::types::{AbortReport, AbortSignal, Outcome, State, Step, Transition, ABORT_RESULT};
use tracing::{debug, error, trace};

/* ===================== Public API ===================== */

/// Run the coroutine until it completes
///
/// Ticks back to back with no pacing. Returns the root's result
/// (`ABORT_RESULT` if the graph was aborted).
pub fn run_until_done(co: &mut Coroutine) -> i32 {
    loop {
        match step(co) {
            Step::Continue => continue,
            Step::Done => break,
        }
    }
    co.result()
}

/// Execute one tick
///
/// 1. Refuses to run anything once the graph is done
/// 2. Starts the root on the first call
/// 3. Runs the top node at its recorded state
/// 4. Applies the returned transition to the stack
pub fn step(co: &mut Coroutine) -> Step {
    if co.outcome.is_terminal() {
        trace!(node = %co.root.name(), "step after completion ignored");
        return Step::Done;
    }

    if co.outcome == Outcome::Pending {
        if co.root.debug() > 0 {
            debug!(node = %co.root.name(), "coroutine started");
        }
        co.outcome = Outcome::Running;
    }

    co.ticks += 1;
    let top = co.top_mut();
    if top.debug() > 1 {
        trace!(node = %top.name(), state = %top.state(), "resume coroutine");
    }
    let transition = top.run();

    match transition {
        Transition::Suspend(next) => suspend(co, next),
        Transition::Call(next, child) => call(co, next, child),
        Transition::Done(result) => complete(co, result),
        Transition::Abort(signal) => abort(co, signal),
    }
}

/* ===================== Transitions ===================== */

fn suspend(co: &mut Coroutine, next: State) -> Step {
    let top = co.top_mut();
    top.set_state(next);
    if top.debug() > 0 {
        debug!(node = %top.name(), state = %next, "coroutine suspended");
    }
    Step::Continue
}

/// Record where the caller resumes and hand the child to the stack
fn call(co: &mut Coroutine, next: State, child: TaskNode) -> Step {
    let caller = co.top_mut();
    caller.set_state(next);
    if caller.debug() > 0 {
        debug!(node = %caller.name(), child = %child.name(), "coroutine calling");
    }
    co.stack.push(child);
    Step::Continue
}

/// Pop a finished child into its caller's result slot, or finish the root
fn complete(co: &mut Coroutine, result: i32) -> Step {
    match co.stack.pop() {
        Some(finished) => {
            if finished.debug() > 0 {
                debug!(node = %finished.name(), result, "coroutine returned");
            }
            drop(finished);
            // The caller sees the result on its next tick, not this one
            co.top_mut().set_result(result);
            Step::Continue
        }
        None => {
            if co.root.debug() > 0 {
                debug!(node = %co.root.name(), result, "coroutine returned");
            }
            co.root.set_result(result);
            co.outcome = Outcome::Completed(result);
            Step::Done
        }
    }
}

/* ===================== Abort ===================== */

/// Tear down every call above the root and mark the graph as done
fn abort(co: &mut Coroutine, signal: AbortSignal) -> Step {
    let (node, state) = {
        let top = co.top();
        (top.name().to_string(), top.state())
    };
    let unwound = co.stack.unwind();

    error!(
        node = %node,
        state = %state,
        unwound,
        "coroutine aborted: {}",
        signal.reason()
    );

    co.root.set_result(ABORT_RESULT);
    co.outcome = Outcome::Aborted(AbortReport {
        node,
        state,
        reason: signal.reason().to_string(),
        unwound,
    });
    Step::Done
}
