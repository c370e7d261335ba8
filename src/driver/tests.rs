//! Tests for the drivers

use super::{run_paced, Chain, GraphId, RoundRobin};
use crate::engine::{Coroutine, Outcome, Resume, State, Step, TaskNode, Transition, ABORT_RESULT};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Suspends `ticks - 1` times, then returns `result`; logs its name each run
fn counted(name: &'static str, ticks: i32, result: i32, log: &Rc<RefCell<Vec<&'static str>>>) -> TaskNode {
    let log = log.clone();
    TaskNode::new(name, move |resume: Resume| {
        log.borrow_mut().push(name);
        if resume.state.0 + 1 < ticks {
            Transition::Suspend(State(resume.state.0 + 1))
        } else {
            Transition::Done(result)
        }
    })
}

/* ===================== RoundRobin ===================== */

#[test]
fn test_round_robin_interleaves_graphs() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut rr = RoundRobin::new();
    let a = rr.spawn(counted("a", 3, 1, &log));
    let b = rr.spawn(counted("b", 1, 2, &log));
    let c = rr.spawn(counted("c", 2, 3, &log));

    assert_eq!(rr.tick(), 2);
    assert_eq!(rr.run_until_idle(), 2);

    assert_eq!(*log.borrow(), vec!["a", "b", "c", "a", "c", "a"]);
    assert!(rr.is_idle());

    let finished = rr.take_finished();
    let order: Vec<GraphId> = finished.iter().map(|(id, _)| *id).collect();
    assert_eq!(order, vec![b, c, a]);
    assert_eq!(finished[2].1.result(), 1);
}

#[test]
fn test_round_robin_abort_is_isolated() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut rr = RoundRobin::new();
    let bad = rr.spawn(TaskNode::new("bad", |_: Resume| Transition::abort("broken")));
    let good = rr.spawn(counted("good", 3, 7, &log));

    rr.run_until_idle();

    assert_eq!(rr.get(bad).unwrap().result(), ABORT_RESULT);
    assert_eq!(rr.get(good).unwrap().result(), 7);
    assert_eq!(rr.get(GraphId(99)).map(|co| co.result()), None);
}

/* ===================== Chain ===================== */

#[test]
fn test_chain_runs_roots_in_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chain = Chain::new(counted("first", 2, 10, &log));
    chain.start_next(counted("second", 2, 20, &log));
    assert_eq!(chain.pending(), 1);

    // first: two ticks, the second one completes it and starts "second"
    assert_eq!(chain.step(), Step::Continue);
    assert_eq!(chain.step(), Step::Continue);
    assert_eq!(chain.current().top_name(), "second");

    assert_eq!(chain.run_until_done(), 20);
    assert_eq!(*log.borrow(), vec!["first", "first", "second", "second"]);
    assert_eq!(
        chain.outcomes(),
        &[Outcome::Completed(10), Outcome::Completed(20)]
    );
    assert_eq!(chain.step(), Step::Done);
}

#[test]
fn test_chain_abort_skips_queued_roots() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut chain = Chain::new(TaskNode::new("bad", |_: Resume| Transition::abort("stop")));
    chain.start_next(counted("never", 1, 0, &log));

    assert_eq!(chain.step(), Step::Done);
    assert_eq!(chain.result(), ABORT_RESULT);
    assert_eq!(chain.pending(), 0);
    assert!(log.borrow().is_empty());
    assert!(matches!(chain.outcomes(), [Outcome::Aborted(_)]));
}

/* ===================== Paced ===================== */

#[test]
fn test_run_paced_reports_every_tick() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut co = Coroutine::new(counted("paced", 4, 5, &log));
    let mut seen = Vec::new();

    let result = tokio_test::block_on(run_paced(&mut co, Duration::from_millis(1), |co| {
        seen.push(co.ticks());
    }));

    assert_eq!(result, 5);
    assert_eq!(seen, vec![1, 2, 3, 4]);
    assert!(co.is_done());
}
