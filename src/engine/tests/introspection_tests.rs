//! Tests for the diagnostic hooks: top name/state, depth, snapshots

use super::helpers::leaf;
use crate::engine::{CallStack, Coroutine, FrameInfo, Outcome, Resume, State, TaskNode, Transition};

fn two_level() -> Coroutine {
    let root = TaskNode::new("outer", |resume: Resume| match resume.state {
        State(0) => Transition::call(
            State(5),
            TaskNode::new("inner", |resume: Resume| match resume.state {
                State(0) => Transition::Suspend(State(2)),
                _ => Transition::Done(1),
            })
            .with_debug(1),
        ),
        _ => Transition::Done(resume.result),
    })
    .with_debug(2);
    Coroutine::new(root)
}

#[test]
fn test_top_before_first_step_is_root() {
    let co = two_level();

    assert_eq!(co.top_name(), "outer");
    assert_eq!(co.top_state(), State::INIT);
    assert_eq!(co.depth(), 1);
    assert_eq!(co.debug(), 2);
}

#[test]
fn test_top_follows_calls() {
    let mut co = two_level();

    co.step();
    assert_eq!(co.top_name(), "inner");
    assert_eq!(co.top_state(), State::INIT);

    co.step();
    assert_eq!(co.top_name(), "inner");
    assert_eq!(co.top_state(), State(2));
    assert_eq!(co.top().debug(), 1);

    co.step();
    assert_eq!(co.top_name(), "outer");
    assert_eq!(co.top_state(), State(5));
}

#[test]
fn test_snapshot_lists_frames_bottom_first() {
    let mut co = two_level();
    co.step();
    co.step();

    let snapshot = co.snapshot();
    assert_eq!(snapshot.ticks, 2);
    assert_eq!(
        snapshot.frames,
        vec![
            FrameInfo {
                name: "outer".to_string(),
                state: State(5),
            },
            FrameInfo {
                name: "inner".to_string(),
                state: State(2),
            },
        ]
    );
    assert_eq!(snapshot.outcome, Outcome::Running);

    let json = serde_json::to_value(&snapshot).unwrap();
    assert_eq!(json["frames"][1]["name"], "inner");
    assert_eq!(json["frames"][1]["state"], 2);
    assert_eq!(json["outcome"]["t"], "Running");
}

#[test]
fn test_snapshot_after_done_has_no_frames() {
    let mut co = Coroutine::new(leaf("root", 4));
    co.run_until_done();

    let snapshot = co.snapshot();
    assert!(snapshot.frames.is_empty());
    assert_eq!(snapshot.result, 4);
    assert_eq!(snapshot.outcome, Outcome::Completed(4));
}

#[test]
fn test_call_stack_unwind_counts_nodes() {
    let mut stack = CallStack::new();
    assert!(stack.is_empty());

    stack.push(leaf("a", 0));
    stack.push(leaf("b", 0));
    stack.push(leaf("c", 0));
    assert_eq!(stack.len(), 3);
    assert_eq!(stack.top().map(|n| n.name()), Some("c"));

    assert_eq!(stack.unwind(), 3);
    assert!(stack.is_empty());
    assert!(stack.pop().is_none());
}
