//! Interval-paced driver

use crate::engine::{Coroutine, Step};
use std::time::Duration;
use tokio::time::{interval, MissedTickBehavior};

/// Tick `co` once per `period` until it is done
///
/// `on_tick` sees the coroutine after every step, including the last one.
/// Returns the root's result. A zero period is clamped to one millisecond.
pub async fn run_paced<F>(co: &mut Coroutine, period: Duration, mut on_tick: F) -> i32
where
    F: FnMut(&Coroutine),
{
    let mut ticker = interval(period.max(Duration::from_millis(1)));
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    loop {
        ticker.tick().await;
        let step = co.step();
        on_tick(co);
        if step == Step::Done {
            return co.result();
        }
    }
}
