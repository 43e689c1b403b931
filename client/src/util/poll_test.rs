use std::cell::Cell;
use std::rc::Rc;

use futures::executor::block_on;

use super::*;

#[test]
fn backoff_starts_at_base() {
    let b = Backoff::new(Duration::from_secs(5), MAX_BACKOFF);
    assert_eq!(b.delay(), Duration::from_secs(5));
    assert_eq!(b.failures(), 0);
}

#[test]
fn backoff_doubles_per_failure_and_caps() {
    let mut b = Backoff::new(Duration::from_secs(5), MAX_BACKOFF);
    let mut seen = Vec::new();
    for _ in 0..6 {
        b.record(false);
        seen.push(b.delay().as_secs());
    }
    assert_eq!(seen, vec![10, 20, 40, 60, 60, 60]);
}

#[test]
fn backoff_resets_after_success() {
    let mut b = Backoff::new(Duration::from_secs(10), MAX_BACKOFF);
    b.record(false);
    b.record(false);
    assert_eq!(b.delay(), Duration::from_secs(40));
    b.record(true);
    assert_eq!(b.delay(), Duration::from_secs(10));
    assert_eq!(b.failures(), 0);
}

#[test]
fn backoff_survives_many_failures() {
    let mut b = Backoff::new(Duration::from_secs(5), MAX_BACKOFF);
    for _ in 0..10_000 {
        b.record(false);
    }
    assert_eq!(b.delay(), MAX_BACKOFF);
}

#[test]
fn backoff_max_never_below_base() {
    let b = Backoff::new(Duration::from_secs(90), MAX_BACKOFF);
    assert_eq!(b.delay(), Duration::from_secs(90));
}

#[test]
fn poll_handle_cancel_is_shared_between_clones() {
    let handle = PollHandle::new();
    let task_side = handle.clone();
    assert!(task_side.is_active());
    handle.cancel();
    assert!(!task_side.is_active());
}

#[test]
fn view_intervals_match_refresh_cadence() {
    assert_eq!(DOCUMENTS_INTERVAL, Duration::from_secs(5));
    assert_eq!(DASHBOARD_INTERVAL, Duration::from_secs(10));
    assert_eq!(SCAN_REFRESH_DELAY, Duration::from_secs(2));
}

/// Tick that counts its calls and cancels `handle` on call `stop_at`.
fn counting_tick(
    handle: PollHandle,
    stop_at: u32,
    outcome: impl Fn(u32) -> bool,
) -> (Rc<Cell<u32>>, impl FnMut() -> std::future::Ready<bool>) {
    let calls = Rc::new(Cell::new(0_u32));
    let counter = calls.clone();
    let tick = move || {
        let n = counter.get() + 1;
        counter.set(n);
        if n == stop_at {
            handle.cancel();
        }
        std::future::ready(outcome(n))
    };
    (calls, tick)
}

#[test]
fn poller_runs_until_the_tick_that_cancels() {
    let handle = PollHandle::new();
    let (calls, tick) = counting_tick(handle.clone(), 4, |_| true);

    let backoff = block_on(run_poller(handle, "test", DOCUMENTS_INTERVAL, tick));

    assert_eq!(calls.get(), 4);
    assert_eq!(backoff.failures(), 0);
}

#[test]
fn cancelled_poller_never_ticks() {
    let handle = PollHandle::new();
    handle.cancel();
    let (calls, tick) = counting_tick(handle.clone(), 1, |_| true);

    block_on(run_poller(handle, "test", DOCUMENTS_INTERVAL, tick));

    assert_eq!(calls.get(), 0);
}

#[test]
fn failing_ticks_grow_the_delay() {
    let handle = PollHandle::new();
    let (calls, tick) = counting_tick(handle.clone(), 3, |_| false);

    let backoff = block_on(run_poller(handle, "test", DOCUMENTS_INTERVAL, tick));

    assert_eq!(calls.get(), 3);
    assert_eq!(backoff.failures(), 3);
    assert_eq!(backoff.delay(), Duration::from_secs(40));
}

#[test]
fn one_success_after_failures_restores_the_interval() {
    let handle = PollHandle::new();
    let (_, tick) = counting_tick(handle.clone(), 3, |n| n == 3);

    let backoff = block_on(run_poller(handle, "test", RULES_INTERVAL, tick));

    assert_eq!(backoff.failures(), 0);
    assert_eq!(backoff.delay(), RULES_INTERVAL);
}

#[test]
fn next_tick_starts_only_after_the_previous_one_resolves() {
    let handle = PollHandle::new();
    let in_flight = Rc::new(Cell::new(false));
    let overlapped = Rc::new(Cell::new(false));
    let calls = Rc::new(Cell::new(0_u32));

    let tick = {
        let handle = handle.clone();
        let in_flight = in_flight.clone();
        let overlapped = overlapped.clone();
        let calls = calls.clone();
        move || {
            if in_flight.get() {
                overlapped.set(true);
            }
            in_flight.set(true);
            calls.set(calls.get() + 1);
            if calls.get() == 5 {
                handle.cancel();
            }
            let in_flight = in_flight.clone();
            async move {
                futures::future::ready(()).await;
                in_flight.set(false);
                true
            }
        }
    };

    block_on(run_poller(handle, "test", VIOLATIONS_INTERVAL, tick));

    assert_eq!(calls.get(), 5);
    assert!(!overlapped.get());
    assert!(!in_flight.get());
}
