//! Cancellable polling with exponential backoff.
//!
//! DESIGN
//! ======
//! Each view refreshes through one poller task instead of a free-running
//! interval. The next tick is scheduled only after the previous fetch has
//! resolved, so slow responses never overlap. Consecutive failures double the
//! delay up to `MAX_BACKOFF`; a single success restores the base interval.
//! Cancellation flips a shared flag that the task checks between ticks.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use super::task;

pub const DASHBOARD_INTERVAL: Duration = Duration::from_secs(10);
pub const DOCUMENTS_INTERVAL: Duration = Duration::from_secs(5);
pub const RULES_INTERVAL: Duration = Duration::from_secs(10);
pub const VIOLATIONS_INTERVAL: Duration = Duration::from_secs(10);
pub const MAX_BACKOFF: Duration = Duration::from_secs(60);

/// Delay before a post-scan refresh; the scanner reports nothing when it is done.
pub const SCAN_REFRESH_DELAY: Duration = Duration::from_secs(2);

/// Delay schedule for one poller.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Backoff {
    base: Duration,
    max: Duration,
    failures: u32,
}

impl Backoff {
    pub fn new(base: Duration, max: Duration) -> Self {
        Self { base, max: max.max(base), failures: 0 }
    }

    pub fn failures(&self) -> u32 {
        self.failures
    }

    /// Record the outcome of the latest tick.
    pub fn record(&mut self, ok: bool) {
        if ok {
            self.failures = 0;
        } else {
            self.failures = self.failures.saturating_add(1);
        }
    }

    /// Delay until the next tick: `base * 2^failures`, capped at `max`.
    pub fn delay(&self) -> Duration {
        let factor = 1_u32 << self.failures.min(16);
        self.base.saturating_mul(factor).min(self.max)
    }
}

/// Shared cancellation flag for a running poller.
#[derive(Clone, Debug)]
pub struct PollHandle {
    alive: Arc<AtomicBool>,
}

impl Default for PollHandle {
    fn default() -> Self {
        Self { alive: Arc::new(AtomicBool::new(true)) }
    }
}

impl PollHandle {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.alive.store(false, Ordering::Relaxed);
    }

    pub fn is_active(&self) -> bool {
        self.alive.load(Ordering::Relaxed)
    }
}

/// Run `tick` now and then repeatedly until the handle is cancelled.
///
/// `tick` reports whether the refresh succeeded, which drives the backoff.
pub fn spawn_poller<F, Fut>(label: &'static str, interval: Duration, tick: F) -> PollHandle
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = bool> + 'static,
{
    let handle = PollHandle::new();
    let task_handle = handle.clone();
    task::spawn(async move {
        run_poller(task_handle, label, interval, tick).await;
    });
    handle
}

/// The poller loop. Each tick is awaited before the next delay starts.
///
/// Returns the backoff state at the moment the handle was cancelled.
pub(crate) async fn run_poller<F, Fut>(handle: PollHandle, label: &'static str, interval: Duration, mut tick: F) -> Backoff
where
    F: FnMut() -> Fut,
    Fut: Future<Output = bool>,
{
    let mut backoff = Backoff::new(interval, MAX_BACKOFF);
    while handle.is_active() {
        let ok = tick().await;
        backoff.record(ok);
        if !ok {
            log::debug!("{label} poll failed {} time(s); next in {:?}", backoff.failures(), backoff.delay());
        }
        if !handle.is_active() {
            break;
        }
        task::sleep(backoff.delay()).await;
    }
    log::debug!("{label} poller stopped");
    backoff
}

/// Spawn a poller that is cancelled when the current reactive owner is
/// cleaned up (typically when the page unmounts).
pub fn poll_while_mounted<F, Fut>(label: &'static str, interval: Duration, tick: F)
where
    F: FnMut() -> Fut + 'static,
    Fut: Future<Output = bool> + 'static,
{
    let handle = spawn_poller(label, interval, tick);
    leptos::prelude::on_cleanup(move || handle.cancel());
}
