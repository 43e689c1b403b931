//! Local task spawning and timers.
//!
//! In the browser (`hydrate`) futures run on the WASM event loop. During SSR
//! and in native tests there is nothing to talk to, so spawned futures are
//! dropped without being polled and sleeps return immediately.

use std::future::Future;
use std::time::Duration;

/// Run `future` on the browser event loop.
pub fn spawn<F>(future: F)
where
    F: Future<Output = ()> + 'static,
{
    #[cfg(feature = "hydrate")]
    {
        leptos::task::spawn_local(future);
    }
    #[cfg(not(feature = "hydrate"))]
    {
        drop(future);
    }
}

/// Wait for `duration` without blocking the event loop.
pub async fn sleep(duration: Duration) {
    #[cfg(feature = "hydrate")]
    {
        gloo_timers::future::sleep(duration).await;
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = duration;
    }
}
