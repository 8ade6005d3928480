//! Fixed-delay stand-ins for network round trips.
//!
//! The mock "requests" in this app (OAuth, saving a server id, checking for
//! the bot) always succeed after a fixed wait. The callback only runs in the
//! browser; server rendering never schedules it.

use std::time::Duration;

pub const OAUTH: Duration = Duration::from_millis(1500);
pub const SAVE: Duration = Duration::from_millis(1000);
pub const BOT_CHECK: Duration = Duration::from_millis(2000);
pub const COPIED_FLASH: Duration = Duration::from_millis(2000);

/// Run `done` once `wait` has elapsed. No cancellation, no retry.
pub fn after(wait: Duration, done: impl FnOnce() + 'static) {
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::sleep(wait).await;
        done();
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (wait, done);
    }
}
