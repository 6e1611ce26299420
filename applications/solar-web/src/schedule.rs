//! Tick sources for the refresh loop
//!
//! Any `Stream<Item = ()>` drives [`crate::refresh::Refresher::run`]. The browser uses a
//! timer interval; tests push ticks through a channel.

#[cfg(target_arch = "wasm32")]
use std::time::Duration;

#[cfg(target_arch = "wasm32")]
use futures::Stream;

/// Ticks once every `period`, forever
#[cfg(target_arch = "wasm32")]
pub fn interval_ticks(period: Duration) -> impl Stream<Item = ()> {
    let millis = u32::try_from(period.as_millis()).unwrap_or(u32::MAX);
    gloo_timers::future::IntervalStream::new(millis)
}
