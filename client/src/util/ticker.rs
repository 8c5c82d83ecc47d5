//! One-second tick loop for the wellness timers.
//!
//! DESIGN
//! ======
//! Each `start` bumps a shared generation counter and spawns a sleep loop
//! that exits as soon as the counter moves on. `stop`, a second `start`, and
//! component cleanup all invalidate the running loop the same way, so at most
//! one loop ever drives a widget.

#[cfg(test)]
#[path = "ticker_test.rs"]
mod ticker_test;

use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;

pub const TICK: Duration = Duration::from_secs(1);

/// What the loop should do after a tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TickFlow {
    Continue,
    Stop,
}

#[derive(Clone, Debug, Default)]
pub struct Ticker {
    generation: Arc<AtomicU64>,
}

impl Ticker {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a loop calling `on_tick` every `period` until it returns
    /// [`TickFlow::Stop`] or the ticker is stopped/restarted. Returns the
    /// run's generation.
    pub fn start<F>(&self, period: Duration, on_tick: F) -> u64
    where
        F: FnMut() -> TickFlow + 'static,
    {
        let run = self.generation.fetch_add(1, Ordering::Relaxed) + 1;
        #[cfg(feature = "hydrate")]
        {
            let ticker = self.clone();
            let mut on_tick = on_tick;
            leptos::task::spawn_local(async move {
                loop {
                    gloo_timers::future::sleep(period).await;
                    if !ticker.is_current(run) {
                        break;
                    }
                    if on_tick() == TickFlow::Stop {
                        break;
                    }
                }
            });
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (period, on_tick);
        }
        run
    }

    pub fn stop(&self) {
        self.generation.fetch_add(1, Ordering::Relaxed);
    }

    /// Whether `run` is still the live loop.
    #[must_use]
    pub fn is_current(&self, run: u64) -> bool {
        self.generation.load(Ordering::Relaxed) == run
    }
}
