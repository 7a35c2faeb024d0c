//! A fixed-rate driver that rebuilds and redraws a
//! network once per tick.
//!
//! Each tick builds a brand-new [`Network`] from the clock's
//! dimensions, runs one forward pass on it, publishes it as the
//! latest snapshot and hands it to the clock's [`View`]. The clock
//! then sleeps for whatever is left of the tick. A tick that uses
//! up its whole budget stops the clock for good: there is no
//! catching up and no skipping.
mod timer;

pub use timer::{SystemTimer, Timer};

use crate::{ClockError, View};

use pulsenet::config::NetworkDimensions;
use pulsenet::network::Network;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Configuration data for a [`Clock`].
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClockConfig {
    /// Time budget of a single tick, rebuild and redraw included.
    pub tick_length: Duration,
}

impl ClockConfig {
    pub const fn new() -> ClockConfig {
        ClockConfig {
            tick_length: Duration::from_millis(2000),
        }
    }
}

impl Default for ClockConfig {
    fn default() -> ClockConfig {
        ClockConfig::new()
    }
}

/// A cooperative stop signal for a running [`Clock`].
///
/// Stopping takes effect at the start of the next tick;
/// a tick in progress always completes.
#[derive(Clone, Debug, Default)]
pub struct StopHandle(Arc<AtomicBool>);

impl StopHandle {
    pub fn new() -> StopHandle {
        StopHandle::default()
    }

    /// Asks the clock to stop before its next tick.
    pub fn stop(&self) {
        self.0.store(true, Ordering::Release);
    }

    pub fn is_stopped(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

/// Summary of a clock run that ended on request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClockReport {
    /// Total ticks completed by the clock.
    pub ticks: usize,
}

/// A fixed-interval network rebuild loop.
pub struct Clock<V, T = SystemTimer> {
    dimensions: NetworkDimensions,
    config: ClockConfig,
    view: V,
    timer: T,
    stop: StopHandle,
    latest: Option<Arc<Network>>,
    ticks: usize,
}

impl<V: View> Clock<V, SystemTimer> {
    /// Creates a clock driven by the wall clock.
    ///
    /// # Errors
    /// Returns [`ClockError::Network`] if no network can be
    /// built with `dimensions`.
    pub fn new(
        dimensions: NetworkDimensions,
        config: ClockConfig,
        view: V,
    ) -> Result<Clock<V, SystemTimer>, ClockError> {
        Clock::with_timer(dimensions, config, view, SystemTimer)
    }
}

impl<V: View, T: Timer> Clock<V, T> {
    /// Creates a clock driven by `timer`.
    ///
    /// # Errors
    /// Returns [`ClockError::Network`] if no network can be
    /// built with `dimensions`.
    pub fn with_timer(
        dimensions: NetworkDimensions,
        config: ClockConfig,
        view: V,
        timer: T,
    ) -> Result<Clock<V, T>, ClockError> {
        dimensions.validate()?;
        Ok(Clock {
            dimensions,
            config,
            view,
            timer,
            stop: StopHandle::new(),
            latest: None,
            ticks: 0,
        })
    }

    /// Replaces the clock's stop signal with `stop`, so that
    /// it can be shared before the clock is moved elsewhere.
    pub fn with_stop_handle(mut self, stop: StopHandle) -> Clock<V, T> {
        self.stop = stop;
        self
    }

    /// Returns a handle able to stop the clock.
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    /// Runs the clock with the thread-local generator
    /// until stopped.
    ///
    /// # Errors
    /// See [`Clock::run_with`].
    pub fn run(&mut self) -> Result<ClockReport, ClockError> {
        self.run_with(&mut rand::thread_rng())
    }

    /// Ticks until the stop handle is triggered or a tick
    /// misses its deadline.
    ///
    /// # Errors
    /// Returns [`ClockError::DeadlineExceeded`] if a tick took at
    /// least the whole tick length. The clock is stopped afterwards,
    /// and later runs return immediately.
    pub fn run_with<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<ClockReport, ClockError> {
        while !self.stop.is_stopped() {
            let start = self.timer.now();
            self.tick(rng)?;
            self.wait_for_next_tick(start)?;
        }
        info!(ticks = self.ticks, "clock stopped");
        Ok(ClockReport { ticks: self.ticks })
    }

    /// Builds, propagates, publishes and draws a single new
    /// network, without any timing.
    ///
    /// # Errors
    /// Returns [`ClockError::Network`] if the network can't be built.
    pub fn tick<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Result<Arc<Network>, ClockError> {
        let mut network = Network::new(self.dimensions, rng)?;
        network.propagate_signal(rng);

        let snapshot = Arc::new(network);
        self.latest = Some(Arc::clone(&snapshot));
        self.view.draw(&snapshot);
        self.ticks += 1;
        Ok(snapshot)
    }

    fn wait_for_next_tick(&mut self, start: Instant) -> Result<(), ClockError> {
        let elapsed = self.timer.now().saturating_duration_since(start);
        match self.config.tick_length.checked_sub(elapsed) {
            Some(remaining) if !remaining.is_zero() => {
                debug!(tick = self.ticks, ?elapsed, ?remaining, "tick done");
                self.timer.sleep(remaining);
                Ok(())
            }
            _ => {
                warn!(
                    tick = self.ticks,
                    ?elapsed,
                    tick_length = ?self.config.tick_length,
                    "can't keep up, stopping clock"
                );
                self.stop.stop();
                Err(ClockError::DeadlineExceeded {
                    tick: self.ticks,
                    elapsed,
                    tick_length: self.config.tick_length,
                })
            }
        }
    }

    /// The most recently published network, if any tick has run.
    pub fn latest(&self) -> Option<Arc<Network>> {
        self.latest.clone()
    }

    /// Number of ticks completed so far.
    pub fn ticks(&self) -> usize {
        self.ticks
    }

    pub fn dimensions(&self) -> NetworkDimensions {
        self.dimensions
    }

    pub fn config(&self) -> &ClockConfig {
        &self.config
    }

    pub fn view(&self) -> &V {
        &self.view
    }

    pub fn into_view(self) -> V {
        self.view
    }
}
