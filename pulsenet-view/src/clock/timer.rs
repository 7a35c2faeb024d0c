use std::thread;
use std::time::{Duration, Instant};

/// A source of time for a [`Clock`](super::Clock).
pub trait Timer {
    /// The current instant.
    fn now(&self) -> Instant;

    /// Blocks for `duration`.
    fn sleep(&mut self, duration: Duration);
}

/// The wall clock: [`Instant::now`] and [`thread::sleep`].
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemTimer;

impl Timer for SystemTimer {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn sleep(&mut self, duration: Duration) {
        thread::sleep(duration);
    }
}
