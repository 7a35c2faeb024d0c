use pulsenet::NetworkError;
use thiserror::Error;

use std::time::Duration;

/// An error type indicating why a clock stopped
/// or could not be started.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClockError {
    /// The configured dimensions do not describe a buildable network.
    #[error("invalid network configuration: {0}")]
    Network(#[from] NetworkError),
    /// A tick took at least as long as the tick length.
    /// The clock does not try to catch up.
    #[error(
        "stopped: deadline exceeded on tick {tick} ({elapsed:?} elapsed, {tick_length:?} allowed)"
    )]
    DeadlineExceeded {
        tick: usize,
        elapsed: Duration,
        tick_length: Duration,
    },
}
