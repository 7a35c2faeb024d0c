use thiserror::Error;

/// An error type indicating the requested network
/// topology cannot be built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum NetworkError {
    /// The input layer has no hidden layer to connect to.
    #[error("network requires at least one hidden layer, got 0")]
    NoHiddenLayers,
}
