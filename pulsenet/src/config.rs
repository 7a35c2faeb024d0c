//! Network shape configuration.
use crate::NetworkError;

use serde::{Deserialize, Serialize};

/// The shape of a layered network: one input layer,
/// `hidden_layer_count` hidden layers of `hidden_layer_size`
/// nodes each, and one output layer.
///
/// Dimensions are fixed for the lifetime of a network; a rebuilt
/// network always reuses the dimensions of the one it replaces.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkDimensions {
    /// Number of nodes in the input layer.
    pub input_count: usize,
    /// Number of hidden layers. Must be at least 1.
    pub hidden_layer_count: usize,
    /// Number of nodes in each hidden layer.
    pub hidden_layer_size: usize,
    /// Number of nodes in the output layer.
    pub output_count: usize,
}

impl NetworkDimensions {
    /// Returns "zero-valued" dimensions, save for a single
    /// hidden layer so that the result is buildable.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::config::NetworkDimensions;
    ///
    /// let dimensions = NetworkDimensions {
    ///     input_count: 3,
    ///     output_count: 2,
    ///     ..NetworkDimensions::zero()
    /// };
    /// assert!(dimensions.validate().is_ok());
    /// ```
    pub const fn zero() -> NetworkDimensions {
        NetworkDimensions {
            input_count: 0,
            hidden_layer_count: 1,
            hidden_layer_size: 0,
            output_count: 0,
        }
    }

    /// Checks that a network with these dimensions can be built.
    ///
    /// # Errors
    /// Returns [`NetworkError::NoHiddenLayers`] if
    /// `hidden_layer_count` is 0, since the input layer would
    /// then have nothing to connect to.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::{config::NetworkDimensions, NetworkError};
    ///
    /// let dimensions = NetworkDimensions {
    ///     hidden_layer_count: 0,
    ///     ..NetworkDimensions::zero()
    /// };
    /// assert_eq!(dimensions.validate(), Err(NetworkError::NoHiddenLayers));
    /// ```
    pub fn validate(&self) -> Result<(), NetworkError> {
        if self.hidden_layer_count == 0 {
            return Err(NetworkError::NoHiddenLayers);
        }
        Ok(())
    }

    /// Total number of layers, input and output included.
    pub fn layer_count(&self) -> usize {
        self.hidden_layer_count + 2
    }

    /// Size of the layer at `layer`, or `None` past the output layer.
    pub fn layer_size(&self, layer: usize) -> Option<usize> {
        match layer {
            0 => Some(self.input_count),
            l if l <= self.hidden_layer_count => Some(self.hidden_layer_size),
            l if l == self.hidden_layer_count + 1 => Some(self.output_count),
            _ => None,
        }
    }

    /// Total number of nodes across all layers.
    pub fn node_count(&self) -> usize {
        self.input_count + self.hidden_layer_count * self.hidden_layer_size + self.output_count
    }

    /// Number of edges in a fully built network: the sum of the
    /// full bipartite products of every pair of consecutive layers.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::config::NetworkDimensions;
    ///
    /// let dimensions = NetworkDimensions {
    ///     input_count: 2,
    ///     hidden_layer_count: 3,
    ///     hidden_layer_size: 4,
    ///     output_count: 5,
    /// };
    /// assert_eq!(dimensions.edge_count(), 2 * 4 + 2 * (4 * 4) + 4 * 5);
    /// ```
    pub fn edge_count(&self) -> usize {
        (1..self.layer_count())
            .filter_map(|l| Some(self.layer_size(l - 1)? * self.layer_size(l)?))
            .sum()
    }
}
