//! # PulseNet
//! Randomly generated layered networks of nodes and weighted edges,
//! meant to be rebuilt and redrawn on a fixed tick.
//!
//! A [`Network`] is built in one shot from a set of [`NetworkDimensions`]:
//! an input layer, one or more hidden layers of equal size, and an output
//! layer, with every pair of consecutive layers fully connected. Edge
//! weights are random, and sparser the more edges a node already has.
//! A single forward pass ([`Network::propagate_signal`]) seeds the input
//! layer with random strengths and pushes the weighted signal forward,
//! recoloring nodes and edges along the way.
//!
//! There is no training and no persistence. Every tick simply throws the
//! old network away.
//!
//! [`Network`]: crate::network::Network
//! [`Network::propagate_signal`]: crate::network::Network::propagate_signal
//! [`NetworkDimensions`]: crate::config::NetworkDimensions
//!
//! # Example usage
//! ```
//! use pulsenet::config::NetworkDimensions;
//! use pulsenet::network::Network;
//! use rand::{rngs::StdRng, SeedableRng};
//!
//! let dimensions = NetworkDimensions {
//!     input_count: 4,
//!     hidden_layer_count: 2,
//!     hidden_layer_size: 6,
//!     output_count: 3,
//! };
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut network = Network::new(dimensions, &mut rng).unwrap();
//! network.propagate_signal(&mut rng);
//!
//! assert_eq!(network.edges().len(), 4 * 6 + 6 * 6 + 6 * 3);
//! for edge in network.edges() {
//!     assert!((-1.0..=1.0).contains(&edge.weight()));
//! }
//! ```

pub mod colors;
pub mod config;
mod errors;
pub mod network;
mod rng;

pub use errors::NetworkError;

/// Index of a node in a network's node arena.
pub type NodeIndex = usize;

/// Index of an edge in a network's edge arena.
pub type EdgeIndex = usize;
