//! # PulseNet-View
//! Animation and drawing for [`pulsenet`] networks.
//!
//! A [`Clock`] rebuilds a network from fixed dimensions on every tick,
//! runs one forward pass on it, and hands the result to a [`View`]. The
//! provided [`NetworkView`] lays the network out on any [`Surface`] and
//! draws it: edges first, then nodes, on a black background.
//! [`SvgSurface`] is a surface that records each frame as an SVG document.
//!
//! [`Clock`]: crate::clock::Clock
//! [`NetworkView`]: crate::view::NetworkView
//! [`Surface`]: crate::surface::Surface
//! [`SvgSurface`]: crate::surface::SvgSurface
//!
//! # Example usage: three frames rendered to SVG
//! ```
//! use pulsenet::config::NetworkDimensions;
//! use pulsenet_view::{
//!     clock::{Clock, ClockConfig},
//!     surface::SvgSurface,
//!     view::{NetworkView, ViewConfig},
//! };
//! use rand::{rngs::StdRng, SeedableRng};
//! use std::time::Duration;
//!
//! let dimensions = NetworkDimensions {
//!     input_count: 4,
//!     hidden_layer_count: 2,
//!     hidden_layer_size: 5,
//!     output_count: 2,
//! };
//! let view_config = ViewConfig::default();
//! let view = NetworkView::new(
//!     SvgSurface::new(view_config.width, view_config.height),
//!     &view_config,
//! );
//! let clock_config = ClockConfig {
//!     tick_length: Duration::from_millis(50),
//! };
//!
//! let mut clock = Clock::new(dimensions, clock_config, view).unwrap();
//! let mut rng = StdRng::seed_from_u64(0);
//! for _ in 0..3 {
//!     clock.tick(&mut rng).unwrap();
//! }
//! assert_eq!(clock.ticks(), 3);
//! assert!(clock.view().surface().finish().starts_with("<svg"));
//! ```

pub mod clock;
mod errors;
pub mod layout;
pub mod surface;
pub mod view;

pub use errors::ClockError;

use pulsenet::network::Network;

/// Something that presents a freshly built network.
///
/// Views only ever see finished snapshots: the network
/// passed to [`draw`](View::draw) is never modified afterwards.
pub trait View {
    fn draw(&mut self, network: &Network);
}

impl<F> View for F
where
    F: FnMut(&Network),
{
    fn draw(&mut self, network: &Network) {
        self(network)
    }
}
