//! Drawing networks onto a [`Surface`].
use crate::layout::Layout;
use crate::surface::Surface;
use crate::View;

use pulsenet::colors::Color;
use pulsenet::network::Network;

use serde::{Deserialize, Serialize};

/// Configuration data for network drawing.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ViewConfig {
    /// Canvas width, in pixels.
    pub width: f32,
    /// Canvas height, in pixels.
    pub height: f32,
    /// Radius nodes are drawn with, in pixels.
    pub node_radius: f32,
}

impl ViewConfig {
    pub const fn new() -> ViewConfig {
        ViewConfig {
            width: 1280.0,
            height: 720.0,
            node_radius: 10.0,
        }
    }
}

impl Default for ViewConfig {
    fn default() -> ViewConfig {
        ViewConfig::new()
    }
}

/// A [`View`] drawing each network it receives onto a surface.
///
/// Every frame starts from a black background. Edges are drawn
/// below nodes, and fully transparent (dead) edges are skipped.
#[derive(Clone, Debug)]
pub struct NetworkView<S> {
    surface: S,
    node_radius: f32,
}

impl<S: Surface> NetworkView<S> {
    pub fn new(surface: S, config: &ViewConfig) -> NetworkView<S> {
        NetworkView {
            surface,
            node_radius: config.node_radius,
        }
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn into_surface(self) -> S {
        self.surface
    }
}

impl<S: Surface> View for NetworkView<S> {
    fn draw(&mut self, network: &Network) {
        let layout = Layout::new(self.surface.size(), network);
        self.surface.clear(Color::BLACK);

        for edge in network.edges().iter().filter(|e| e.color().is_visible()) {
            let (source, destination) = match (
                network.node(edge.source()),
                network.node(edge.destination()),
            ) {
                (Some(s), Some(d)) => (s, d),
                _ => continue,
            };
            self.surface.line(
                layout.position(source),
                layout.position(destination),
                edge.color(),
                edge.width(),
            );
        }

        for node in network.nodes() {
            self.surface
                .circle(layout.position(node), self.node_radius, node.color());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::surface::Point;
    use pulsenet::config::NetworkDimensions;
    use rand::{rngs::StdRng, SeedableRng};

    /// Records every call made to it.
    #[derive(Default)]
    struct RecordingSurface {
        clears: Vec<Color>,
        lines: Vec<(Point, Point, Color, f32)>,
        circles: Vec<(Point, f32, Color)>,
    }

    impl Surface for RecordingSurface {
        fn size(&self) -> (f32, f32) {
            (300.0, 200.0)
        }

        fn clear(&mut self, color: Color) {
            self.clears.push(color);
            self.lines.clear();
            self.circles.clear();
        }

        fn line(&mut self, from: Point, to: Point, color: Color, width: f32) {
            self.lines.push((from, to, color, width));
        }

        fn circle(&mut self, center: Point, radius: f32, color: Color) {
            self.circles.push((center, radius, color));
        }
    }

    fn network(seed: u64) -> Network {
        let dimensions = NetworkDimensions {
            input_count: 4,
            hidden_layer_count: 2,
            hidden_layer_size: 5,
            output_count: 3,
        };
        let mut rng = StdRng::seed_from_u64(seed);
        let mut network = Network::new(dimensions, &mut rng).unwrap();
        network.propagate_signal(&mut rng);
        network
    }

    #[test]
    fn draws_every_node_and_live_edge() {
        let network = network(0);
        let mut view = NetworkView::new(RecordingSurface::default(), &ViewConfig::new());
        view.draw(&network);

        let surface = view.surface();
        assert_eq!(surface.clears, vec![Color::BLACK]);
        assert_eq!(surface.circles.len(), network.nodes().len());
        assert_eq!(
            surface.lines.len(),
            network.edges().iter().filter(|e| e.color().is_visible()).count()
        );
        assert!(surface.circles.iter().all(|(_, r, _)| *r == 10.0));
        for (node, (_, _, color)) in network.nodes().iter().zip(&surface.circles) {
            assert_eq!(node.color(), *color);
        }
    }

    #[test]
    fn lines_connect_node_positions() {
        let network = network(1);
        let mut view = NetworkView::new(RecordingSurface::default(), &ViewConfig::new());
        view.draw(&network);

        let layout = Layout::new((300.0, 200.0), &network);
        let live = network.edges().iter().filter(|e| e.color().is_visible());
        for (edge, (from, to, color, width)) in live.zip(&view.surface().lines) {
            assert_eq!(*from, layout.position(&network.nodes()[edge.source()]));
            assert_eq!(*to, layout.position(&network.nodes()[edge.destination()]));
            assert_eq!(*color, edge.color());
            assert_eq!(*width, edge.width());
        }
    }

    #[test]
    fn redraw_replaces_frame() {
        let mut view = NetworkView::new(RecordingSurface::default(), &ViewConfig::new());
        let (first, second) = (network(2), network(3));
        view.draw(&first);
        view.draw(&second);
        let surface = view.into_surface();
        assert_eq!(surface.clears.len(), 2);
        assert_eq!(surface.circles.len(), second.nodes().len());
    }

    #[test]
    fn config_deserialize() {
        let config: ViewConfig =
            serde_json::from_str(r#"{"width":640.0,"height":480.0,"node_radius":6.0}"#).unwrap();
        assert_eq!(
            config,
            ViewConfig {
                width: 640.0,
                height: 480.0,
                node_radius: 6.0,
            }
        );
    }
}
