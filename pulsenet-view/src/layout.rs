//! Placement of network nodes on a surface.
use crate::surface::Point;

use pulsenet::network::{Network, Node};

/// Maps nodes to pixel positions.
///
/// Layers are spread evenly from left to right, and the nodes of
/// each layer evenly from top to bottom, leaving a margin of one
/// step on every side.
#[derive(Clone, Debug)]
pub struct Layout {
    width: f32,
    height: f32,
    layer_sizes: Vec<usize>,
}

impl Layout {
    /// Computes the layout of `network` on a surface of `size`.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::config::NetworkDimensions;
    /// use pulsenet::network::Network;
    /// use pulsenet_view::{layout::Layout, surface::Point};
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let dimensions = NetworkDimensions {
    ///     input_count: 1,
    ///     hidden_layer_count: 1,
    ///     hidden_layer_size: 3,
    ///     output_count: 1,
    /// };
    /// let network = Network::new(dimensions, &mut StdRng::seed_from_u64(0)).unwrap();
    /// let layout = Layout::new((400.0, 400.0), &network);
    ///
    /// // The single input node sits centered in the first column.
    /// assert_eq!(layout.position(&network.input_layer()[0]), Point::new(100.0, 200.0));
    /// ```
    pub fn new(size: (f32, f32), network: &Network) -> Layout {
        Layout {
            width: size.0,
            height: size.1,
            layer_sizes: network.layers().map(|l| l.len()).collect(),
        }
    }

    /// Returns the pixel position of `node`.
    ///
    /// Nodes of a layer the layout doesn't know about
    /// are placed as if their layer held only them.
    pub fn position(&self, node: &Node) -> Point {
        let layer_size = self.layer_sizes.get(node.layer()).copied().unwrap_or(1);
        Point::new(
            spread(node.layer(), self.layer_sizes.len(), self.width),
            spread(node.index_in_layer(), layer_size, self.height),
        )
    }
}

/// Position of item `index` out of `count` evenly spaced along `length`.
fn spread(index: usize, count: usize, length: f32) -> f32 {
    (index + 1) as f32 * length / (count + 1) as f32
}

#[cfg(test)]
mod tests {
    use super::*;
    use pulsenet::config::NetworkDimensions;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn spread_even() {
        assert_eq!(spread(0, 3, 400.0), 100.0);
        assert_eq!(spread(1, 3, 400.0), 200.0);
        assert_eq!(spread(2, 3, 400.0), 300.0);
    }

    #[test]
    fn positions_inside_surface() {
        let dimensions = NetworkDimensions {
            input_count: 5,
            hidden_layer_count: 3,
            hidden_layer_size: 7,
            output_count: 2,
        };
        let network = Network::new(dimensions, &mut StdRng::seed_from_u64(0)).unwrap();
        let layout = Layout::new((800.0, 600.0), &network);
        for node in network.nodes() {
            let p = layout.position(node);
            assert!(p.x > 0.0 && p.x < 800.0);
            assert!(p.y > 0.0 && p.y < 600.0);
        }
    }

    #[test]
    fn layers_are_columns() {
        let dimensions = NetworkDimensions {
            input_count: 3,
            hidden_layer_count: 2,
            hidden_layer_size: 4,
            output_count: 3,
        };
        let network = Network::new(dimensions, &mut StdRng::seed_from_u64(0)).unwrap();
        let layout = Layout::new((500.0, 500.0), &network);
        for (l, layer) in network.layers().enumerate() {
            let x = spread(l, 4, 500.0);
            let mut previous_y = 0.0;
            for node in layer {
                let p = layout.position(node);
                assert_eq!(p.x, x);
                assert!(p.y > previous_y);
                previous_y = p.y;
            }
        }
    }
}
