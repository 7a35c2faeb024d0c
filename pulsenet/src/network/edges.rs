use crate::colors::Color;
use crate::rng::{roll, uniform};
use crate::NodeIndex;

use rand::Rng;

use std::fmt;

/// Lower bound of an edge weight.
pub const MIN_WEIGHT: f32 = -1.0;
/// Upper bound of an edge weight.
pub const MAX_WEIGHT: f32 = 1.0;
/// Chance that the first edge leaving a node gets a nonzero weight.
pub const CHANCE_TO_GET_WEIGHT: f32 = 0.8;
/// Divisor scaling down the weight chance of every further edge.
pub const WEIGHT_CHANCE_MODIFIER: f32 = 4.0;
/// Stroke width edges are drawn with.
pub const EDGE_WIDTH: f32 = 2.0;

/// A directed, weighted connection between a node
/// and a node of the next layer.
///
/// The weight is fixed at creation; only the display
/// color follows the source node's strength.
#[derive(Clone, Debug, PartialEq)]
pub struct Edge {
    source: NodeIndex,
    destination: NodeIndex,
    weight: f32,
    color: Color,
    width: f32,
}

impl Edge {
    /// Creates a new edge with a random weight.
    ///
    /// `source_edge_count` is the number of edges already
    /// leaving `source`: the more there are, the likelier
    /// this one is to be left dead with a zero weight.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::network::Edge;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(3);
    /// let edge = Edge::new(0, 1, 0, 0.0, &mut rng);
    /// assert!((-1.0..=1.0).contains(&edge.weight()));
    /// ```
    pub fn new<R: Rng + ?Sized>(
        source: NodeIndex,
        destination: NodeIndex,
        source_edge_count: usize,
        source_strength: f32,
        rng: &mut R,
    ) -> Edge {
        let weight = if roll(rng, Self::weight_chance(source_edge_count)) {
            Self::random_weight(rng)
        } else {
            0.0
        };
        Self::with_weight(source, destination, weight, source_strength)
    }

    /// Creates an edge with a known weight, clamped
    /// into `[MIN_WEIGHT, MAX_WEIGHT]`. A NaN weight
    /// gives a dead edge.
    pub fn with_weight(
        source: NodeIndex,
        destination: NodeIndex,
        weight: f32,
        source_strength: f32,
    ) -> Edge {
        let weight = if weight.is_nan() {
            0.0
        } else {
            weight.clamp(MIN_WEIGHT, MAX_WEIGHT)
        };
        Edge {
            source,
            destination,
            weight,
            color: Color::for_edge(weight, source_strength),
            width: EDGE_WIDTH,
        }
    }

    /// Chance of an edge getting a nonzero weight when its
    /// source already has `source_edge_count` outgoing edges.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::network::Edge;
    ///
    /// assert_eq!(Edge::weight_chance(0), 0.8);
    /// assert_eq!(Edge::weight_chance(1), 0.25);
    /// assert_eq!(Edge::weight_chance(5), 0.05);
    /// ```
    pub fn weight_chance(source_edge_count: usize) -> f32 {
        match source_edge_count {
            0 => CHANCE_TO_GET_WEIGHT,
            n => 1.0 / (WEIGHT_CHANCE_MODIFIER * n as f32),
        }
    }

    /// A uniformly distributed weight in `[MIN_WEIGHT, MAX_WEIGHT)`.
    pub fn random_weight<R: Rng + ?Sized>(rng: &mut R) -> f32 {
        uniform(rng, MIN_WEIGHT, MAX_WEIGHT)
    }

    pub fn source(&self) -> NodeIndex {
        self.source
    }

    pub fn destination(&self) -> NodeIndex {
        self.destination
    }

    pub fn weight(&self) -> f32 {
        self.weight
    }

    /// Whether the edge carries any signal at all.
    pub fn is_dead(&self) -> bool {
        self.weight == 0.0
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn width(&self) -> f32 {
        self.width
    }

    /// Recomputes the display color from the weight
    /// and the source node's current strength.
    pub fn update_color(&mut self, source_strength: f32) {
        self.color = Color::for_edge(self.weight, source_strength);
    }
}

impl fmt::Display for Edge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({:.9})",
            self.source, self.destination, self.weight
        )
    }
}
