use crate::colors::Color;
use crate::EdgeIndex;

use serde::{Deserialize, Serialize};

use std::fmt;
use std::ops::Range;

/// A NodeType indicates which layer
/// group a node belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum NodeType {
    Input,
    Hidden,
    Output,
}

/// A single unit of a layered network.
///
/// Nodes know their place in the layout (`layer`, `index_in_layer`)
/// and the edges leaving them, which always point into the
/// next layer.
#[derive(Clone, Debug, PartialEq)]
pub struct Node {
    layer: usize,
    index_in_layer: usize,
    node_type: NodeType,
    strength: f32,
    input_signal: f32,
    // Edges are created source-by-source, so a node's
    // outgoing edges are contiguous in the edge arena.
    outgoing: Range<EdgeIndex>,
    color: Color,
}

impl Node {
    /// Creates an inactive node with no outgoing edges.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::network::{Node, NodeType};
    ///
    /// let node = Node::new(1, 4, NodeType::Hidden);
    /// assert_eq!(node.layer(), 1);
    /// assert_eq!(node.index_in_layer(), 4);
    /// assert_eq!(node.strength(), 0.0);
    /// assert_eq!(node.outgoing().count(), 0);
    /// ```
    pub fn new(layer: usize, index_in_layer: usize, node_type: NodeType) -> Node {
        Node {
            layer,
            index_in_layer,
            node_type,
            strength: 0.0,
            input_signal: 0.0,
            outgoing: 0..0,
            color: Color::for_node(0.0),
        }
    }

    /// Index of the node's layer; 0 is the input layer.
    pub fn layer(&self) -> usize {
        self.layer
    }

    /// Position of the node within its layer.
    pub fn index_in_layer(&self) -> usize {
        self.index_in_layer
    }

    pub fn node_type(&self) -> NodeType {
        self.node_type
    }

    /// The node's current activation value.
    pub fn strength(&self) -> f32 {
        self.strength
    }

    /// The weighted signal accumulated since the last reset.
    pub fn input_signal(&self) -> f32 {
        self.input_signal
    }

    pub fn color(&self) -> Color {
        self.color
    }

    /// Returns the indices of the node's outgoing edges,
    /// in creation order.
    pub fn outgoing(&self) -> impl Iterator<Item = EdgeIndex> {
        self.outgoing.clone()
    }

    /// Number of edges leaving the node.
    pub fn outgoing_count(&self) -> usize {
        self.outgoing.len()
    }

    pub(super) fn outgoing_range(&self) -> Range<EdgeIndex> {
        self.outgoing.clone()
    }

    /// Registers `edge` as the node's next outgoing edge.
    ///
    /// # Panics
    /// Panics if `edge` does not directly follow the node's
    /// previous outgoing edge.
    pub(super) fn push_outgoing(&mut self, edge: EdgeIndex) {
        if self.outgoing.is_empty() {
            self.outgoing = edge..edge + 1;
        } else if self.outgoing.end == edge {
            self.outgoing.end += 1;
        } else {
            panic!(
                "outgoing edge {} is not contiguous with {:?}",
                edge, self.outgoing
            )
        }
    }

    pub(super) fn set_strength(&mut self, strength: f32) {
        self.strength = strength;
    }

    pub(super) fn add_to_input_signal(&mut self, signal: f32) {
        self.input_signal += signal;
    }

    /// Clears both the activation and the accumulated signal.
    pub(super) fn reset(&mut self) {
        self.strength = 0.0;
        self.input_signal = 0.0;
    }

    /// Converts the accumulated signal into strength.
    ///
    /// Activation is a plain pass-through of the signal.
    pub(super) fn apply_activation(&mut self) {
        self.strength = self.input_signal;
    }

    pub(super) fn update_color(&mut self) {
        self.color = Color::for_node(self.strength);
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:?}[{}:{}, strength: {:.3}, signal: {:.3}, OUT: {:?}]",
            self.node_type,
            self.layer,
            self.index_in_layer,
            self.strength,
            self.input_signal,
            self.outgoing,
        )
    }
}
