//! A Network is a layered, fully connected graph of
//! nodes and randomly weighted edges, built in one shot.
//!
//! Nodes and edges live in flat arenas and refer to each
//! other by index. Nodes are stored layer by layer, and edges
//! layer by layer then source by source, so both a layer and
//! the edges leaving a node are contiguous index ranges.
//!
//! The topology never changes once built. A forward pass
//! ([`Network::propagate_signal`]) only rewrites node strengths,
//! accumulated signals and display colors.
mod edges;
mod nodes;

pub use edges::{
    Edge, CHANCE_TO_GET_WEIGHT, EDGE_WIDTH, MAX_WEIGHT, MIN_WEIGHT, WEIGHT_CHANCE_MODIFIER,
};
pub use nodes::{Node, NodeType};

use crate::config::NetworkDimensions;
use crate::rng::roll;
use crate::{EdgeIndex, NetworkError, NodeIndex};

use rand::prelude::{Rng, SliceRandom};
use tracing::debug;

use std::fmt;
use std::ops::Range;

/// Chance that an input node is left inactive during a pass.
pub const INACTIVE_INPUT_CHANCE: f32 = 0.5;

/// A layered network with one input layer, one or more
/// hidden layers and one output layer.
#[derive(Clone, Debug)]
pub struct Network {
    dimensions: NetworkDimensions,
    nodes: Vec<Node>,
    layers: Vec<Range<NodeIndex>>,
    edges: Vec<Edge>,
}

impl Network {
    /// Builds a new network with the given dimensions
    /// and random edge weights.
    ///
    /// Every node is connected to every node of the next layer.
    /// The destinations of each source node are visited in a
    /// fresh random order, which decides which edges are likely
    /// to stay dead (see [`Edge::weight_chance`]).
    ///
    /// # Errors
    /// Returns [`NetworkError::NoHiddenLayers`] if the dimensions
    /// have no hidden layer. Nothing is built in that case.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::config::NetworkDimensions;
    /// use pulsenet::network::Network;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let dimensions = NetworkDimensions {
    ///     input_count: 3,
    ///     hidden_layer_count: 1,
    ///     hidden_layer_size: 4,
    ///     output_count: 2,
    /// };
    /// let network = Network::new(dimensions, &mut StdRng::seed_from_u64(0)).unwrap();
    ///
    /// assert_eq!(network.layer_count(), 3);
    /// assert_eq!(network.edges().len(), 3 * 4 + 4 * 2);
    /// ```
    pub fn new<R: Rng + ?Sized>(
        dimensions: NetworkDimensions,
        rng: &mut R,
    ) -> Result<Network, NetworkError> {
        dimensions.validate()?;
        Ok(Self::build(dimensions, rng))
    }

    /// Builds a new network using the thread-local generator.
    ///
    /// # Errors
    /// See [`Network::new`].
    pub fn with_thread_rng(dimensions: NetworkDimensions) -> Result<Network, NetworkError> {
        Self::new(dimensions, &mut rand::thread_rng())
    }

    /// Builds a brand-new network with the same dimensions as
    /// this one. The old network is left untouched.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::config::NetworkDimensions;
    /// use pulsenet::network::Network;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(0);
    /// let dimensions = NetworkDimensions {
    ///     input_count: 2,
    ///     hidden_layer_count: 2,
    ///     hidden_layer_size: 2,
    ///     output_count: 2,
    /// };
    /// let network = Network::new(dimensions, &mut rng).unwrap();
    /// let next = network.rebuild(&mut rng);
    /// assert_eq!(next.dimensions(), network.dimensions());
    /// ```
    pub fn rebuild<R: Rng + ?Sized>(&self, rng: &mut R) -> Network {
        // Dimensions were validated when `self` was built.
        Self::build(self.dimensions, rng)
    }

    fn build<R: Rng + ?Sized>(dimensions: NetworkDimensions, rng: &mut R) -> Network {
        let mut network = Network {
            dimensions,
            nodes: Vec::with_capacity(dimensions.node_count()),
            layers: Vec::with_capacity(dimensions.layer_count()),
            edges: Vec::with_capacity(dimensions.edge_count()),
        };

        network.create_layer(dimensions.input_count, NodeType::Input);
        for _ in 0..dimensions.hidden_layer_count {
            network.create_layer(dimensions.hidden_layer_size, NodeType::Hidden);
        }
        network.create_layer(dimensions.output_count, NodeType::Output);

        for destination_layer in 1..network.layers.len() {
            network.create_edges(destination_layer - 1, destination_layer, rng);
        }

        debug!(
            nodes = network.nodes.len(),
            edges = network.edges.len(),
            layers = network.layers.len(),
            "built network"
        );
        network
    }

    fn create_layer(&mut self, size: usize, node_type: NodeType) {
        let layer = self.layers.len();
        let start = self.nodes.len();
        self.nodes
            .extend((0..size).map(|i| Node::new(layer, i, node_type)));
        self.layers.push(start..self.nodes.len());
    }

    /// Fully connects `source_layer` to `destination_layer`.
    fn create_edges<R: Rng + ?Sized>(
        &mut self,
        source_layer: usize,
        destination_layer: usize,
        rng: &mut R,
    ) {
        let mut destinations: Vec<NodeIndex> = self.layers[destination_layer].clone().collect();
        for source in self.layers[source_layer].clone() {
            destinations.shuffle(rng);
            for &destination in &destinations {
                let source_node = &self.nodes[source];
                let edge = Edge::new(
                    source,
                    destination,
                    source_node.outgoing_count(),
                    source_node.strength(),
                    rng,
                );
                let index = self.edges.len();
                self.edges.push(edge);
                self.nodes[source].push_outgoing(index);
            }
        }
    }

    /// Runs a single forward pass through the network.
    ///
    /// 1. Each input node is switched off with a 50% chance,
    ///    or otherwise given a random strength in `[0, 1)`. All
    ///    other nodes are reset.
    /// 2. Active input nodes push `weight × strength` through their
    ///    live edges. Hidden layers then activate in order, each
    ///    node forwarding its own signal if its strength is positive.
    /// 3. All hidden and output nodes activate once more, so
    ///    that output nodes pick up their accumulated signal.
    ///
    /// Colors of every touched node and edge are refreshed.
    ///
    /// # Examples
    /// ```
    /// use pulsenet::config::NetworkDimensions;
    /// use pulsenet::network::Network;
    /// use rand::{rngs::StdRng, SeedableRng};
    ///
    /// let mut rng = StdRng::seed_from_u64(21);
    /// let dimensions = NetworkDimensions {
    ///     input_count: 5,
    ///     hidden_layer_count: 2,
    ///     hidden_layer_size: 5,
    ///     output_count: 3,
    /// };
    /// let mut network = Network::new(dimensions, &mut rng).unwrap();
    /// network.propagate_signal(&mut rng);
    ///
    /// for node in network.input_layer() {
    ///     assert!((0.0..1.0).contains(&node.strength()));
    /// }
    /// ```
    pub fn propagate_signal<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.init_stage(rng);
        self.propagate_stage();
        self.update_stage();
    }

    /// Runs a forward pass using the thread-local generator.
    pub fn propagate_signal_with_thread_rng(&mut self) {
        self.propagate_signal(&mut rand::thread_rng());
    }

    fn init_stage<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let inputs = self.layers[0].clone();
        for node in inputs.clone() {
            let strength = if roll(rng, INACTIVE_INPUT_CHANCE) {
                0.0
            } else {
                rng.gen::<f32>()
            };
            self.nodes[node].set_strength(strength);
            self.refresh_colors(node);
        }
        for node in &mut self.nodes[inputs.end..] {
            node.reset();
        }
    }

    fn propagate_stage(&mut self) {
        for node in self.layers[0].clone() {
            self.fire(node);
        }
        for layer in 1..=self.dimensions.hidden_layer_count {
            for node in self.layers[layer].clone() {
                self.activate(node);
                self.fire(node);
            }
        }
    }

    fn update_stage(&mut self) {
        for node in self.layers[0].end..self.nodes.len() {
            self.activate(node);
        }
    }

    fn activate(&mut self, node: NodeIndex) {
        self.nodes[node].apply_activation();
        self.refresh_colors(node);
    }

    /// Sends the node's strength through each of its live edges,
    /// if the node is active.
    fn fire(&mut self, node: NodeIndex) {
        let strength = self.nodes[node].strength();
        if strength <= 0.0 {
            return;
        }
        let outgoing = self.nodes[node].outgoing_range();
        for edge in self.edges[outgoing].iter().filter(|e| !e.is_dead()) {
            self.nodes[edge.destination()].add_to_input_signal(edge.weight() * strength);
        }
    }

    /// Recolors a node and every edge leaving it
    /// from the node's current strength.
    ///
    /// # Panics
    /// Panics if `node >= self.nodes().len()`.
    pub fn refresh_colors(&mut self, node: NodeIndex) {
        let source = &mut self.nodes[node];
        source.update_color();
        let (strength, outgoing) = (source.strength(), source.outgoing_range());
        for edge in &mut self.edges[outgoing] {
            edge.update_color(strength);
        }
    }

    pub fn dimensions(&self) -> NetworkDimensions {
        self.dimensions
    }

    pub fn input_count(&self) -> usize {
        self.dimensions.input_count
    }

    pub fn hidden_layer_count(&self) -> usize {
        self.dimensions.hidden_layer_count
    }

    pub fn hidden_layer_size(&self) -> usize {
        self.dimensions.hidden_layer_size
    }

    pub fn output_count(&self) -> usize {
        self.dimensions.output_count
    }

    /// Total number of layers, input and output included.
    pub fn layer_count(&self) -> usize {
        self.layers.len()
    }

    /// Returns the nodes of layer `layer`.
    ///
    /// # Panics
    /// Panics if `layer >= self.layer_count()`.
    pub fn layer(&self, layer: usize) -> &[Node] {
        &self.nodes[self.layers[layer].clone()]
    }

    /// Returns the arena indices of the nodes in layer `layer`.
    ///
    /// # Panics
    /// Panics if `layer >= self.layer_count()`.
    pub fn layer_indices(&self, layer: usize) -> Range<NodeIndex> {
        self.layers[layer].clone()
    }

    /// Returns an iterator over all layers, input layer first.
    pub fn layers(&self) -> impl Iterator<Item = &[Node]> {
        self.layers.iter().map(move |l| &self.nodes[l.clone()])
    }

    pub fn input_layer(&self) -> &[Node] {
        self.layer(0)
    }

    /// Returns an iterator over the hidden layers, in order.
    pub fn hidden_layers(&self) -> impl Iterator<Item = &[Node]> {
        self.layers().skip(1).take(self.dimensions.hidden_layer_count)
    }

    pub fn output_layer(&self) -> &[Node] {
        self.layer(self.layers.len() - 1)
    }

    /// All nodes, stored layer by layer.
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn node(&self, index: NodeIndex) -> Option<&Node> {
        self.nodes.get(index)
    }

    /// All edges, in creation order.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn edge(&self, index: EdgeIndex) -> Option<&Edge> {
        self.edges.get(index)
    }

    /// Returns the edges leaving `node`, or nothing if
    /// there is no such node.
    pub fn outgoing_edges(&self, node: NodeIndex) -> &[Edge] {
        match self.nodes.get(node) {
            Some(n) => &self.edges[n.outgoing_range()],
            None => &[],
        }
    }

    /// Returns an iterator over the edges arriving at `node`.
    pub fn incoming_edges(&self, node: NodeIndex) -> impl Iterator<Item = &Edge> {
        self.edges.iter().filter(move |e| e.destination() == node)
    }
}

impl fmt::Display for Network {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Network [{} layers, {} nodes, {} edges]",
            self.layers.len(),
            self.nodes.len(),
            self.edges.len()
        )?;
        for node in &self.nodes {
            writeln!(f, "\t{}", node)?;
        }
        Ok(())
    }
}
