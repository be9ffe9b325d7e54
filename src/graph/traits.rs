use std::fmt::{Debug, Display};
use num_traits::{PrimInt, Signed};
use serde::{Deserialize, Serialize};

/// Edge weight type: any signed primitive integer
pub trait Weight: PrimInt + Signed + Debug + Display + Send + Sync {}

impl<T> Weight for T where T: PrimInt + Signed + Debug + Display + Send + Sync {}

/// A directed, weighted edge `source -> target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Edge<W> {
    pub source: usize,
    pub target: usize,
    pub weight: W,
}

impl<W> Edge<W> {
    pub fn new(source: usize, target: usize, weight: W) -> Self {
        Edge { source, target, weight }
    }
}

impl<W> From<(usize, usize, W)> for Edge<W> {
    fn from((source, target, weight): (usize, usize, W)) -> Self {
        Edge { source, target, weight }
    }
}

/// Trait representing a read-only weighted directed graph
pub trait Graph<W>: Debug
where
    W: Weight,
{
    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph, parallel edges counted separately
    fn edge_count(&self) -> usize;

    /// Returns the outgoing `(target, weight)` pairs of a vertex in insertion order.
    /// Unknown vertices and vertices without outgoing edges yield an empty iterator.
    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_>;

    /// Returns the full edge list in insertion order
    fn edges(&self) -> &[Edge<W>];

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count()
    }

    /// Returns true if there's at least one edge between the two vertices
    fn has_edge(&self, from: usize, to: usize) -> bool {
        self.outgoing_edges(from).any(|(target, _)| target == to)
    }

    /// Gets the smallest weight among the (possibly parallel) edges `from -> to`
    fn min_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges(from)
            .filter(|&(target, _)| target == to)
            .map(|(_, weight)| weight)
            .min()
    }
}
