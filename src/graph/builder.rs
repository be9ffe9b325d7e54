use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Edge, Weight};
use crate::Result;

/// Accumulates edges and produces an immutable [`DirectedGraph`]
#[derive(Debug, Clone)]
pub struct GraphBuilder<W>
where
    W: Weight,
{
    /// Declared vertex count; `None` infers it from the edges
    vertex_count: Option<usize>,

    edges: Vec<Edge<W>>,
}

impl<W> Default for GraphBuilder<W>
where
    W: Weight,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> GraphBuilder<W>
where
    W: Weight,
{
    /// Creates a builder that infers the vertex count
    pub fn new() -> Self {
        GraphBuilder {
            vertex_count: None,
            edges: Vec::new(),
        }
    }

    /// Declares the vertex count; `build` then rejects out-of-range endpoints
    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = Some(vertex_count);
        self
    }

    /// Adds a directed edge. Parallel edges and self-loops are kept as-is.
    pub fn add_edge(&mut self, from: usize, to: usize, weight: W) -> &mut Self {
        self.edges.push(Edge::new(from, to, weight));
        self
    }

    /// Adds the pair of directed edges `from -> to` and `to -> from`
    pub fn add_undirected_edge(&mut self, a: usize, b: usize, weight: W) -> &mut Self {
        self.add_edge(a, b, weight);
        self.add_edge(b, a, weight)
    }

    /// Number of edges added so far
    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Builds the graph, validating endpoints when a vertex count was declared
    pub fn build(self) -> Result<DirectedGraph<W>> {
        match self.vertex_count {
            Some(vertex_count) => DirectedGraph::with_vertex_count(vertex_count, self.edges),
            None => Ok(DirectedGraph::from_edges(self.edges)),
        }
    }
}

impl<W> Extend<Edge<W>> for GraphBuilder<W>
where
    W: Weight,
{
    fn extend<T: IntoIterator<Item = Edge<W>>>(&mut self, iter: T) {
        self.edges.extend(iter);
    }
}
