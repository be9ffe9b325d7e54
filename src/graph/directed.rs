use crate::graph::traits::{Edge, Graph, Weight};
use crate::{Error, Result};

/// An immutable directed graph: the edge list plus an adjacency projection of it
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Weight,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Edges in the order they were supplied
    edges: Vec<Edge<W>>,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    adjacency: Vec<Vec<(usize, W)>>,
}

impl<W> DirectedGraph<W>
where
    W: Weight,
{
    /// Creates a graph from edges, inferring the vertex count as max endpoint + 1
    pub fn from_edges<I>(edges: I) -> Self
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();
        let vertex_count = edges
            .iter()
            .map(|edge| edge.source.max(edge.target) + 1)
            .max()
            .unwrap_or(0);

        Self::assemble(vertex_count, edges)
    }

    /// Creates a graph with an explicit vertex count.
    ///
    /// Fails with [`Error::InvalidVertex`] if any endpoint is `>= vertex_count`.
    pub fn with_vertex_count<I>(vertex_count: usize, edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = Edge<W>>,
    {
        let edges: Vec<Edge<W>> = edges.into_iter().collect();

        for edge in &edges {
            for vertex in [edge.source, edge.target] {
                if vertex >= vertex_count {
                    return Err(Error::InvalidVertex { vertex, vertex_count });
                }
            }
        }

        Ok(Self::assemble(vertex_count, edges))
    }

    /// Creates a graph from `(source, target, weight)` triples, inferring the vertex count
    pub fn from_triples<I>(triples: I) -> Self
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        Self::from_edges(triples.into_iter().map(Edge::from))
    }

    /// Creates a graph from `(source, target, weight)` triples with an explicit vertex count
    pub fn from_triples_with_vertex_count<I>(vertex_count: usize, triples: I) -> Result<Self>
    where
        I: IntoIterator<Item = (usize, usize, W)>,
    {
        Self::with_vertex_count(vertex_count, triples.into_iter().map(Edge::from))
    }

    fn assemble(vertex_count: usize, edges: Vec<Edge<W>>) -> Self {
        let mut adjacency = vec![Vec::new(); vertex_count];
        for edge in &edges {
            adjacency[edge.source].push((edge.target, edge.weight));
        }

        DirectedGraph {
            vertex_count,
            edges,
            adjacency,
        }
    }

    /// Validate that the graph doesn't have negative weights
    pub fn validate_non_negative(&self) -> bool {
        self.first_negative_edge().is_none()
    }

    /// Returns the first edge (in edge-list order) carrying a negative weight
    pub fn first_negative_edge(&self) -> Option<&Edge<W>> {
        self.edges.iter().find(|edge| edge.weight < W::zero())
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Weight,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.edges.len()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.adjacency.get(vertex) {
            Box::new(edges.iter().copied())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn edges(&self) -> &[Edge<W>] {
        &self.edges
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn infers_vertex_count_from_max_endpoint() {
        let graph = DirectedGraph::<i64>::from_triples([(0, 4, 1), (2, 1, 3)]);
        assert_eq!(graph.vertex_count(), 5);
        assert_eq!(graph.edge_count(), 2);
    }

    #[test]
    fn empty_edge_list_has_no_vertices() {
        let graph: DirectedGraph<i64> = DirectedGraph::from_edges(Vec::<Edge<i64>>::new());
        assert_eq!(graph.vertex_count(), 0);
        assert_eq!(graph.outgoing_edges(0).count(), 0);
    }

    #[test]
    fn explicit_vertex_count_rejects_out_of_range_endpoint() {
        let err = DirectedGraph::<i64>::from_triples_with_vertex_count(3, [(0, 1, 1), (1, 3, 2)]).unwrap_err();
        match err {
            Error::InvalidVertex { vertex, vertex_count } => {
                assert_eq!(vertex, 3);
                assert_eq!(vertex_count, 3);
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn explicit_vertex_count_allows_isolated_vertices() {
        let graph = DirectedGraph::<i64>::with_vertex_count(10, [Edge::new(0, 1, 5)]).unwrap();
        assert_eq!(graph.vertex_count(), 10);
        assert!(graph.has_vertex(9));
        assert!(!graph.has_vertex(10));
        assert_eq!(graph.outgoing_edges(9).count(), 0);
    }

    #[test]
    fn adjacency_preserves_insertion_order_and_parallel_edges() {
        let graph = DirectedGraph::<i64>::from_triples([(0, 2, 7), (0, 1, 1), (0, 2, 3), (1, 1, 0)]);

        let out: Vec<_> = graph.outgoing_edges(0).collect();
        assert_eq!(out, vec![(2, 7), (1, 1), (2, 3)]);
        assert_eq!(graph.min_edge_weight(0, 2), Some(3));
        assert!(graph.has_edge(1, 1));
        assert!(!graph.has_edge(2, 0));
        assert_eq!(graph.min_edge_weight(2, 0), None);
    }

    #[test]
    fn detects_negative_weights() {
        let graph = DirectedGraph::<i64>::from_triples([(0, 1, 2), (1, 2, -1)]);
        assert!(!graph.validate_non_negative());
        assert_eq!(graph.first_negative_edge(), Some(&Edge::new(1, 2, -1)));

        let graph = DirectedGraph::<i64>::from_triples([(0, 1, 0)]);
        assert!(graph.validate_non_negative());
    }
}
