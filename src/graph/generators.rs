use crate::graph::{DirectedGraph, Edge, GraphBuilder};
use crate::Result;
use rand::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Parameters for a synthetic random dataset
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatasetSpec {
    pub name: String,
    pub vertices: usize,
    pub edges: usize,
    pub min_weight: i64,
    pub max_weight: i64,
}

impl DatasetSpec {
    pub fn new(name: &str, vertices: usize, edges: usize) -> Self {
        DatasetSpec {
            name: name.to_string(),
            vertices,
            edges,
            min_weight: 1,
            max_weight: 50,
        }
    }

    pub fn with_weight_range(mut self, min_weight: i64, max_weight: i64) -> Self {
        self.min_weight = min_weight.min(max_weight);
        self.max_weight = max_weight.max(min_weight);
        self
    }

    /// 50 vertices, 200 edges
    pub fn small() -> Self {
        Self::new("small", 50, 200)
    }

    /// 500 vertices, 2000 edges
    pub fn medium() -> Self {
        Self::new("medium", 500, 2_000)
    }

    /// 3000 vertices, 8000 edges
    pub fn large() -> Self {
        Self::new("large", 3_000, 8_000)
    }

    /// The three standard presets, smallest first
    pub fn presets() -> Vec<Self> {
        vec![Self::small(), Self::medium(), Self::large()]
    }

    /// Number of edges actually generated: distinct non-loop pairs are capped at V*(V-1)
    pub fn effective_edges(&self) -> usize {
        let max_pairs = self.vertices.saturating_mul(self.vertices.saturating_sub(1));
        self.edges.min(max_pairs)
    }
}

/// Generates the edges of a random directed graph: distinct `(source, target)`
/// pairs without self-loops, weights uniform in `[min_weight, max_weight]`
pub fn generate_random_edges<R: Rng + ?Sized>(spec: &DatasetSpec, rng: &mut R) -> Vec<Edge<i64>> {
    let target_edges = spec.effective_edges();
    let mut seen = HashSet::with_capacity(target_edges);
    let mut edges = Vec::with_capacity(target_edges);

    while edges.len() < target_edges {
        let source = rng.gen_range(0..spec.vertices);
        let target = rng.gen_range(0..spec.vertices);

        // Avoid self-loops and duplicate pairs
        if source != target && seen.insert((source, target)) {
            let weight = rng.gen_range(spec.min_weight..=spec.max_weight);
            edges.push(Edge::new(source, target, weight));
        }
    }

    log::debug!(
        "generated dataset '{}': {} vertices, {} edges",
        spec.name,
        spec.vertices,
        edges.len()
    );

    edges
}

/// Generates a random graph with exactly `spec.vertices` vertices
pub fn generate_random_graph<R: Rng + ?Sized>(spec: &DatasetSpec, rng: &mut R) -> Result<DirectedGraph<i64>> {
    let edges = generate_random_edges(spec, rng);
    DirectedGraph::with_vertex_count(spec.vertices, edges)
}

/// Generates a 4-connected `width * height` grid with edges in both directions.
/// Vertex `(x, y)` has id `y * width + x`.
pub fn generate_grid(width: usize, height: usize, weight: i64) -> Result<DirectedGraph<i64>> {
    let mut builder = GraphBuilder::new().with_vertex_count(width * height);

    for y in 0..height {
        for x in 0..width {
            let vertex = y * width + x;
            if x + 1 < width {
                builder.add_undirected_edge(vertex, vertex + 1, weight);
            }
            if y + 1 < height {
                builder.add_undirected_edge(vertex, vertex + width, weight);
            }
        }
    }

    builder.build()
}
