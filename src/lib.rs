//! Shortest Paths - single-source shortest paths over weighted directed graphs
//!
//! This library provides two classical engines over an immutable edge-list graph:
//! an O(V²) array-scan Dijkstra (greedy, non-negative weights) and Bellman-Ford
//! (dynamic programming, negative weights allowed, reports reachable negative cycles).
//! Both produce a distance vector and a predecessor vector from which explicit
//! vertex paths are reconstructed.

pub mod algorithm;
pub mod benchmark;
pub mod graph;
pub mod io;

pub use algorithm::{
    bellman_ford::BellmanFord, dijkstra::Dijkstra, path::reconstruct_path,
    ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use graph::directed::DirectedGraph;
pub use graph::{Edge, GraphBuilder, Weight};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Invalid vertex ID: {vertex} (graph has {vertex_count} vertices)")]
    InvalidVertex { vertex: usize, vertex_count: usize },

    #[error("Negative edge weight on edge {from} -> {to}")]
    NegativeWeight { from: usize, to: usize },

    #[error("Distance to vertex {vertex} overflows the weight type")]
    DistanceOverflow { vertex: usize },

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
