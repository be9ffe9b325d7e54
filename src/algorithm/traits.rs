use serde::{Deserialize, Serialize};

use crate::algorithm::path::reconstruct_path;
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Candidate distance `distance + weight` for relaxing an edge into `target`.
///
/// A sum that overflows upwards can never beat a representable distance, so it
/// yields `None` (no improvement). Overflowing downwards is `DistanceOverflow`.
pub(crate) fn relaxed_distance<W: Weight>(distance: W, weight: W, target: usize) -> Result<Option<W>> {
    match distance.checked_add(&weight) {
        Some(sum) => Ok(Some(sum)),
        None if weight > W::zero() => Ok(None),
        None => Err(Error::DistanceOverflow { vertex: target }),
    }
}

/// Result of a shortest path algorithm execution
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShortestPathResult<W> {
    /// Distances from source to each vertex; `None` means unreached
    pub distances: Vec<Option<W>>,

    /// Predecessor vertices in the shortest path tree; `None` for the source and unreached vertices
    pub predecessors: Vec<Option<usize>>,

    /// Source vertex ID
    pub source: usize,

    /// Negative-cycle flag, only reported by engines that can detect one
    pub negative_cycle: Option<bool>,
}

impl<W> ShortestPathResult<W>
where
    W: Weight,
{
    /// Fresh result for `vertex_count` vertices: everything unreached except `source` at zero
    pub(crate) fn initial(vertex_count: usize, source: usize) -> Self {
        let mut distances = vec![None; vertex_count];
        distances[source] = Some(W::zero());

        ShortestPathResult {
            distances,
            predecessors: vec![None; vertex_count],
            source,
            negative_cycle: None,
        }
    }

    /// Distance to `vertex`, `None` if unreached or out of range
    pub fn distance(&self, vertex: usize) -> Option<W> {
        self.distances.get(vertex).copied().flatten()
    }

    pub fn is_reachable(&self, vertex: usize) -> bool {
        self.distance(vertex).is_some()
    }

    /// Number of vertices with a finite distance, the source included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// True only when the engine detected a negative cycle reachable from the source.
    /// Distances are not trustworthy when this is set.
    pub fn has_negative_cycle(&self) -> bool {
        self.negative_cycle.unwrap_or(false)
    }

    /// Vertices from the source to `target` inclusive; empty when there is no path
    pub fn path_to(&self, target: usize) -> Vec<usize> {
        reconstruct_path(&self.predecessors, self.source, target)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<W, G>
where
    W: Weight,
    G: Graph<W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<W>, target: usize) -> Vec<usize> {
        result.path_to(target)
    }
}
