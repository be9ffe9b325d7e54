use crate::algorithm::traits::relaxed_distance;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Edge, Graph, Weight};
use crate::{Error, Result};

/// Bellman-Ford: at most V-1 relaxation passes over the full edge list,
/// followed by one extra scan that flags a negative cycle reachable from the source.
///
/// When the flag is set the reported distances reflect only the bounded passes
/// and are not shortest distances for vertices reachable through the cycle.
#[derive(Debug, Clone)]
pub struct BellmanFord {
    /// Stop as soon as a full pass changes nothing
    early_termination: bool,
}

impl Default for BellmanFord {
    fn default() -> Self {
        Self::new()
    }
}

impl BellmanFord {
    /// Creates a new Bellman-Ford instance with early termination enabled
    pub fn new() -> Self {
        BellmanFord {
            early_termination: true,
        }
    }

    /// Enable or disable stopping after a pass that performs no update
    pub fn with_early_termination(mut self, enabled: bool) -> Self {
        self.early_termination = enabled;
        self
    }

    /// Candidate distance through `edge`; `None` when its tail is unreached or
    /// the sum is past the top of the weight type
    fn candidate<W: Weight>(distances: &[Option<W>], edge: &Edge<W>) -> Result<Option<W>> {
        match distances[edge.source] {
            None => Ok(None),
            Some(dist) => relaxed_distance(dist, edge.weight, edge.target),
        }
    }

    fn improves<W: Weight>(candidate: W, current: Option<W>) -> bool {
        match current {
            None => true,
            Some(current) => candidate < current,
        }
    }

    /// One pass over the edge list; returns the number of updated distances
    fn relax_all<W: Weight>(edges: &[Edge<W>], result: &mut ShortestPathResult<W>) -> Result<usize> {
        let mut updates = 0;

        for edge in edges {
            // The source stays at zero; a cycle back into it is left to the final scan
            if edge.target == result.source {
                continue;
            }

            if let Some(new_dist) = Self::candidate(&result.distances, edge)? {
                if Self::improves(new_dist, result.distances[edge.target]) {
                    result.distances[edge.target] = Some(new_dist);
                    result.predecessors[edge.target] = Some(edge.source);
                    updates += 1;
                }
            }
        }

        Ok(updates)
    }

    /// True if some edge can still be relaxed after the bounded passes
    fn detect_negative_cycle<W: Weight>(edges: &[Edge<W>], distances: &[Option<W>]) -> Result<bool> {
        for edge in edges {
            if let Some(new_dist) = Self::candidate(distances, edge)? {
                if Self::improves(new_dist, distances[edge.target]) {
                    log::debug!(
                        "negative cycle witness: edge {} -> {} still relaxes",
                        edge.source,
                        edge.target
                    );
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for BellmanFord
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Bellman-Ford"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex {
                vertex: source,
                vertex_count: n,
            });
        }

        let edges = graph.edges();
        let mut result = ShortestPathResult::initial(n, source);
        let mut passes = 0;

        for pass in 0..n.saturating_sub(1) {
            let updates = Self::relax_all(edges, &mut result)?;
            passes += 1;
            log::trace!("bellman-ford pass {}: {} updates", pass + 1, updates);

            if updates == 0 && self.early_termination {
                log::debug!("bellman-ford converged early after {} passes", passes);
                break;
            }
        }

        let negative_cycle = Self::detect_negative_cycle(edges, &result.distances)?;
        result.negative_cycle = Some(negative_cycle);

        log::debug!(
            "bellman-ford from {}: {} passes, {} reachable, negative cycle: {}",
            source,
            passes,
            result.reachable_count(),
            negative_cycle
        );

        Ok(result)
    }
}
