use crate::algorithm::traits::relaxed_distance;
use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::graph::{Graph, Weight};
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, array-scan variant: O(V²) with no heap.
///
/// Requires non-negative edge weights. By default a negative weight is not
/// detected and simply yields wrong distances; enable
/// [`with_negative_weight_check`](Self::with_negative_weight_check) to reject
/// such graphs up front.
#[derive(Debug, Default, Clone)]
pub struct Dijkstra {
    /// Fail with `Error::NegativeWeight` instead of running on negative weights
    check_negative_weights: bool,
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            check_negative_weights: false,
        }
    }

    /// Enable or disable the up-front scan for negative edge weights
    pub fn with_negative_weight_check(mut self, enabled: bool) -> Self {
        self.check_negative_weights = enabled;
        self
    }

    /// Unvisited vertex with the smallest finite distance, and that distance; the lowest id wins ties
    fn closest_unvisited<W: Weight>(distances: &[Option<W>], visited: &[bool]) -> Option<(usize, W)> {
        let mut best: Option<(usize, W)> = None;

        for (vertex, distance) in distances.iter().enumerate() {
            if visited[vertex] {
                continue;
            }
            if let Some(distance) = *distance {
                match best {
                    Some((_, best_distance)) if best_distance <= distance => {}
                    _ => best = Some((vertex, distance)),
                }
            }
        }

        best
    }
}

impl<W, G> ShortestPathAlgorithm<W, G> for Dijkstra
where
    W: Weight,
    G: Graph<W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: usize) -> Result<ShortestPathResult<W>> {
        let n = graph.vertex_count();
        if !graph.has_vertex(source) {
            return Err(Error::InvalidVertex {
                vertex: source,
                vertex_count: n,
            });
        }

        if self.check_negative_weights {
            if let Some(edge) = graph.edges().iter().find(|edge| edge.weight < W::zero()) {
                return Err(Error::NegativeWeight {
                    from: edge.source,
                    to: edge.target,
                });
            }
        }

        let mut result: ShortestPathResult<W> = ShortestPathResult::initial(n, source);
        let mut visited = vec![false; n];
        let mut settled = 0;

        for _ in 0..n {
            // Everything left is unreached
            let Some((current, dist_current)) = Self::closest_unvisited(&result.distances, &visited) else {
                break;
            };

            visited[current] = true;
            settled += 1;

            // Relax all outgoing edges to unvisited neighbours
            for (neighbor, weight) in graph.outgoing_edges(current) {
                if visited[neighbor] {
                    continue;
                }

                let Some(new_dist) = relaxed_distance(dist_current, weight, neighbor)? else {
                    continue;
                };

                let should_update = match result.distances[neighbor] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    result.distances[neighbor] = Some(new_dist);
                    result.predecessors[neighbor] = Some(current);
                }
            }
        }

        log::debug!(
            "dijkstra from {}: settled {} of {} vertices",
            source,
            settled,
            n
        );

        Ok(result)
    }
}
