use crate::graph::{Graph, Weight};

/// Reconstructs the vertex sequence `source ..= target` by walking predecessor
/// links backwards from `target`.
///
/// Returns an empty path when `target` is out of range or has no predecessor
/// and is not the source. A malformed table (a predecessor cycle, or a chain
/// that ends somewhere other than `source`) also yields an empty path.
pub fn reconstruct_path(predecessors: &[Option<usize>], source: usize, target: usize) -> Vec<usize> {
    if target >= predecessors.len() {
        return Vec::new();
    }
    if predecessors[target].is_none() && target != source {
        return Vec::new();
    }

    let mut path = vec![target];
    let mut current = target;

    while let Some(pred) = predecessors[current] {
        if current == source {
            break;
        }
        // A simple path never visits more vertices than the table holds
        if path.len() >= predecessors.len() || pred >= predecessors.len() {
            log::warn!("predecessor cycle while reconstructing path to {}", target);
            return Vec::new();
        }
        path.push(pred);
        current = pred;
    }

    if current != source {
        log::warn!(
            "predecessor chain from {} ends at {} instead of source {}",
            target,
            current,
            source
        );
        return Vec::new();
    }

    path.reverse();
    path
}

/// Total weight of a vertex path, using the lightest edge between each
/// consecutive pair. `None` for an empty path, a missing edge, or overflow.
pub fn path_weight<W, G>(graph: &G, path: &[usize]) -> Option<W>
where
    W: Weight,
    G: Graph<W>,
{
    if path.is_empty() {
        return None;
    }

    path.windows(2).try_fold(W::zero(), |total, pair| {
        let weight = graph.min_edge_weight(pair[0], pair[1])?;
        total.checked_add(&weight)
    })
}
