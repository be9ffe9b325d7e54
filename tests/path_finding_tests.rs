use shortest_paths::algorithm::path_weight;
use shortest_paths::graph::generators::generate_grid;
use shortest_paths::graph::{DirectedGraph, Graph, GraphBuilder};
use shortest_paths::{reconstruct_path, BellmanFord, Dijkstra, ShortestPathAlgorithm};

// Test helper: width x height grid with blocked cells removed entirely
fn create_grid_with_obstacles(width: usize, height: usize, blocked: &[(usize, usize)]) -> DirectedGraph<i64> {
    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));
    let mut builder = GraphBuilder::new().with_vertex_count(width * height);

    for y in 0..height {
        for x in 0..width {
            if is_blocked(x, y) {
                continue;
            }
            let vertex = y * width + x;
            if x + 1 < width && !is_blocked(x + 1, y) {
                builder.add_undirected_edge(vertex, vertex + 1, 1);
            }
            if y + 1 < height && !is_blocked(x, y + 1) {
                builder.add_undirected_edge(vertex, vertex + width, 1);
            }
        }
    }

    builder.build().unwrap()
}

fn assert_valid_path(graph: &DirectedGraph<i64>, path: &[usize], source: usize, target: usize) {
    assert_eq!(path[0], source, "Path should start at source");
    assert_eq!(path[path.len() - 1], target, "Path should end at target");
    for pair in path.windows(2) {
        assert!(graph.has_edge(pair[0], pair[1]), "Path should only use existing edges");
    }
}

// Test that paths can be found in a simple grid
#[test]
fn test_path_finding_simple_grid() {
    let graph = generate_grid(10, 10, 1).unwrap();
    let source = 0; // Top-left corner (0,0)
    let target = 99; // Bottom-right corner (9,9)

    let dijkstra_result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();
    let bellman_result = BellmanFord::new().compute_shortest_paths(&graph, source).unwrap();

    // Manhattan distance on a unit grid
    assert_eq!(dijkstra_result.distance(target), Some(18));
    assert_eq!(bellman_result.distance(target), Some(18));

    let dijkstra_path = dijkstra_result.path_to(target);
    let bellman_path = bellman_result.path_to(target);

    assert_eq!(dijkstra_path.len(), 19);
    assert_eq!(bellman_path.len(), 19);
    assert_valid_path(&graph, &dijkstra_path, source, target);
    assert_valid_path(&graph, &bellman_path, source, target);
}

// Test path finding with obstacles
#[test]
fn test_path_finding_with_obstacles() {
    // Wall in column 5 with a gap at the bottom two rows
    let wall: Vec<(usize, usize)> = (0..8).map(|y| (5, y)).collect();
    let graph = create_grid_with_obstacles(10, 10, &wall);
    let source = 0;
    let target = 9; // Top-right corner, straight across the wall

    let result = Dijkstra::new().compute_shortest_paths(&graph, source).unwrap();

    // Down to row 8, across, and back up: 8 + 9 + 8
    assert_eq!(result.distance(target), Some(25));
    let path = result.path_to(target);
    assert_valid_path(&graph, &path, source, target);
    assert!(path.iter().all(|v| !wall.contains(&(v % 10, v / 10))), "Path should avoid the wall");

    // Wall cells themselves are unreachable
    assert!(!result.is_reachable(5));
    assert!(result.path_to(5).is_empty());
}

#[test]
fn test_fully_walled_target_is_unreachable() {
    let wall: Vec<(usize, usize)> = (0..10).map(|y| (5, y)).collect();
    let graph = create_grid_with_obstacles(10, 10, &wall);

    for result in [
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap(),
    ] {
        assert_eq!(result.distance(99), None);
        assert!(result.path_to(99).is_empty());
        assert_eq!(result.reachable_count(), 50);
    }
}

#[test]
fn test_simple_path_example() {
    let graph = DirectedGraph::<i64>::from_triples([(0, 1, 4), (0, 2, 1), (2, 1, 1)]);

    for result in [
        Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap(),
        BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap(),
    ] {
        assert_eq!(result.distances, vec![Some(0), Some(2), Some(1)]);
        assert_eq!(result.path_to(1), vec![0, 2, 1]);
        assert_eq!(reconstruct_path(&result.predecessors, 0, 1), vec![0, 2, 1]);
        assert_eq!(path_weight(&graph, &result.path_to(1)), Some(2));
    }
}

#[test]
fn test_disconnected_example() {
    let graph = DirectedGraph::<i64>::from_triples_with_vertex_count(3, [(0, 1, 5)]).unwrap();
    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, 0).unwrap();

    assert_eq!(result.distances[2], None);
    assert_eq!(result.predecessors[2], None);
    let path = <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::get_path(&dijkstra, &result, 2);
    assert!(path.is_empty());
}

#[test]
fn test_path_to_source_is_just_the_source() {
    let graph = generate_grid(3, 3, 2).unwrap();
    let result = BellmanFord::new().compute_shortest_paths(&graph, 4).unwrap();

    assert_eq!(result.path_to(4), vec![4]);
    assert_eq!(result.distance(4), Some(0));
    assert_eq!(result.predecessors[4], None);
    assert_eq!(result.distance(0), Some(4));
}
