use std::fs::{self, File};
use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_paths::graph::generators::{generate_random_edges, DatasetSpec};
use shortest_paths::graph::{Graph, VertexInterner};
use shortest_paths::io::{load_edge_list, write_edge_list};
use shortest_paths::{BellmanFord, Dijkstra, Error, GraphBuilder, ShortestPathAlgorithm};

fn temp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("shortest_paths_{}_{}.csv", std::process::id(), name))
}

#[test]
fn generated_dataset_survives_a_file_round_trip() {
    let spec = DatasetSpec::small();
    let edges = generate_random_edges(&spec, &mut StdRng::seed_from_u64(42));
    let path = temp_path("small");

    write_edge_list(File::create(&path).unwrap(), &edges).unwrap();
    let list = load_edge_list(&path).unwrap();
    fs::remove_file(&path).ok();

    assert_eq!(list.edges, edges);
    let graph = list.to_graph().unwrap();
    assert_eq!(graph.edge_count(), 200);

    let greedy = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let relaxation = BellmanFord::new().compute_shortest_paths(&graph, 0).unwrap();
    assert_eq!(greedy.distances, relaxation.distances);
}

#[test]
fn missing_file_is_an_io_error() {
    let err = load_edge_list(temp_path("does_not_exist")).unwrap_err();
    assert!(matches!(err, Error::Io(_)));
}

#[test]
fn interned_street_nodes_build_a_graph() {
    // Street segments keyed by endpoint coordinates, both directions for two-way streets
    let segments = [
        ("-73.99 40.75", "-73.98 40.75", 120, true),
        ("-73.98 40.75", "-73.98 40.76", 90, false),
        ("-73.99 40.75", "-73.98 40.76", 300, true),
    ];

    let mut interner = VertexInterner::new();
    let mut builder = GraphBuilder::<i64>::new();
    for (from, to, length, two_way) in segments {
        let (u, v) = (interner.intern(from), interner.intern(to));
        if two_way {
            builder.add_undirected_edge(u, v, length);
        } else {
            builder.add_edge(u, v, length);
        }
    }
    let graph = builder.with_vertex_count(interner.len()).build().unwrap();

    let start = interner.get("-73.99 40.75").unwrap();
    let goal = interner.get("-73.98 40.76").unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, start).unwrap();

    assert_eq!(result.distance(goal), Some(210));
    let names: Vec<&str> = result
        .path_to(goal)
        .into_iter()
        .filter_map(|v| interner.name_of(v))
        .collect();
    assert_eq!(names, vec!["-73.99 40.75", "-73.98 40.75", "-73.98 40.76"]);
}

#[test]
fn shortest_route_resolves_to_named_streets() {
    let path = temp_path("streets");
    fs::write(
        &path,
        "source,target,weight,street_name,maxspeed\n\
         0,1,120,Broadway,25 mph\n\
         1,2,95,West 42nd Street,\n\
         0,2,300,7th Avenue,30 mph\n\
         1,2,140,Times Square Plaza,\n",
    )
    .unwrap();
    let list = load_edge_list(&path).unwrap();
    fs::remove_file(&path).ok();

    let graph = list.to_graph().unwrap();
    let result = Dijkstra::new().compute_shortest_paths(&graph, 0).unwrap();
    let steps = list.route_steps(&result.path_to(2)).unwrap();

    let streets: Vec<Option<&str>> = steps.iter().map(|step| step.street_name()).collect();
    assert_eq!(streets, vec![Some("Broadway"), Some("West 42nd Street")]);
    assert_eq!(steps.iter().map(|step| step.weight).sum::<i64>(), 215);
    assert_eq!(result.distance(2), Some(215));
    assert!(steps[0].travel_time_seconds().is_some());
    assert!(steps[1].travel_time_seconds().is_none());
}
