use std::io::Cursor;

use shortest_paths::graph::{DirectedGraph, Graph, GraphBuilder};
use shortest_paths::io::read_edge_list;
use shortest_paths::{BellmanFord, Dijkstra, ShortestPathAlgorithm};

// A few street segments with the metadata columns a street export carries
const STREETS: &str = "\
source,target,weight,street_name,maxspeed,length_meters
0,1,120,Broadway,25 mph,120.4
1,2,95,West 42nd Street,25 mph,95.1
0,3,80,7th Avenue,30 mph,80.0
3,2,160,West 40th Street,,
1,2,140,Times Square Plaza,,
";

fn main() -> shortest_paths::Result<()> {
    env_logger::init();

    // Create a simple directed graph
    let mut builder = GraphBuilder::<i64>::new();
    builder
        .add_edge(0, 1, 10)
        .add_edge(0, 2, 5)
        .add_edge(1, 3, 1)
        .add_edge(2, 1, 3)
        .add_edge(2, 3, 9)
        .add_edge(2, 4, 2)
        .add_edge(3, 4, 4)
        .add_edge(4, 0, 7)
        .add_edge(4, 3, 6);
    let graph = builder.build()?;

    // Source vertex
    let source = 0;

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new();
    let dijkstra_result = dijkstra.compute_shortest_paths(&graph, source)?;

    println!("\n{} results:", <Dijkstra as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::name(&dijkstra));
    for v in 0..graph.vertex_count() {
        match dijkstra_result.distance(v) {
            Some(dist) => println!("Vertex {}: distance = {}, path = {:?}", v, dist, dijkstra_result.path_to(v)),
            None => println!("Vertex {}: unreachable", v),
        }
    }

    // Same graph with one negative edge and a negative cycle 1 -> 3 -> 1
    let mut builder = GraphBuilder::new();
    builder.extend(graph.edges().iter().copied());
    builder.add_edge(3, 1, -2);
    let negative = builder.build()?;

    let bellman_ford = BellmanFord::new();
    let bf_result = bellman_ford.compute_shortest_paths(&negative, source)?;

    println!("\n{} results:", <BellmanFord as ShortestPathAlgorithm<i64, DirectedGraph<i64>>>::name(&bellman_ford));
    if bf_result.has_negative_cycle() {
        println!("  Negative cycle reachable from {}: distances are not reliable", source);
    } else {
        for v in 0..negative.vertex_count() {
            println!("  Vertex {}: {:?}", v, bf_result.distance(v));
        }
    }

    // Route through a table with street metadata
    let streets = read_edge_list(Cursor::new(STREETS))?;
    let street_graph = streets.to_graph()?;
    let route = dijkstra.compute_shortest_paths(&street_graph, 0)?;
    let path = route.path_to(2);

    println!("\nRoute from 0 to 2: {:?}", path);
    if let Some(steps) = streets.route_steps(&path) {
        let mut total_seconds = 0.0;
        for (i, step) in steps.iter().enumerate() {
            println!(
                "  Step {}: {} -> {} via {} ({:.1} m)",
                i + 1,
                step.from,
                step.to,
                step.street_name().unwrap_or("unnamed"),
                step.length_meters()
            );
            match step.travel_time_seconds() {
                Some(seconds) => {
                    total_seconds += seconds;
                    println!("    about {:.1} s at {} mph", seconds, step.speed_mph().unwrap_or_default());
                }
                None => println!("    no speed limit recorded"),
            }
        }
        println!("  Total: {:?} m, about {:.1} s driving", route.distance(2), total_seconds);
    }

    Ok(())
}
