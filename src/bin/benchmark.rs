use std::path::{Path, PathBuf};
use std::process;

use clap::Parser;
use rand::rngs::StdRng;
use rand::SeedableRng;
use shortest_paths::algorithm::ShortestPathAlgorithm;
use shortest_paths::benchmark::{BenchmarkConfig, BenchmarkReport, PerformanceTester};
use shortest_paths::graph::generators::{generate_random_graph, DatasetSpec};
use shortest_paths::graph::{DirectedGraph, Graph};
use shortest_paths::{io, BellmanFord, Dijkstra};

/// Times Dijkstra against Bellman-Ford on preset or CSV datasets
#[derive(Parser, Debug)]
#[command(name = "benchmark")]
struct Cli {
    /// Runs per algorithm and dataset
    #[arg(long, default_value_t = 20)]
    runs: usize,

    /// Source vertex for every run
    #[arg(long, default_value_t = 0)]
    source: usize,

    /// Seed for the generated preset graphs
    #[arg(long, default_value_t = 42)]
    seed: u64,

    /// Write the report as JSON to this path
    #[arg(long)]
    json: Option<PathBuf>,

    /// Edge-list CSV files; the built-in presets are used when none are given
    #[arg(value_name = "DATASET.csv")]
    datasets: Vec<PathBuf>,
}

impl Cli {
    fn config(&self) -> BenchmarkConfig {
        BenchmarkConfig {
            runs: self.runs,
            source: self.source,
            ..BenchmarkConfig::default()
        }
    }
}

fn dataset_name(path: &Path) -> String {
    path.file_stem()
        .map(|stem| stem.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

type Dataset = (String, DirectedGraph<i64>);

fn load_datasets(options: &Cli) -> shortest_paths::Result<Vec<Dataset>> {
    if options.datasets.is_empty() {
        let mut rng = StdRng::seed_from_u64(options.seed);
        return DatasetSpec::presets()
            .iter()
            .map(|spec| -> shortest_paths::Result<Dataset> {
                Ok((spec.name.to_uppercase(), generate_random_graph(spec, &mut rng)?))
            })
            .collect();
    }

    options
        .datasets
        .iter()
        .map(|path| -> shortest_paths::Result<Dataset> {
            let list = io::load_edge_list(path)?;
            Ok((dataset_name(path), list.to_graph()?))
        })
        .collect()
}

fn run(options: &Cli) -> shortest_paths::Result<BenchmarkReport> {
    let config = options.config();
    let tester = PerformanceTester::new(config.clone());
    let dijkstra = Dijkstra::new();
    let bellman_ford = BellmanFord::new();
    let mut report = BenchmarkReport::new();

    println!("=====================================================");
    println!("Benchmark: Dijkstra (greedy) vs Bellman-Ford (dynamic programming)");
    println!("Runs per test: {}, source vertex: {}", config.runs, config.source);
    println!("=====================================================");

    for (name, graph) in load_datasets(options)? {
        println!(
            "\n{}: {} vertices, {} edges",
            name,
            graph.vertex_count(),
            graph.edge_count()
        );

        let greedy = tester.measure(&dijkstra, &graph, &name, &mut report)?;
        let relaxation = tester.measure(&bellman_ford, &graph, &name, &mut report)?;

        if graph.validate_non_negative() && !relaxation.negative_cycle {
            let a = dijkstra.compute_shortest_paths(&graph, config.source)?;
            let b = bellman_ford.compute_shortest_paths(&graph, config.source)?;
            if a.distances != b.distances {
                log::warn!("{}: Dijkstra and Bellman-Ford distances disagree", name);
            }
        }

        println!("  Reachable vertices: {}", greedy.reachable);
        println!("  Negative cycle detected: {}", relaxation.negative_cycle);
    }

    Ok(report)
}

fn print_report(report: &BenchmarkReport) {
    println!("\n{}", "=".repeat(90));
    println!("PERFORMANCE COMPARISON TABLE");
    println!("{}", "=".repeat(90));
    println!(
        "{:<15} {:<35} {:<12} {:<12} {:<12}",
        "Algorithm", "Dataset", "Best (ms)", "Avg (ms)", "Worst (ms)"
    );
    println!("{}", "-".repeat(90));

    for stats in &report.results {
        println!(
            "{:<15} {:<35} {:<12.4} {:<12.4} {:<12.4}",
            stats.algorithm, stats.dataset, stats.best_ms, stats.average_ms, stats.worst_ms
        );
    }
    println!("{}", "=".repeat(90));

    for comparison in report.comparisons("Dijkstra", "Bellman-Ford") {
        println!("\n{} dataset:", comparison.dataset);
        println!("  Dijkstra average:     {:.4} ms", comparison.baseline_average_ms);
        println!("  Bellman-Ford average: {:.4} ms", comparison.contender_average_ms);
        if comparison.ratio > 1.0 {
            println!("  -> Dijkstra is {:.2}x faster than Bellman-Ford", comparison.ratio);
        } else if comparison.ratio > 0.0 {
            println!("  -> Bellman-Ford is {:.2}x faster than Dijkstra", 1.0 / comparison.ratio);
        }
    }
}

fn main() {
    env_logger::init();

    let options = Cli::parse();

    let report = match run(&options) {
        Ok(report) => report,
        Err(err) => {
            eprintln!("benchmark failed: {}", err);
            process::exit(1);
        }
    };

    print_report(&report);

    if let Some(path) = &options.json {
        if let Err(err) = report.write_json(path) {
            eprintln!("could not write {}: {}", path.display(), err);
            process::exit(1);
        }
        println!("\nResults saved to {}", path.display());
    }
}
