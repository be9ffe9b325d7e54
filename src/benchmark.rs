//! Repeated-run timing of shortest path engines.
//!
//! Results accumulate in a caller-owned [`BenchmarkReport`]; nothing here keeps
//! global state between runs.

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::algorithm::ShortestPathAlgorithm;
use crate::graph::{Graph, Weight};
use crate::Result;

/// Configuration for repeated timing runs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BenchmarkConfig {
    /// Runs per (algorithm, dataset) pair
    pub runs: usize,
    /// Source vertex for every run
    pub source: usize,
    /// Log progress every this many runs (0 disables)
    pub progress_interval: usize,
}

impl Default for BenchmarkConfig {
    fn default() -> Self {
        Self {
            runs: 20,
            source: 0,
            progress_interval: 5,
        }
    }
}

/// Best / average / worst wall-clock time of one algorithm on one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimingStats {
    pub algorithm: String,
    pub dataset: String,
    pub best_ms: f64,
    pub average_ms: f64,
    pub worst_ms: f64,
    pub runs: usize,
    /// Vertices reached from the source (source included)
    pub reachable: usize,
    pub negative_cycle: bool,
}

fn millis(duration: &Duration) -> f64 {
    duration.as_secs_f64() * 1000.0
}

impl TimingStats {
    /// Summarises raw samples; `None` without samples
    pub fn from_samples(algorithm: &str, dataset: &str, samples: &[Duration]) -> Option<Self> {
        let best = samples.iter().min()?;
        let worst = samples.iter().max()?;
        let total: f64 = samples.iter().map(millis).sum();

        Some(TimingStats {
            algorithm: algorithm.to_string(),
            dataset: dataset.to_string(),
            best_ms: millis(best),
            average_ms: total / samples.len() as f64,
            worst_ms: millis(worst),
            runs: samples.len(),
            reachable: 0,
            negative_cycle: false,
        })
    }
}

/// Average-time comparison of two algorithms on one dataset
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Comparison {
    pub dataset: String,
    pub baseline: String,
    pub contender: String,
    pub baseline_average_ms: f64,
    pub contender_average_ms: f64,
    /// `contender_average_ms / baseline_average_ms`; above 1 means the baseline is faster
    pub ratio: f64,
}

/// Accumulated timing results
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkReport {
    pub generated_at: DateTime<Utc>,
    pub results: Vec<TimingStats>,
}

impl Default for BenchmarkReport {
    fn default() -> Self {
        Self::new()
    }
}

impl BenchmarkReport {
    pub fn new() -> Self {
        BenchmarkReport {
            generated_at: Utc::now(),
            results: Vec::new(),
        }
    }

    pub fn push(&mut self, stats: TimingStats) {
        self.results.push(stats);
    }

    /// Datasets in first-seen order
    pub fn datasets(&self) -> Vec<&str> {
        let mut datasets: Vec<&str> = Vec::new();
        for stats in &self.results {
            if !datasets.contains(&stats.dataset.as_str()) {
                datasets.push(&stats.dataset);
            }
        }
        datasets
    }

    fn find(&self, algorithm: &str, dataset: &str) -> Option<&TimingStats> {
        self.results
            .iter()
            .find(|stats| stats.algorithm == algorithm && stats.dataset == dataset)
    }

    /// Pairs `baseline` and `contender` on every dataset where both were timed
    pub fn comparisons(&self, baseline: &str, contender: &str) -> Vec<Comparison> {
        self.datasets()
            .into_iter()
            .filter_map(|dataset| {
                let base = self.find(baseline, dataset)?;
                let other = self.find(contender, dataset)?;
                Some(Comparison {
                    dataset: dataset.to_string(),
                    baseline: baseline.to_string(),
                    contender: contender.to_string(),
                    baseline_average_ms: base.average_ms,
                    contender_average_ms: other.average_ms,
                    // Sub-resolution baselines report 0.0 instead of inf / NaN
                    ratio: if base.average_ms > 0.0 {
                        other.average_ms / base.average_ms
                    } else {
                        0.0
                    },
                })
            })
            .collect()
    }

    /// Writes the report as pretty-printed JSON
    pub fn write_json<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let writer = BufWriter::new(File::create(path.as_ref())?);
        serde_json::to_writer_pretty(writer, self).map_err(std::io::Error::from)?;
        Ok(())
    }
}

/// Runs an algorithm repeatedly on a graph and records timing statistics
#[derive(Debug, Clone, Default)]
pub struct PerformanceTester {
    config: BenchmarkConfig,
}

impl PerformanceTester {
    pub fn new(config: BenchmarkConfig) -> Self {
        PerformanceTester { config }
    }

    pub fn config(&self) -> &BenchmarkConfig {
        &self.config
    }

    /// Times `config.runs` executions and appends the summary to `report`
    pub fn measure<A, W, G>(
        &self,
        algorithm: &A,
        graph: &G,
        dataset: &str,
        report: &mut BenchmarkReport,
    ) -> Result<TimingStats>
    where
        A: ShortestPathAlgorithm<W, G>,
        W: Weight,
        G: Graph<W>,
    {
        let runs = self.config.runs.max(1);
        let mut samples = Vec::with_capacity(runs);
        let mut last = None;

        log::info!(
            "timing {} on {} ({} runs, {} vertices, {} edges)",
            algorithm.name(),
            dataset,
            runs,
            graph.vertex_count(),
            graph.edge_count()
        );

        for run in 0..runs {
            let start = Instant::now();
            let result = algorithm.compute_shortest_paths(graph, self.config.source)?;
            samples.push(start.elapsed());
            last = Some(result);

            if self.config.progress_interval > 0 && (run + 1) % self.config.progress_interval == 0 {
                log::info!("  completed {}/{} runs", run + 1, runs);
            }
        }

        let mut stats = TimingStats::from_samples(algorithm.name(), dataset, &samples)
            .unwrap_or_else(|| TimingStats {
                algorithm: algorithm.name().to_string(),
                dataset: dataset.to_string(),
                best_ms: 0.0,
                average_ms: 0.0,
                worst_ms: 0.0,
                runs: 0,
                reachable: 0,
                negative_cycle: false,
            });
        if let Some(result) = last {
            stats.reachable = result.reachable_count();
            stats.negative_cycle = result.has_negative_cycle();
        }

        report.push(stats.clone());
        Ok(stats)
    }
}
