//! Side-by-side operation counts for every algorithm on one input.

use serde::Serialize;
use sorta_algorithms::{Algorithm, RandomSource, Value};

use crate::metrics::Metrics;

/// One algorithm's totals over a complete run.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BenchmarkRow {
    pub algorithm: Algorithm,
    pub steps: usize,
    pub comparisons: usize,
    pub swaps: usize,
    pub overwrites: usize,
    pub accesses: usize,
    pub complexity: &'static str,
}

/// Run every algorithm over `input`, fewest steps first.
///
/// Ties keep registry order.
pub fn benchmark(input: &[Value], rng: &mut dyn RandomSource) -> Vec<BenchmarkRow> {
    let mut rows: Vec<_> = Algorithm::ALL
        .into_iter()
        .map(|algorithm| {
            let steps = algorithm.generate_steps_with(input, rng);
            let metrics = Metrics::over(&steps);
            BenchmarkRow {
                algorithm,
                steps: steps.len(),
                comparisons: metrics.comparisons,
                swaps: metrics.swaps,
                overwrites: metrics.overwrites,
                accesses: metrics.array_accesses,
                complexity: algorithm.complexity().time,
            }
        })
        .collect();
    rows.sort_by_key(|row| row.steps);
    rows
}
