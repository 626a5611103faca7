//! Running operation counts over a log prefix.

use std::fmt;

use serde::Serialize;
use sorta_algorithms::{Algorithm, Step, StepKind};

use crate::cursor::Cursor;

/// Operation counts for `steps[..=cursor]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct Metrics {
    pub comparisons: usize,
    pub swaps: usize,
    pub overwrites: usize,
    /// Cells read or written. A swap counts each index twice.
    pub array_accesses: usize,
}

impl Metrics {
    /// Count one step.
    pub fn record(&mut self, step: &Step) {
        let touched = step.indices().len();
        match step.kind() {
            StepKind::Compare => {
                self.comparisons += 1;
                self.array_accesses += touched;
            }
            StepKind::Swap => {
                self.swaps += 1;
                self.array_accesses += touched * 2;
            }
            StepKind::Overwrite => {
                self.overwrites += 1;
                self.array_accesses += touched;
            }
            StepKind::Mark => {}
        }
    }

    /// Fold the log up to and including `cursor` (clamped).
    pub fn tally(steps: &[Step], cursor: Cursor) -> Self {
        let applied = cursor.clamp_to(steps.len()).applied();
        Self::over(&steps[..applied])
    }

    /// Fold a whole log.
    pub fn over<'a>(steps: impl IntoIterator<Item = &'a Step>) -> Self {
        steps.into_iter().fold(Self::default(), |mut metrics, step| {
            metrics.record(step);
            metrics
        })
    }
}

/// Plain-text metrics for copying out of a session.
#[derive(Debug, Clone, Copy)]
pub struct MetricsReport {
    pub algorithm: Algorithm,
    pub input_len: usize,
    pub total_steps: usize,
    pub metrics: Metrics,
}

impl fmt::Display for MetricsReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Algorithm: {}", self.algorithm)?;
        writeln!(f, "Dataset Size: {}", self.input_len)?;
        writeln!(f, "Comparisons: {}", self.metrics.comparisons)?;
        writeln!(f, "Swaps: {}", self.metrics.swaps)?;
        writeln!(f, "Array Accesses: {}", self.metrics.array_accesses)?;
        writeln!(f, "Overwrites: {}", self.metrics.overwrites)?;
        write!(f, "Total Steps: {}", self.total_steps)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Vec<Step> {
        vec![
            Step::compare(0, 1),
            Step::swap(0, 1),
            Step::inspect(2),
            Step::overwrite(2, 5),
            Step::mark(0),
        ]
    }

    #[test]
    fn counts_each_kind() {
        let metrics = Metrics::over(&sample());
        assert_eq!(
            metrics,
            Metrics {
                comparisons: 2,
                swaps: 1,
                overwrites: 1,
                // 2 + 4 + 1 + 1
                array_accesses: 8,
            }
        );
    }

    #[test]
    fn tally_stops_at_cursor() {
        let steps = sample();
        assert_eq!(Metrics::tally(&steps, Cursor::Start), Metrics::default());

        let metrics = Metrics::tally(&steps, Cursor::At(1));
        assert_eq!(metrics.comparisons, 1);
        assert_eq!(metrics.swaps, 1);
        assert_eq!(metrics.array_accesses, 6);

        assert_eq!(Metrics::tally(&steps, Cursor::At(99)), Metrics::over(&steps));
    }

    #[test]
    fn report_lists_every_counter() {
        let report = MetricsReport {
            algorithm: Algorithm::Bubble,
            input_len: 3,
            total_steps: 5,
            metrics: Metrics::over(&sample()),
        };
        let text = report.to_string();
        assert!(text.starts_with("Algorithm: Bubble Sort\n"));
        assert!(text.contains("Array Accesses: 8"));
        assert!(text.ends_with("Total Steps: 5"));
    }
}
