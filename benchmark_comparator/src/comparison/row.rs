//!
//! A row in the benchmark comparison table.
//!

use crate::comparison::status::Status;
use crate::comparison::thresholds::Thresholds;
use crate::model::benchmark_result::BenchmarkResult;

///
/// A row in the benchmark comparison table.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Row {
    /// The shortened benchmark name.
    pub display_name: String,
    /// The join key.
    pub identity: String,
    /// The baseline measurement.
    pub baseline: Option<BenchmarkResult>,
    /// The current measurement.
    pub current: Option<BenchmarkResult>,
    /// The change of the mean relative to the baseline, in percent.
    pub relative_change_percent: Option<f64>,
    /// The classification.
    pub status: Status,
}

impl Row {
    ///
    /// Compares the baseline and current measurements of one case.
    ///
    pub fn compare(
        identity: String,
        baseline: Option<BenchmarkResult>,
        current: Option<BenchmarkResult>,
        thresholds: &Thresholds,
    ) -> Self {
        let baseline_mean = baseline.as_ref().and_then(|result| result.mean_duration_ns);
        let current_mean = current.as_ref().and_then(|result| result.mean_duration_ns);

        let (relative_change_percent, status) = match (baseline.as_ref(), current.as_ref()) {
            (Some(_), None) => (None, Status::Removed),
            (None, Some(_)) => (None, Status::Added),
            _ => match (baseline_mean, current_mean) {
                (Some(baseline_mean), Some(_)) if baseline_mean == 0.0 => {
                    (Some(0.0), Status::Unchanged)
                }
                (Some(baseline_mean), Some(current_mean)) => {
                    let percent = (current_mean - baseline_mean) * 100.0 / baseline_mean;
                    (Some(percent), thresholds.classify(percent))
                }
                (Some(_), None) => (None, Status::Removed),
                (None, Some(_)) => (None, Status::Added),
                (None, None) => (None, Status::Unchanged),
            },
        };

        let display_name = current
            .as_ref()
            .or(baseline.as_ref())
            .map(|result| result.display_name.clone())
            .unwrap_or_else(|| BenchmarkResult::shorten(identity.as_str()));

        Self {
            display_name,
            identity,
            baseline,
            current,
            relative_change_percent,
            status,
        }
    }

    ///
    /// Returns the baseline mean in nanoseconds.
    ///
    pub fn baseline_mean(&self) -> Option<f64> {
        self.baseline
            .as_ref()
            .and_then(|result| result.mean_duration_ns)
    }

    ///
    /// Returns the current mean in nanoseconds.
    ///
    pub fn current_mean(&self) -> Option<f64> {
        self.current
            .as_ref()
            .and_then(|result| result.mean_duration_ns)
    }

    ///
    /// Returns the allocated bytes, preferring the current measurement.
    ///
    pub fn bytes_allocated(&self) -> Option<u64> {
        self.current
            .as_ref()
            .and_then(|result| result.bytes_allocated)
            .or_else(|| {
                self.baseline
                    .as_ref()
                    .and_then(|result| result.bytes_allocated)
            })
    }
}
