//!
//! The classification thresholds.
//!

use crate::comparison::status::Status;

/// The relative change of the mean, in percent, beyond which a case is reported.
pub const REGRESSION_THRESHOLD_PERCENT: f64 = 5.0;

///
/// The classification thresholds.
///
/// This is a fixed policy: the default is the only value used by the
/// comparator binary.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Thresholds {
    /// Changes strictly above this percent are regressions.
    pub slower_percent: f64,
    /// Changes strictly below this percent are improvements.
    pub faster_percent: f64,
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            slower_percent: REGRESSION_THRESHOLD_PERCENT,
            faster_percent: -REGRESSION_THRESHOLD_PERCENT,
        }
    }
}

impl Thresholds {
    ///
    /// Classifies a relative change. The boundaries themselves are `Unchanged`.
    ///
    pub fn classify(&self, relative_change_percent: f64) -> Status {
        if relative_change_percent > self.slower_percent {
            Status::Slower
        } else if relative_change_percent < self.faster_percent {
            Status::Faster
        } else {
            Status::Unchanged
        }
    }
}
