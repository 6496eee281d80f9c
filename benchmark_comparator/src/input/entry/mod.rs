//!
//! A single benchmark case in the results document.
//!

pub mod memory;
pub mod statistics;

use self::memory::Memory;
use self::statistics::Statistics;

///
/// A single benchmark case in the results document.
///
#[derive(Debug, serde::Deserialize)]
pub struct Entry {
    /// The fully-qualified name, including parameter values.
    #[serde(rename = "FullName")]
    pub full_name: Option<String>,
    /// The human-readable description.
    #[serde(rename = "DisplayInfo")]
    pub display_info: Option<String>,
    /// The timing statistics.
    #[serde(rename = "Statistics")]
    pub statistics: Option<Statistics>,
    /// The memory diagnoser data.
    #[serde(rename = "Memory")]
    pub memory: Option<Memory>,
}

impl Entry {
    ///
    /// Returns the join key of the entry.
    ///
    /// `FullName` is preferred as it stays stable when the display format
    /// of the benchmark job changes. Empty names are ignored.
    ///
    pub fn identity(&self) -> Option<&str> {
        self.full_name
            .as_deref()
            .filter(|name| !name.trim().is_empty())
            .or_else(|| {
                self.display_info
                    .as_deref()
                    .filter(|name| !name.trim().is_empty())
            })
    }

    ///
    /// Returns the mean duration in nanoseconds, if measured.
    ///
    pub fn mean(&self) -> Option<f64> {
        self.statistics
            .as_ref()
            .and_then(|statistics| statistics.mean)
            .filter(|mean| mean.is_finite())
    }

    ///
    /// Returns the allocated bytes per operation, if recorded.
    ///
    pub fn bytes_allocated(&self) -> Option<u64> {
        self.memory
            .as_ref()
            .and_then(|memory| memory.bytes_allocated_per_operation)
    }
}
