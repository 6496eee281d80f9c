//!
//! The BenchmarkDotNet full JSON export.
//!

use crate::input::entry::Entry;

///
/// The BenchmarkDotNet full JSON export.
///
/// Only the benchmark collection is read, the host environment and
/// other top-level sections are ignored.
///
#[derive(Debug, serde::Deserialize)]
pub struct Document {
    /// The measured benchmark cases.
    #[serde(rename = "Benchmarks")]
    pub benchmarks: Vec<Entry>,
}
