//!
//! One measured benchmark case.
//!

use once_cell::sync::Lazy;
use regex::Regex;

/// Splits an identity into its dotted method path and the parameter suffix.
static IDENTITY_PARTS: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^(?P<path>[^(\[:]*)(?P<suffix>.*)$").expect("Always valid")
});

///
/// One measured benchmark case.
///
#[derive(Debug, Clone, PartialEq)]
pub struct BenchmarkResult {
    /// The join key across two results documents.
    pub identity: String,
    /// The shortened name used in reports.
    pub display_name: String,
    /// The mean operation duration in nanoseconds.
    pub mean_duration_ns: Option<f64>,
    /// The bytes allocated per operation.
    pub bytes_allocated: Option<u64>,
}

impl BenchmarkResult {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(identity: String, mean_duration_ns: Option<f64>, bytes_allocated: Option<u64>) -> Self {
        let display_name = Self::shorten(identity.as_str());
        Self {
            identity,
            display_name,
            mean_duration_ns,
            bytes_allocated,
        }
    }

    ///
    /// Shortens a fully-qualified identity to the method name with its parameters.
    ///
    /// `Variable.Core.Tests.MathBenchmarks.IsPowerOfTwo(n: 1.5)` becomes
    /// `IsPowerOfTwo(n: 1.5)`. Names with fewer than three dotted segments
    /// are kept as is.
    ///
    pub fn shorten(identity: &str) -> String {
        let Some(captures) = IDENTITY_PARTS.captures(identity) else {
            return identity.to_owned();
        };
        let path = captures.name("path").map_or("", |path| path.as_str());
        let suffix = captures.name("suffix").map_or("", |suffix| suffix.as_str());

        let segments: Vec<&str> = path.split('.').collect();
        match segments.last() {
            Some(last) if segments.len() > 2 && !last.is_empty() => format!("{last}{suffix}"),
            _ => identity.to_owned(),
        }
    }
}
