//!
//! The benchmark gate decision.
//!

///
/// The benchmark gate decision.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Run the benchmarks and record the current revision.
    ShouldRun,
    /// Leave everything as is.
    ShouldSkip,
}
