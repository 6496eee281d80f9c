//!
//! The benchmark results data model.
//!

pub mod benchmark_result;
pub mod result_set;
