//!
//! The benchmark comparator library.
//!

pub mod comparison;
pub mod input;
pub mod model;
pub mod output;
pub mod util;

mod tests;

pub use crate::comparison::join;
pub use crate::comparison::join_with;
pub use crate::comparison::row::Row as ComparisonRow;
pub use crate::comparison::status::Status;
pub use crate::comparison::thresholds::Thresholds;
pub use crate::comparison::thresholds::REGRESSION_THRESHOLD_PERCENT;
pub use crate::comparison::Comparison;
pub use crate::input::document::Document as ResultsDocument;
pub use crate::input::error::Error as InputError;
pub use crate::input::pair::Pair as InputPair;
pub use crate::model::benchmark_result::BenchmarkResult;
pub use crate::model::result_set::ResultSet;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::Output;
