//!
//! Provides tools for comparing two benchmark results documents.
//!

pub mod row;
pub mod status;
pub mod thresholds;

use std::path::Path;

use crate::input::error::Error as InputError;
use crate::input::pair::Pair;
use crate::model::result_set::ResultSet;
use crate::util::btreemap::outer_join;

use self::row::Row;
use self::status::Status;
use self::thresholds::Thresholds;

///
/// The comparison of two results documents.
///
#[derive(Debug, Clone)]
pub struct Comparison {
    /// The report title, usually the current document file name.
    pub title: String,
    /// The baseline document label.
    pub baseline_label: String,
    /// The current document label.
    pub current_label: String,
    /// The rows ordered by display name.
    pub rows: Vec<Row>,
}

impl Comparison {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(title: String, baseline_label: String, current_label: String, rows: Vec<Row>) -> Self {
        Self {
            title,
            baseline_label,
            current_label,
            rows,
        }
    }

    ///
    /// Compares a pair of results documents.
    ///
    /// Unusable documents are compared as empty sets. Their errors are
    /// returned for the caller to report, they never abort the comparison.
    ///
    pub fn compare_pair(pair: &Pair, thresholds: &Thresholds) -> (Self, Vec<InputError>) {
        let mut diagnostics = Vec::with_capacity(2);

        let (baseline, error) = ResultSet::load_lenient(pair.baseline.as_path());
        diagnostics.extend(error);
        let (current, error) = ResultSet::load_lenient(pair.current.as_path());
        diagnostics.extend(error);

        let comparison = Self::new(
            pair.title(),
            Self::label(pair.baseline.as_path()),
            Self::label(pair.current.as_path()),
            join_with(baseline, current, thresholds),
        );
        (comparison, diagnostics)
    }

    ///
    /// Returns the number of rows with the given status.
    ///
    pub fn count(&self, status: Status) -> usize {
        self.rows.iter().filter(|row| row.status == status).count()
    }

    ///
    /// Returns whether any row carries allocation data.
    ///
    pub fn has_allocations(&self) -> bool {
        self.rows.iter().any(|row| row.bytes_allocated().is_some())
    }

    fn label(path: &Path) -> String {
        path.to_string_lossy().to_string()
    }
}

///
/// Joins two result sets with the default thresholds.
///
pub fn join(baseline: ResultSet, current: ResultSet) -> Vec<Row> {
    join_with(baseline, current, &Thresholds::default())
}

///
/// Joins two result sets on identity, producing one row per identity present
/// in either set, ordered by display name and then by identity.
///
pub fn join_with(baseline: ResultSet, current: ResultSet, thresholds: &Thresholds) -> Vec<Row> {
    let mut rows: Vec<Row> = outer_join(baseline.results, current.results)
        .map(|(identity, baseline, current)| Row::compare(identity, baseline, current, thresholds))
        .collect();
    rows.sort_by(|a, b| {
        a.display_name
            .cmp(&b.display_name)
            .then_with(|| a.identity.cmp(&b.identity))
    });
    rows
}
