//!
//! The benchmark results of one suite execution.
//!

use std::collections::BTreeMap;
use std::path::Path;

use crate::input::document::Document;
use crate::input::error::Error as InputError;
use crate::model::benchmark_result::BenchmarkResult;

///
/// The benchmark results of one suite execution, keyed by identity.
///
/// If a document repeats an identity, the last entry wins.
///
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ResultSet {
    /// The results ordered by identity.
    pub results: BTreeMap<String, BenchmarkResult>,
}

impl ResultSet {
    ///
    /// Builds the set from a parsed results document.
    ///
    pub fn try_from_document(document: Document, path: &Path) -> Result<Self, InputError> {
        let mut result_set = Self::default();
        for (index, entry) in document.benchmarks.into_iter().enumerate() {
            let identity = entry
                .identity()
                .ok_or_else(|| InputError::MissingIdentity {
                    path: path.to_path_buf(),
                    index,
                })?
                .to_owned();
            result_set.insert(BenchmarkResult::new(
                identity,
                entry.mean(),
                entry.bytes_allocated(),
            ));
        }
        Ok(result_set)
    }

    ///
    /// Loads the set, falling back to an empty one if the document is unusable.
    ///
    /// The error is returned alongside so that the caller can report it.
    ///
    pub fn load_lenient(path: &Path) -> (Self, Option<InputError>) {
        match Self::try_from(path) {
            Ok(result_set) => (result_set, None),
            Err(error) => (Self::default(), Some(error)),
        }
    }

    ///
    /// Inserts a result, returning the one it replaced.
    ///
    pub fn insert(&mut self, result: BenchmarkResult) -> Option<BenchmarkResult> {
        self.results.insert(result.identity.clone(), result)
    }

    ///
    /// Returns the result with the given identity.
    ///
    pub fn get(&self, identity: &str) -> Option<&BenchmarkResult> {
        self.results.get(identity)
    }

    ///
    /// Returns the number of results.
    ///
    pub fn len(&self) -> usize {
        self.results.len()
    }

    ///
    /// Whether the set has no results.
    ///
    pub fn is_empty(&self) -> bool {
        self.results.is_empty()
    }
}

impl FromIterator<BenchmarkResult> for ResultSet {
    fn from_iter<I: IntoIterator<Item = BenchmarkResult>>(iter: I) -> Self {
        let mut result_set = Self::default();
        for result in iter {
            result_set.insert(result);
        }
        result_set
    }
}
