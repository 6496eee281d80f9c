//!
//! Results document reading error.
//!

use std::path::PathBuf;

///
/// Results document reading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the results document.
    #[error("Reading results document {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the results document.
        path: PathBuf,
    },
    /// Error parsing the results document.
    #[error("Parsing results document {path:?}: {error}")]
    Parsing {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the results document.
        path: PathBuf,
    },
    /// Empty file error.
    #[error("Results document {path:?} is empty")]
    EmptyFile {
        /// The path to the results document.
        path: PathBuf,
    },
    /// A benchmark entry has neither `FullName` nor `DisplayInfo`.
    #[error("Results document {path:?}: benchmark #{index} has no `FullName` or `DisplayInfo`")]
    MissingIdentity {
        /// The path to the results document.
        path: PathBuf,
        /// The position of the entry in the `Benchmarks` collection.
        index: usize,
    },
}

impl Error {
    ///
    /// Returns the path of the document that failed to load.
    ///
    pub fn path(&self) -> &std::path::Path {
        match self {
            Self::Reading { path, .. }
            | Self::Parsing { path, .. }
            | Self::EmptyFile { path }
            | Self::MissingIdentity { path, .. } => path.as_path(),
        }
    }
}
