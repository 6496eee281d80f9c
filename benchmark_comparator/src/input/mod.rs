//!
//! Benchmark results input.
//!

pub mod document;
pub mod entry;
pub mod error;
pub mod pair;

use std::path::Path;

use crate::model::result_set::ResultSet;

use self::document::Document;
use self::error::Error as InputError;

impl TryFrom<&Path> for ResultSet {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let document: Document =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Self::try_from_document(document, path)
    }
}
