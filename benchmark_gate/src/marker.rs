//!
//! The revision marker file.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The revision marker file, holding the revision of the last benchmark run.
///
#[derive(Debug, Clone)]
pub struct RevisionMarker {
    /// The marker file path.
    path: PathBuf,
}

impl RevisionMarker {
    /// The extension of the file written before it replaces the marker.
    const TEMPORARY_EXTENSION: &'static str = "tmp";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    ///
    /// Returns the marker file path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Reads the recorded revision.
    ///
    /// A missing or blank file means there was no run yet.
    ///
    pub fn read(&self) -> Result<Option<String>, Error> {
        match std::fs::read_to_string(self.path.as_path()) {
            Ok(text) => {
                let revision = text.trim();
                Ok((!revision.is_empty()).then(|| revision.to_owned()))
            }
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(error) => Err(Error::MarkerReading {
                path: self.path.clone(),
                error,
            }),
        }
    }

    ///
    /// Replaces the recorded revision.
    ///
    /// The revision is written to a sibling file first and renamed over the
    /// marker, so an interrupted write leaves the previous revision intact.
    ///
    pub fn write(&self, revision: &str) -> Result<(), Error> {
        let map_error = |error| Error::MarkerWriting {
            path: self.path.clone(),
            error,
        };

        if let Some(parent) = self.path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(map_error)?;
        }
        let temporary_path = self.path.with_extension(Self::TEMPORARY_EXTENSION);
        std::fs::write(temporary_path.as_path(), revision).map_err(map_error)?;
        std::fs::rename(temporary_path.as_path(), self.path.as_path()).map_err(map_error)?;
        Ok(())
    }
}
