//!
//! A baseline and current results document compared with each other.
//!

use std::collections::BTreeMap;
use std::path::Path;
use std::path::PathBuf;

///
/// A baseline and current results document compared with each other.
///
/// Either document may not exist, in which case it is compared as an empty set.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pair {
    /// The baseline results document.
    pub baseline: PathBuf,
    /// The current results document.
    pub current: PathBuf,
}

impl Pair {
    /// The pattern of results documents inside a directory.
    pub const RESOLUTION_PATTERN: &'static str = "**/*.json";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(baseline: PathBuf, current: PathBuf) -> Self {
        Self { baseline, current }
    }

    ///
    /// Resolves the inputs into document pairs.
    ///
    /// Two files form a single pair. Two directories are scanned for JSON
    /// documents which are paired by their path relative to the directory.
    ///
    pub fn collect(baseline: &Path, current: &Path) -> anyhow::Result<Vec<Self>> {
        match (baseline.is_dir(), current.is_dir()) {
            (false, false) => Ok(vec![Self::new(baseline.to_owned(), current.to_owned())]),
            (true, true) => {
                let mut documents: BTreeMap<PathBuf, (Option<PathBuf>, Option<PathBuf>)> =
                    BTreeMap::new();
                for path in Self::resolve(baseline)? {
                    let relative = path.strip_prefix(baseline)?.to_path_buf();
                    documents.entry(relative).or_default().0 = Some(path);
                }
                for path in Self::resolve(current)? {
                    let relative = path.strip_prefix(current)?.to_path_buf();
                    documents.entry(relative).or_default().1 = Some(path);
                }

                Ok(documents
                    .into_iter()
                    .map(|(relative, (baseline_path, current_path))| {
                        Self::new(
                            baseline_path.unwrap_or_else(|| baseline.join(relative.as_path())),
                            current_path.unwrap_or_else(|| current.join(relative.as_path())),
                        )
                    })
                    .collect())
            }
            (true, false) => anyhow::bail!(
                "Expected the current results {current:?} to be a directory like the baseline {baseline:?}"
            ),
            (false, true) => anyhow::bail!(
                "Expected the current results {current:?} to be a file like the baseline {baseline:?}"
            ),
        }
    }

    ///
    /// Returns the name used as the report title.
    ///
    pub fn title(&self) -> String {
        self.current
            .file_name()
            .or_else(|| self.baseline.file_name())
            .map(|name| name.to_string_lossy().to_string())
            .unwrap_or_else(|| self.current.to_string_lossy().to_string())
    }

    ///
    /// Lists the JSON documents inside the directory.
    ///
    fn resolve(directory: &Path) -> anyhow::Result<Vec<PathBuf>> {
        let resolution_pattern = format!(
            "{}/{}",
            directory.to_string_lossy(),
            Self::RESOLUTION_PATTERN
        );
        let paths = glob::glob(resolution_pattern.as_str())?
            .filter_map(Result::ok)
            .filter(|path| path.is_file())
            .collect();
        Ok(paths)
    }
}
