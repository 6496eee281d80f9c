//!
//! The benchmark gate configuration.
//!

use std::path::Path;
use std::path::PathBuf;

use crate::error::Error;

///
/// The benchmark gate configuration.
///
/// Relative paths are resolved against the repository root.
///
#[derive(Debug, Clone, PartialEq, Eq, serde::Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// The repository root.
    pub repository: PathBuf,
    /// The revision marker file.
    pub marker: PathBuf,
    /// Changes under this path do not trigger a run.
    pub exclude: String,
    /// The benchmark runner script.
    pub runner: PathBuf,
    /// The runner job profile.
    pub job: String,
}

impl Config {
    /// The default revision marker file.
    pub const DEFAULT_MARKER: &'static str = "scripts/last_run_commit";

    /// The default excluded directory, containing the automation itself.
    pub const DEFAULT_EXCLUDE: &'static str = "scripts";

    /// The default benchmark runner script.
    pub const DEFAULT_RUNNER: &'static str = "scripts/run-daily-benchmarks.sh";

    /// The default runner job profile, short enough for CI time limits.
    pub const DEFAULT_JOB: &'static str = "short";

    ///
    /// Returns the absolute revision marker path.
    ///
    pub fn marker_path(&self) -> PathBuf {
        self.repository.join(self.marker.as_path())
    }

    ///
    /// Returns the absolute benchmark runner path.
    ///
    pub fn runner_path(&self) -> PathBuf {
        self.repository.join(self.runner.as_path())
    }

    ///
    /// Returns the excluded path prefix without trailing separators.
    ///
    pub fn exclude_prefix(&self) -> &str {
        self.exclude
            .trim_start_matches("./")
            .trim_end_matches('/')
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            repository: PathBuf::from("."),
            marker: PathBuf::from(Self::DEFAULT_MARKER),
            exclude: Self::DEFAULT_EXCLUDE.to_owned(),
            runner: PathBuf::from(Self::DEFAULT_RUNNER),
            job: Self::DEFAULT_JOB.to_owned(),
        }
    }
}

impl TryFrom<&Path> for Config {
    type Error = Error;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::ConfigReading {
            path: path.to_path_buf(),
            error,
        })?;
        let config: Self =
            serde_json::from_str(text.as_str()).map_err(|error| Error::ConfigParsing {
                path: path.to_path_buf(),
                error,
            })?;
        Ok(config)
    }
}
