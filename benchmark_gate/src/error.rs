//!
//! The benchmark gate error.
//!

use std::path::PathBuf;

///
/// The benchmark gate error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The child process could not be started.
    #[error("Spawning `{program}`: {error}")]
    Spawning {
        /// The invoked program.
        program: String,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The child process exited unsuccessfully.
    #[error("`{invocation}` failed with {status}: {stderr}")]
    ChildProcess {
        /// The failed command line.
        invocation: String,
        /// The exit code or the terminating signal.
        status: String,
        /// The captured standard error.
        stderr: String,
    },
    /// The revision history between two revisions is unavailable.
    #[error("Listing changes between `{from}` and `{to}`: {reason}")]
    HistoryLookup {
        /// The older revision.
        from: String,
        /// The newer revision.
        to: String,
        /// The failure description.
        reason: String,
    },
    /// The current revision is empty.
    #[error("`git rev-parse HEAD` returned an empty revision")]
    EmptyRevision,
    /// Error reading the revision marker.
    #[error("Reading revision marker {path:?}: {error}")]
    MarkerReading {
        /// The marker path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// Error writing the revision marker.
    #[error("Writing revision marker {path:?}: {error}")]
    MarkerWriting {
        /// The marker path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// Error making the runner script executable.
    #[error("Making runner script {path:?} executable: {error}")]
    RunnerPermissions {
        /// The runner script path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// Error reading the configuration file.
    #[error("Reading configuration file {path:?}: {error}")]
    ConfigReading {
        /// The configuration path.
        path: PathBuf,
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// Error parsing the configuration file.
    #[error("Parsing configuration file {path:?}: {error}")]
    ConfigParsing {
        /// The configuration path.
        path: PathBuf,
        /// The underlying JSON parsing error.
        error: serde_json::Error,
    },
}
