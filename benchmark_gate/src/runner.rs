//!
//! The external benchmark runner.
//!

use std::path::Path;

use crate::error::Error;
use crate::process::invocation::Invocation;
use crate::process::output::Output;
use crate::process::Subprocess;

///
/// The external benchmark runner script.
///
pub struct BenchmarkRunner<'a, P: Subprocess> {
    /// The child process capability.
    process: &'a P,
    /// The runner script.
    executable: &'a Path,
    /// The job profile.
    job: &'a str,
}

impl<'a, P: Subprocess> BenchmarkRunner<'a, P> {
    /// The filter matching every benchmark.
    pub const DEFAULT_FILTER: &'static str = "*";

    /// The executable permission bits for all users.
    #[cfg(unix)]
    const EXECUTABLE_BITS: u32 = 0o111;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(process: &'a P, executable: &'a Path, job: &'a str) -> Self {
        Self {
            process,
            executable,
            job,
        }
    }

    ///
    /// Builds the runner command line.
    ///
    /// The script runs from its own directory, as it resolves the benchmark
    /// project relative to it.
    ///
    pub fn invocation(&self, filters: &[String]) -> Invocation {
        let mut invocation = Invocation::new(self.executable);
        invocation = if filters.is_empty() {
            invocation.arg(Self::DEFAULT_FILTER)
        } else {
            invocation.args(filters.iter().cloned())
        };
        invocation = invocation.args(["--job", self.job]);
        match self.executable.parent() {
            Some(directory) if !directory.as_os_str().is_empty() => invocation.current_dir(directory),
            _ => invocation,
        }
    }

    ///
    /// Runs the benchmarks, failing on an unsuccessful exit.
    ///
    pub fn run(&self, filters: &[String]) -> Result<Output, Error> {
        self.make_executable()?;
        let invocation = self.invocation(filters);
        self.process.run(&invocation)?.check(&invocation)
    }

    ///
    /// Sets the executable bits of the runner script.
    ///
    /// A missing script is left for the spawn to report.
    ///
    #[cfg(unix)]
    pub fn make_executable(&self) -> Result<(), Error> {
        use std::os::unix::fs::PermissionsExt;

        let map_error = |error| Error::RunnerPermissions {
            path: self.executable.to_path_buf(),
            error,
        };

        let metadata = match std::fs::metadata(self.executable) {
            Ok(metadata) => metadata,
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => return Ok(()),
            Err(error) => return Err(map_error(error)),
        };
        let mut permissions = metadata.permissions();
        let mode = permissions.mode();
        if mode & Self::EXECUTABLE_BITS == Self::EXECUTABLE_BITS {
            return Ok(());
        }
        permissions.set_mode(mode | Self::EXECUTABLE_BITS);
        std::fs::set_permissions(self.executable, permissions).map_err(map_error)
    }

    ///
    /// Sets the executable bits of the runner script.
    ///
    /// Only Unix file systems carry them.
    ///
    #[cfg(not(unix))]
    pub fn make_executable(&self) -> Result<(), Error> {
        Ok(())
    }
}
