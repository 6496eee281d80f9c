//!
//! The revision control lookups.
//!

use std::path::Path;

use crate::error::Error;
use crate::process::invocation::Invocation;
use crate::process::Subprocess;

///
/// The revision control lookups, performed with the `git` executable.
///
pub struct Git<'a, P: Subprocess> {
    /// The child process capability.
    process: &'a P,
    /// The repository root.
    repository: &'a Path,
}

impl<'a, P: Subprocess> Git<'a, P> {
    /// The `git` executable name.
    pub const EXECUTABLE: &'static str = "git";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(process: &'a P, repository: &'a Path) -> Self {
        Self {
            process,
            repository,
        }
    }

    ///
    /// Returns the revision checked out in the repository.
    ///
    pub fn current_revision(&self) -> Result<String, Error> {
        let invocation = self.invocation().args(["rev-parse", "HEAD"]);
        let output = self.process.run(&invocation)?.check(&invocation)?;
        let revision = output.stdout.trim().to_owned();
        if revision.is_empty() {
            return Err(Error::EmptyRevision);
        }
        Ok(revision)
    }

    ///
    /// Lists the paths changed between two revisions.
    ///
    /// Any failure, including an unreachable revision, is reported as
    /// [`Error::HistoryLookup`].
    ///
    pub fn changed_paths(&self, from: &str, to: &str) -> Result<Vec<String>, Error> {
        let invocation = self
            .invocation()
            .args(["diff", "--name-only", from, to, "--"]);
        let output = self
            .process
            .run(&invocation)
            .and_then(|output| output.check(&invocation))
            .map_err(|error| Error::HistoryLookup {
                from: from.to_owned(),
                to: to.to_owned(),
                reason: error.to_string(),
            })?;
        Ok(output
            .stdout
            .lines()
            .map(str::trim)
            .filter(|path| !path.is_empty())
            .map(str::to_owned)
            .collect())
    }

    ///
    /// Whether any path outside `exclude_prefix` changed between two revisions.
    ///
    pub fn path_changes(&self, from: &str, to: &str, exclude_prefix: &str) -> Result<bool, Error> {
        let paths = self.changed_paths(from, to)?;
        Ok(paths
            .iter()
            .any(|path| !is_excluded(path.as_str(), exclude_prefix)))
    }

    fn invocation(&self) -> Invocation {
        Invocation::new(Self::EXECUTABLE).current_dir(self.repository)
    }
}

///
/// Whether the repository-relative path lies under the prefix.
///
/// The prefix is matched by whole path components, so `scripts` covers
/// `scripts/run.sh` but not `scripts-old/run.sh`. An empty prefix excludes nothing.
///
pub fn is_excluded(path: &str, prefix: &str) -> bool {
    let prefix = prefix.trim_end_matches('/');
    if prefix.is_empty() {
        return false;
    }
    match path.strip_prefix(prefix) {
        Some(rest) => rest.is_empty() || rest.starts_with('/'),
        None => false,
    }
}
