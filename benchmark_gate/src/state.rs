//!
//! The benchmark gate state.
//!

use crate::decision::Decision;

///
/// The benchmark gate state, determined once per invocation.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum State {
    /// No benchmark run has been recorded yet.
    NoPriorMarker,
    /// No commits since the recorded run.
    MarkerEqualsCurrentRevision,
    /// Tracked paths changed since the recorded run, or the history is unavailable.
    MarkerDiffersAndPathsChanged,
    /// Only excluded paths changed since the recorded run.
    MarkerDiffersAndNoRelevantChange,
}

impl State {
    ///
    /// Returns the decision for the state.
    ///
    pub fn decision(&self) -> Decision {
        match self {
            Self::NoPriorMarker | Self::MarkerDiffersAndPathsChanged => Decision::ShouldRun,
            Self::MarkerEqualsCurrentRevision | Self::MarkerDiffersAndNoRelevantChange => {
                Decision::ShouldSkip
            }
        }
    }
}

impl std::fmt::Display for State {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NoPriorMarker => write!(f, "no previous run recorded"),
            Self::MarkerEqualsCurrentRevision => write!(f, "no new commits since the last run"),
            Self::MarkerDiffersAndPathsChanged => write!(f, "changes detected since the last run"),
            Self::MarkerDiffersAndNoRelevantChange => {
                write!(f, "only excluded paths changed since the last run")
            }
        }
    }
}
