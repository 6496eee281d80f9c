//!
//! The benchmark gate library.
//!

pub mod config;
pub mod decision;
pub mod error;
pub mod git;
pub mod marker;
pub mod process;
pub mod runner;
pub mod state;


use colored::Colorize;

pub use self::config::Config;
pub use self::decision::Decision;
pub use self::error::Error;
pub use self::git::Git;
pub use self::marker::RevisionMarker;
pub use self::process::invocation::Invocation;
pub use self::process::output::Output as ProcessOutput;
pub use self::process::system::SystemProcess;
pub use self::process::Subprocess;
pub use self::runner::BenchmarkRunner;
pub use self::state::State;

///
/// The outcome of inspecting the repository.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// The determined state.
    pub state: State,
    /// The checked out revision.
    pub current_revision: String,
    /// The revision of the last recorded run.
    pub last_revision: Option<String>,
}

///
/// Decides whether the benchmarks must run, and runs them.
///
pub struct Gate<P: Subprocess> {
    /// The configuration.
    config: Config,
    /// The child process capability.
    process: P,
    /// Suppresses the progress output.
    quiet: bool,
}

impl<P: Subprocess> Gate<P> {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(config: Config, process: P, quiet: bool) -> Self {
        Self {
            config,
            process,
            quiet,
        }
    }

    ///
    /// Returns the configuration.
    ///
    pub fn config(&self) -> &Config {
        &self.config
    }

    ///
    /// Returns the child process capability.
    ///
    pub fn process(&self) -> &P {
        &self.process
    }

    ///
    /// Determines the state from the revision marker and the repository history.
    ///
    /// The changed paths are only listed if the marker differs from the
    /// current revision. If they cannot be listed, changes are assumed.
    ///
    pub fn evaluate(&self) -> Result<Evaluation, Error> {
        let git = Git::new(&self.process, self.config.repository.as_path());

        let current_revision = git.current_revision()?;
        let last_revision = self.marker().read()?;

        let state = match last_revision.as_deref() {
            None => State::NoPriorMarker,
            Some(last_revision) if last_revision == current_revision => {
                State::MarkerEqualsCurrentRevision
            }
            Some(last_revision) => match git.path_changes(
                last_revision,
                current_revision.as_str(),
                self.config.exclude_prefix(),
            ) {
                Ok(true) => State::MarkerDiffersAndPathsChanged,
                Ok(false) => State::MarkerDiffersAndNoRelevantChange,
                Err(error) => {
                    if !self.quiet {
                        eprintln!(
                            "{} {error}. Assuming changes.",
                            "Warning:".bright_yellow().bold()
                        );
                    }
                    State::MarkerDiffersAndPathsChanged
                }
            },
        };

        Ok(Evaluation {
            state,
            current_revision,
            last_revision,
        })
    }

    ///
    /// Evaluates the repository and runs the benchmarks if needed.
    ///
    /// The marker is only updated after the runner has succeeded.
    ///
    pub fn run(&self, filters: &[String]) -> Result<Decision, Error> {
        let evaluation = self.evaluate()?;
        self.print_status(
            "Revision",
            format!(
                "{} (last run: {})",
                evaluation.current_revision,
                evaluation.last_revision.as_deref().unwrap_or("none")
            ),
        );

        let decision = evaluation.state.decision();
        match decision {
            Decision::ShouldRun => {
                self.print_status("Running", format!("benchmarks: {}", evaluation.state));
                let runner_path = self.config.runner_path();
                let runner = BenchmarkRunner::new(
                    &self.process,
                    runner_path.as_path(),
                    self.config.job.as_str(),
                );
                let output = runner.run(filters)?;
                if !self.quiet && !output.stdout.is_empty() {
                    print!("{}", output.stdout);
                }

                let marker = self.marker();
                marker.write(evaluation.current_revision.as_str())?;
                self.print_status(
                    "Recorded",
                    format!(
                        "{} in {}",
                        evaluation.current_revision,
                        marker.path().to_string_lossy()
                    ),
                );
            }
            Decision::ShouldSkip => {
                self.print_status("Skipped", format!("benchmarks: {}", evaluation.state));
            }
        }

        Ok(decision)
    }

    fn marker(&self) -> RevisionMarker {
        RevisionMarker::new(self.config.marker_path())
    }

    fn print_status(&self, status: &str, message: String) {
        if self.quiet {
            return;
        }
        println!("{:>12} {message}", status.bright_green().bold());
    }
}
