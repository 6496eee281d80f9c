//!
//! The benchmark gate arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark gate arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// Suppresses the progress output and warnings.
    #[arg(short, long)]
    pub quiet: bool,

    /// Benchmark name filters passed to the runner. Runs every benchmark if unset.
    pub filters: Vec<String>,

    /// The JSON configuration file. Command line options take precedence.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// The repository root.
    #[arg(long)]
    pub repository: Option<PathBuf>,

    /// The revision marker file, relative to the repository root.
    #[arg(long)]
    pub marker: Option<PathBuf>,

    /// Changes under this repository path do not trigger a run.
    #[arg(long)]
    pub exclude: Option<String>,

    /// The benchmark runner script, relative to the repository root.
    #[arg(long)]
    pub runner: Option<PathBuf>,

    /// The runner job profile.
    #[arg(long)]
    pub job: Option<String>,
}

impl Arguments {
    ///
    /// Builds the configuration from the optional file and the overrides.
    ///
    pub fn config(&self) -> anyhow::Result<benchmark_gate::Config> {
        let mut config = match self.config.as_deref() {
            Some(path) => benchmark_gate::Config::try_from(path)?,
            None => benchmark_gate::Config::default(),
        };
        if let Some(repository) = self.repository.as_ref() {
            config.repository = repository.to_owned();
        }
        if let Some(marker) = self.marker.as_ref() {
            config.marker = marker.to_owned();
        }
        if let Some(exclude) = self.exclude.as_ref() {
            config.exclude = exclude.to_owned();
        }
        if let Some(runner) = self.runner.as_ref() {
            config.runner = runner.to_owned();
        }
        if let Some(job) = self.job.as_ref() {
            config.job = job.to_owned();
        }

        config.repository = std::fs::canonicalize(config.repository.as_path()).map_err(|error| {
            anyhow::anyhow!("Repository {:?} resolving: {error}", config.repository)
        })?;
        Ok(config)
    }
}
