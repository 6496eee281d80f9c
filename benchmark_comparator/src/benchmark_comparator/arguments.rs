//!
//! The benchmark comparator arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The benchmark comparator arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the warnings and the summary.
    #[arg(short, long)]
    pub quiet: bool,

    /// The baseline results document, or a directory with them.
    pub baseline: PathBuf,

    /// The current results document, or a directory with them.
    pub current: PathBuf,

    /// The report file. If unset, the report is printed to `stdout`.
    pub output_path: Option<PathBuf>,

    /// Report format: `markdown`, `json`, or `text`.
    /// Defaults to `markdown` for files and `text` for `stdout`.
    #[arg(long = "output-format")]
    pub output_format: Option<benchmark_comparator::OutputFormat>,
}
