//!
//! The benchmark comparator binary.
//!

pub(crate) mod arguments;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

/// The exit code of a successful run.
const EXIT_CODE_SUCCESS: i32 = 0;

/// The exit code of a failed run.
const EXIT_CODE_FAILURE: i32 = 1;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    let exit_code = match main_inner(arguments) {
        Ok(()) => EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{} {error:?}", "Error:".bright_red().bold());
            EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    let thresholds = benchmark_comparator::Thresholds::default();

    let pairs = benchmark_comparator::InputPair::collect(
        arguments.baseline.as_path(),
        arguments.current.as_path(),
    )?;

    let mut comparisons = Vec::with_capacity(pairs.len());
    for pair in pairs.iter() {
        let (comparison, diagnostics) =
            benchmark_comparator::Comparison::compare_pair(pair, &thresholds);
        if !arguments.quiet {
            for diagnostic in diagnostics.iter() {
                eprintln!(
                    "{} {diagnostic}. Comparing it as an empty set.",
                    "Warning:".bright_yellow().bold()
                );
            }
        }
        comparisons.push(comparison);
    }

    if !arguments.quiet {
        print_summary(comparisons.as_slice());
    }

    let output_format = arguments
        .output_format
        .unwrap_or(match arguments.output_path {
            Some(_) => benchmark_comparator::OutputFormat::Markdown,
            None => benchmark_comparator::OutputFormat::Text,
        });
    if arguments.output_path.is_some() && output_format == benchmark_comparator::OutputFormat::Text
    {
        colored::control::set_override(false);
    }
    let output = benchmark_comparator::Output::from((comparisons.as_slice(), output_format));

    match arguments.output_path {
        Some(output_path) => {
            output.write_to_file(output_path.clone())?;
            if !arguments.quiet {
                eprintln!(
                    "{:>12} {}",
                    "Written".bright_green().bold(),
                    output_path.to_string_lossy()
                );
            }
        }
        None => output.write_to_stdout()?,
    }

    Ok(())
}

///
/// Prints the number of rows per status to `stderr`.
///
fn print_summary(comparisons: &[benchmark_comparator::Comparison]) {
    let rows: usize = comparisons
        .iter()
        .map(|comparison| comparison.rows.len())
        .sum();
    if rows == 0 {
        eprintln!(
            "{} No benchmark data found in either document.",
            "Warning:".bright_yellow().bold()
        );
        return;
    }

    let counts = benchmark_comparator::Status::ALL
        .iter()
        .map(|status| {
            let count: usize = comparisons
                .iter()
                .map(|comparison| comparison.count(*status))
                .sum();
            format!("{count} {}", status.to_string().to_lowercase())
        })
        .collect::<Vec<String>>()
        .join(", ");
    eprintln!(
        "{:>12} {rows} benchmarks: {counts}",
        "Compared".bright_green().bold()
    );
}
