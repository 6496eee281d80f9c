//!
//! The benchmark gate binary.
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
    let config = arguments.config()?;
    if !arguments.quiet {
        println!(
            "    {} {} v{} in {}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
            config.repository.to_string_lossy(),
        );
    }

    let gate = benchmark_gate::Gate::new(config, benchmark_gate::SystemProcess, arguments.quiet);
    gate.run(arguments.filters.as_slice())?;

    Ok(())
}
