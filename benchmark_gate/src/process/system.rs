//!
//! The operating system child processes.
//!

use crate::error::Error;
use crate::process::invocation::Invocation;
use crate::process::output::Output;
use crate::process::Subprocess;

///
/// Spawns real child processes and blocks until they exit.
///
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemProcess;

impl Subprocess for SystemProcess {
    fn run(&self, invocation: &Invocation) -> Result<Output, Error> {
        let mut command = std::process::Command::new(invocation.program.as_path());
        command.args(invocation.arguments.iter());
        command.stdin(std::process::Stdio::null());
        if let Some(directory) = invocation.working_directory.as_ref() {
            command.current_dir(directory);
        }

        let output = command.output().map_err(|error| Error::Spawning {
            program: invocation.program.to_string_lossy().to_string(),
            error,
        })?;
        Ok(Output {
            exit_code: output.status.code(),
            stdout: String::from_utf8_lossy(output.stdout.as_slice()).to_string(),
            stderr: String::from_utf8_lossy(output.stderr.as_slice()).to_string(),
        })
    }
}
