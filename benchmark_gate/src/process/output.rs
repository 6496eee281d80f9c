//!
//! The captured result of a child process.
//!

use crate::error::Error;
use crate::process::invocation::Invocation;

///
/// The captured result of a child process.
///
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Output {
    /// The exit code. `None` if the process was terminated by a signal.
    pub exit_code: Option<i32>,
    /// The captured standard output.
    pub stdout: String,
    /// The captured standard error.
    pub stderr: String,
}

impl Output {
    ///
    /// A shortcut constructor for a successful exit.
    ///
    pub fn success<S: Into<String>>(stdout: S) -> Self {
        Self {
            exit_code: Some(0),
            stdout: stdout.into(),
            stderr: String::new(),
        }
    }

    ///
    /// A shortcut constructor for a failed exit.
    ///
    pub fn failure<S: Into<String>>(exit_code: i32, stderr: S) -> Self {
        Self {
            exit_code: Some(exit_code),
            stdout: String::new(),
            stderr: stderr.into(),
        }
    }

    ///
    /// Whether the process exited with code zero.
    ///
    pub fn is_success(&self) -> bool {
        self.exit_code == Some(0)
    }

    ///
    /// Converts an unsuccessful exit into an error.
    ///
    pub fn check(self, invocation: &Invocation) -> Result<Self, Error> {
        if self.is_success() {
            return Ok(self);
        }
        Err(Error::ChildProcess {
            invocation: invocation.to_string(),
            status: match self.exit_code {
                Some(code) => format!("exit code {code}"),
                None => "a signal".to_owned(),
            },
            stderr: self.stderr.trim().to_owned(),
        })
    }
}
