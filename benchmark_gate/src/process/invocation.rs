//!
//! A child process command line.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// A child process command line.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    /// The executable.
    pub program: PathBuf,
    /// The arguments.
    pub arguments: Vec<String>,
    /// The working directory. Inherited if unset.
    pub working_directory: Option<PathBuf>,
}

impl Invocation {
    ///
    /// A shortcut constructor.
    ///
    pub fn new<P: Into<PathBuf>>(program: P) -> Self {
        Self {
            program: program.into(),
            arguments: Vec::new(),
            working_directory: None,
        }
    }

    ///
    /// Appends an argument.
    ///
    pub fn arg<S: Into<String>>(mut self, argument: S) -> Self {
        self.arguments.push(argument.into());
        self
    }

    ///
    /// Appends several arguments.
    ///
    pub fn args<I, S>(mut self, arguments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.arguments.extend(arguments.into_iter().map(Into::into));
        self
    }

    ///
    /// Sets the working directory.
    ///
    pub fn current_dir<P: AsRef<Path>>(mut self, directory: P) -> Self {
        self.working_directory = Some(directory.as_ref().to_path_buf());
        self
    }

    ///
    /// Returns the first argument, which is the subcommand for tools like `git`.
    ///
    pub fn subcommand(&self) -> Option<&str> {
        self.arguments.first().map(String::as_str)
    }
}

impl std::fmt::Display for Invocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.program.to_string_lossy())?;
        for argument in self.arguments.iter() {
            write!(f, " {argument}")?;
        }
        Ok(())
    }
}
