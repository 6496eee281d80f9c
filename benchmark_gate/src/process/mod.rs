//!
//! The child process capability.
//!

pub mod invocation;
pub mod output;
pub mod system;

use self::invocation::Invocation;
use self::output::Output;

use crate::error::Error;

///
/// Runs a child process to completion, capturing its output.
///
/// Decision logic only talks to child processes through this trait, so that
/// tests can script the outcomes instead of spawning real ones.
///
pub trait Subprocess {
    ///
    /// Runs the invocation and waits for it to exit.
    ///
    /// An unsuccessful exit is not an error at this level.
    ///
    fn run(&self, invocation: &Invocation) -> Result<Output, Error>;
}
