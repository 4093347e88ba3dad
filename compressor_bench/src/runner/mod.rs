//!
//! The external executable runner.
//!

pub mod error;
pub mod process;

use std::path::Path;

use crate::execution::Execution;

use self::error::Error;

///
/// The external executable runner.
///
pub trait Runner {
    ///
    /// Runs `execution` to completion with the concrete `input` and `output` paths.
    ///
    /// Returns the elapsed wall-clock time in seconds.
    ///
    fn run(&mut self, execution: &Execution, input: &Path, output: &Path) -> Result<f64, Error>;
}
