//!
//! The external executable invocation error.
//!

use std::path::PathBuf;

///
/// The external executable invocation error.
///
/// Always describes a failure of a single compressor on a single file.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// The output left by a previous run cannot be removed.
    #[error("Removing stale output file {path:?}: {error}")]
    StaleOutput {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
    /// The input file cannot be opened for the standard input.
    #[error("Opening input file {path:?}: {error}")]
    Input {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the input file.
        path: PathBuf,
    },
    /// The output file cannot be created for the standard output.
    #[error("Creating output file {path:?}: {error}")]
    Output {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the output file.
        path: PathBuf,
    },
    /// The run log cannot be attached to the child process.
    #[error("Attaching the run log: {error}")]
    Log {
        /// The underlying IO error.
        error: std::io::Error,
    },
    /// The executable cannot be spawned, usually because it does not exist.
    #[error("`{executable}` spawning: {error}")]
    Spawning {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: String,
    },
    /// The child process cannot be waited for.
    #[error("`{executable}` waiting: {error}")]
    Waiting {
        /// The underlying IO error.
        error: std::io::Error,
        /// The executable path.
        executable: String,
    },
    /// The executable has exited unsuccessfully.
    #[error("`{executable}` exited with {status}")]
    ExitStatus {
        /// The process exit status.
        status: std::process::ExitStatus,
        /// The executable path.
        executable: String,
    },
}
