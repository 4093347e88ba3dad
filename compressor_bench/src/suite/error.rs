//!
//! The suite file loading error.
//!

use std::path::PathBuf;

///
/// The suite file loading error.
///
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Error reading the suite file.
    #[error("Reading suite file {path:?}: {error}")]
    Reading {
        /// The underlying IO error.
        error: std::io::Error,
        /// The path to the suite file.
        path: PathBuf,
    },
    /// Error parsing the suite file as JSON.
    #[error("Parsing suite file {path:?}: {error}")]
    ParsingJson {
        /// The underlying JSON parsing error.
        error: serde_json::Error,
        /// The path to the suite file.
        path: PathBuf,
    },
    /// Error parsing the suite file as YAML.
    #[error("Parsing suite file {path:?}: {error}")]
    ParsingYaml {
        /// The underlying YAML parsing error.
        error: serde_yaml::Error,
        /// The path to the suite file.
        path: PathBuf,
    },
    /// The suite has no compressors.
    #[error("Suite is empty")]
    Empty,
    /// A suite entry cannot be turned into a compressor.
    #[error("Suite entry #{index}: {error}")]
    Malformed {
        /// The entry index, starting from one.
        index: usize,
        /// The validation error.
        error: anyhow::Error,
    },
    /// Two compressors share a name.
    #[error("Suite contains compressor `{name}` more than once")]
    DuplicateName {
        /// The duplicated name.
        name: String,
    },
}
