//!
//! The execution input or output wiring.
//!

use std::ffi::OsString;
use std::path::Path;

///
/// The execution input or output wiring.
///
/// Describes how a concrete file path is handed over to the executable.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Wiring {
    /// The file is connected to the standard input or output stream.
    Stream,
    /// The path is appended to the argument list as is.
    Path,
    /// The path is appended to the argument list after the specified flag.
    Flagged(String),
}

impl Wiring {
    ///
    /// A shortcut constructor.
    ///
    pub fn flagged<S>(flag: S) -> Self
    where
        S: Into<String>,
    {
        Self::Flagged(flag.into())
    }

    ///
    /// Whether the file is connected to a standard stream.
    ///
    pub fn is_stream(&self) -> bool {
        matches!(self, Self::Stream)
    }

    ///
    /// Returns the arguments supplying `path` to the executable.
    ///
    pub fn arguments(&self, path: &Path) -> Vec<OsString> {
        match self {
            Self::Stream => vec![],
            Self::Path => vec![path.as_os_str().to_owned()],
            Self::Flagged(flag) => vec![OsString::from(flag), path.as_os_str().to_owned()],
        }
    }
}

impl std::fmt::Display for Wiring {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Stream => write!(f, "stream"),
            Self::Path => write!(f, "path"),
            Self::Flagged(flag) => write!(f, "flagged `{flag}`"),
        }
    }
}
