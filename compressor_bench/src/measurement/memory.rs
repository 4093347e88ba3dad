//!
//! The peak memory measurement.
//!

///
/// The peak memory measurement.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Memory {
    /// The memory profiler is not available in this run.
    Unavailable,
    /// The peak heap size in bytes.
    Peak(u64),
}

impl std::fmt::Display for Memory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Unavailable => f.pad("(N/A)"),
            Self::Peak(bytes) => f.pad(crate::format::size(*bytes).as_str()),
        }
    }
}
