//!
//! The compression or decompression phase measurement.
//!

use super::memory::Memory;

///
/// The compression or decompression phase measurement.
///
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Phase {
    /// The median wall-clock time in seconds.
    pub time: f64,
    /// The peak heap size.
    pub memory: Memory,
}

impl Phase {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(time: f64, memory: Memory) -> Self {
        Self { time, memory }
    }
}
