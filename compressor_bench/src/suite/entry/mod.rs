//!
//! The suite file entry.
//!

pub mod standard;
pub mod tudocomp;

use crate::compressor::Compressor;

use self::standard::Standard;
use self::tudocomp::Tudocomp;

///
/// The suite file entry.
///
/// Only the two compressor shapes are accepted.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Entry {
    /// The `tudocomp` driver with an algorithm.
    Tudocomp(Tudocomp),
    /// An external compressor working with standard streams.
    Standard(Standard),
}

impl Entry {
    ///
    /// Builds the compressor.
    ///
    pub fn into_compressor(self, tudocomp_binary: &str) -> anyhow::Result<Compressor> {
        match self {
            Self::Tudocomp(entry) => entry.into_compressor(tudocomp_binary),
            Self::Standard(entry) => entry.into_compressor(),
        }
    }
}
