//!
//! The standard stream compressor suite entry.
//!

use crate::compressor::Compressor;

///
/// The standard stream compressor suite entry.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Standard {
    /// The display name.
    pub name: String,
    /// The executable path.
    pub binary: String,
    /// The compression flags.
    #[serde(default)]
    pub compress_flags: Vec<String>,
    /// The decompression flags.
    #[serde(default)]
    pub decompress_flags: Vec<String>,
}

impl Standard {
    ///
    /// Builds the compressor.
    ///
    pub fn into_compressor(self) -> anyhow::Result<Compressor> {
        Compressor::standard(
            self.name,
            self.binary.as_str(),
            self.compress_flags,
            self.decompress_flags,
        )
    }
}
