//!
//! The `tudocomp` driver suite entry.
//!

use crate::compressor::Compressor;

///
/// The `tudocomp` driver suite entry.
///
#[derive(Debug, Clone, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Tudocomp {
    /// The display name.
    pub name: String,
    /// The algorithm passed via `-a`.
    pub algorithm: String,
    /// The driver path. Defaults to the run-wide driver path.
    #[serde(default)]
    pub binary: Option<String>,
    /// The extra compression flags.
    #[serde(default)]
    pub compress_flags: Vec<String>,
    /// The extra decompression flags.
    #[serde(default)]
    pub decompress_flags: Vec<String>,
}

impl Tudocomp {
    ///
    /// Builds the compressor, using `default_binary` unless the entry sets its own.
    ///
    pub fn into_compressor(self, default_binary: &str) -> anyhow::Result<Compressor> {
        let binary = self.binary.as_deref().unwrap_or(default_binary);
        Compressor::tudocomp(
            self.name,
            self.algorithm.as_str(),
            binary,
            self.compress_flags,
            self.decompress_flags,
        )
    }
}
