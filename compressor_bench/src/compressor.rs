//!
//! The compressor under comparison.
//!

use crate::execution::wiring::Wiring;
use crate::execution::Execution;

///
/// The compressor under comparison.
///
/// Pairs a display name with the compression and decompression executions.
///
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Compressor {
    /// The unique display name.
    name: String,
    /// The compression execution.
    compress: Execution,
    /// The decompression execution.
    decompress: Execution,
}

impl Compressor {
    /// The default path to the `tudocomp` driver.
    pub const TUDOCOMP_DEFAULT_BINARY: &'static str = "./tdc";

    /// The `tudocomp` driver output flag.
    const TUDOCOMP_OUTPUT_FLAG: &'static str = "--output";

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, compress: Execution, decompress: Execution) -> anyhow::Result<Self> {
        if name.trim().is_empty() {
            anyhow::bail!("The compressor name is empty");
        }

        Ok(Self {
            name,
            compress,
            decompress,
        })
    }

    ///
    /// Creates a `tudocomp` driver compressor running `algorithm`.
    ///
    /// The output path is passed via `--output`, and the input path is appended.
    ///
    pub fn tudocomp(
        name: String,
        algorithm: &str,
        binary: &str,
        compress_flags: Vec<String>,
        decompress_flags: Vec<String>,
    ) -> anyhow::Result<Self> {
        if algorithm.trim().is_empty() {
            anyhow::bail!("The `{name}` compressor algorithm is empty");
        }

        let mut compress = vec![binary.to_owned(), "-a".to_owned(), algorithm.to_owned()];
        compress.extend(compress_flags);
        let mut decompress = vec![binary.to_owned(), "-d".to_owned()];
        decompress.extend(decompress_flags);

        let compress = Execution::new(
            compress,
            Wiring::Path,
            Wiring::flagged(Self::TUDOCOMP_OUTPUT_FLAG),
        )?;
        let decompress = Execution::new(
            decompress,
            Wiring::Path,
            Wiring::flagged(Self::TUDOCOMP_OUTPUT_FLAG),
        )?;
        Self::new(name, compress, decompress)
    }

    ///
    /// Creates a compressor reading its input from the standard input and writing its
    /// output to the standard output, such as `gzip` or `bzip2`.
    ///
    pub fn standard(
        name: String,
        binary: &str,
        compress_flags: Vec<String>,
        decompress_flags: Vec<String>,
    ) -> anyhow::Result<Self> {
        let mut compress = vec![binary.to_owned()];
        compress.extend(compress_flags);
        let mut decompress = vec![binary.to_owned()];
        decompress.extend(decompress_flags);

        let compress = Execution::new(compress, Wiring::Stream, Wiring::Stream)?;
        let decompress = Execution::new(decompress, Wiring::Stream, Wiring::Stream)?;
        Self::new(name, compress, decompress)
    }

    ///
    /// Returns the display name.
    ///
    pub fn name(&self) -> &str {
        self.name.as_str()
    }

    ///
    /// Returns the compression execution.
    ///
    pub fn compress(&self) -> &Execution {
        &self.compress
    }

    ///
    /// Returns the decompression execution.
    ///
    pub fn decompress(&self) -> &Execution {
        &self.decompress
    }
}

#[cfg(test)]
mod tests {
    use crate::execution::wiring::Wiring;

    use super::Compressor;

    #[test]
    fn tudocomp() {
        let compressor = Compressor::tudocomp(
            "lzw".to_owned(),
            "lzw(coder=bit)",
            Compressor::TUDOCOMP_DEFAULT_BINARY,
            vec!["--force".to_owned()],
            vec![],
        )
        .expect("Always valid");

        assert_eq!(
            compressor.compress().arguments(),
            ["./tdc", "-a", "lzw(coder=bit)", "--force"]
        );
        assert_eq!(compressor.decompress().arguments(), ["./tdc", "-d"]);
        assert_eq!(compressor.compress().input(), &Wiring::Path);
        assert_eq!(compressor.compress().output(), &Wiring::flagged("--output"));
    }

    #[test]
    fn standard() {
        let compressor = Compressor::standard(
            "gzip -9".to_owned(),
            "gzip",
            vec!["-9".to_owned()],
            vec!["-d".to_owned()],
        )
        .expect("Always valid");

        assert_eq!(compressor.compress().arguments(), ["gzip", "-9"]);
        assert_eq!(compressor.decompress().arguments(), ["gzip", "-d"]);
        assert_eq!(compressor.decompress().input(), &Wiring::Stream);
        assert_eq!(compressor.decompress().output(), &Wiring::Stream);
    }

    #[test]
    fn malformed() {
        assert!(Compressor::standard(" ".to_owned(), "gzip", vec![], vec![]).is_err());
        assert!(Compressor::standard("gzip".to_owned(), "", vec![], vec![]).is_err());
        assert!(Compressor::tudocomp("lzw".to_owned(), "", "./tdc", vec![], vec![]).is_err());
    }
}
