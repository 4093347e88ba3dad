//!
//! The scratch files of a single run.
//!

use std::path::Path;
use std::path::PathBuf;

///
/// The scratch files of a single run.
///
/// All files live in one temporary directory, which is removed together with its
/// contents when the value is dropped.
///
#[derive(Debug)]
pub struct Scratch {
    /// The temporary directory.
    directory: tempfile::TempDir,
}

impl Scratch {
    /// The temporary directory name prefix.
    const DIRECTORY_PREFIX: &'static str = "compressor-bench-";

    ///
    /// Creates the scratch directory.
    ///
    pub fn new() -> anyhow::Result<Self> {
        let directory = tempfile::Builder::new()
            .prefix(Self::DIRECTORY_PREFIX)
            .tempdir()
            .map_err(|error| anyhow::anyhow!("Scratch directory creating: {error}"))?;
        Ok(Self { directory })
    }

    ///
    /// Returns the scratch directory path.
    ///
    pub fn path(&self) -> &Path {
        self.directory.path()
    }

    ///
    /// Returns the compressor output path.
    ///
    pub fn compressed(&self) -> PathBuf {
        self.directory.path().join("compressed")
    }

    ///
    /// Returns the decompressor output path.
    ///
    pub fn decompressed(&self) -> PathBuf {
        self.directory.path().join("decompressed")
    }

    ///
    /// Returns the memory profiler output path.
    ///
    pub fn profile(&self) -> PathBuf {
        self.directory.path().join("massif.out")
    }

    ///
    /// Returns the run log path.
    ///
    pub fn log(&self) -> PathBuf {
        self.directory.path().join("run.log")
    }
}
