//!
//! The compressor benchmark arguments.
//!

use std::num::NonZeroUsize;
use std::path::PathBuf;

use clap::Parser;

///
/// The compressor benchmark arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None)]
pub struct Arguments {
    /// The suite file in JSON or YAML format.
    /// The built-in default suite is used if not specified.
    #[arg(short, long)]
    pub suite: Option<PathBuf>,

    /// The number of timed runs of each execution. The median time is reported.
    #[arg(short = 'n', long, default_value = "1")]
    pub iterations: NonZeroUsize,

    /// Path to the `tudocomp` driver used by suite entries without their own.
    #[arg(long, default_value = compressor_bench::Compressor::TUDOCOMP_DEFAULT_BINARY)]
    pub tudocomp: String,

    /// Path to the `valgrind` executable used for memory measurement.
    #[arg(long, default_value = compressor_bench::Massif::DEFAULT_EXECUTABLE)]
    pub valgrind: PathBuf,

    /// Disables the memory measurement.
    #[arg(long)]
    pub no_memory: bool,

    /// Suppresses the status messages and the diagnostic log.
    #[arg(short, long)]
    pub quiet: bool,

    /// The input files to compress.
    #[arg(required = true, value_name = "FILE")]
    pub files: Vec<PathBuf>,
}

impl Arguments {
    ///
    /// Validates the arguments before anything is measured.
    ///
    /// # Errors
    ///
    /// 1. No input files are specified.
    /// 2. An input file does not exist, is not a regular file, or cannot be opened.
    ///
    pub fn validate(&self) -> anyhow::Result<()> {
        if self.files.is_empty() {
            anyhow::bail!("No input files provided.");
        }

        for path in self.files.iter() {
            let metadata = std::fs::metadata(path.as_path()).map_err(|error| {
                anyhow::anyhow!("Input file {path:?} not found or not readable: {error}")
            })?;
            if !metadata.is_file() {
                anyhow::bail!("Input file {path:?} is not a regular file");
            }
            std::fs::File::open(path.as_path()).map_err(|error| {
                anyhow::anyhow!("Input file {path:?} not found or not readable: {error}")
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use super::Arguments;

    #[test]
    fn defaults() {
        let arguments =
            Arguments::try_parse_from(["compressor-bench", "input.txt"]).expect("Always valid");

        assert_eq!(arguments.iterations.get(), 1);
        assert_eq!(arguments.tudocomp, "./tdc");
        assert!(arguments.suite.is_none());
        assert!(!arguments.no_memory);
    }

    #[test]
    fn zero_iterations_rejected() {
        assert!(Arguments::try_parse_from(["compressor-bench", "-n", "0", "input.txt"]).is_err());
    }

    #[test]
    fn files_required() {
        assert!(Arguments::try_parse_from(["compressor-bench"]).is_err());
    }

    #[test]
    fn unreadable_input_rejected() {
        let arguments = Arguments::try_parse_from([
            "compressor-bench",
            "--suite",
            "suite.yaml",
            "/nonexistent/input.txt",
        ])
        .expect("Always valid");

        assert!(arguments.validate().is_err());
    }

    #[test]
    fn directory_input_rejected() {
        let directory = tempfile::tempdir().expect("Temporary directory creating failed");
        let arguments = Arguments::try_parse_from([
            std::ffi::OsStr::new("compressor-bench"),
            directory.path().as_os_str(),
        ])
        .expect("Always valid");

        assert!(arguments.validate().is_err());
    }
}
