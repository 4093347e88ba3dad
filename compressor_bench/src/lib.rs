//!
//! The compressor benchmark library.
//!

pub(crate) mod compressor;
pub(crate) mod execution;
pub(crate) mod format;
pub(crate) mod hash;
pub(crate) mod measurement;
pub(crate) mod runner;
pub(crate) mod scratch;
pub(crate) mod suite;
pub(crate) mod summary;

pub use self::compressor::Compressor;
pub use self::execution::wiring::Wiring;
pub use self::execution::Execution;
pub use self::hash::Hash;
pub use self::measurement::engine::Engine;
pub use self::measurement::massif::Massif;
pub use self::measurement::memory::Memory;
pub use self::measurement::phase::Phase;
pub use self::measurement::Measurement;
pub use self::runner::error::Error as RunnerError;
pub use self::runner::process::ProcessRunner;
pub use self::runner::Runner;
pub use self::scratch::Scratch;
pub use self::suite::entry::Entry as SuiteEntry;
pub use self::suite::error::Error as SuiteError;
pub use self::suite::Suite;
pub use self::summary::element::outcome::Outcome;
pub use self::summary::element::Element;
pub use self::summary::Summary;

use std::path::Path;

/// The successful exit code.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The failure exit code.
pub const EXIT_CODE_FAILURE: i32 = 1;

///
/// The compressor benchmark.
///
/// Measures every compressor of the suite on one input file at a time, strictly
/// sequentially, so that no two child processes ever compete for the host.
///
#[derive(Debug)]
pub struct CompressorBench<R> {
    /// The compressor suite.
    suite: Suite,
    /// The measurement engine.
    engine: Engine<R>,
    /// The scratch files, removed when the benchmark is dropped.
    scratch: Scratch,
}

impl<R> CompressorBench<R>
where
    R: Runner,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(suite: Suite, engine: Engine<R>, scratch: Scratch) -> Self {
        Self {
            suite,
            engine,
            scratch,
        }
    }

    ///
    /// Returns the compressor suite.
    ///
    pub fn suite(&self) -> &Suite {
        &self.suite
    }

    ///
    /// Returns the measurement engine.
    ///
    pub fn engine(&self) -> &Engine<R> {
        &self.engine
    }

    ///
    /// Returns the scratch files.
    ///
    pub fn scratch(&self) -> &Scratch {
        &self.scratch
    }

    ///
    /// Returns the diagnostic output collected from all child processes so far.
    ///
    pub fn log(&self) -> anyhow::Result<String> {
        let path = self.scratch.log();
        match std::fs::read(path.as_path()) {
            Ok(bytes) => Ok(String::from_utf8_lossy(bytes.as_slice()).to_string()),
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(String::new()),
            Err(error) => anyhow::bail!("Run log file {path:?} reading: {error}"),
        }
    }

    ///
    /// Measures all compressors on the file at `path`.
    ///
    /// Compressor failures are recorded in their rows. An unexpected error stops
    /// processing the file and is recorded in the summary, keeping the rows measured
    /// so far. Only a failure to read the input itself is returned as an error.
    ///
    pub fn run_file(&mut self, path: &Path) -> anyhow::Result<Summary> {
        let size = std::fs::metadata(path)
            .map_err(|error| anyhow::anyhow!("Input file {path:?} metadata reading: {error}"))?
            .len();
        let hash = Hash::from_path(path)?;

        let mut summary = Summary::new(
            path.to_owned(),
            size,
            hash.clone(),
            self.suite.name_width(),
        );
        for compressor in self.suite.compressors() {
            match Self::measure(
                &mut self.engine,
                &self.scratch,
                compressor,
                path,
                size,
                &hash,
            ) {
                Ok(element) => summary.push(element),
                Err(error) => {
                    summary.interrupt(format!("`{}`: {error:#}", compressor.name()));
                    break;
                }
            }
        }
        Ok(summary)
    }

    ///
    /// Measures one compressor on one file.
    ///
    /// Invocation errors end the measurement with an error row. Any other error is
    /// returned.
    ///
    fn measure(
        engine: &mut Engine<R>,
        scratch: &Scratch,
        compressor: &Compressor,
        path: &Path,
        size: u64,
        hash: &Hash,
    ) -> anyhow::Result<Element> {
        let name = compressor.name().to_owned();
        let compressed = scratch.compressed();
        let decompressed = scratch.decompressed();

        let compression_time = match engine.time(compressor.compress(), path, &compressed) {
            Ok(time) => time,
            Err(error) => return Ok(Element::new(name, Outcome::compression_failed(error))),
        };
        let compression_memory = match engine.memory(compressor.compress(), path, &compressed) {
            Ok(memory) => memory,
            Err(error) => {
                let error = error.downcast::<RunnerError>()?;
                return Ok(Element::new(name, Outcome::compression_failed(error)));
            }
        };
        let compression = Phase::new(compression_time, compression_memory);

        let compressed_size = std::fs::metadata(compressed.as_path())
            .map_err(|error| anyhow::anyhow!("Compressed file {compressed:?} reading: {error}"))?
            .len();
        let ratio = Measurement::ratio(compressed_size, size);

        let decompression_time =
            match engine.time(compressor.decompress(), &compressed, &decompressed) {
                Ok(time) => time,
                Err(error) => {
                    return Ok(Element::new(
                        name,
                        Outcome::decompression_failed(compression, ratio, error),
                    ))
                }
            };
        let decompression_memory =
            match engine.memory(compressor.decompress(), &compressed, &decompressed) {
                Ok(memory) => memory,
                Err(error) => {
                    let error = error.downcast::<RunnerError>()?;
                    return Ok(Element::new(
                        name,
                        Outcome::decompression_failed(compression, ratio, error),
                    ));
                }
            };
        let decompression = Phase::new(decompression_time, decompression_memory);

        let is_correct = Hash::from_path(decompressed.as_path())? == *hash;

        Ok(Element::new(
            name,
            Outcome::measured(Measurement::new(
                compression,
                ratio,
                decompression,
                is_correct,
            )),
        ))
    }
}
