//!
//! The compressor outcome on a single file.
//!

use crate::measurement::phase::Phase;
use crate::measurement::Measurement;

///
/// The compressor outcome on a single file.
///
#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    /// The round trip has completed. The result may still be incorrect.
    Measured {
        /// The complete measurement.
        measurement: Measurement,
    },
    /// The compression has failed to run.
    CompressionFailed {
        /// The invocation error description.
        error: String,
    },
    /// The decompression has failed to run.
    DecompressionFailed {
        /// The completed compression phase.
        compression: Phase,
        /// The compressed size in percent of the original size.
        ratio: Option<f64>,
        /// The invocation error description.
        error: String,
    },
}

impl Outcome {
    ///
    /// A shortcut constructor.
    ///
    pub fn measured(measurement: Measurement) -> Self {
        Self::Measured { measurement }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn compression_failed<S>(error: S) -> Self
    where
        S: ToString,
    {
        Self::CompressionFailed {
            error: error.to_string(),
        }
    }

    ///
    /// A shortcut constructor.
    ///
    pub fn decompression_failed<S>(compression: Phase, ratio: Option<f64>, error: S) -> Self
    where
        S: ToString,
    {
        Self::DecompressionFailed {
            compression,
            ratio,
            error: error.to_string(),
        }
    }

    ///
    /// Whether the round trip has completed and reproduced the original.
    ///
    pub fn is_correct(&self) -> bool {
        matches!(
            self,
            Self::Measured {
                measurement: Measurement {
                    is_correct: true,
                    ..
                }
            }
        )
    }

    ///
    /// Whether any of the executions has failed to run.
    ///
    pub fn is_invalid(&self) -> bool {
        !matches!(self, Self::Measured { .. })
    }
}
