//!
//! The compressor measurement on a single file.
//!

pub mod engine;
pub mod massif;
pub mod memory;
pub mod phase;
pub mod statistics;

use self::phase::Phase;

///
/// The compressor measurement on a single file.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Measurement {
    /// The compression phase.
    pub compression: Phase,
    /// The compressed size in percent of the original size.
    pub ratio: Option<f64>,
    /// The decompression phase.
    pub decompression: Phase,
    /// Whether the decompressed file is identical to the original.
    pub is_correct: bool,
}

impl Measurement {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(
        compression: Phase,
        ratio: Option<f64>,
        decompression: Phase,
        is_correct: bool,
    ) -> Self {
        Self {
            compression,
            ratio,
            decompression,
            is_correct,
        }
    }

    ///
    /// Returns the compressed size in percent of the original size.
    ///
    /// The ratio is undefined for an empty original.
    ///
    pub fn ratio(compressed_size: u64, original_size: u64) -> Option<f64> {
        if original_size == 0 {
            return None;
        }
        Some(100.0 * (compressed_size as f64) / (original_size as f64))
    }
}

#[cfg(test)]
mod tests {
    use super::Measurement;

    #[test]
    fn ratio() {
        assert_eq!(Measurement::ratio(50, 200), Some(25.0));
        assert_eq!(Measurement::ratio(300, 200), Some(150.0));
        assert_eq!(Measurement::ratio(0, 200), Some(0.0));
    }

    #[test]
    fn ratio_of_empty_original() {
        assert_eq!(Measurement::ratio(20, 0), None);
    }

    #[test]
    fn ratio_of_fixed_output_scales_inversely() {
        let small = Measurement::ratio(64, 1024).expect("Always defined");
        let large = Measurement::ratio(64, 4096).expect("Always defined");
        assert_eq!(small, 4.0 * large);
    }
}
