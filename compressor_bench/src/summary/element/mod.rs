//!
//! The compressor report row.
//!

pub mod outcome;

use colored::Colorize;

use crate::format;

use self::outcome::Outcome;

///
/// The compressor report row.
///
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    /// The compressor name.
    pub name: String,
    /// The compressor outcome.
    pub outcome: Outcome,
}

impl Element {
    /// The value column width.
    pub const COLUMN_WIDTH: usize = 11;

    /// The correctness column width.
    pub const CHECK_WIDTH: usize = 5;

    ///
    /// A shortcut constructor.
    ///
    pub fn new(name: String, outcome: Outcome) -> Self {
        Self { name, outcome }
    }

    ///
    /// Prints the column headers.
    ///
    pub fn print_header(name_width: usize) -> String {
        let mut line = format!("{:>name_width$} |", "Compressor");
        for title in ["C Time", "C Memory", "C Rate", "D Time", "D Memory"] {
            line.push_str(Self::column(title).as_str());
        }
        line.push_str(format!(" {:>width$} |", "chk", width = Self::CHECK_WIDTH).as_str());
        line
    }

    ///
    /// Prints the header separator.
    ///
    pub fn print_separator(name_width: usize) -> String {
        "-".repeat(name_width + 2 + 5 * (Self::COLUMN_WIDTH + 3) + Self::CHECK_WIDTH + 3)
    }

    ///
    /// Prints the element.
    ///
    pub fn print(&self, name_width: usize) -> String {
        let mut line = format!("{:>name_width$} |", self.name);

        match self.outcome {
            Outcome::Measured { ref measurement } => {
                line.push_str(Self::column(format::time(measurement.compression.time)).as_str());
                line.push_str(Self::column(measurement.compression.memory).as_str());
                line.push_str(Self::ratio(measurement.ratio).as_str());
                line.push_str(Self::column(format::time(measurement.decompression.time)).as_str());
                line.push_str(Self::column(measurement.decompression.memory).as_str());
                let check = if measurement.is_correct {
                    "OK".green()
                } else {
                    "FAIL".bright_red()
                };
                line.push_str(format!(" {:>width$} |", check, width = Self::CHECK_WIDTH).as_str());
            }
            Outcome::CompressionFailed { ref error } => {
                line.push_str(Self::error(error.as_str()).as_str());
            }
            Outcome::DecompressionFailed {
                ref compression,
                ratio,
                ref error,
            } => {
                line.push_str(Self::column(format::time(compression.time)).as_str());
                line.push_str(Self::column(compression.memory).as_str());
                line.push_str(Self::ratio(ratio).as_str());
                line.push_str(Self::error(error.as_str()).as_str());
            }
        }

        line
    }

    ///
    /// Prints a right-aligned value column.
    ///
    fn column<T>(value: T) -> String
    where
        T: std::fmt::Display,
    {
        format!(" {:>width$} |", value, width = Self::COLUMN_WIDTH)
    }

    ///
    /// Prints the compression ratio column.
    ///
    fn ratio(ratio: Option<f64>) -> String {
        match ratio {
            Some(ratio) => format!(" {:>width$.4}% |", ratio, width = Self::COLUMN_WIDTH - 1),
            None => Self::column("(N/A)"),
        }
    }

    ///
    /// Prints the invocation error marker with the message.
    ///
    fn error(message: &str) -> String {
        format!(
            " {:>width$} > {}",
            "(ERR)".red(),
            message,
            width = Self::COLUMN_WIDTH
        )
    }
}
