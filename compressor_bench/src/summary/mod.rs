//!
//! The report on a single input file.
//!

pub mod element;

use std::path::Path;
use std::path::PathBuf;

use colored::Colorize;

use crate::format;
use crate::hash::Hash;

use self::element::Element;

///
/// The report on a single input file.
///
#[derive(Debug)]
pub struct Summary {
    /// The input file path.
    path: PathBuf,
    /// The input file size in bytes.
    size: u64,
    /// The input file content hash.
    hash: Hash,
    /// The compressor name column width.
    name_width: usize,
    /// The compressor rows.
    elements: Vec<Element>,
    /// The error that has stopped processing the file, if any.
    error: Option<String>,
}

impl Summary {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(path: PathBuf, size: u64, hash: Hash, name_width: usize) -> Self {
        Self {
            path,
            size,
            hash,
            name_width,
            elements: Vec::new(),
            error: None,
        }
    }

    ///
    /// Adds a compressor row.
    ///
    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    ///
    /// Records the error that has stopped processing the file.
    ///
    pub fn interrupt<S>(&mut self, error: S)
    where
        S: ToString,
    {
        self.error = Some(error.to_string());
    }

    ///
    /// Returns the input file path.
    ///
    pub fn path(&self) -> &Path {
        self.path.as_path()
    }

    ///
    /// Returns the input file size in bytes.
    ///
    pub fn size(&self) -> u64 {
        self.size
    }

    ///
    /// Returns the input file content hash.
    ///
    pub fn hash(&self) -> &Hash {
        &self.hash
    }

    ///
    /// Returns the compressor rows.
    ///
    pub fn elements(&self) -> &[Element] {
        self.elements.as_slice()
    }

    ///
    /// Returns the error that has stopped processing the file, if any.
    ///
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    ///
    /// The number of correct round trips.
    ///
    pub fn passed(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.outcome.is_correct())
            .count()
    }

    ///
    /// The number of completed round trips with a mismatching result.
    ///
    pub fn failed(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| !element.outcome.is_correct() && !element.outcome.is_invalid())
            .count()
    }

    ///
    /// The number of rows with an invocation error.
    ///
    pub fn invalid(&self) -> usize {
        self.elements
            .iter()
            .filter(|element| element.outcome.is_invalid())
            .count()
    }
}

impl std::fmt::Display for Summary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f)?;
        writeln!(
            f,
            "File: {} ({}, sha3={})",
            self.path.display(),
            format::size(self.size),
            self.hash,
        )?;
        writeln!(f)?;
        writeln!(f, "{}", Element::print_header(self.name_width))?;
        writeln!(f, "{}", Element::print_separator(self.name_width))?;
        for element in self.elements.iter() {
            writeln!(f, "{}", element.print(self.name_width))?;
        }
        if let Some(ref error) = self.error {
            writeln!(f, "{} {error}", "Error".bright_red().bold())?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::hash::Hash;
    use crate::measurement::memory::Memory;
    use crate::measurement::phase::Phase;
    use crate::measurement::Measurement;

    use super::element::outcome::Outcome;
    use super::element::Element;
    use super::Summary;

    fn summary() -> Summary {
        colored::control::set_override(false);

        let mut summary = Summary::new(
            PathBuf::from("corpus.txt"),
            2048,
            Hash::from_bytes(b"corpus"),
            12,
        );
        summary.push(Element::new(
            "gzip -9".to_owned(),
            Outcome::measured(Measurement::new(
                Phase::new(0.5, Memory::Peak(1024)),
                Some(37.5),
                Phase::new(0.25, Memory::Peak(2048)),
                true,
            )),
        ));
        summary.push(Element::new(
            "broken".to_owned(),
            Outcome::measured(Measurement::new(
                Phase::new(0.5, Memory::Unavailable),
                Some(50.0),
                Phase::new(0.25, Memory::Unavailable),
                false,
            )),
        ));
        summary.push(Element::new(
            "missing".to_owned(),
            Outcome::compression_failed("`missing` spawning: No such file or directory"),
        ));
        summary
    }

    #[test]
    fn counts() {
        let summary = summary();
        assert_eq!(summary.passed(), 1);
        assert_eq!(summary.failed(), 1);
        assert_eq!(summary.invalid(), 1);
    }

    #[test]
    fn layout() {
        let printed = summary().to_string();
        let lines: Vec<&str> = printed.lines().collect();

        assert_eq!(
            lines[1],
            format!(
                "File: corpus.txt (2.0KiB, sha3={})",
                Hash::from_bytes(b"corpus")
            )
        );
        assert!(lines[3].starts_with("  Compressor |      C Time |"));
        assert_eq!(lines[4].len(), lines[3].len());
        assert_eq!(
            lines[5],
            "     gzip -9 |     500.0ms |      1.0KiB |    37.5000% |     250.0ms |      2.0KiB |    OK |"
        );
        assert!(lines[6].contains("(N/A)"));
        assert!(lines[6].ends_with(" FAIL |"));
        assert_eq!(
            lines[7],
            "     missing |       (ERR) > `missing` spawning: No such file or directory"
        );
    }

    #[test]
    fn interrupted() {
        let mut summary = summary();
        summary.interrupt("Compressed file reading: permission denied");

        assert!(summary
            .to_string()
            .trim_end()
            .ends_with("Error Compressed file reading: permission denied"));
    }
}
