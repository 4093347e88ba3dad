//!
//! The compressor suite.
//!

pub mod entry;
pub mod error;

use std::collections::HashSet;
use std::path::Path;

use crate::compressor::Compressor;

use self::entry::Entry;
use self::error::Error;

///
/// The compressor suite.
///
/// A non-empty ordered list of compressors with unique names.
///
#[derive(Debug, Clone)]
pub struct Suite {
    /// The compressors in the measurement order.
    compressors: Vec<Compressor>,
}

impl Suite {
    /// The padding added to the longest compressor name in the report.
    pub const NAME_PADDING: usize = 3;

    ///
    /// A shortcut constructor.
    ///
    /// # Errors
    ///
    /// 1. The list is empty.
    /// 2. Two compressors share a name.
    ///
    pub fn new(compressors: Vec<Compressor>) -> Result<Self, Error> {
        if compressors.is_empty() {
            return Err(Error::Empty);
        }

        let mut names = HashSet::with_capacity(compressors.len());
        for compressor in compressors.iter() {
            if !names.insert(compressor.name()) {
                return Err(Error::DuplicateName {
                    name: compressor.name().to_owned(),
                });
            }
        }

        Ok(Self { compressors })
    }

    ///
    /// Returns the built-in default suite.
    ///
    /// The `tudocomp` algorithms use the driver at `tudocomp_binary`.
    ///
    pub fn builtin(tudocomp_binary: &str) -> anyhow::Result<Self> {
        let tudocomp = |name: &str, algorithm: &str| {
            Compressor::tudocomp(
                name.to_owned(),
                algorithm,
                tudocomp_binary,
                vec![],
                vec![],
            )
        };
        let standard = |name: &str, binary: &str, level: &str| {
            Compressor::standard(
                name.to_owned(),
                binary,
                vec![level.to_owned()],
                vec!["-d".to_owned()],
            )
        };

        let compressors = vec![
            tudocomp("bwtzip", "bwt:rle:mtf:encode(huff)")?,
            tudocomp(
                "lcpcomp(t=5,arrays,scans(a=25))",
                "lcpcomp(coder=sle,threshold=5,comp=arrays,dec=scan(25))",
            )?,
            tudocomp("lzss_lcp(t=5,bit)", "lzss_lcp(coder=bit,threshold=5)")?,
            tudocomp(
                "lz78u(t=5,huff)",
                "lz78u(coder=bit,threshold=5,comp=buffering(huff))",
            )?,
            tudocomp(
                "lcpcomp(t=5,heap,compact)",
                r#"lcpcomp(coder=sle,threshold="5",comp=heap,dec=compact)"#,
            )?,
            tudocomp("sle", "encode(sle)")?,
            tudocomp("huff", "encode(huff)")?,
            tudocomp("lzw(ternary)", "lzw(coder=bit,lz78trie=ternary)")?,
            tudocomp("lz78(ternary)", "lz78(coder=bit,lz78trie=ternary)")?,
            standard("gzip -1", "gzip", "-1")?,
            standard("gzip -9", "gzip", "-9")?,
            standard("bzip2 -1", "bzip2", "-1")?,
            standard("bzip2 -9", "bzip2", "-9")?,
            standard("lzma -1", "lzma", "-1")?,
            standard("lzma -9", "lzma", "-9")?,
        ];
        Ok(Self::new(compressors)?)
    }

    ///
    /// Loads the suite from a JSON or YAML file.
    ///
    /// Files with the `json` extension are parsed as JSON, and all others as YAML.
    /// A single malformed entry rejects the whole suite.
    ///
    pub fn try_from_path(path: &Path, tudocomp_binary: &str) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|error| Error::Reading {
            error,
            path: path.to_owned(),
        })?;

        let entries: Vec<Entry> = match path.extension().and_then(|extension| extension.to_str())
        {
            Some("json") => {
                serde_json::from_str(text.as_str()).map_err(|error| Error::ParsingJson {
                    error,
                    path: path.to_owned(),
                })?
            }
            _ => serde_yaml::with::singleton_map_recursive::deserialize(
                serde_yaml::Deserializer::from_str(text.as_str()),
            )
            .map_err(|error| Error::ParsingYaml {
                error,
                path: path.to_owned(),
            })?,
        };

        Self::try_from_entries(entries, tudocomp_binary)
    }

    ///
    /// Builds the suite from the parsed entries.
    ///
    pub fn try_from_entries(entries: Vec<Entry>, tudocomp_binary: &str) -> Result<Self, Error> {
        let compressors = entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| {
                entry
                    .into_compressor(tudocomp_binary)
                    .map_err(|error| Error::Malformed {
                        index: index + 1,
                        error,
                    })
            })
            .collect::<Result<Vec<Compressor>, Error>>()?;
        Self::new(compressors)
    }

    ///
    /// Returns the compressors in the measurement order.
    ///
    pub fn compressors(&self) -> &[Compressor] {
        self.compressors.as_slice()
    }

    ///
    /// Returns the report name column width.
    ///
    pub fn name_width(&self) -> usize {
        self.compressors
            .iter()
            .map(|compressor| compressor.name().chars().count())
            .max()
            .unwrap_or_default()
            + Self::NAME_PADDING
    }
}
