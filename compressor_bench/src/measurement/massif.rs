//!
//! The `valgrind` massif heap profiler.
//!

use std::path::PathBuf;
use std::process::Command;
use std::process::Stdio;

use crate::execution::Execution;

lazy_static::lazy_static! {
    ///
    /// The massif heap size sample record.
    ///
    static ref HEAP_SAMPLE: regex::Regex =
        regex::Regex::new(r"^mem_heap_B=([0-9]+)").expect("Always valid");
}

///
/// The `valgrind` massif heap profiler.
///
#[derive(Debug, Clone)]
pub struct Massif {
    /// The `valgrind` executable.
    executable: PathBuf,
    /// The path the profiler writes its samples to.
    output_path: PathBuf,
}

impl Massif {
    /// The default `valgrind` executable name.
    pub const DEFAULT_EXECUTABLE: &'static str = "valgrind";

    ///
    /// A shortcut constructor.
    ///
    /// Checks that `executable` can be found and responds to `--version`.
    ///
    pub fn new(executable: PathBuf, output_path: PathBuf) -> anyhow::Result<Self> {
        let resolved = which::which(executable.as_path()).map_err(|error| {
            anyhow::anyhow!("The `{}` executable not found: {error}", executable.display())
        })?;

        let status = Command::new(resolved.as_path())
            .arg("--version")
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .map_err(|error| {
                anyhow::anyhow!("The `{}` executable spawning: {error}", resolved.display())
            })?;
        if !status.success() {
            anyhow::bail!(
                "The `{}` executable version check exited with {status}",
                resolved.display()
            );
        }

        Ok(Self {
            executable: resolved,
            output_path,
        })
    }

    ///
    /// Returns `execution` launched under the profiler.
    ///
    /// All memory mappings are treated as heap, so that the peak covers every kind of
    /// allocation the executable makes.
    ///
    pub fn wrap(&self, execution: &Execution) -> Execution {
        execution.wrapped(vec![
            self.executable.to_string_lossy().to_string(),
            "-q".to_owned(),
            "--tool=massif".to_owned(),
            "--pages-as-heap=yes".to_owned(),
            format!("--massif-out-file={}", self.output_path.to_string_lossy()),
        ])
    }

    ///
    /// Reads the peak heap size from the last profiled run and removes the samples file.
    ///
    pub fn peak(&self) -> anyhow::Result<u64> {
        let text = std::fs::read_to_string(self.output_path.as_path()).map_err(|error| {
            anyhow::anyhow!("Massif output file {:?} reading: {error}", self.output_path)
        })?;
        std::fs::remove_file(self.output_path.as_path()).map_err(|error| {
            anyhow::anyhow!("Massif output file {:?} removing: {error}", self.output_path)
        })?;
        Ok(Self::parse(text.as_str()))
    }

    ///
    /// Returns the largest `mem_heap_B` sample in the massif output, or zero if none.
    ///
    pub fn parse(text: &str) -> u64 {
        text.lines()
            .filter_map(|line| HEAP_SAMPLE.captures(line))
            .filter_map(|captures| captures[1].parse::<u64>().ok())
            .max()
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::execution::wiring::Wiring;
    use crate::execution::Execution;

    use super::Massif;

    const SAMPLES: &str = r#"desc: --pages-as-heap=yes --massif-out-file=massif.out
cmd: gzip -9
time_unit: i
#-----------
snapshot=0
#-----------
time=0
mem_heap_B=0
mem_heap_extra_B=0
mem_stacks_B=0
heap_tree=empty
#-----------
snapshot=1
#-----------
time=1234567
mem_heap_B=8454144
mem_heap_extra_B=0
mem_stacks_B=0
heap_tree=detailed
#-----------
snapshot=2
#-----------
time=2345678
mem_heap_B=7405568
mem_heap_extra_B=0
mem_stacks_B=0
heap_tree=empty
"#;

    #[test]
    fn parse_takes_maximum() {
        assert_eq!(Massif::parse(SAMPLES), 8454144);
    }

    #[test]
    fn parse_ignores_similar_records() {
        assert_eq!(Massif::parse("mem_heap_extra_B=99999\n mem_heap_B=5\n"), 0);
    }

    #[test]
    fn parse_empty() {
        assert_eq!(Massif::parse(""), 0);
    }

    #[test]
    fn wrap() {
        let massif = Massif {
            executable: PathBuf::from("valgrind"),
            output_path: PathBuf::from("/tmp/massif.out"),
        };
        let execution = Execution::new(
            vec!["./tdc".to_owned(), "-d".to_owned()],
            Wiring::Path,
            Wiring::flagged("--output"),
        )
        .expect("Always valid");

        let wrapped = massif.wrap(&execution);
        assert_eq!(
            wrapped.arguments(),
            [
                "valgrind",
                "-q",
                "--tool=massif",
                "--pages-as-heap=yes",
                "--massif-out-file=/tmp/massif.out",
                "./tdc",
                "-d",
            ]
        );
        assert_eq!(wrapped.output(), &Wiring::flagged("--output"));
    }
}
