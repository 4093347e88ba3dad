//!
//! The child process runner.
//!

use std::fs::File;
use std::io::Write;
use std::path::Path;
use std::process::Command;
use std::process::Stdio;
use std::time::Instant;

use crate::execution::Execution;

use super::error::Error;
use super::Runner;

///
/// The child process runner.
///
/// Spawns one child process at a time and waits for it. Each run is announced in the
/// shared run log, followed by everything the child writes to the streams not wired
/// to a file.
///
#[derive(Debug)]
pub struct ProcessRunner {
    /// The run log file.
    log: File,
}

impl ProcessRunner {
    ///
    /// A shortcut constructor.
    ///
    /// Truncates the run log at `log_path`.
    ///
    pub fn new(log_path: &Path) -> anyhow::Result<Self> {
        let log = File::create(log_path)
            .map_err(|error| anyhow::anyhow!("Run log file {log_path:?} creating: {error}"))?;
        Ok(Self { log })
    }

    ///
    /// Returns a new handle to the run log.
    ///
    fn log(&self) -> Result<Stdio, Error> {
        self.log
            .try_clone()
            .map(Stdio::from)
            .map_err(|error| Error::Log { error })
    }
}

impl Runner for ProcessRunner {
    fn run(&mut self, execution: &Execution, input: &Path, output: &Path) -> Result<f64, Error> {
        match std::fs::remove_file(output) {
            Ok(()) => {}
            Err(error) if error.kind() == std::io::ErrorKind::NotFound => {}
            Err(error) => {
                return Err(Error::StaleOutput {
                    error,
                    path: output.to_owned(),
                })
            }
        }

        writeln!(self.log, "> {execution}").map_err(|error| Error::Log { error })?;

        let mut command = Command::new(execution.executable());
        command.args(execution.flags());

        if execution.output().is_stream() {
            let file = File::create(output).map_err(|error| Error::Output {
                error,
                path: output.to_owned(),
            })?;
            command.stdout(file);
        } else {
            command.args(execution.output().arguments(output));
            command.stdout(self.log()?);
        }

        if execution.input().is_stream() {
            let file = File::open(input).map_err(|error| Error::Input {
                error,
                path: input.to_owned(),
            })?;
            command.stdin(file);
        } else {
            command.args(execution.input().arguments(input));
            command.stdin(Stdio::null());
        }

        command.stderr(self.log()?);

        let start = Instant::now();
        let mut child = command.spawn().map_err(|error| Error::Spawning {
            error,
            executable: execution.executable().to_owned(),
        })?;
        let status = child.wait().map_err(|error| Error::Waiting {
            error,
            executable: execution.executable().to_owned(),
        })?;
        let elapsed = start.elapsed().as_secs_f64();

        if !status.success() {
            return Err(Error::ExitStatus {
                status,
                executable: execution.executable().to_owned(),
            });
        }

        Ok(elapsed)
    }
}
