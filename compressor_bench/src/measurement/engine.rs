//!
//! The measurement engine.
//!

use std::num::NonZeroUsize;
use std::path::Path;

use crate::execution::Execution;
use crate::runner::error::Error as RunnerError;
use crate::runner::Runner;

use super::massif::Massif;
use super::memory::Memory;
use super::statistics;

///
/// The measurement engine.
///
/// Derives the timing and memory statistics from the runs of a single execution.
/// Memory is measured in a separate profiled run, so the profiling overhead never
/// affects the timing.
///
#[derive(Debug)]
pub struct Engine<R> {
    /// The executable runner.
    runner: R,
    /// The number of timed runs per execution.
    iterations: NonZeroUsize,
    /// The memory profiler, if available.
    profiler: Option<Massif>,
}

impl<R> Engine<R>
where
    R: Runner,
{
    ///
    /// A shortcut constructor.
    ///
    pub fn new(runner: R, iterations: NonZeroUsize, profiler: Option<Massif>) -> Self {
        Self {
            runner,
            iterations,
            profiler,
        }
    }

    ///
    /// Whether the memory is measured in this run.
    ///
    pub fn is_memory_available(&self) -> bool {
        self.profiler.is_some()
    }

    ///
    /// Returns the number of timed runs per execution.
    ///
    pub fn iterations(&self) -> NonZeroUsize {
        self.iterations
    }

    ///
    /// Returns the runner.
    ///
    pub fn runner(&self) -> &R {
        &self.runner
    }

    ///
    /// Runs `execution` the configured number of times and returns the median time.
    ///
    pub fn time(
        &mut self,
        execution: &Execution,
        input: &Path,
        output: &Path,
    ) -> Result<f64, RunnerError> {
        let mut samples = Vec::with_capacity(self.iterations.get());
        for _ in 0..self.iterations.get() {
            samples.push(self.runner.run(execution, input, output)?);
        }
        Ok(statistics::median(samples.as_slice()).expect("Always exists"))
    }

    ///
    /// Runs `execution` once under the memory profiler and returns the peak heap size.
    ///
    /// Nothing is run if the profiler is not available.
    ///
    pub fn memory(
        &mut self,
        execution: &Execution,
        input: &Path,
        output: &Path,
    ) -> anyhow::Result<Memory> {
        let profiler = match self.profiler.as_ref() {
            Some(profiler) => profiler,
            None => return Ok(Memory::Unavailable),
        };

        self.runner.run(&profiler.wrap(execution), input, output)?;
        Ok(Memory::Peak(profiler.peak()?))
    }
}

#[cfg(test)]
mod tests {
    use std::num::NonZeroUsize;
    use std::path::Path;

    use crate::execution::wiring::Wiring;
    use crate::execution::Execution;
    use crate::measurement::memory::Memory;
    use crate::runner::error::Error as RunnerError;
    use crate::runner::Runner;

    use super::Engine;

    ///
    /// Returns the scripted durations in a loop and counts the runs.
    ///
    #[derive(Debug, Default)]
    struct ScriptedRunner {
        durations: Vec<f64>,
        runs: usize,
    }

    impl Runner for ScriptedRunner {
        fn run(
            &mut self,
            _execution: &Execution,
            _input: &Path,
            _output: &Path,
        ) -> Result<f64, RunnerError> {
            let duration = self.durations[self.runs % self.durations.len()];
            self.runs += 1;
            Ok(duration)
        }
    }

    fn execution() -> Execution {
        Execution::new(vec!["cat".to_owned()], Wiring::Stream, Wiring::Stream)
            .expect("Always valid")
    }

    fn iterations(count: usize) -> NonZeroUsize {
        NonZeroUsize::new(count).expect("Always valid")
    }

    #[test]
    fn fixed_duration_independent_of_iterations() {
        for count in [1, 2, 3, 10] {
            let runner = ScriptedRunner {
                durations: vec![0.125],
                runs: 0,
            };
            let mut engine = Engine::new(runner, iterations(count), None);
            let time = engine
                .time(&execution(), Path::new("input"), Path::new("output"))
                .expect("Always succeeds");

            assert_eq!(time, 0.125);
            assert_eq!(engine.runner().runs, count);
        }
    }

    #[test]
    fn outlier_ignored() {
        let runner = ScriptedRunner {
            durations: vec![0.1, 5.0, 0.2],
            runs: 0,
        };
        let mut engine = Engine::new(runner, iterations(3), None);
        let time = engine
            .time(&execution(), Path::new("input"), Path::new("output"))
            .expect("Always succeeds");

        assert_eq!(time, 0.2);
    }

    #[test]
    fn memory_unavailable_without_profiler() {
        let runner = ScriptedRunner {
            durations: vec![1.0],
            runs: 0,
        };
        let mut engine = Engine::new(runner, iterations(1), None);
        let memory = engine
            .memory(&execution(), Path::new("input"), Path::new("output"))
            .expect("Always succeeds");

        assert!(!engine.is_memory_available());
        assert_eq!(memory, Memory::Unavailable);
        assert_eq!(engine.runner().runs, 0);
    }
}
