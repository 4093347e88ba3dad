//!
//! The compressor benchmark executable.
//!

pub(crate) mod arguments;

use std::time::Instant;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let exit_code = match Arguments::try_parse()
        .map_err(|error| anyhow::anyhow!(error))
        .and_then(main_inner)
    {
        Ok(()) => compressor_bench::EXIT_CODE_SUCCESS,
        Err(error) => {
            eprintln!("{error:?}");
            compressor_bench::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
/// Only pre-flight errors are returned. Compressor and file failures are reported in
/// the tables and do not affect the exit code.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<()> {
    arguments.validate()?;
    if !arguments.quiet {
        println!(
            "    {} {} v{}",
            "Starting".bright_green().bold(),
            env!("CARGO_PKG_DESCRIPTION"),
            env!("CARGO_PKG_VERSION"),
        );
    }

    let suite = match arguments.suite {
        Some(ref path) => {
            let suite = compressor_bench::Suite::try_from_path(
                path.as_path(),
                arguments.tudocomp.as_str(),
            )
            .map_err(|error| anyhow::anyhow!("Failed to load suite {path:?}: {error}"))?;
            if !arguments.quiet {
                println!("       {} suite {path:?}", "Using".bright_green().bold());
            }
            suite
        }
        None => {
            let suite = compressor_bench::Suite::builtin(arguments.tudocomp.as_str())?;
            if !arguments.quiet {
                println!(
                    "       {} built-in default suite",
                    "Using".bright_green().bold()
                );
            }
            suite
        }
    };

    let scratch = compressor_bench::Scratch::new()?;

    let profiler = if arguments.no_memory {
        None
    } else {
        match compressor_bench::Massif::new(arguments.valgrind.clone(), scratch.profile()) {
            Ok(profiler) => Some(profiler),
            Err(error) => {
                eprintln!(
                    "     {} {error}: memory measurement unavailable",
                    "Warning".bright_yellow().bold(),
                );
                None
            }
        }
    };

    let runner = compressor_bench::ProcessRunner::new(scratch.log().as_path())?;
    let engine = compressor_bench::Engine::new(runner, arguments.iterations, profiler);
    let mut benchmark = compressor_bench::CompressorBench::new(suite, engine, scratch);

    let run_time_start = Instant::now();
    if !arguments.quiet {
        println!(
            "     {} {} compressors on {} files, {} iterations per file",
            "Running".bright_green().bold(),
            benchmark.suite().compressors().len(),
            arguments.files.len(),
            benchmark.engine().iterations(),
        );
    }

    let (mut passed, mut failed, mut invalid) = (0, 0, 0);
    for path in arguments.files.iter() {
        match benchmark.run_file(path.as_path()) {
            Ok(summary) => {
                print!("{summary}");
                passed += summary.passed();
                failed += summary.failed();
                invalid += summary.invalid();
            }
            Err(error) => {
                eprintln!(
                    "       {} processing {path:?}: {error:?}",
                    "Error".bright_red().bold()
                );
            }
        }
    }

    if !arguments.quiet {
        let log = benchmark.log()?;
        if !log.is_empty() {
            println!();
            print!("{log}");
        }
        println!(
            "    {} in {}m{:02}s: {} passed, {} failed, {} invalid",
            "Finished".bright_green().bold(),
            run_time_start.elapsed().as_secs() / 60,
            run_time_start.elapsed().as_secs() % 60,
            passed.to_string().green(),
            failed.to_string().bright_red(),
            invalid.to_string().red(),
        );
    }

    Ok(())
}
