//!
//! The speedup plotter binary.
//!

pub(crate) mod arguments;

use std::path::PathBuf;

use clap::Parser;
use colored::Colorize;

use self::arguments::Arguments;

///
/// The application entry point.
///
fn main() {
    let arguments = Arguments::parse();
    let exit_code = match main_inner(arguments) {
        Ok(true) => speedup_plotter::EXIT_CODE_SUCCESS,
        Ok(false) => speedup_plotter::EXIT_CODE_FAILURE,
        Err(error) => {
            eprintln!("{} {error:?}", "error:".bright_red().bold());
            speedup_plotter::EXIT_CODE_FAILURE
        }
    };
    std::process::exit(exit_code);
}

///
/// The entry point wrapper used for proper error handling.
///
/// Returns `false` if some input files have been skipped.
///
fn main_inner(arguments: Arguments) -> anyhow::Result<bool> {
    let output_format = arguments.output_format();
    let input_paths = resolve_input_paths(arguments.input_paths)?;

    let mut benchmark = speedup_plotter::Benchmark::default();
    let mut skipped = 0;
    for path in input_paths.into_iter() {
        let input = match speedup_plotter::Input::try_from(path.as_path()) {
            Ok(input) => input,
            Err(error) if error.is_fatal() => return Err(error.into()),
            Err(error) => {
                eprintln!("{} {error}", "error:".bright_red().bold());
                skipped += 1;
                continue;
            }
        };
        match benchmark.extend(input) {
            Ok(entry) => {
                if !arguments.quiet {
                    println!(
                        "     {} {} with {} runs from {path:?}",
                        "Loaded".bright_green().bold(),
                        entry.label(),
                        entry.results.runs.len(),
                    );
                }
            }
            Err(error) => {
                eprintln!(
                    "{} Input file {path:?}: {error}",
                    "error:".bright_red().bold()
                );
                skipped += 1;
            }
        }
    }
    if benchmark.is_empty() {
        anyhow::bail!("No valid benchmark results to render");
    }

    if !arguments.quiet {
        println!(
            "   {} {} series up to {} threads as {output_format}",
            "Rendering".bright_green().bold(),
            benchmark.entries.len(),
            benchmark.max_threads,
        );
    }
    let output: speedup_plotter::Output = (benchmark, output_format).try_into()?;
    output.write_to_file(arguments.output_path.clone())?;

    if !arguments.quiet {
        println!(
            "    {} {:?}",
            "Finished".bright_green().bold(),
            arguments.output_path,
        );
    }
    if skipped > 0 {
        eprintln!(
            "{} {skipped} input file(s) skipped due to errors",
            "warning:".bright_yellow().bold()
        );
    }

    Ok(skipped == 0)
}

///
/// Expands a single directory argument into the JSON files it contains.
///
fn resolve_input_paths(input_paths: Vec<PathBuf>) -> anyhow::Result<Vec<PathBuf>> {
    if input_paths.len() != 1 || !input_paths[0].is_dir() {
        return Ok(input_paths);
    }

    let resolution_pattern = format!("{}/**/*.json", input_paths[0].to_string_lossy());
    let mut paths: Vec<PathBuf> = glob::glob(resolution_pattern.as_str())?
        .filter_map(Result::ok)
        .collect();
    if paths.is_empty() {
        anyhow::bail!("No JSON files found in directory {:?}", input_paths[0]);
    }
    paths.sort();
    Ok(paths)
}
