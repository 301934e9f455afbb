//!
//! The speedup plotter arguments.
//!

use std::path::PathBuf;

use clap::Parser;

///
/// The speedup plotter arguments.
///
#[derive(Debug, Parser)]
#[command(about, long_about = None, arg_required_else_help = true)]
pub struct Arguments {
    /// Suppresses the terminal output. Errors are still printed.
    #[arg(short, long)]
    pub quiet: bool,

    /// Input files with benchmark results.
    /// If only one path is provided and it is a directory, all JSON files inside are used.
    #[arg(required = true)]
    pub input_paths: Vec<PathBuf>,

    /// Output file.
    #[arg(short, long, default_value = "speedup.svg")]
    pub output_path: PathBuf,

    /// Output format: `svg`, `json`, or `xlsx`.
    /// If unset, it is inferred from the output file extension, falling back to `svg`.
    #[arg(long)]
    pub output_format: Option<speedup_plotter::OutputFormat>,
}

impl Arguments {
    ///
    /// Returns the output format, either explicit or inferred from the output path.
    ///
    pub fn output_format(&self) -> speedup_plotter::OutputFormat {
        self.output_format
            .or_else(|| speedup_plotter::OutputFormat::from_extension(self.output_path.as_path()))
            .unwrap_or_default()
    }
}
