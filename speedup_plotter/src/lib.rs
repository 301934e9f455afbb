//!
//! The speedup plotter library.
//!

pub mod input;
pub mod model;
pub mod output;

#[cfg(test)]
mod tests;

pub use crate::input::error::Error as InputError;
pub use crate::input::Input;
pub use crate::model::benchmark::entry::Entry as BenchmarkEntry;
pub use crate::model::benchmark::Benchmark;
pub use crate::model::error::Error as SeriesError;
pub use crate::model::result_series::ResultSeries;
pub use crate::model::run::Run as BenchmarkRun;
pub use crate::model::speedup_series::point::Point as SpeedupPoint;
pub use crate::model::speedup_series::SpeedupSeries;
pub use crate::output::chart::Chart;
pub use crate::output::format::Format as OutputFormat;
pub use crate::output::json::Json as JsonOutput;
pub use crate::output::xlsx::Xlsx as XlsxOutput;
pub use crate::output::Output;

/// The process exit code on success.
pub const EXIT_CODE_SUCCESS: i32 = 0;

/// The process exit code on failure.
pub const EXIT_CODE_FAILURE: i32 = 1;

/// The label used when a document does not carry an `env.id`.
pub const DEFAULT_LABEL: &str = "unknown";
