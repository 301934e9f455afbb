//!
//! A raw benchmark run entry.
//!

use crate::input::numeric::Numeric;

///
/// A raw benchmark run entry of the `results` array.
///
/// Other fields written by the benchmarking tool, such as `command`, `stddev` or `times`, are ignored.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Run {
    /// The mean execution time in seconds.
    pub mean: Numeric,
    /// The benchmark parameters.
    pub parameters: Parameters,
}

///
/// The benchmark parameters of a run.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Parameters {
    /// The number of worker threads.
    pub threads: Numeric,
}
