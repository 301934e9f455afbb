//!
//! Benchmark series error.
//!

///
/// Benchmark series error.
///
/// Each of these errors invalidates the whole file the series was loaded from.
///
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// A run entry lacks a required field, or its value is not convertible.
    #[error("Run #{index} is malformed: {reason}")]
    MalformedRun {
        /// The run index in the `results` array.
        index: usize,
        /// The human-readable description of the problem.
        reason: String,
    },
    /// The series has no runs, so there is no baseline.
    #[error("No benchmark runs found")]
    EmptySeries,
    /// A non-baseline run has zero execution time.
    #[error("Run #{index} has zero execution time")]
    DivisionByZero {
        /// The run index in the series.
        index: usize,
    },
    /// The speedup of a run is too large to be represented.
    #[error("Run #{index} speedup is not a finite number")]
    SpeedupOverflow {
        /// The run index in the series.
        index: usize,
    },
}
