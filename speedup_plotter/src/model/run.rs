//!
//! A single benchmark measurement.
//!

///
/// A single benchmark measurement at a specific thread count.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Run {
    /// The number of worker threads. Always positive.
    pub thread_count: u64,
    /// The mean execution time in seconds. Finite and non-negative.
    pub mean_time: f64,
}

impl Run {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(thread_count: u64, mean_time: f64) -> Self {
        Self {
            thread_count,
            mean_time,
        }
    }
}
