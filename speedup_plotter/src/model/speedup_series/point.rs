//!
//! A single speedup measurement.
//!

///
/// A single speedup measurement at a specific thread count.
///
#[derive(Debug, Clone, Copy, PartialEq, serde::Serialize)]
pub struct Point {
    /// The number of worker threads.
    pub thread_count: u64,
    /// The speedup factor.
    pub speedup: f64,
}

impl Point {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(thread_count: u64, speedup: f64) -> Self {
        Self {
            thread_count,
            speedup,
        }
    }
}
