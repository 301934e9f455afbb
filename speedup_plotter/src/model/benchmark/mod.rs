//!
//! The benchmark representation.
//!

pub mod entry;

use crate::input::Input;
use crate::model::error::Error;
use crate::model::result_series::ResultSeries;
use crate::model::speedup_series::SpeedupSeries;

use self::entry::Entry;

///
/// The benchmark representation.
///
/// Collects the series of all input files in the order they were supplied.
///
#[derive(Debug, Default, Clone, PartialEq, serde::Serialize)]
pub struct Benchmark {
    /// The entries, one per input file.
    pub entries: Vec<Entry>,
    /// The largest thread count across all entries.
    pub max_threads: u64,
}

impl Benchmark {
    ///
    /// Extends the benchmark with an input document.
    ///
    /// On error, the benchmark is left untouched.
    ///
    pub fn extend(&mut self, input: Input) -> Result<&Entry, Error> {
        let results = ResultSeries::try_from(input.document)?;
        let speedup = SpeedupSeries::try_from(&results)?;

        self.max_threads = self
            .max_threads
            .max(results.max_threads().unwrap_or_default());
        self.entries.push(Entry {
            path: input.path,
            results,
            speedup,
        });
        Ok(self.entries.last().expect("Always exists"))
    }

    ///
    /// Whether no entries have been collected.
    ///
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    ///
    /// Returns the largest mean execution time across all entries.
    ///
    pub fn max_time(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|entry| entry.results.max_time())
            .fold(0.0, f64::max)
    }

    ///
    /// Returns the largest speedup factor across all entries.
    ///
    pub fn max_speedup(&self) -> f64 {
        self.entries
            .iter()
            .filter_map(|entry| entry.speedup.max_speedup())
            .fold(0.0, f64::max)
    }
}
