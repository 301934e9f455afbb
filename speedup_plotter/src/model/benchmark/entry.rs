//!
//! A benchmark entry loaded from a single input file.
//!

use std::path::PathBuf;

use crate::model::result_series::ResultSeries;
use crate::model::speedup_series::SpeedupSeries;

///
/// A benchmark entry loaded from a single input file.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct Entry {
    /// The input file path.
    pub path: PathBuf,
    /// The measured execution times.
    pub results: ResultSeries,
    /// The speedup derived from the execution times.
    pub speedup: SpeedupSeries,
}

impl Entry {
    ///
    /// The series label.
    ///
    pub fn label(&self) -> &str {
        self.results.label.as_str()
    }
}
