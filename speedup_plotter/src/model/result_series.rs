//!
//! The series of benchmark runs loaded from a single document.
//!

use crate::input::document::Document;
use crate::input::run::Run as InputRun;
use crate::model::error::Error;
use crate::model::run::Run;

///
/// The series of benchmark runs loaded from a single document.
///
/// Runs follow the document order and are never sorted or deduplicated.
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct ResultSeries {
    /// The series label, taken from `env.id`.
    pub label: String,
    /// The runs.
    pub runs: Vec<Run>,
}

impl ResultSeries {
    ///
    /// A shortcut constructor.
    ///
    pub fn new(label: String, runs: Vec<Run>) -> Self {
        Self { label, runs }
    }

    ///
    /// Returns the largest thread count in the series.
    ///
    pub fn max_threads(&self) -> Option<u64> {
        self.runs.iter().map(|run| run.thread_count).max()
    }

    ///
    /// Returns the largest mean execution time in the series.
    ///
    pub fn max_time(&self) -> Option<f64> {
        self.runs.iter().map(|run| run.mean_time).reduce(f64::max)
    }

    ///
    /// Converts a raw run entry, validating its values.
    ///
    fn parse_run(index: usize, value: serde_json::Value) -> Result<Run, Error> {
        let malformed = |reason: String| Error::MalformedRun { index, reason };

        let run: InputRun =
            serde_json::from_value(value).map_err(|error| malformed(error.to_string()))?;

        let mean_time = run
            .mean
            .as_f64()
            .ok_or_else(|| malformed(format!("`mean` value {} is not a number", run.mean)))?;
        if !mean_time.is_finite() || mean_time < 0.0 {
            return Err(malformed(format!(
                "`mean` value {mean_time} is not a non-negative time"
            )));
        }

        let threads = &run.parameters.threads;
        let thread_count = threads.as_u64().ok_or_else(|| {
            malformed(format!("`parameters.threads` value {threads} is not an integer"))
        })?;
        if thread_count == 0 {
            return Err(malformed("`parameters.threads` must be positive".to_owned()));
        }

        Ok(Run::new(thread_count, mean_time))
    }
}

impl TryFrom<Document> for ResultSeries {
    type Error = Error;

    fn try_from(document: Document) -> Result<Self, Self::Error> {
        let label = document
            .label()
            .unwrap_or_else(|| crate::DEFAULT_LABEL.to_owned());

        let runs = document
            .results
            .into_iter()
            .enumerate()
            .map(|(index, value)| Self::parse_run(index, value))
            .collect::<Result<Vec<Run>, Error>>()?;
        if runs.is_empty() {
            return Err(Error::EmptySeries);
        }

        Ok(Self::new(label, runs))
    }
}
