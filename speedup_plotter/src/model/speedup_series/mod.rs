//!
//! The speedup series derived from a series of benchmark runs.
//!

pub mod point;

use crate::model::error::Error;
use crate::model::result_series::ResultSeries;

use self::point::Point;

///
/// The speedup series derived from a series of benchmark runs.
///
/// The series is index-aligned with the originating [`ResultSeries`].
///
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct SpeedupSeries {
    /// The series label, copied from the originating series.
    pub label: String,
    /// The speedup points.
    pub points: Vec<Point>,
}

impl SpeedupSeries {
    ///
    /// Returns the largest speedup factor in the series.
    ///
    pub fn max_speedup(&self) -> Option<f64> {
        self.points.iter().map(|point| point.speedup).reduce(f64::max)
    }
}

impl TryFrom<&ResultSeries> for SpeedupSeries {
    type Error = Error;

    ///
    /// Normalizes every run against the first one, so that the baseline speedup equals the
    /// baseline thread count and perfect scaling lies on the line of slope 1.
    ///
    fn try_from(series: &ResultSeries) -> Result<Self, Self::Error> {
        let baseline = series.runs.first().ok_or(Error::EmptySeries)?;
        let baseline_work = baseline.mean_time * (baseline.thread_count as f64);

        let points = series
            .runs
            .iter()
            .enumerate()
            .map(|(index, run)| {
                let speedup = if run.mean_time != 0.0 {
                    baseline_work / run.mean_time
                } else if index == 0 {
                    0.0
                } else {
                    return Err(Error::DivisionByZero { index });
                };
                if !speedup.is_finite() {
                    return Err(Error::SpeedupOverflow { index });
                }
                Ok(Point::new(run.thread_count, speedup))
            })
            .collect::<Result<Vec<Point>, Error>>()?;

        Ok(Self {
            label: series.label.clone(),
            points,
        })
    }
}
