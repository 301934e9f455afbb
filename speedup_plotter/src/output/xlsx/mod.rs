//!
//! XLSX output format for benchmark data.
//!

pub mod worksheet;

use crate::model::benchmark::Benchmark;

use self::worksheet::Worksheet;

///
/// XLSX output format for benchmark data.
///
pub struct Xlsx {
    /// Worksheet for execution time measurements.
    pub time_worksheet: Worksheet,
    /// Worksheet for derived speedup factors.
    pub speedup_worksheet: Worksheet,
}

impl Xlsx {
    ///
    /// Creates a new XLSX workbook.
    ///
    pub fn new() -> anyhow::Result<Self> {
        Ok(Self {
            time_worksheet: Worksheet::new("Time", "Time [s]")?,
            speedup_worksheet: Worksheet::new("Speedup", "Speedup")?,
        })
    }

    ///
    /// Returns the final workbook with all worksheets.
    ///
    pub fn finalize(self) -> rust_xlsxwriter::Workbook {
        let mut workbook = rust_xlsxwriter::Workbook::new();
        workbook.push_worksheet(self.time_worksheet.into_inner());
        workbook.push_worksheet(self.speedup_worksheet.into_inner());
        workbook
    }
}

impl TryFrom<&Benchmark> for Xlsx {
    type Error = anyhow::Error;

    fn try_from(benchmark: &Benchmark) -> Result<Self, Self::Error> {
        let mut xlsx = Self::new()?;

        for entry in benchmark.entries.iter() {
            xlsx.time_worksheet.write_series(
                entry.label(),
                entry
                    .results
                    .runs
                    .iter()
                    .map(|run| (run.thread_count, run.mean_time)),
            )?;
            xlsx.speedup_worksheet.write_series(
                entry.label(),
                entry
                    .speedup
                    .points
                    .iter()
                    .map(|point| (point.thread_count, point.speedup)),
            )?;
        }

        Ok(xlsx)
    }
}
