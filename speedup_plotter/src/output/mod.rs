//!
//! Speedup plotter output.
//!

pub mod chart;
pub mod format;
pub mod json;
pub mod xlsx;

use std::path::PathBuf;

use crate::model::benchmark::Benchmark;
use crate::output::chart::Chart;
use crate::output::format::Format;
use crate::output::json::Json;
use crate::output::xlsx::Xlsx;

///
/// The rendered benchmark data.
///
pub enum Output {
    /// Benchmark output is a single text file.
    SingleFile(String),
    /// Benchmark output is a single spreadsheet.
    SingleFileXlsx(rust_xlsxwriter::Workbook),
    /// Benchmark output is a chart image.
    SingleFileSvg(Chart),
}

impl Output {
    ///
    /// Writes the benchmark results to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|error| {
                anyhow::anyhow!("Output directory {parent:?} creating: {error}")
            })?;
        }

        match self {
            Output::SingleFile(content) => {
                std::fs::write(path.as_path(), content)
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::SingleFileXlsx(mut workbook) => {
                workbook
                    .save(path.as_path())
                    .map_err(|error| anyhow::anyhow!("Output file {path:?} writing: {error}"))?;
            }
            Output::SingleFileSvg(chart) => {
                chart.write_svg(path.as_path())?;
            }
        }
        Ok(())
    }
}

impl TryFrom<(Benchmark, Format)> for Output {
    type Error = anyhow::Error;

    fn try_from((benchmark, output_format): (Benchmark, Format)) -> Result<Self, Self::Error> {
        Ok(match output_format {
            Format::Svg => Chart::from(benchmark).into(),
            Format::Json => Json::from(&benchmark).into(),
            Format::Xlsx => Xlsx::try_from(&benchmark)?.into(),
        })
    }
}

impl From<Chart> for Output {
    fn from(value: Chart) -> Self {
        Output::SingleFileSvg(value)
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Output::SingleFile(value.content)
    }
}

impl From<Xlsx> for Output {
    fn from(value: Xlsx) -> Self {
        Output::SingleFileXlsx(value.finalize())
    }
}
