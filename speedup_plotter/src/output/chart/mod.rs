//!
//! Chart output format for benchmark data.
//!

pub mod panel;

use std::ops::Range;
use std::path::Path;

use plotters::coord::Shift;
use plotters::prelude::*;

use crate::model::benchmark::Benchmark;

use self::panel::Panel;

///
/// Chart output format for benchmark data.
///
/// Draws the execution time and the speedup factor against the thread count side by side.
///
pub struct Chart {
    /// The benchmark data.
    pub benchmark: Benchmark,
}

impl Chart {
    /// The canvas size in pixels.
    pub const SIZE: (u32, u32) = (1600, 700);

    /// Headroom above the largest time value.
    const TIME_MARGIN: f64 = 1.1;
    /// Headroom above the largest speedup value.
    const SPEEDUP_MARGIN: f64 = 1.05;

    ///
    /// Renders the chart into an SVG file.
    ///
    pub fn write_svg(&self, path: &Path) -> anyhow::Result<()> {
        let root = SVGBackend::new(path, Self::SIZE).into_drawing_area();
        self.draw(&root)
            .map_err(|error| anyhow::anyhow!("Chart file {path:?} rendering: {error}"))
    }

    ///
    /// The x-axis range shared by both panels.
    ///
    pub fn x_range(&self) -> Range<f64> {
        0.0..self.reference_end()
    }

    ///
    /// The y-axis range of the execution time panel.
    ///
    pub fn time_range(&self) -> Range<f64> {
        0.0..Self::non_degenerate(self.benchmark.max_time() * Self::TIME_MARGIN)
    }

    ///
    /// The y-axis range of the speedup panel.
    ///
    pub fn speedup_range(&self) -> Range<f64> {
        let top = self.benchmark.max_speedup().max(self.reference_end());
        0.0..Self::non_degenerate(top * Self::SPEEDUP_MARGIN)
    }

    ///
    /// The ideal linear speedup line, spanning all thread counts with a margin of one.
    ///
    pub fn reference_line(&self) -> [(f64, f64); 2] {
        let end = self.reference_end();
        [(0.0, 0.0), (end, end)]
    }

    ///
    /// The execution time points of every series.
    ///
    pub fn time_series(&self) -> Vec<(&str, Vec<(f64, f64)>)> {
        self.benchmark
            .entries
            .iter()
            .map(|entry| {
                let points = entry
                    .results
                    .runs
                    .iter()
                    .map(|run| (run.thread_count as f64, run.mean_time))
                    .collect();
                (entry.label(), points)
            })
            .collect()
    }

    ///
    /// The speedup points of every series.
    ///
    pub fn speedup_series(&self) -> Vec<(&str, Vec<(f64, f64)>)> {
        self.benchmark
            .entries
            .iter()
            .map(|entry| {
                let points = entry
                    .speedup
                    .points
                    .iter()
                    .map(|point| (point.thread_count as f64, point.speedup))
                    .collect();
                (entry.label(), points)
            })
            .collect()
    }

    ///
    /// Draws both panels onto the root drawing area.
    ///
    fn draw<DB>(&self, root: &DrawingArea<DB, Shift>) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        root.fill(&WHITE)?;
        let (time_area, speedup_area) = root.split_horizontally(Self::SIZE.0 / 2);

        Panel {
            caption: "Execution time",
            y_description: "total time [s]",
            x_range: self.x_range(),
            y_range: self.time_range(),
            series: self.time_series(),
            reference_line: None,
            legend_position: SeriesLabelPosition::UpperRight,
        }
        .draw(&time_area)?;

        Panel {
            caption: "Performance gain",
            y_description: "Speedup factor",
            x_range: self.x_range(),
            y_range: self.speedup_range(),
            series: self.speedup_series(),
            reference_line: Some(self.reference_line()),
            legend_position: SeriesLabelPosition::UpperLeft,
        }
        .draw(&speedup_area)?;

        root.present()?;
        Ok(())
    }

    ///
    /// The end of the x-axis and of the reference line.
    ///
    fn reference_end(&self) -> f64 {
        self.benchmark.max_threads as f64 + 1.0
    }

    ///
    /// Replaces an empty axis extent with a unit one.
    ///
    fn non_degenerate(top: f64) -> f64 {
        if top > 0.0 {
            top
        } else {
            1.0
        }
    }
}

impl From<Benchmark> for Chart {
    fn from(benchmark: Benchmark) -> Self {
        Self { benchmark }
    }
}
