//!
//! A single chart panel with one line per series.
//!

use std::ops::Range;

use plotters::coord::Shift;
use plotters::prelude::*;

///
/// A single chart panel with one line per series.
///
pub struct Panel<'a> {
    /// The panel caption.
    pub caption: &'static str,
    /// The y-axis description.
    pub y_description: &'static str,
    /// The x-axis range.
    pub x_range: Range<f64>,
    /// The y-axis range.
    pub y_range: Range<f64>,
    /// The labeled series, with points in the original order.
    pub series: Vec<(&'a str, Vec<(f64, f64)>)>,
    /// The ideal scaling reference line, if drawn.
    pub reference_line: Option<[(f64, f64); 2]>,
    /// The legend position.
    pub legend_position: SeriesLabelPosition,
}

impl Panel<'_> {
    /// The x-axis description shared by all panels.
    const X_DESCRIPTION: &'static str = "# of threads";
    /// The series line width.
    const LINE_WIDTH: u32 = 2;
    /// The point marker radius.
    const MARKER_SIZE: i32 = 4;

    ///
    /// Draws the panel onto the drawing area.
    ///
    pub fn draw<DB>(self, area: &DrawingArea<DB, Shift>) -> anyhow::Result<()>
    where
        DB: DrawingBackend,
        DB::ErrorType: 'static,
    {
        let mut chart = ChartBuilder::on(area)
            .caption(self.caption, ("sans-serif", 24).into_font())
            .margin(16)
            .x_label_area_size(48)
            .y_label_area_size(64)
            .build_cartesian_2d(self.x_range, self.y_range)?;

        chart
            .configure_mesh()
            .x_desc(Self::X_DESCRIPTION)
            .y_desc(self.y_description)
            .draw()?;

        if let Some(reference_line) = self.reference_line {
            let color = BLACK.mix(0.4);
            chart
                .draw_series(LineSeries::new(reference_line, color.stroke_width(1)))?
                .label("ideal")
                .legend(move |(x, y)| {
                    PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(1))
                });
        }

        for (index, (label, points)) in self.series.into_iter().enumerate() {
            let color = Palette99::pick(index).mix(1.0);
            chart
                .draw_series(LineSeries::new(
                    points.iter().copied(),
                    color.stroke_width(Self::LINE_WIDTH),
                ))?
                .label(label)
                .legend(move |(x, y)| {
                    PathElement::new(
                        vec![(x, y), (x + 20, y)],
                        color.stroke_width(Self::LINE_WIDTH),
                    )
                });
            chart.draw_series(points.into_iter().map(|point| {
                EmptyElement::at(point)
                    + Circle::new((0, 0), Self::MARKER_SIZE, WHITE.filled())
                    + Circle::new((0, 0), Self::MARKER_SIZE, color.stroke_width(Self::LINE_WIDTH))
            }))?;
        }

        chart
            .configure_series_labels()
            .position(self.legend_position)
            .background_style(WHITE.mix(0.8))
            .border_style(BLACK)
            .draw()?;

        Ok(())
    }
}
