//!
//! XLSX worksheet for benchmark series.
//!

///
/// XLSX worksheet for benchmark series.
///
/// Every series occupies two adjacent columns: the thread count and the measured value.
///
pub struct Worksheet {
    /// The inner worksheet.
    pub worksheet: rust_xlsxwriter::Worksheet,
    /// The caption of value columns.
    pub value_header: &'static str,
    /// The number of series written so far.
    pub series_count: u16,
}

impl Worksheet {
    /// Width of columns that contain thread counts.
    const THREADS_COLUMN_WIDTH: usize = 10;
    /// Width of columns that contain values.
    const VALUE_COLUMN_WIDTH: usize = 14;
    /// Index of the first row with values.
    const FIRST_VALUE_ROW: u32 = 2;

    ///
    /// Creates a new worksheet with the given name.
    ///
    pub fn new(name: &str, value_header: &'static str) -> anyhow::Result<Self> {
        let mut worksheet = rust_xlsxwriter::Worksheet::new();
        worksheet.set_name(name)?;
        worksheet.set_freeze_panes(Self::FIRST_VALUE_ROW, 0)?;

        Ok(Self {
            worksheet,
            value_header,
            series_count: 0,
        })
    }

    ///
    /// Adds a new pair of columns for a series and writes its values in the original order.
    ///
    pub fn write_series<I>(&mut self, label: &str, values: I) -> anyhow::Result<()>
    where
        I: IntoIterator<Item = (u64, f64)>,
    {
        let threads_column = self.series_count * 2;
        let value_column = threads_column + 1;

        self.worksheet.merge_range(
            0,
            threads_column,
            0,
            value_column,
            label,
            &Self::worksheet_caption_format(),
        )?;
        self.worksheet
            .set_column_width(threads_column, Self::THREADS_COLUMN_WIDTH as f64)?;
        self.worksheet
            .set_column_width(value_column, Self::VALUE_COLUMN_WIDTH as f64)?;
        self.worksheet.write_with_format(
            1,
            threads_column,
            "Threads",
            &Self::column_header_format(),
        )?;
        self.worksheet.write_with_format(
            1,
            value_column,
            self.value_header,
            &Self::column_header_format(),
        )?;

        for (index, (thread_count, value)) in values.into_iter().enumerate() {
            let row_index = Self::FIRST_VALUE_ROW + (index as u32);
            self.worksheet.write_with_format(
                row_index,
                threads_column,
                thread_count as f64,
                &Self::row_header_format(),
            )?;
            self.worksheet.write_with_format(
                row_index,
                value_column,
                value,
                &Self::value_format(),
            )?;
        }

        self.series_count += 1;
        Ok(())
    }

    ///
    /// Finalizes the worksheet and returns its inner object.
    ///
    pub fn into_inner(self) -> rust_xlsxwriter::Worksheet {
        self.worksheet
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn worksheet_caption_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(14);
        let format = format.set_font_color("#FFFFFF");
        let format = format.set_background_color("#4C6EF5");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_align(rust_xlsxwriter::FormatAlign::VerticalCenter);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn column_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_bold();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#EEF3FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn row_header_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#1E1E1E");
        let format = format.set_background_color("#DDE6FF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Center);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        format
    }

    ///
    /// Returns the eponymous cell format.
    ///
    fn value_format() -> rust_xlsxwriter::Format {
        let format = rust_xlsxwriter::Format::new();
        let format = format.set_font_size(12);
        let format = format.set_font_color("#000000");
        let format = format.set_background_color("#FFFFFF");
        let format = format.set_align(rust_xlsxwriter::FormatAlign::Right);
        let format = format.set_border(rust_xlsxwriter::FormatBorder::None);
        let format = format.set_num_format("0.000");
        format
    }
}
