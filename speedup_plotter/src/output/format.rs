//!
//! Output benchmark format.
//!

use std::path::Path;

///
/// Output benchmark format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Chart image in the SVG format.
    #[default]
    Svg,
    /// JSON format, corresponds to the inner data model of speedup plotter.
    Json,
    /// Excel spreadsheet format.
    Xlsx,
}

impl Format {
    ///
    /// Infers the format from the file extension of the output path.
    ///
    pub fn from_extension(path: &Path) -> Option<Self> {
        let extension = path.extension()?.to_str()?;
        extension.parse().ok()
    }

    ///
    /// All supported formats.
    ///
    pub fn all() -> [Self; 3] {
        [Self::Svg, Self::Json, Self::Xlsx]
    }
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "svg" => Ok(Self::Svg),
            "json" => Ok(Self::Json),
            "xlsx" => Ok(Self::Xlsx),
            string => anyhow::bail!(
                "Unknown output format `{string}`. Supported formats: {}",
                Self::all()
                    .into_iter()
                    .map(|element| element.to_string())
                    .collect::<Vec<String>>()
                    .join(", ")
            ),
        }
    }
}

impl std::fmt::Display for Format {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Format::Svg => write!(f, "svg"),
            Format::Json => write!(f, "json"),
            Format::Xlsx => write!(f, "xlsx"),
        }
    }
}
