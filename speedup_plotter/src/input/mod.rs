//!
//! Benchmark input format.
//!

pub mod document;
pub mod error;
pub mod numeric;
pub mod run;

use std::path::Path;
use std::path::PathBuf;

use self::document::Document;
use self::error::Error as InputError;

///
/// A benchmark results document read from a file.
///
#[derive(Debug)]
pub struct Input {
    /// The path the document was read from.
    pub path: PathBuf,
    /// The parsed document.
    pub document: Document,
}

impl TryFrom<&Path> for Input {
    type Error = InputError;

    fn try_from(path: &Path) -> Result<Self, Self::Error> {
        let text = std::fs::read_to_string(path).map_err(|error| InputError::Reading {
            error,
            path: path.to_path_buf(),
        })?;
        if text.trim().is_empty() {
            return Err(InputError::EmptyFile {
                path: path.to_path_buf(),
            });
        }
        let document: Document =
            serde_json::from_str(text.as_str()).map_err(|error| InputError::Parsing {
                error,
                path: path.to_path_buf(),
            })?;
        Ok(Self {
            path: path.to_path_buf(),
            document,
        })
    }
}
