//!
//! The benchmark results document.
//!

///
/// The benchmark results document, as written by the benchmarking tool.
///
/// Runs are kept as raw JSON values, so that a single malformed run can be
/// reported with its index instead of failing the whole document parsing.
///
#[derive(Debug, Clone, serde::Deserialize)]
pub struct Document {
    /// The environment metadata. Only `id` is used.
    #[serde(default)]
    pub env: Option<serde_json::Value>,
    /// The raw benchmark runs.
    pub results: Vec<serde_json::Value>,
}

impl Document {
    ///
    /// Returns the `env.id` label, if present and a string or a number.
    ///
    pub fn label(&self) -> Option<String> {
        match self.env.as_ref()?.get("id")? {
            serde_json::Value::String(id) => Some(id.to_owned()),
            serde_json::Value::Number(id) => Some(id.to_string()),
            _ => None,
        }
    }
}
