//!
//! Native JSON output format.
//!

use crate::model::benchmark::Benchmark;

///
/// Native JSON format that corresponds to the inner speedup plotter data model.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

impl From<&Benchmark> for Json {
    fn from(benchmark: &Benchmark) -> Self {
        let content = serde_json::to_string_pretty(benchmark).expect("Always valid");
        Self { content }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use crate::input::Input;
    use crate::model::benchmark::Benchmark;

    use super::Json;

    #[test]
    fn serializes_series() {
        let mut benchmark = Benchmark::default();
        benchmark
            .extend(Input {
                path: PathBuf::from("run1.json"),
                document: serde_json::from_str(
                    r#"{ "env": { "id": "run1" }, "results": [
                        { "mean": 10.0, "parameters": { "threads": 1 } },
                        { "mean": 5.0, "parameters": { "threads": 2 } }
                    ] }"#,
                )
                .expect("Valid document"),
            })
            .expect("Valid input");

        let json = Json::from(&benchmark);
        let value: serde_json::Value =
            serde_json::from_str(json.content.as_str()).expect("Valid JSON");
        assert_eq!(value["max_threads"], 2);
        assert_eq!(value["entries"][0]["path"], "run1.json");
        assert_eq!(value["entries"][0]["results"]["label"], "run1");
        assert_eq!(value["entries"][0]["results"]["runs"][1]["mean_time"], 5.0);
        assert_eq!(value["entries"][0]["speedup"]["points"][1]["thread_count"], 2);
        assert_eq!(value["entries"][0]["speedup"]["points"][1]["speedup"], 2.0);
    }
}
