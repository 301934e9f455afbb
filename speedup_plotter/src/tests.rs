//!
//! End-to-end tests of loading benchmark files and deriving speedup.
//!

use std::path::PathBuf;

use crate::input::error::Error as InputError;
use crate::input::Input;
use crate::model::benchmark::Benchmark;
use crate::model::error::Error as SeriesError;
use crate::model::run::Run;
use crate::model::speedup_series::point::Point;
use crate::output::format::Format;
use crate::output::Output;

fn write_input(name: &str, content: &str) -> PathBuf {
    let directory = std::env::temp_dir().join(format!("speedup-plotter-{}", std::process::id()));
    std::fs::create_dir_all(directory.as_path()).expect("Temporary directory creating");
    let path = directory.join(name);
    std::fs::write(path.as_path(), content).expect("Temporary file writing");
    path
}

fn load(benchmark: &mut Benchmark, name: &str, content: &str) -> Result<(), SeriesError> {
    let path = write_input(name, content);
    let input = Input::try_from(path.as_path()).expect("Valid input file");
    benchmark.extend(input).map(|_| ())
}

#[test]
fn linear_scaling_file() {
    let mut benchmark = Benchmark::default();
    load(
        &mut benchmark,
        "scenario-a.json",
        r#"{"env":{"id":"run1"},"results":[{"mean":10.0,"parameters":{"threads":1}},{"mean":5.0,"parameters":{"threads":2}},{"mean":2.5,"parameters":{"threads":4}}]}"#,
    )
    .expect("Valid series");

    let entry = &benchmark.entries[0];
    assert_eq!(entry.label(), "run1");
    assert_eq!(
        entry.results.runs,
        vec![Run::new(1, 10.0), Run::new(2, 5.0), Run::new(4, 2.5)]
    );
    assert_eq!(
        entry.speedup.points,
        vec![Point::new(1, 1.0), Point::new(2, 2.0), Point::new(4, 4.0)]
    );
    assert_eq!(benchmark.max_threads, 4);
}

#[test]
fn empty_results_file() {
    let mut benchmark = Benchmark::default();
    let error = load(&mut benchmark, "scenario-b.json", r#"{"env":{"id":"run1"},"results":[]}"#)
        .expect_err("Empty series");
    assert_eq!(error, SeriesError::EmptySeries);
    assert!(benchmark.is_empty());
}

#[test]
fn zero_time_files() {
    let mut benchmark = Benchmark::default();
    load(
        &mut benchmark,
        "scenario-c-baseline.json",
        r#"{"results":[{"mean":0,"parameters":{"threads":2}},{"mean":1.0,"parameters":{"threads":4}}]}"#,
    )
    .expect("Zero baseline is valid");
    assert_eq!(
        benchmark.entries[0].speedup.points,
        vec![Point::new(2, 0.0), Point::new(4, 0.0)]
    );

    let error = load(
        &mut benchmark,
        "scenario-c-later.json",
        r#"{"results":[{"mean":3.0,"parameters":{"threads":1}},{"mean":0,"parameters":{"threads":32}}]}"#,
    )
    .expect_err("Zero time after baseline");
    assert_eq!(error, SeriesError::DivisionByZero { index: 1 });
    assert_eq!(benchmark.entries.len(), 1);
    assert_eq!(benchmark.max_threads, 4);
}

#[test]
fn independent_files() {
    let mut benchmark = Benchmark::default();
    load(
        &mut benchmark,
        "scenario-d-laptop.json",
        r#"{"env":{"id":"laptop"},"results":[{"mean":8.0,"parameters":{"threads":"1"}},{"mean":2.0,"parameters":{"threads":"4"}}]}"#,
    )
    .expect("Valid series");
    load(
        &mut benchmark,
        "scenario-d-server.json",
        r#"{"results":[{"mean":6.0,"parameters":{"threads":8}},{"mean":1.0,"parameters":{"threads":64}},{"mean":3.0,"parameters":{"threads":16}}]}"#,
    )
    .expect("Valid series");

    let laptop = &benchmark.entries[0];
    let server = &benchmark.entries[1];
    assert_eq!(laptop.label(), "laptop");
    assert_eq!(server.label(), "unknown");
    assert_eq!(laptop.speedup.points[0].speedup, 1.0);
    assert_eq!(laptop.speedup.points[1].speedup, 4.0);
    assert_eq!(server.speedup.points[0].speedup, 8.0);
    assert_eq!(server.speedup.points[1].speedup, 48.0);
    assert_eq!(server.speedup.points[2].speedup, 16.0);
    assert_eq!(benchmark.max_threads, 64);
}

#[test]
fn malformed_file_is_skipped() {
    let mut benchmark = Benchmark::default();
    let broken = write_input("skip-broken.json", r#"{"results":{"mean":1.0}}"#);
    let valid = write_input(
        "skip-valid.json",
        r#"{"results":[{"mean":1.0,"parameters":{"threads":2}}]}"#,
    );

    let error = Input::try_from(broken.as_path()).expect_err("Malformed document");
    assert!(matches!(error, InputError::Parsing { .. }));
    assert!(!error.is_fatal());

    benchmark
        .extend(Input::try_from(valid.as_path()).expect("Valid input file"))
        .expect("Valid series");
    assert_eq!(benchmark.entries.len(), 1);
    assert_eq!(benchmark.entries[0].path, valid);
}

#[test]
fn writes_outputs() {
    let mut benchmark = Benchmark::default();
    load(
        &mut benchmark,
        "output-input.json",
        r#"{"env":{"id":"run1"},"results":[{"mean":4.0,"parameters":{"threads":1}},{"mean":2.0,"parameters":{"threads":2}}]}"#,
    )
    .expect("Valid series");
    load(
        &mut benchmark,
        "output-second-input.json",
        r#"{"env":{"id":"run2"},"results":[{"mean":6.0,"parameters":{"threads":2}},{"mean":2.0,"parameters":{"threads":8}}]}"#,
    )
    .expect("Valid series");

    for format in Format::all() {
        let path = write_input(format!("output.{format}").as_str(), "");
        let output = Output::try_from((benchmark.clone(), format)).expect("Valid output");
        output.write_to_file(path.clone()).expect("Output writing");
        let metadata = std::fs::metadata(path.as_path()).expect("Output file exists");
        assert!(metadata.len() > 0, "{format}");
    }
}

#[test]
fn chart_contains_legend() {
    let mut benchmark = Benchmark::default();
    load(
        &mut benchmark,
        "chart-first-input.json",
        r#"{"env":{"id":"desktop"},"results":[{"mean":4.0,"parameters":{"threads":1}},{"mean":2.0,"parameters":{"threads":2}}]}"#,
    )
    .expect("Valid series");
    load(
        &mut benchmark,
        "chart-second-input.json",
        r#"{"env":{"id":"workstation"},"results":[{"mean":9.0,"parameters":{"threads":4}},{"mean":3.0,"parameters":{"threads":16}}]}"#,
    )
    .expect("Valid series");

    let path = write_input("chart.svg", "");
    let output = Output::try_from((benchmark, Format::Svg)).expect("Valid output");
    output.write_to_file(path.clone()).expect("Chart writing");

    let content = std::fs::read_to_string(path.as_path()).expect("Chart reading");
    assert!(content.contains("<svg"));
    assert!(content.contains("desktop"));
    assert!(content.contains("workstation"));
    assert!(content.contains("ideal"));
    assert!(content.contains("Performance gain"));
}
