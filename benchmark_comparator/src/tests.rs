//!
//! Tests for the benchmark comparator.
//!

#![cfg(test)]

use std::path::Path;

use crate::comparison::join;
use crate::comparison::Comparison;
use crate::input::document::Document;
use crate::input::error::Error as InputError;
use crate::input::pair::Pair;
use crate::model::benchmark_result::BenchmarkResult;
use crate::model::result_set::ResultSet;
use crate::output::format::Format;
use crate::output::markdown::Markdown;
use crate::output::units::format_duration;
use crate::output::Output;
use crate::Status;
use crate::Thresholds;

const DOCUMENT: &str = r#"
{
    "Title": "Variable.Core.Tests.Benchmarks.CoreMathBenchmarks-20240101-000000",
    "HostEnvironmentInfo": { "RuntimeVersion": ".NET 8.0.0" },
    "Benchmarks": [
        {
            "DisplayInfo": "CoreMathBenchmarks.IsPowerOfTwo: ShortRun [n=10]",
            "FullName": "Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.IsPowerOfTwo(n: 10)",
            "Statistics": { "Mean": 1.25, "Median": 1.2, "StandardDeviation": 0.01 },
            "Memory": { "Gen0Collections": 0, "BytesAllocatedPerOperation": 0 }
        },
        {
            "DisplayInfo": "CoreMathBenchmarks.Clamp: ShortRun",
            "Statistics": { "Mean": 2500.0 }
        },
        {
            "FullName": "Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.Lerp(t: 0.5)",
            "Statistics": null
        },
        {
            "FullName": "Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.IsPowerOfTwo(n: 10)",
            "Statistics": { "Mean": 1.5 }
        }
    ]
}
"#;

fn result(identity: &str, mean: f64) -> BenchmarkResult {
    BenchmarkResult::new(identity.to_owned(), Some(mean), None)
}

fn result_set(results: &[(&str, f64)]) -> ResultSet {
    results
        .iter()
        .map(|(identity, mean)| result(identity, *mean))
        .collect()
}

fn parse(text: &str) -> Result<ResultSet, InputError> {
    let document: Document = serde_json::from_str(text).map_err(|error| InputError::Parsing {
        error,
        path: "inline.json".into(),
    })?;
    ResultSet::try_from_document(document, Path::new("inline.json"))
}

#[test]
fn shorten_keeps_parameters() {
    assert_eq!(
        BenchmarkResult::shorten(
            "Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.IsPowerOfTwo(n: 10)"
        ),
        "IsPowerOfTwo(n: 10)"
    );
    assert_eq!(
        BenchmarkResult::shorten("Variable.Core.Benchmarks.Lerp(t: 0.5, scale: 1.5)"),
        "Lerp(t: 0.5, scale: 1.5)"
    );
}

#[test]
fn shorten_keeps_short_names() {
    assert_eq!(BenchmarkResult::shorten("A"), "A");
    assert_eq!(
        BenchmarkResult::shorten("CoreMathBenchmarks.Clamp: ShortRun"),
        "CoreMathBenchmarks.Clamp: ShortRun"
    );
}

#[test]
fn document_prefers_full_name() {
    let result_set = parse(DOCUMENT).expect("Valid document");

    assert_eq!(result_set.len(), 3);
    assert!(result_set
        .get("Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.IsPowerOfTwo(n: 10)")
        .is_some());
    assert!(result_set
        .get("CoreMathBenchmarks.Clamp: ShortRun")
        .is_some());
}

#[test]
fn document_repeated_identity_last_wins() {
    let result_set = parse(DOCUMENT).expect("Valid document");

    let result = result_set
        .get("Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.IsPowerOfTwo(n: 10)")
        .expect("Always exists");
    assert_eq!(result.mean_duration_ns, Some(1.5));
    assert_eq!(result.bytes_allocated, None);
}

#[test]
fn document_missing_statistics_is_not_an_error() {
    let result_set = parse(DOCUMENT).expect("Valid document");

    let result = result_set
        .get("Variable.Core.Tests.Benchmarks.CoreMathBenchmarks.Lerp(t: 0.5)")
        .expect("Always exists");
    assert_eq!(result.mean_duration_ns, None);
    assert_eq!(result.display_name, "Lerp(t: 0.5)");
}

#[test]
fn document_without_benchmarks_is_malformed() {
    let error = parse(r#"{ "Title": "Empty" }"#).expect_err("Must be malformed");
    assert!(matches!(error, InputError::Parsing { .. }));
}

#[test]
fn document_entry_without_identity_is_malformed() {
    let error = parse(r#"{ "Benchmarks": [ { "Statistics": { "Mean": 1.0 } } ] }"#)
        .expect_err("Must be malformed");
    assert!(matches!(error, InputError::MissingIdentity { index: 0, .. }));
}

#[test]
fn document_with_zero_entries_is_empty() {
    let result_set = parse(r#"{ "Benchmarks": [] }"#).expect("Valid document");
    assert!(result_set.is_empty());
}

#[test]
fn load_lenient_missing_file() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let path = directory.path().join("missing.json");

    let (result_set, error) = ResultSet::load_lenient(path.as_path());
    assert!(result_set.is_empty());
    assert!(matches!(error, Some(InputError::Reading { .. })));
}

#[test]
fn load_lenient_empty_and_malformed_files() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let empty = directory.path().join("empty.json");
    std::fs::write(empty.as_path(), "  \n").expect("Writing");
    let malformed = directory.path().join("malformed.json");
    std::fs::write(malformed.as_path(), "{ \"Benchmarks\": [").expect("Writing");

    let (result_set, error) = ResultSet::load_lenient(empty.as_path());
    assert!(result_set.is_empty());
    assert!(matches!(error, Some(InputError::EmptyFile { .. })));

    let (result_set, error) = ResultSet::load_lenient(malformed.as_path());
    assert!(result_set.is_empty());
    let error = error.expect("Must fail");
    assert!(matches!(error, InputError::Parsing { .. }));
    assert_eq!(error.path(), malformed.as_path());
}

#[test]
fn join_added_and_removed_have_no_percent() {
    let rows = join(
        result_set(&[("Suite.Bench.Old", 10.0), ("Suite.Bench.Both", 10.0)]),
        result_set(&[("Suite.Bench.New", 10.0), ("Suite.Bench.Both", 10.0)]),
    );

    assert_eq!(rows.len(), 3);
    for row in rows.iter() {
        match row.identity.as_str() {
            "Suite.Bench.Old" => {
                assert_eq!(row.status, Status::Removed);
                assert_eq!(row.relative_change_percent, None);
            }
            "Suite.Bench.New" => {
                assert_eq!(row.status, Status::Added);
                assert_eq!(row.relative_change_percent, None);
            }
            "Suite.Bench.Both" => {
                assert_eq!(row.status, Status::Unchanged);
                assert_eq!(row.relative_change_percent, Some(0.0));
            }
            identity => panic!("Unexpected row {identity}"),
        }
    }
}

#[test]
fn join_missing_mean_counts_as_missing_side() {
    let baseline: ResultSet = vec![BenchmarkResult::new("A".to_owned(), None, Some(32))]
        .into_iter()
        .collect();
    let current = result_set(&[("A", 10.0)]);

    let rows = join(baseline, current);
    assert_eq!(rows[0].status, Status::Added);
    assert_eq!(rows[0].relative_change_percent, None);
    assert_eq!(rows[0].bytes_allocated(), Some(32));
}

#[test]
fn join_one_sided_entries_without_mean() {
    let baseline: ResultSet = vec![BenchmarkResult::new("Suite.Bench.Old".to_owned(), None, None)]
        .into_iter()
        .collect();
    let current: ResultSet = vec![BenchmarkResult::new("Suite.Bench.New".to_owned(), None, Some(16))]
        .into_iter()
        .collect();

    let rows = join(baseline, current);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].identity, "Suite.Bench.New");
    assert_eq!(rows[0].status, Status::Added);
    assert_eq!(rows[0].relative_change_percent, None);
    assert_eq!(rows[1].identity, "Suite.Bench.Old");
    assert_eq!(rows[1].status, Status::Removed);
    assert_eq!(rows[1].relative_change_percent, None);
}

#[test]
fn join_both_sides_without_mean_are_unchanged() {
    let baseline: ResultSet = vec![BenchmarkResult::new("A".to_owned(), None, None)]
        .into_iter()
        .collect();
    let current: ResultSet = vec![BenchmarkResult::new("A".to_owned(), None, None)]
        .into_iter()
        .collect();

    let rows = join(baseline, current);
    assert_eq!(rows[0].status, Status::Unchanged);
    assert_eq!(rows[0].relative_change_percent, None);
}

#[test]
fn join_relative_change() {
    for (baseline, current) in [(100.0, 137.5), (3.3, 2.9), (12345.678, 12400.0)] {
        let rows = join(result_set(&[("A", baseline)]), result_set(&[("A", current)]));
        let expected = (current - baseline) / baseline * 100.0;
        let percent = rows[0].relative_change_percent.expect("Always exists");
        assert!(
            (percent - expected).abs() < 1e-9,
            "{percent} differs from {expected}"
        );
    }
}

#[test]
fn join_boundaries_are_unchanged() {
    let rows = join(
        result_set(&[("Up", 100.0), ("Down", 100.0)]),
        result_set(&[("Up", 105.0), ("Down", 95.0)]),
    );
    assert!(rows.iter().all(|row| row.status == Status::Unchanged));
    assert_eq!(rows[0].relative_change_percent, Some(-5.0));
    assert_eq!(rows[1].relative_change_percent, Some(5.0));
}

#[test]
fn thresholds_classify() {
    let thresholds = Thresholds::default();
    assert_eq!(thresholds.classify(5.0), Status::Unchanged);
    assert_eq!(thresholds.classify(-5.0), Status::Unchanged);
    assert_eq!(thresholds.classify(5.01), Status::Slower);
    assert_eq!(thresholds.classify(-5.01), Status::Faster);
    assert_eq!(thresholds.classify(0.0), Status::Unchanged);
}

#[test]
fn join_zero_baseline() {
    let rows = join(result_set(&[("A", 0.0)]), result_set(&[("A", 42.0)]));
    assert_eq!(rows[0].status, Status::Unchanged);
    assert_eq!(rows[0].relative_change_percent, Some(0.0));
}

#[test]
fn join_sorted_by_display_name() {
    let rows = join(
        result_set(&[("Suite.Zeta.Run", 1.0), ("Suite.Alpha.Walk", 1.0)]),
        result_set(&[("Suite.Alpha.Run", 1.0)]),
    );
    let names: Vec<&str> = rows.iter().map(|row| row.identity.as_str()).collect();
    assert_eq!(
        names,
        vec!["Suite.Alpha.Run", "Suite.Zeta.Run", "Suite.Alpha.Walk"]
    );
}

#[test]
fn duration_units() {
    assert_eq!(format_duration(999.0), "999.00 ns");
    assert_eq!(format_duration(1_000.0), "1.00 us");
    assert_eq!(format_duration(1_000_000.0), "1.00 ms");
    assert_eq!(format_duration(2_500_000_000.0), "2500.00 ms");
    assert_eq!(format_duration(1.254), "1.25 ns");
}

#[test]
fn end_to_end_report() {
    let rows = join(
        result_set(&[("A", 100.0), ("B", 50.0)]),
        result_set(&[("A", 120.0), ("B", 40.0), ("C", 10.0)]),
    );
    assert_eq!(rows.len(), 3);
    assert_eq!(rows[0].status, Status::Slower);
    assert_eq!(rows[0].relative_change_percent, Some(20.0));
    assert_eq!(rows[1].status, Status::Faster);
    assert_eq!(rows[1].relative_change_percent, Some(-20.0));
    assert_eq!(rows[2].status, Status::Added);

    let comparison = Comparison::new(
        "current.json".to_owned(),
        "baseline.json".to_owned(),
        "current.json".to_owned(),
        rows,
    );
    let content = Markdown::render(&comparison);
    let lines: Vec<&str> = content.lines().collect();

    assert_eq!(lines[0], "### Comparison: current.json");
    assert!(lines.contains(&"| Benchmark | Baseline | Current | Diff | Status |"));
    assert!(lines.contains(&"| A | 100.00 ns | 120.00 ns | +20.0% | 🔴 Slower |"));
    assert!(lines.contains(&"| B | 50.00 ns | 40.00 ns | -20.0% | 🟢 Faster |"));
    assert!(lines.contains(&"| C | - | 10.00 ns |  | ✨ Added |"));
    assert_eq!(content.lines().filter(|line| line.starts_with("| ")).count(), 4);
}

#[test]
fn empty_report_has_header_only() {
    let comparison = Comparison::new(
        "current.json".to_owned(),
        "baseline.json".to_owned(),
        "current.json".to_owned(),
        join(ResultSet::default(), ResultSet::default()),
    );
    let content = Markdown::render(&comparison);

    assert!(content.contains("| Benchmark | Baseline | Current | Diff | Status |\n|---|---|---|---|---|\n"));
    assert_eq!(content.lines().filter(|line| line.starts_with("| ")).count(), 1);
}

#[test]
fn report_allocation_column() {
    let baseline: ResultSet = vec![BenchmarkResult::new("A".to_owned(), Some(10.0), Some(64))]
        .into_iter()
        .collect();
    let current: ResultSet = vec![BenchmarkResult::new("A".to_owned(), Some(10.0), Some(32))]
        .into_iter()
        .collect();
    let comparison = Comparison::new(
        "current.json".to_owned(),
        "baseline.json".to_owned(),
        "current.json".to_owned(),
        join(baseline, current),
    );
    let content = Markdown::render(&comparison);

    assert!(content.contains("| Benchmark | Baseline | Current | Diff | Status | Allocated |"));
    assert!(content.contains("| A | 10.00 ns | 10.00 ns | +0.0% | ⚪ Unchanged | 32 B |"));
}

#[test]
fn report_escapes_pipes() {
    let comparison = Comparison::new(
        "current.json".to_owned(),
        "baseline.json".to_owned(),
        "current.json".to_owned(),
        join(
            ResultSet::default(),
            result_set(&[("Suite.Parsers.Split(separator: |)", 10.0)]),
        ),
    );
    let content = Markdown::render(&comparison);

    assert!(content.contains("| Split(separator: \\|) |"));
}

#[test]
fn json_report() {
    let comparison = Comparison::new(
        "current.json".to_owned(),
        "baseline.json".to_owned(),
        "current.json".to_owned(),
        join(result_set(&[("A", 100.0)]), result_set(&[("A", 120.0)])),
    );
    let output = Output::from((std::slice::from_ref(&comparison), Format::Json));
    let value: serde_json::Value =
        serde_json::from_str(output.content.as_str()).expect("Valid JSON");

    assert_eq!(value[0]["title"], "current.json");
    assert_eq!(value[0]["rows"][0]["status"], "Slower");
    assert_eq!(value[0]["rows"][0]["diff_percent"], 20.0);
    assert!(value[0]["rows"][0]["current_bytes"].is_null());
}

#[test]
fn compare_pair_reports_diagnostics() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let current = directory.path().join("current.json");
    std::fs::write(current.as_path(), DOCUMENT).expect("Writing");
    let pair = Pair::new(directory.path().join("baseline.json"), current);

    let (comparison, diagnostics) = Comparison::compare_pair(&pair, &Thresholds::default());

    assert_eq!(diagnostics.len(), 1);
    assert_eq!(comparison.title, "current.json");
    assert_eq!(comparison.count(Status::Added), 3);
    assert_eq!(comparison.count(Status::Unchanged), 0);
}

#[test]
fn pair_collect_directories() {
    let baseline = tempfile::tempdir().expect("Temporary directory");
    let current = tempfile::tempdir().expect("Temporary directory");
    std::fs::write(baseline.path().join("Math-report-full.json"), DOCUMENT).expect("Writing");
    std::fs::write(baseline.path().join("Old-report-full.json"), DOCUMENT).expect("Writing");
    std::fs::write(current.path().join("Math-report-full.json"), DOCUMENT).expect("Writing");
    std::fs::write(current.path().join("notes.txt"), "").expect("Writing");

    let pairs = Pair::collect(baseline.path(), current.path()).expect("Valid directories");

    assert_eq!(
        pairs,
        vec![
            Pair::new(
                baseline.path().join("Math-report-full.json"),
                current.path().join("Math-report-full.json"),
            ),
            Pair::new(
                baseline.path().join("Old-report-full.json"),
                current.path().join("Old-report-full.json"),
            ),
        ]
    );
}

#[test]
fn pair_collect_rejects_mixed_inputs() {
    let directory = tempfile::tempdir().expect("Temporary directory");
    let file = directory.path().join("current.json");
    std::fs::write(file.as_path(), DOCUMENT).expect("Writing");

    assert!(Pair::collect(directory.path(), file.as_path()).is_err());
}
