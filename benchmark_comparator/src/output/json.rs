//!
//! JSON comparison report.
//!

use crate::comparison::status::Status;
use crate::comparison::Comparison;

///
/// JSON comparison report.
///
#[derive(Default)]
pub struct Json {
    /// Serialized JSON.
    pub content: String,
}

///
/// A serialized comparison section.
///
#[derive(serde::Serialize)]
struct Section<'a> {
    title: &'a str,
    baseline: &'a str,
    current: &'a str,
    rows: Vec<SectionRow<'a>>,
}

///
/// A serialized comparison row.
///
#[derive(serde::Serialize)]
struct SectionRow<'a> {
    name: &'a str,
    identity: &'a str,
    baseline_ns: Option<f64>,
    current_ns: Option<f64>,
    diff_percent: Option<f64>,
    status: Status,
    baseline_bytes: Option<u64>,
    current_bytes: Option<u64>,
}

impl From<&[Comparison]> for Json {
    fn from(comparisons: &[Comparison]) -> Self {
        let sections: Vec<Section> = comparisons
            .iter()
            .map(|comparison| Section {
                title: comparison.title.as_str(),
                baseline: comparison.baseline_label.as_str(),
                current: comparison.current_label.as_str(),
                rows: comparison
                    .rows
                    .iter()
                    .map(|row| SectionRow {
                        name: row.display_name.as_str(),
                        identity: row.identity.as_str(),
                        baseline_ns: row.baseline_mean(),
                        current_ns: row.current_mean(),
                        diff_percent: row.relative_change_percent,
                        status: row.status,
                        baseline_bytes: row
                            .baseline
                            .as_ref()
                            .and_then(|result| result.bytes_allocated),
                        current_bytes: row
                            .current
                            .as_ref()
                            .and_then(|result| result.bytes_allocated),
                    })
                    .collect(),
            })
            .collect();
        let content = serde_json::to_string_pretty(&sections).expect("Always valid");
        Self { content }
    }
}
