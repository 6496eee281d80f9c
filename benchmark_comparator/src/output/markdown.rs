//!
//! Markdown comparison report.
//!

use std::fmt::Write;

use crate::comparison::row::Row;
use crate::comparison::Comparison;
use crate::output::units;

///
/// Markdown comparison report.
///
#[derive(Default)]
pub struct Markdown {
    /// Rendered document.
    pub content: String,
}

impl Markdown {
    ///
    /// Renders one comparison section.
    ///
    pub fn render(comparison: &Comparison) -> String {
        let with_allocations = comparison.has_allocations();

        let mut content = String::new();
        writeln!(content, "### Comparison: {}", comparison.title).expect("Always valid");
        writeln!(content).expect("Always valid");
        writeln!(content, "Baseline: `{}`  ", comparison.baseline_label).expect("Always valid");
        writeln!(content, "Current: `{}`", comparison.current_label).expect("Always valid");
        writeln!(content).expect("Always valid");

        if with_allocations {
            content.push_str("| Benchmark | Baseline | Current | Diff | Status | Allocated |\n");
            content.push_str("|---|---|---|---|---|---|\n");
        } else {
            content.push_str("| Benchmark | Baseline | Current | Diff | Status |\n");
            content.push_str("|---|---|---|---|---|\n");
        }
        for row in comparison.rows.iter() {
            content.push_str(Self::render_row(row, with_allocations).as_str());
        }
        content
    }

    fn render_row(row: &Row, with_allocations: bool) -> String {
        let mut line = format!(
            "| {} | {} | {} | {} | {} |",
            Self::escape(row.display_name.as_str()),
            units::format_optional_duration(row.baseline_mean()),
            units::format_optional_duration(row.current_mean()),
            units::format_percent(row.relative_change_percent),
            row.status.label(),
        );
        if with_allocations {
            line.push_str(format!(" {} |", units::format_bytes(row.bytes_allocated())).as_str());
        }
        line.push('\n');
        line
    }

    ///
    /// Escapes the characters that would break a table cell.
    ///
    fn escape(cell: &str) -> String {
        cell.replace('|', "\\|")
    }
}

impl From<&[Comparison]> for Markdown {
    fn from(comparisons: &[Comparison]) -> Self {
        let content = comparisons
            .iter()
            .map(Self::render)
            .collect::<Vec<String>>()
            .join("\n");
        Self { content }
    }
}
