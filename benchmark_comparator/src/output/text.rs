//!
//! Terminal comparison report.
//!

use std::cmp;
use std::fmt::Write;

use colored::Colorize;

use crate::comparison::Comparison;
use crate::output::units;

/// The minimal width of the benchmark name column.
const NAME_COLUMN_MIN_WIDTH: usize = 9;

/// The width of the measurement columns.
const VALUE_COLUMN_WIDTH: usize = 12;

///
/// Terminal comparison report.
///
#[derive(Default)]
pub struct Text {
    /// Rendered table.
    pub content: String,
}

impl Text {
    ///
    /// Renders one comparison section as an aligned table.
    ///
    pub fn render(comparison: &Comparison) -> String {
        let with_allocations = comparison.has_allocations();
        let name_width = comparison
            .rows
            .iter()
            .map(|row| row.display_name.chars().count())
            .fold(NAME_COLUMN_MIN_WIDTH, cmp::max);

        let mut content = String::new();
        writeln!(
            content,
            "{} {}",
            "Comparison:".bright_white().bold(),
            comparison.title
        )
        .expect("Always valid");
        writeln!(content, "  Baseline: {}", comparison.baseline_label).expect("Always valid");
        writeln!(content, "  Current:  {}", comparison.current_label).expect("Always valid");

        let mut header = format!(
            "{:name_width$}  {:>VALUE_COLUMN_WIDTH$}  {:>VALUE_COLUMN_WIDTH$}  {:>8}  {:9}",
            "Benchmark", "Baseline", "Current", "Diff", "Status",
        );
        if with_allocations {
            header.push_str(format!("  {:>VALUE_COLUMN_WIDTH$}", "Allocated").as_str());
        }
        writeln!(content, "{}", header.trim_end().bright_white()).expect("Always valid");

        for row in comparison.rows.iter() {
            let mut line = format!(
                "{:name_width$}  {:>VALUE_COLUMN_WIDTH$}  {:>VALUE_COLUMN_WIDTH$}  {:>8}  {:9}",
                row.display_name,
                units::format_optional_duration(row.baseline_mean()),
                units::format_optional_duration(row.current_mean()),
                units::format_percent(row.relative_change_percent),
                row.status.colorize(),
            );
            if with_allocations {
                line.push_str(
                    format!(
                        "  {:>VALUE_COLUMN_WIDTH$}",
                        units::format_bytes(row.bytes_allocated())
                    )
                    .as_str(),
                );
            }
            writeln!(content, "{}", line.trim_end()).expect("Always valid");
        }
        content
    }
}

impl From<&[Comparison]> for Text {
    fn from(comparisons: &[Comparison]) -> Self {
        let content = comparisons
            .iter()
            .map(Self::render)
            .collect::<Vec<String>>()
            .join("\n");
        Self { content }
    }
}
