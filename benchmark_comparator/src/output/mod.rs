//!
//! Benchmark comparator output.
//!

pub mod format;
pub mod json;
pub mod markdown;
pub mod text;
pub mod units;

use std::io::Write;
use std::path::PathBuf;

use crate::comparison::Comparison;

use self::format::Format;
use self::json::Json;
use self::markdown::Markdown;
use self::text::Text;

///
/// The rendered comparison report.
///
pub struct Output {
    /// The report content.
    pub content: String,
}

impl Output {
    ///
    /// Writes the report to a file.
    ///
    pub fn write_to_file(self, path: PathBuf) -> anyhow::Result<()> {
        std::fs::write(path.as_path(), self.content)
            .map_err(|error| anyhow::anyhow!("Report file {path:?} writing: {error}"))?;
        Ok(())
    }

    ///
    /// Prints the report to `stdout`.
    ///
    pub fn write_to_stdout(self) -> anyhow::Result<()> {
        let mut stdout = std::io::stdout().lock();
        stdout.write_all(self.content.as_bytes())?;
        if !self.content.ends_with('\n') {
            writeln!(stdout)?;
        }
        Ok(())
    }
}

impl From<(&[Comparison], Format)> for Output {
    fn from((comparisons, format): (&[Comparison], Format)) -> Self {
        match format {
            Format::Markdown => Markdown::from(comparisons).into(),
            Format::Json => Json::from(comparisons).into(),
            Format::Text => Text::from(comparisons).into(),
        }
    }
}

impl From<Markdown> for Output {
    fn from(value: Markdown) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Json> for Output {
    fn from(value: Json) -> Self {
        Self {
            content: value.content,
        }
    }
}

impl From<Text> for Output {
    fn from(value: Text) -> Self {
        Self {
            content: value.content,
        }
    }
}
