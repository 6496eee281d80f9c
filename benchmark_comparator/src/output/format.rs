//!
//! Comparison report format.
//!

///
/// Comparison report format.
///
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Format {
    /// Markdown document with one table per compared pair.
    #[default]
    Markdown,
    /// Pretty-printed JSON array of compared pairs.
    Json,
    /// Aligned, colored table for the terminal.
    Text,
}

impl std::str::FromStr for Format {
    type Err = anyhow::Error;

    fn from_str(string: &str) -> Result<Self, Self::Err> {
        match string.to_lowercase().as_str() {
            "markdown" | "md" => Ok(Self::Markdown),
            "json" => Ok(Self::Json),
            "text" => Ok(Self::Text),
            string => anyhow::bail!(
                "Unknown report format `{string}`. Supported formats: {}",
                vec![Self::Markdown, Self::Json, Self::Text]
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
            Format::Markdown => write!(f, "markdown"),
            Format::Json => write!(f, "json"),
            Format::Text => write!(f, "text"),
        }
    }
}
