//!
//! The outcome of comparing one benchmark case.
//!

use colored::Colorize;

///
/// The outcome of comparing one benchmark case.
///
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub enum Status {
    /// The current mean is below the improvement threshold.
    Faster,
    /// The current mean is above the regression threshold.
    Slower,
    /// The change is within the thresholds.
    Unchanged,
    /// The case is only measured in the current results.
    Added,
    /// The case is only measured in the baseline results.
    Removed,
}

impl Status {
    /// All statuses in report order.
    pub const ALL: [Self; 5] = [
        Self::Slower,
        Self::Faster,
        Self::Unchanged,
        Self::Added,
        Self::Removed,
    ];

    ///
    /// Returns the Markdown label.
    ///
    pub fn label(&self) -> &'static str {
        match self {
            Self::Faster => "🟢 Faster",
            Self::Slower => "🔴 Slower",
            Self::Unchanged => "⚪ Unchanged",
            Self::Added => "✨ Added",
            Self::Removed => "❌ Removed",
        }
    }

    ///
    /// Returns the terminal representation.
    ///
    pub fn colorize(&self) -> colored::ColoredString {
        match self {
            Self::Faster => self.to_string().green(),
            Self::Slower => self.to_string().bright_red(),
            Self::Unchanged => self.to_string().white(),
            Self::Added => self.to_string().cyan(),
            Self::Removed => self.to_string().yellow(),
        }
    }
}

impl std::fmt::Display for Status {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Faster => write!(f, "Faster"),
            Self::Slower => write!(f, "Slower"),
            Self::Unchanged => write!(f, "Unchanged"),
            Self::Added => write!(f, "Added"),
            Self::Removed => write!(f, "Removed"),
        }
    }
}
