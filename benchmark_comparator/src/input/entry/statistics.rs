//!
//! The benchmark timing statistics.
//!

///
/// The benchmark timing statistics.
///
#[derive(Debug, serde::Deserialize)]
pub struct Statistics {
    /// The mean operation duration in nanoseconds.
    #[serde(rename = "Mean")]
    pub mean: Option<f64>,
}
