//!
//! Human-readable measurement units.
//!

/// Nanoseconds in a microsecond.
const NANOSECONDS_PER_MICROSECOND: f64 = 1_000.0;

/// Nanoseconds in a millisecond.
const NANOSECONDS_PER_MILLISECOND: f64 = 1_000_000.0;

///
/// Formats a duration with an auto-scaled unit and two fractional digits.
///
pub fn format_duration(nanoseconds: f64) -> String {
    if nanoseconds < NANOSECONDS_PER_MICROSECOND {
        format!("{nanoseconds:.2} ns")
    } else if nanoseconds < NANOSECONDS_PER_MILLISECOND {
        format!("{:.2} us", nanoseconds / NANOSECONDS_PER_MICROSECOND)
    } else {
        format!("{:.2} ms", nanoseconds / NANOSECONDS_PER_MILLISECOND)
    }
}

///
/// Formats an optional duration, using `-` for a missing measurement.
///
pub fn format_optional_duration(nanoseconds: Option<f64>) -> String {
    nanoseconds
        .map(format_duration)
        .unwrap_or_else(|| "-".to_owned())
}

///
/// Formats a signed relative change, or an empty string if there is none.
///
pub fn format_percent(percent: Option<f64>) -> String {
    percent
        .map(|percent| format!("{percent:+.1}%"))
        .unwrap_or_default()
}

///
/// Formats an optional byte count, using `-` for a missing measurement.
///
pub fn format_bytes(bytes: Option<u64>) -> String {
    bytes
        .map(|bytes| format!("{bytes} B"))
        .unwrap_or_else(|| "-".to_owned())
}
