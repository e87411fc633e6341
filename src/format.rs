//! Human-readable duration rendering.
//!
//! All functions take a duration in seconds as `f64` (sub-second values are
//! fine) and return an owned string. [`format_time`] picks the unit
//! automatically; the `format_ms` / `format_mins` / `format_hours` primitives
//! force a specific rendering.

use serde::{Deserialize, Serialize};

/// How [`format_time`] and [`crate::Timer::total`] render durations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum DurationStyle {
    /// Milliseconds below one second, minutes below one hour, hours above.
    #[default]
    Auto,
    /// Always render in milliseconds, regardless of magnitude.
    Millis,
}

/// Renders a duration in milliseconds, rounded to the nearest integer.
///
/// `0.1 → "100ms"`, `1.555 → "1555ms"`.
pub fn format_ms(seconds: f64) -> String {
    format!("{:.0}ms", seconds * 1000.0)
}

/// Renders a duration as `<minutes>m<seconds>s`, seconds zero-padded.
///
/// Rounds to whole seconds first, so `59.9 → "1m00s"`. Minutes are not
/// capped: `6031 → "100m31s"`.
pub fn format_mins(seconds: f64) -> String {
    let total = seconds.round() as u64;
    format!("{}m{:02}s", total / 60, total % 60)
}

/// Renders a duration as `<hours>h<minutes>m<seconds>s`.
pub fn format_hours(seconds: f64) -> String {
    let total = seconds.round() as u64;
    let mins = total / 60;
    format!("{}h{:02}m{:02}s", mins / 60, mins % 60, total % 60)
}

/// Renders a duration in the most natural unit for its magnitude.
///
/// Sub-second durations (or any duration under [`DurationStyle::Millis`])
/// render in milliseconds, durations under an hour in minutes and seconds,
/// and anything longer with an hour component.
pub fn format_time(seconds: f64, style: DurationStyle) -> String {
    if style == DurationStyle::Millis || seconds < 1.0 {
        format_ms(seconds)
    } else if seconds < 3600.0 {
        format_mins(seconds)
    } else {
        format_hours(seconds)
    }
}

/// Timestamp rendering for report prefixes: minutes/hours, never milliseconds.
pub(crate) fn format_stamp(seconds: f64) -> String {
    if seconds < 3600.0 {
        format_mins(seconds)
    } else {
        format_hours(seconds)
    }
}
