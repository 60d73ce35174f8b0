//! Duration formatting for status lines and report tables.
//!
//! Durations are shown as `HH:MM:SS`. Hours are not wrapped at 24, and
//! negative input is shown as zero.
//!
//! ```rust
//! use tasktrack::libs::formatter::format_seconds;
//!
//! assert_eq!(format_seconds(3725.0), "01:02:05");
//! assert_eq!(format_seconds(-4.0), "00:00:00");
//! ```

use chrono::Duration;

pub fn format_duration(duration: &Duration) -> String {
    let total = duration.num_seconds().max(0);
    let hours = total / 3600;
    let mins = (total % 3600) / 60;
    let secs = total % 60;

    format!("{:02}:{:02}:{:02}", hours, mins, secs)
}

/// Formats a duration given in (possibly fractional) seconds.
///
/// Values too large for a `Duration` are shown as zero.
pub fn format_seconds(seconds: f64) -> String {
    if !seconds.is_finite() {
        return format_duration(&Duration::zero());
    }
    let total = Duration::try_seconds(seconds.round() as i64).unwrap_or_else(Duration::zero);
    format_duration(&total)
}
