//! Duration rendering
//!
//! Compact human-readable form of a remaining-time estimate: "2h 30m",
//! "45m", or "30s" below one minute.

use std::time::Duration;

/// Format a duration for a label's `{duration}` slot
pub fn format_duration(d: Duration) -> String {
    let total_secs = d.as_secs();
    let minutes = total_secs / 60;

    if minutes >= 60 {
        let hours = minutes / 60;
        let rest = minutes % 60;
        if rest == 0 {
            format!("{hours}h")
        } else {
            format!("{hours}h {rest}m")
        }
    } else if minutes > 0 {
        format!("{minutes}m")
    } else {
        format!("{total_secs}s")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hours_and_minutes() {
        assert_eq!(format_duration(Duration::from_secs(2 * 3600)), "2h");
        assert_eq!(format_duration(Duration::from_secs(90 * 60)), "1h 30m");
    }

    #[test]
    fn test_minutes_only() {
        assert_eq!(format_duration(Duration::from_secs(45 * 60)), "45m");
        // sub-minute remainder truncates
        assert_eq!(format_duration(Duration::from_secs(45 * 60 + 59)), "45m");
    }

    #[test]
    fn test_seconds_below_one_minute() {
        assert_eq!(format_duration(Duration::from_secs(30)), "30s");
        assert_eq!(format_duration(Duration::ZERO), "0s");
    }
}
