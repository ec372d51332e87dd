use chrono::{DateTime, Local, Timelike};

/// Top-bar clock label: zero-padded 24h `HH:MM`.
pub fn clock_label(now: DateTime<Local>) -> String {
    format!("{:02}:{:02}", now.hour(), now.minute())
}

/// Transport time label: minutes unpadded, seconds zero-padded.
pub fn track_time(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn clock_label_is_zero_padded() {
        let at = Local.with_ymd_and_hms(2026, 3, 7, 8, 5, 33).unwrap();
        assert_eq!(clock_label(at), "08:05");

        let late = Local.with_ymd_and_hms(2026, 3, 7, 23, 59, 0).unwrap();
        assert_eq!(clock_label(late), "23:59");
    }

    #[test]
    fn track_time_pads_seconds_only() {
        assert_eq!(track_time(0), "0:00");
        assert_eq!(track_time(7), "0:07");
        assert_eq!(track_time(61), "1:01");
        assert_eq!(track_time(600), "10:00");
        assert_eq!(track_time(3599), "59:59");
    }
}
