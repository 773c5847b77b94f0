/// Human-readable distance between two instants, e.g. "3 days ago".
///
/// `elapsed_ms` is `now - then`; negative values are in the future. Each unit
/// is rounded before comparing against the next threshold, so 90 seconds
/// reads "2 minutes ago" and 36 hours reads "2 days ago".
pub fn format_relative_time(elapsed_ms: i64) -> String {
    let phrase = relative_phrase(elapsed_ms.unsigned_abs() as f64);
    if elapsed_ms < 0 {
        format!("in {phrase}")
    } else {
        format!("{phrase} ago")
    }
}

fn relative_phrase(ms: f64) -> String {
    let seconds = (ms / 1000.0).round();
    let minutes = (seconds / 60.0).round();
    let hours = (minutes / 60.0).round();
    let days = (hours / 24.0).round();
    let months = (days / 30.436875).round();
    let years = (days / 365.25).round();

    if seconds < 45.0 {
        "a few seconds".to_string()
    } else if minutes <= 1.0 {
        "a minute".to_string()
    } else if minutes < 45.0 {
        format!("{minutes} minutes")
    } else if hours <= 1.0 {
        "an hour".to_string()
    } else if hours < 22.0 {
        format!("{hours} hours")
    } else if days <= 1.0 {
        "a day".to_string()
    } else if days < 26.0 {
        format!("{days} days")
    } else if months <= 1.0 {
        "a month".to_string()
    } else if months < 11.0 {
        format!("{months} months")
    } else if years <= 1.0 {
        "a year".to_string()
    } else {
        format!("{years} years")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SECOND: i64 = 1000;
    const MINUTE: i64 = 60 * SECOND;
    const HOUR: i64 = 60 * MINUTE;
    const DAY: i64 = 24 * HOUR;

    #[test]
    fn test_days() {
        assert_eq!(format_relative_time(3 * DAY), "3 days ago");
        assert_eq!(format_relative_time(36 * HOUR), "2 days ago");
        assert_eq!(format_relative_time(30 * HOUR), "a day ago");
    }

    #[test]
    fn test_small_distances() {
        assert_eq!(format_relative_time(0), "a few seconds ago");
        assert_eq!(format_relative_time(44 * SECOND), "a few seconds ago");
        assert_eq!(format_relative_time(50 * SECOND), "a minute ago");
        assert_eq!(format_relative_time(90 * SECOND), "2 minutes ago");
        assert_eq!(format_relative_time(50 * MINUTE), "an hour ago");
        assert_eq!(format_relative_time(5 * HOUR), "5 hours ago");
    }

    #[test]
    fn test_months_and_years() {
        assert_eq!(format_relative_time(30 * DAY), "a month ago");
        assert_eq!(format_relative_time(100 * DAY), "3 months ago");
        assert_eq!(format_relative_time(400 * DAY), "a year ago");
        assert_eq!(format_relative_time(800 * DAY), "2 years ago");
    }

    #[test]
    fn test_future() {
        assert_eq!(format_relative_time(-3 * DAY), "in 3 days");
    }
}
