//! Utility functions for UI components

use chrono::{DateTime, Utc};
use dcc_common::format_relative_time;

/// "3 days ago" style distance from `now`, or "unknown" without a timestamp
pub fn format_since(then: Option<DateTime<Utc>>, now: DateTime<Utc>) -> String {
    match then {
        Some(then) => format_relative_time((now - then).num_milliseconds()),
        None => "unknown".to_string(),
    }
}

/// Whether the typed next-release name is now the upcoming release, meaning
/// the release it was typed for went through.
pub fn is_next_name_released(typed: &str, upcoming: Option<&str>) -> bool {
    let typed = typed.trim();
    !typed.is_empty() && upcoming == Some(typed)
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_typed_name_kept_until_released() {
        assert!(!is_next_name_released("ICGC23", Some("ICGC22")));
        assert!(!is_next_name_released("ICGC23", None));
        assert!(is_next_name_released(" ICGC23 ", Some("ICGC23")));
    }

    #[test]
    fn test_empty_input_is_never_released() {
        assert!(!is_next_name_released("", Some("ICGC23")));
        assert!(!is_next_name_released("   ", Some("")));
    }

    #[test]
    fn test_format_since() {
        let now = Utc.with_ymd_and_hms(2024, 5, 10, 12, 0, 0).unwrap();
        let then = Utc.with_ymd_and_hms(2024, 5, 7, 12, 0, 0).unwrap();
        assert_eq!(format_since(Some(then), now), "3 days ago");
        assert_eq!(format_since(None, now), "unknown");
    }
}
