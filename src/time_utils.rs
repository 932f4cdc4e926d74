// SPDX-License-Identifier: MIT
// Copyright 2026 Nick Fox <nickfox@websmithing.com>

//! Shared helpers for date/time formatting.

use chrono::{DateTime, Utc};

/// Format a device timestamp the way the map clients expect it,
/// e.g. "Jan 3 2007 11:43AM".
pub fn format_gps_time(date: DateTime<Utc>) -> String {
    date.format("%b %-d %Y %I:%M%p").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_gps_time() {
        let date = Utc.with_ymd_and_hms(2007, 1, 3, 11, 43, 0).unwrap();
        assert_eq!(format_gps_time(date), "Jan 3 2007 11:43AM");
    }

    #[test]
    fn test_format_gps_time_afternoon() {
        let date = Utc.with_ymd_and_hms(2024, 12, 25, 16, 5, 59).unwrap();
        assert_eq!(format_gps_time(date), "Dec 25 2024 04:05PM");
    }
}
