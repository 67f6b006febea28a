// uatally - GPL-3.0-or-later
// This file is part of uatally.
//
// Copyright (C) 2026 Daniel Freiermuth
//
// uatally is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// uatally is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with uatally.  If not, see <https://www.gnu.org/licenses/>.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Timelike};

// Naive local formats, tried in order after RFC 3339
const NAIVE_FORMATS: &[&str] = &[
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y/%m/%d %H:%M:%S%.f",
    "%Y.%m.%d %H:%M:%S%.f",
    "%m/%d/%Y %H:%M:%S%.f",
    "%Y%m%d %H%M%S",
    "%Y-%m-%d %I:%M:%S %p",
    "%b %d, %Y %H:%M:%S",
    "%Y-%m-%d %H:%M",
    "%Y-%m-%dT%H:%M",
];

// Formats that carry an explicit offset
const OFFSET_FORMATS: &[&str] = &["%d/%b/%Y:%H:%M:%S %z", "%Y-%m-%d %H:%M:%S%.f %z"];

/// Extract the hour of day from a local timestamp.
///
/// Offsets are kept as written, so `2024-05-01T19:15:30+09:00` is hour 19.
/// A bare date counts as midnight. Returns `None` for anything unparseable.
#[must_use]
pub fn parse_local_hour(s: &str) -> Option<u32> {
    let s = s.trim();
    if s.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(s) {
        return Some(dt.hour());
    }

    if let Some(naive) = NAIVE_FORMATS
        .iter()
        .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
    {
        return Some(naive.hour());
    }

    if let Some(dt) = OFFSET_FORMATS
        .iter()
        .find_map(|fmt| DateTime::parse_from_str(s, fmt).ok())
    {
        return Some(dt.hour());
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d").ok().map(|_| 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_separated() {
        assert_eq!(parse_local_hour("2024-05-01 19:15:30"), Some(19));
        assert_eq!(parse_local_hour("2024-05-01 00:00:00"), Some(0));
        assert_eq!(parse_local_hour("2024-05-01 23:59:59.999"), Some(23));
    }

    #[test]
    fn test_iso_and_offsets() {
        assert_eq!(parse_local_hour("2024-05-01T07:01:02"), Some(7));
        assert_eq!(parse_local_hour("2024-05-01T19:15:30+09:00"), Some(19));
        assert_eq!(parse_local_hour("01/May/2024:13:45:00 +0900"), Some(13));
    }

    #[test]
    fn test_other_layouts() {
        assert_eq!(parse_local_hour("2024/05/01 08:30:00"), Some(8));
        assert_eq!(parse_local_hour("2024-05-01 21:05"), Some(21));
        assert_eq!(parse_local_hour("2024-05-01"), Some(0));
        assert_eq!(parse_local_hour("  2024-05-01 12:00:00 "), Some(12));
    }

    #[test]
    fn test_minute_precision() {
        assert_eq!(parse_local_hour("2024-05-01T19:15"), Some(19));
        assert_eq!(parse_local_hour("2024-05-01 19:15"), Some(19));
    }

    #[test]
    fn test_us_and_dotted_dates() {
        assert_eq!(parse_local_hour("05/01/2024 19:15:30"), Some(19));
        assert_eq!(parse_local_hour("05/01/2024 06:15:30.250"), Some(6));
        assert_eq!(parse_local_hour("2024.05.01 19:15:30"), Some(19));
    }

    #[test]
    fn test_compact() {
        assert_eq!(parse_local_hour("20240501 191530"), Some(19));
        assert_eq!(parse_local_hour("20240501 001530"), Some(0));
    }

    #[test]
    fn test_twelve_hour_clock() {
        assert_eq!(parse_local_hour("2024-05-01 07:15:30 PM"), Some(19));
        assert_eq!(parse_local_hour("2024-05-01 07:15:30 am"), Some(7));
        assert_eq!(parse_local_hour("2024-05-01 12:00:00 AM"), Some(0));
        assert_eq!(parse_local_hour("2024-05-01 12:30:00 PM"), Some(12));
    }

    #[test]
    fn test_month_name() {
        assert_eq!(parse_local_hour("May 1, 2024 19:15:30"), Some(19));
        assert_eq!(parse_local_hour("Dec 31, 2023 23:59:59"), Some(23));
    }

    #[test]
    fn test_garbage() {
        assert_eq!(parse_local_hour(""), None);
        assert_eq!(parse_local_hour("yesterday"), None);
        assert_eq!(parse_local_hour("2024-05-01 25:00:00"), None);
    }
}
