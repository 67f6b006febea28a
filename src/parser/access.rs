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

use super::line::AccessRecord;
use super::timestamp::parse_local_hour;
use fancy_regex::Regex;
use std::sync::{Arc, LazyLock};

// <utc> [<local>] IP=.. METHOD=.. URI=.. STATUS=.. TIME=..ms UA=<rest of line>
static ACCESS_LINE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"^(?P<utc_time>\d{4}-\d{2}-\d{2}T\d{2}:\d{2}:\d{2}\.\d{3}Z) ",
        r"\[(?P<local_time>.*?)\] ",
        r"IP=(?P<ip>[\d.]+) ",
        r"METHOD=(?P<method>\w+) ",
        r"URI=(?P<uri>\S+) ",
        r"STATUS=(?P<status>\d{3}) ",
        r"TIME=(?P<time>\d+)ms ",
        r"UA=(?P<user_agent>.+)",
    ))
    .expect("valid regex literal")
});

/// Parse one access-log line.
///
/// Returns `None` if the line does not match the pattern or if its local
/// timestamp has no recognizable hour. Dropped lines are only traced.
#[must_use]
pub fn parse_line(raw: &str, source: &Arc<str>, line_number: usize) -> Option<AccessRecord> {
    let line = raw.trim();
    let Ok(Some(caps)) = ACCESS_LINE.captures(line) else {
        tracing::trace!("{source}:{line_number}: no match, skipping");
        return None;
    };

    let local_time = caps["local_time"].to_string();
    let Some(hour) = parse_local_hour(&local_time) else {
        tracing::trace!("{source}:{line_number}: unparseable local time {local_time:?}, skipping");
        return None;
    };

    Some(AccessRecord {
        utc_time: caps["utc_time"].to_string(),
        local_time,
        ip: caps["ip"].to_string(),
        method: caps["method"].to_string(),
        uri: caps["uri"].to_string(),
        status: caps["status"].to_string(),
        time_ms: caps["time"].to_string(),
        user_agent: caps["user_agent"].to_string(),
        hour,
        source: Arc::clone(source),
        line_number,
    })
}
