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

use std::sync::Arc;

/// One access-log line that matched the full pattern.
///
/// The captured fields are kept exactly as they appeared in the source line.
/// `hour` is derived from `local_time` while parsing, so a record without a
/// usable local timestamp never exists.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AccessRecord {
    /// `YYYY-MM-DDTHH:MM:SS.mmmZ`
    pub utc_time: String,
    /// Contents of the bracketed local timestamp
    pub local_time: String,
    pub ip: String,
    pub method: String,
    pub uri: String,
    /// Three-digit status code
    pub status: String,
    /// Response time in milliseconds, without the `ms` suffix
    pub time_ms: String,
    /// Everything after `UA=` up to the end of the line
    pub user_agent: String,
    /// Hour of day (0-23) of the local timestamp
    pub hour: u32,
    /// Name of the file the line came from (shared by all lines of a file)
    pub source: Arc<str>,
    /// 1-based line number within `source`
    pub line_number: usize,
}
