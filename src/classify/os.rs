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

use super::{first_match, Rule};
use std::fmt;

/// Coarse OS family, derived from the device type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum OsFamily {
    Ios,
    Pc,
    Android,
}

impl OsFamily {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Ios => "iOS",
            Self::Pc => "PC",
            Self::Android => "Android",
        }
    }
}

impl fmt::Display for OsFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const OS_RULES: &[Rule<OsFamily>] = &[
    Rule::any(&["iphone", "ipad"], OsFamily::Ios),
    Rule::any(&["windows", "mac"], OsFamily::Pc),
];

/// Map a device type (not a raw user agent) to its OS family.
///
/// Anything that is neither iOS nor PC counts as Android, including `Other`
/// and `Unknown Android`.
#[must_use]
pub fn classify_os(device_type: &str) -> OsFamily {
    first_match(OS_RULES, &device_type.to_lowercase()).unwrap_or(OsFamily::Android)
}
