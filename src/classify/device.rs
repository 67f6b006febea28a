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
use fancy_regex::Regex;
use std::sync::LazyLock;

/// Model name following the Android version, up to the next `;` or `)`
static ANDROID_MODEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)android [\d.]+; ([^;)]+)").expect("valid regex literal"));

/// Trailing build identifier, e.g. ` Build/RP1A.200720.012`
static BUILD_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)build.*").expect("valid regex literal"));

pub const UNKNOWN_ANDROID: &str = "Unknown Android";
pub const OTHER: &str = "Other";

/// Models shorter than this are junk like `K`
const MIN_MODEL_LEN: usize = 3;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum DeviceRule {
    Fixed(&'static str),
    AndroidModel,
}

const DEVICE_RULES: &[Rule<DeviceRule>] = &[
    Rule::any(&["iphone"], DeviceRule::Fixed("iPhone")),
    Rule::any(&["ipad"], DeviceRule::Fixed("iPad")),
    Rule::any(&["macintosh"], DeviceRule::Fixed("Mac")),
    Rule::any(&["windows"], DeviceRule::Fixed("Windows PC")),
    Rule::any(&["android"], DeviceRule::AndroidModel),
];

/// Derive the device type from a raw user agent.
///
/// Apple and Windows devices get a fixed label. Android devices are labeled
/// by the model name in the user agent, with its original casing.
#[must_use]
pub fn classify_device(user_agent: &str) -> String {
    let lowered = user_agent.to_lowercase();
    match first_match(DEVICE_RULES, &lowered) {
        Some(DeviceRule::Fixed(label)) => label.to_string(),
        Some(DeviceRule::AndroidModel) => android_model(user_agent),
        None => OTHER.to_string(),
    }
}

fn android_model(user_agent: &str) -> String {
    let Ok(Some(caps)) = ANDROID_MODEL.captures(user_agent) else {
        return UNKNOWN_ANDROID.to_string();
    };
    let device = caps[1].trim();
    let device = BUILD_SUFFIX.replace(device, "");
    let device = device.trim();
    if device.chars().count() < MIN_MODEL_LEN {
        UNKNOWN_ANDROID.to_string()
    } else {
        device.to_string()
    }
}
