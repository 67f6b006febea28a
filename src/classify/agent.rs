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

/// Browser or in-app client that sent the request
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum AgentType {
    KakaoTalk,
    NaverApp,
    ChromeIos,
    Chrome,
    SamsungBrowser,
    Safari,
    EverytimeApp,
    NaverWhale,
    WindowsBrowser,
    MacBrowser,
    Other,
}

impl AgentType {
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::KakaoTalk => "KakaoTalk",
            Self::NaverApp => "NaverApp",
            Self::ChromeIos => "Chrome (iOS)",
            Self::Chrome => "Chrome",
            Self::SamsungBrowser => "Samsung Browser",
            Self::Safari => "Safari",
            Self::EverytimeApp => "EverytimeApp",
            Self::NaverWhale => "Naver Whale",
            Self::WindowsBrowser => "Windows Browser",
            Self::MacBrowser => "Mac Browser",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for AgentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

// In-app browsers first: their user agents also mention the engine they embed.
const AGENT_RULES: &[Rule<AgentType>] = &[
    Rule::any(&["kakaotalk"], AgentType::KakaoTalk),
    Rule::any(&["naver"], AgentType::NaverApp),
    Rule::any(&["crios"], AgentType::ChromeIos),
    Rule::any(&["chrome"], AgentType::Chrome),
    Rule::any(&["samsungbrowser"], AgentType::SamsungBrowser),
    Rule::all(&["safari", "version"], AgentType::Safari),
    Rule::any(&["everytimeapp"], AgentType::EverytimeApp),
    Rule::any(&["whale"], AgentType::NaverWhale),
    Rule::any(&["windows"], AgentType::WindowsBrowser),
    Rule::any(&["macintosh"], AgentType::MacBrowser),
];

/// Derive the client application from a raw user agent
#[must_use]
pub fn classify_agent(user_agent: &str) -> AgentType {
    first_match(AGENT_RULES, &user_agent.to_lowercase()).unwrap_or(AgentType::Other)
}
