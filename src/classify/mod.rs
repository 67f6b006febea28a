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

//! User-agent classification.
//!
//! Each classifier is an ordered table of substring rules evaluated against
//! the lower-cased input. The first rule that matches decides the label.

pub mod agent;
pub mod device;
pub mod os;

use crate::parser::AccessRecord;

pub use agent::{classify_agent, AgentType};
pub use device::classify_device;
pub use os::{classify_os, OsFamily};

/// Substring test against a lower-cased string
#[derive(Debug, Clone, Copy)]
pub enum Needle {
    /// Matches if any of the substrings is present
    Any(&'static [&'static str]),
    /// Matches only if all of the substrings are present
    All(&'static [&'static str]),
}

impl Needle {
    #[must_use]
    pub fn matches(self, haystack: &str) -> bool {
        match self {
            Self::Any(words) => words.iter().any(|w| haystack.contains(w)),
            Self::All(words) => words.iter().all(|w| haystack.contains(w)),
        }
    }
}

/// One entry of a first-match-wins rule table
#[derive(Debug, Clone, Copy)]
pub struct Rule<L> {
    pub needle: Needle,
    pub label: L,
}

impl<L> Rule<L> {
    #[must_use]
    pub const fn any(words: &'static [&'static str], label: L) -> Self {
        Self {
            needle: Needle::Any(words),
            label,
        }
    }

    #[must_use]
    pub const fn all(words: &'static [&'static str], label: L) -> Self {
        Self {
            needle: Needle::All(words),
            label,
        }
    }
}

/// Label of the first rule matching `lowered`, if any
#[must_use]
pub fn first_match<L: Copy>(rules: &[Rule<L>], lowered: &str) -> Option<L> {
    rules
        .iter()
        .find(|rule| rule.needle.matches(lowered))
        .map(|rule| rule.label)
}

/// The three labels derived from one user agent
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Classification {
    pub device_type: String,
    pub agent_type: AgentType,
    pub os_family: OsFamily,
}

/// Classify a raw user-agent string.
///
/// The OS family is derived from the device type, not from the user agent.
#[must_use]
pub fn classify(user_agent: &str) -> Classification {
    let device_type = classify_device(user_agent);
    let os_family = classify_os(&device_type);
    Classification {
        device_type,
        agent_type: classify_agent(user_agent),
        os_family,
    }
}

/// A parsed record together with its derived labels
#[derive(Debug, Clone)]
pub struct EnrichedRecord {
    pub record: AccessRecord,
    pub class: Classification,
}

impl EnrichedRecord {
    #[must_use]
    pub fn new(record: AccessRecord) -> Self {
        let class = classify(&record.user_agent);
        Self { record, class }
    }
}

/// Attach labels to every record, keeping their order
#[must_use]
pub fn enrich(records: Vec<AccessRecord>) -> Vec<EnrichedRecord> {
    records.into_iter().map(EnrichedRecord::new).collect()
}
