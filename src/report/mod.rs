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

//! Aggregate statistics over enriched records and their text rendering.

pub mod tally;

use crate::classify::{AgentType, EnrichedRecord, OsFamily};
use std::collections::BTreeMap;
use std::fmt;

pub use tally::Tally;

/// Number of entries shown in the device and client sections by default
pub const DEFAULT_TOP_N: usize = 10;

/// Computed traffic report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub total: usize,
    /// Requests per hour of day, only hours that occur
    pub by_hour: BTreeMap<u32, usize>,
    /// Limit applied to `devices` and `agents`
    pub top_n: usize,
    pub devices: Vec<(String, usize)>,
    pub agents: Vec<(AgentType, usize)>,
    /// Full distribution, never truncated
    pub os_families: Vec<(OsFamily, usize)>,
}

impl Report {
    /// Compute every section in one pass over the records
    #[must_use]
    pub fn compute(records: &[EnrichedRecord], top_n: usize) -> Self {
        let start_time = std::time::Instant::now();

        let mut by_hour = BTreeMap::new();
        let mut devices = Tally::new();
        let mut agents = Tally::new();
        let mut os_families = Tally::new();

        for entry in records {
            *by_hour.entry(entry.record.hour).or_insert(0) += 1;
            devices.add(entry.class.device_type.as_str());
            agents.add(entry.class.agent_type);
            os_families.add(entry.class.os_family);
        }

        let report = Self {
            total: records.len(),
            by_hour,
            top_n,
            devices: devices
                .top(top_n)
                .into_iter()
                .map(|(label, count)| (label.to_string(), count))
                .collect(),
            agents: agents.top(top_n),
            os_families: os_families.ranked(),
        };

        tracing::debug!(
            "Computed report over {} record(s) in {:?}",
            report.total,
            start_time.elapsed()
        );
        report
    }

    /// Count for one hour of day, zero if absent
    #[must_use]
    pub fn hour_count(&self, hour: u32) -> usize {
        self.by_hour.get(&hour).copied().unwrap_or(0)
    }

    /// Count for one OS family, zero if absent
    #[must_use]
    pub fn os_count(&self, os: OsFamily) -> usize {
        self.os_families
            .iter()
            .find(|(family, _)| *family == os)
            .map_or(0, |&(_, count)| count)
    }
}

fn write_section<L: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    title: &str,
    rows: &[(L, usize)],
) -> fmt::Result {
    writeln!(f)?;
    writeln!(f, "{title}:")?;
    if rows.is_empty() {
        return writeln!(f, "  (none)");
    }

    let labels: Vec<String> = rows.iter().map(|(label, _)| label.to_string()).collect();
    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    let count_width = rows
        .iter()
        .map(|(_, count)| count.to_string().len())
        .max()
        .unwrap_or(0);
    for (label, (_, count)) in labels.iter().zip(rows) {
        writeln!(f, "  {label:<width$}  {count:>count_width$}")?;
    }
    Ok(())
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Total requests: {}", self.total)?;

        let hours: Vec<(String, usize)> = self
            .by_hour
            .iter()
            .map(|(hour, count)| (format!("{hour:02}"), *count))
            .collect();
        write_section(f, "Requests by hour", &hours)?;
        write_section(f, &format!("Top {} device types", self.top_n), &self.devices)?;
        write_section(f, &format!("Top {} client applications", self.top_n), &self.agents)?;
        write_section(f, "Requests by OS family", &self.os_families)
    }
}
