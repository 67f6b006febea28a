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

//! `uatally` - traffic reports for web-access logs.
//!
//! The pipeline runs once, front to back: discover the log files, parse
//! each line into an [`AccessRecord`], classify its user agent, and count.

pub mod classify;
pub mod config;
pub mod core;
pub mod error;
pub mod parser;
pub mod report;

pub use classify::{classify, Classification, EnrichedRecord};
pub use config::ReportConfig;
pub use error::ReportError;
pub use parser::AccessRecord;
pub use report::Report;

use crate::core::{discover_log_files, LogFileLoader};

/// Run the whole pipeline for `config` and return the computed report.
///
/// Only discovery failures and invalid settings are errors. Unreadable
/// files and lines that do not parse are skipped.
pub fn build_report(config: &ReportConfig) -> Result<Report, ReportError> {
    config.validate()?;

    let files = discover_log_files(&config.log_dir, &config.file_pattern)?;
    let loaded = LogFileLoader::load_files(&files);
    tracing::info!(
        "Read {} record(s) from {} file(s), {} line(s) skipped, {} file(s) unreadable",
        loaded.stats.records,
        loaded.stats.files,
        loaded.stats.skipped(),
        loaded.stats.unreadable
    );

    let records = classify::enrich(loaded.records);
    Ok(Report::compute(&records, config.top_n))
}
