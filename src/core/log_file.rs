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

use crate::parser::{parse_line, AccessRecord};
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// Line counts gathered while loading
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    /// Files that were read successfully
    pub files: usize,
    /// Files that could not be opened or read
    pub unreadable: usize,
    /// Non-blank lines seen
    pub lines: usize,
    /// Lines that became records
    pub records: usize,
}

impl LoadStats {
    /// Non-blank lines that did not match the access-log pattern
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.lines - self.records
    }

    fn absorb(&mut self, other: Self) {
        self.files += other.files;
        self.unreadable += other.unreadable;
        self.lines += other.lines;
        self.records += other.records;
    }
}

/// Result of loading a set of log files
#[derive(Debug, Default)]
pub struct LoadedLogs {
    pub records: Vec<AccessRecord>,
    pub stats: LoadStats,
}

/// Reads access-log files into records
pub struct LogFileLoader;

impl LogFileLoader {
    /// Load every file in order.
    ///
    /// Files that cannot be read are logged and skipped; they never abort
    /// the run.
    #[must_use]
    pub fn load_files(paths: &[PathBuf]) -> LoadedLogs {
        let start_time = std::time::Instant::now();
        let mut loaded = LoadedLogs::default();

        for path in paths {
            match Self::read_lossy(path) {
                Ok(content) => {
                    let stats = Self::parse_content(&content, path, &mut loaded.records);
                    tracing::info!(
                        "Parsed {} record(s) from {} ({} line(s) skipped)",
                        stats.records,
                        path.display(),
                        stats.skipped()
                    );
                    loaded.stats.absorb(stats);
                }
                Err(e) => {
                    tracing::warn!("Cannot read {}: {e}", path.display());
                    loaded.stats.unreadable += 1;
                }
            }
        }

        tracing::debug!(
            "Loaded {} record(s) from {} file(s) in {:?}",
            loaded.stats.records,
            loaded.stats.files,
            start_time.elapsed()
        );
        loaded
    }

    /// Read a file with lossy UTF-8 conversion so stray bytes never abort the run
    fn read_lossy(path: &Path) -> std::io::Result<String> {
        let mut buffer = Vec::new();
        File::open(path)?.read_to_end(&mut buffer)?;
        Ok(String::from_utf8_lossy(&buffer).into_owned())
    }

    /// Parse the lines of one file's content, appending records to `out`
    pub fn parse_content(content: &str, path: &Path, out: &mut Vec<AccessRecord>) -> LoadStats {
        let source: Arc<str> = path
            .file_name()
            .map_or_else(|| path.to_string_lossy(), |name| name.to_string_lossy())
            .into();

        let mut stats = LoadStats {
            files: 1,
            ..LoadStats::default()
        };

        for (idx, line) in split_lines(content).enumerate() {
            if line.trim().is_empty() {
                continue;
            }
            stats.lines += 1;

            if let Some(record) = parse_line(line, &source, idx + 1) {
                out.push(record);
                stats.records += 1;
            }
        }

        stats
    }
}

/// Split on `\n`, `\r\n` and bare `\r`, like universal-newline reads
fn split_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .split('\n')
        .flat_map(|line| line.strip_suffix('\r').unwrap_or(line).split('\r'))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    const GOOD: &str = "2024-05-01T10:15:30.123Z [2024-05-01 19:15:30] IP=192.168.0.1 METHOD=GET URI=/main STATUS=200 TIME=120ms UA=Mozilla/5.0 (iPhone)";
    const NO_TIME: &str = "2024-05-01T10:15:30.123Z [2024-05-01 19:15:30] IP=192.168.0.1 METHOD=GET URI=/main STATUS=200 UA=Mozilla/5.0 (iPhone)";

    #[test]
    fn test_parse_content_counts() {
        let content = format!("{GOOD}\n\n{NO_TIME}\ngarbage\n{GOOD}\n");
        let mut out = Vec::new();
        let stats = LogFileLoader::parse_content(&content, Path::new("logs/log_1.txt"), &mut out);

        assert_eq!(stats.lines, 4);
        assert_eq!(stats.records, 2);
        assert_eq!(stats.skipped(), 2);
        assert_eq!(out.len(), 2);
        assert_eq!(&*out[0].source, "log_1.txt");
        assert_eq!(out[0].line_number, 1);
        assert_eq!(out[1].line_number, 5);
    }

    #[test]
    fn test_split_lines() {
        let lines: Vec<&str> = split_lines("a\r\nb\rc\nd").collect();
        assert_eq!(lines, ["a", "b", "c", "d"]);
        let lines: Vec<&str> = split_lines("a\n\nb\n").collect();
        assert_eq!(lines, ["a", "", "b", ""]);
    }

    #[test]
    fn test_bare_carriage_return_separates_records() {
        let content = format!("{GOOD}\r{GOOD}\r\n{GOOD}");
        let mut out = Vec::new();
        let stats = LogFileLoader::parse_content(&content, Path::new("log_mac.txt"), &mut out);

        assert_eq!(stats.records, 3);
        assert_eq!(out[0].user_agent, "Mozilla/5.0 (iPhone)");
        assert_eq!(out[1].user_agent, "Mozilla/5.0 (iPhone)");
        assert_eq!(
            out.iter().map(|r| r.line_number).collect::<Vec<_>>(),
            [1, 2, 3]
        );
    }

    #[test]
    fn test_invalid_utf8_is_tolerated() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("log_bin.txt");
        let mut bytes = b"\xff\xfe garbage \xc3\x28\n".to_vec();
        bytes.extend_from_slice(GOOD.as_bytes());
        bytes.extend_from_slice(b"\n");
        let mut ua_with_bad_byte = GOOD.as_bytes().to_vec();
        ua_with_bad_byte.extend_from_slice(b" \xff");
        bytes.extend_from_slice(&ua_with_bad_byte);
        fs::write(&path, bytes).expect("write fixture");

        let loaded = LogFileLoader::load_files(&[path]);
        assert_eq!(loaded.stats.files, 1);
        assert_eq!(loaded.stats.records, 2);
        assert!(loaded.records[1].user_agent.starts_with("Mozilla/5.0 (iPhone)"));
    }

    #[test]
    fn test_unreadable_file_is_skipped() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let good = dir.path().join("log_a.txt");
        fs::write(&good, format!("{GOOD}\n")).expect("write fixture");
        let missing = dir.path().join("log_gone.txt");

        let loaded = LogFileLoader::load_files(&[missing, good]);
        assert_eq!(loaded.stats.unreadable, 1);
        assert_eq!(loaded.stats.files, 1);
        assert_eq!(loaded.records.len(), 1);
    }

    #[test]
    fn test_no_files() {
        let loaded = LogFileLoader::load_files(&[]);
        assert!(loaded.records.is_empty());
        assert_eq!(loaded.stats, LoadStats::default());
    }
}
