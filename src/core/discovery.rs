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

use crate::error::ReportError;
use glob::Pattern;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Find the log files in `dir` whose file name matches `pattern`.
///
/// Only the directory itself is searched. The result is sorted so reports
/// are reproducible. A missing directory yields no files; any other failure
/// to list it is fatal.
pub fn discover_log_files(dir: &Path, pattern: &str) -> Result<Vec<PathBuf>, ReportError> {
    let matcher = Pattern::new(pattern).map_err(|source| ReportError::Pattern {
        pattern: pattern.to_string(),
        source,
    })?;

    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) if e.kind() == ErrorKind::NotFound => {
            tracing::warn!("Log directory {} does not exist, nothing to read", dir.display());
            return Ok(Vec::new());
        }
        Err(source) => {
            return Err(ReportError::ReadDir {
                path: dir.to_path_buf(),
                source,
            })
        }
    };

    let mut files = Vec::new();
    for entry in entries {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => {
                tracing::warn!("Skipping unreadable entry in {}: {e}", dir.display());
                continue;
            }
        };

        let path = entry.path();
        let name_matches = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| matcher.matches(name));
        if name_matches && path.is_file() {
            files.push(path);
        }
    }

    files.sort();
    tracing::debug!(
        "Found {} file(s) matching {pattern:?} in {}",
        files.len(),
        dir.display()
    );
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_matching_and_sorting() {
        let dir = tempfile::tempdir().expect("create temp dir");
        for name in ["log_b.txt", "log_a.txt", "log_c.log", "other.txt", "log_.txt"] {
            fs::write(dir.path().join(name), "").expect("write fixture");
        }
        fs::create_dir(dir.path().join("log_dir.txt")).expect("create subdir");

        let files = discover_log_files(dir.path(), "log_*.txt").expect("discovery succeeds");
        let names: Vec<_> = files
            .iter()
            .filter_map(|p| p.file_name().and_then(|n| n.to_str()))
            .collect();
        assert_eq!(names, ["log_.txt", "log_a.txt", "log_b.txt"]);
    }

    #[test]
    fn test_empty_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let files = discover_log_files(dir.path(), "log_*.txt").expect("discovery succeeds");
        assert!(files.is_empty());
    }

    #[test]
    fn test_missing_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let files = discover_log_files(&dir.path().join("nope"), "log_*.txt")
            .expect("missing dir is not fatal");
        assert!(files.is_empty());
    }

    #[test]
    fn test_not_a_directory() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("log_a.txt");
        fs::write(&file, "").expect("write fixture");
        let result = discover_log_files(&file, "log_*.txt");
        assert!(matches!(result, Err(ReportError::ReadDir { .. })));
    }

    #[test]
    fn test_bad_pattern() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let result = discover_log_files(dir.path(), "log_[.txt");
        assert!(matches!(result, Err(ReportError::Pattern { .. })));
    }
}
