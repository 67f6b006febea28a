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
use crate::report::DEFAULT_TOP_N;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_LOG_DIR: &str = "logs";
pub const DEFAULT_FILE_PATTERN: &str = "log_*.txt";

/// Report settings, read from the config directory when present
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// Directory searched for log files
    pub log_dir: PathBuf,

    /// Glob matched against file names inside `log_dir`
    pub file_pattern: String,

    /// Entries shown in the device and client sections
    pub top_n: usize,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            log_dir: PathBuf::from(DEFAULT_LOG_DIR),
            file_pattern: DEFAULT_FILE_PATTERN.to_string(),
            top_n: DEFAULT_TOP_N,
        }
    }
}

impl ReportConfig {
    /// Get the path to the default config file
    #[must_use]
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|config_dir| config_dir.join("uatally").join("config.json"))
    }

    /// Load config from `explicit`, or from the default location.
    ///
    /// An explicit file must exist and parse. The default file is optional:
    /// when it is used a warning names it, and a broken one is ignored with a
    /// warning.
    pub fn load(explicit: Option<&Path>) -> Result<Self, ReportError> {
        Self::load_or_fallback(explicit, Self::config_path().as_deref())
    }

    fn load_or_fallback(
        explicit: Option<&Path>,
        fallback: Option<&Path>,
    ) -> Result<Self, ReportError> {
        if let Some(path) = explicit {
            return Self::load_from(path);
        }

        if let Some(path) = fallback {
            if path.exists() {
                // implicit config is announced at the default log level
                match Self::load_from(path) {
                    Ok(config) => {
                        tracing::warn!(
                            "Using settings from {} (dir {}, pattern {:?}, top {})",
                            path.display(),
                            config.log_dir.display(),
                            config.file_pattern,
                            config.top_n
                        );
                        return Ok(config);
                    }
                    Err(e) => tracing::warn!("Ignoring config file: {e}"),
                }
            } else {
                tracing::debug!("No config found at {}, using defaults", path.display());
            }
        }

        Ok(Self::default())
    }

    /// Read and validate a config file
    pub fn load_from(path: &Path) -> Result<Self, ReportError> {
        tracing::info!("Loading config from {}", path.display());
        let contents = std::fs::read_to_string(path).map_err(|source| ReportError::ReadConfig {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self =
            serde_json::from_str(&contents).map_err(|source| ReportError::ParseConfig {
                path: path.to_path_buf(),
                source,
            })?;
        config.validate()?;
        Ok(config)
    }

    /// Replace settings with the values given on the command line
    #[must_use]
    pub fn with_overrides(
        mut self,
        log_dir: Option<PathBuf>,
        file_pattern: Option<String>,
        top_n: Option<usize>,
    ) -> Self {
        if let Some(log_dir) = log_dir {
            self.log_dir = log_dir;
        }
        if let Some(file_pattern) = file_pattern {
            self.file_pattern = file_pattern;
        }
        if let Some(top_n) = top_n {
            self.top_n = top_n;
        }
        self
    }

    pub fn validate(&self) -> Result<(), ReportError> {
        if self.top_n == 0 {
            return Err(ReportError::InvalidTop { top: self.top_n });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.log_dir, PathBuf::from("logs"));
        assert_eq!(config.file_pattern, "log_*.txt");
        assert_eq!(config.top_n, 10);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "top_n": 5 }"#).expect("write config");

        let config = ReportConfig::load(Some(&path)).expect("config loads");
        assert_eq!(config.top_n, 5);
        assert_eq!(config.file_pattern, DEFAULT_FILE_PATTERN);
    }

    #[test]
    fn test_explicit_file_errors() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("missing.json");
        assert!(matches!(
            ReportConfig::load(Some(&missing)),
            Err(ReportError::ReadConfig { .. })
        ));

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ not json").expect("write config");
        assert!(matches!(
            ReportConfig::load(Some(&broken)),
            Err(ReportError::ParseConfig { .. })
        ));

        let zero = dir.path().join("zero.json");
        fs::write(&zero, r#"{ "top_n": 0 }"#).expect("write config");
        assert!(matches!(
            ReportConfig::load(Some(&zero)),
            Err(ReportError::InvalidTop { top: 0 })
        ));
    }

    #[test]
    fn test_user_config_file() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join("config.json");
        fs::write(&path, r#"{ "log_dir": "/srv/logs", "top_n": 3 }"#).expect("write config");

        let config = ReportConfig::load_or_fallback(None, Some(&path)).expect("config loads");
        assert_eq!(config.log_dir, PathBuf::from("/srv/logs"));
        assert_eq!(config.top_n, 3);
    }

    #[test]
    fn test_user_config_file_missing_or_broken() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let missing = dir.path().join("config.json");
        let config = ReportConfig::load_or_fallback(None, Some(&missing)).expect("defaults");
        assert_eq!(config, ReportConfig::default());

        let broken = dir.path().join("broken.json");
        fs::write(&broken, "{ \"top_n\": ").expect("write config");
        let config = ReportConfig::load_or_fallback(None, Some(&broken)).expect("defaults");
        assert_eq!(config, ReportConfig::default());

        let config = ReportConfig::load_or_fallback(None, None).expect("defaults");
        assert_eq!(config, ReportConfig::default());
    }

    #[test]
    fn test_explicit_file_wins() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let explicit = dir.path().join("explicit.json");
        let user = dir.path().join("user.json");
        fs::write(&explicit, r#"{ "top_n": 4 }"#).expect("write config");
        fs::write(&user, r#"{ "top_n": 7 }"#).expect("write config");

        let config =
            ReportConfig::load_or_fallback(Some(&explicit), Some(&user)).expect("config loads");
        assert_eq!(config.top_n, 4);
    }

    #[test]
    fn test_overrides() {
        let config = ReportConfig::default().with_overrides(
            Some(PathBuf::from("/var/log/festival")),
            None,
            Some(3),
        );
        assert_eq!(config.log_dir, PathBuf::from("/var/log/festival"));
        assert_eq!(config.file_pattern, DEFAULT_FILE_PATTERN);
        assert_eq!(config.top_n, 3);
    }
}
