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

use anyhow::Context;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;
use uatally::{build_report, ReportConfig};

#[derive(Parser, Debug)]
#[command(name = "uatally")]
#[command(author = "Daniel Freiermuth")]
#[command(version = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")"))]
#[command(about = "Summarize web-access logs by hour, device, client and OS", long_about = None)]
struct Args {
    /// Directory containing the log files [default: logs]
    #[arg(short, long, value_name = "DIR")]
    dir: Option<PathBuf>,

    /// Glob matched against file names in the directory [default: log_*.txt]
    #[arg(short, long, value_name = "GLOB")]
    pattern: Option<String>,

    /// Number of device types and client applications to list [default: 10]
    #[arg(short, long, value_name = "N")]
    top: Option<usize>,

    /// Read settings from this JSON file instead of the user config directory
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    // Diagnostics go to stderr so they never mix with the report.
    // Set RUST_LOG to override (e.g., RUST_LOG=uatally=debug)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    tracing::info!("uatally starting up (version {})", env!("CARGO_PKG_VERSION"));

    let args = Args::parse();
    let config = ReportConfig::load(args.config.as_deref())
        .context("failed to load configuration")?
        .with_overrides(args.dir, args.pattern, args.top);

    let report = build_report(&config)
        .with_context(|| format!("failed to build report from {}", config.log_dir.display()))?;
    print!("{report}");
    Ok(())
}
