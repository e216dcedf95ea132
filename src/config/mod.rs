// LogSniff - GPL-3.0-or-later
// This file is part of LogSniff.
//
// Copyright (C) 2025 Daniel Freiermuth
//
// LogSniff is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// LogSniff is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with LogSniff.  If not, see <https://www.gnu.org/licenses/>.

use crate::core::DEFAULT_THRESHOLD;
use crate::logging::LogLevel;
use clap::Parser;
use std::num::NonZeroUsize;
use std::path::PathBuf;

const VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (", env!("GIT_HASH"), ")");

/// Command line of the `logsniff` binary
#[derive(Parser, Debug)]
#[command(name = "logsniff")]
#[command(author = "LogSniff Team")]
#[command(version = VERSION)]
#[command(about = "LogSniff - alert on one-minute bursts in a timestamped log file", long_about = None)]
pub struct Args {
    /// Path to the log file
    #[arg(long = "log", value_name = "FILE")]
    pub log: PathBuf,

    /// Entries per minute to trigger an alert
    #[arg(long, value_name = "N", default_value_t = DEFAULT_THRESHOLD)]
    pub threshold: NonZeroUsize,

    /// Optional: output matched lines to a JSON file
    #[arg(long = "json", value_name = "FILE")]
    pub json: Option<PathBuf>,

    /// Set the logging level
    #[arg(long, value_enum, ignore_case = true, default_value_t = LogLevel::Info)]
    pub loglevel: LogLevel,
}

/// Settings for a single scan
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub log_path: PathBuf,
    pub threshold: NonZeroUsize,
    /// Where to write alerts, if anywhere
    pub json_path: Option<PathBuf>,
    pub log_level: LogLevel,
}

impl ScanConfig {
    /// Config for `log_path` with the default threshold and no JSON output
    #[must_use]
    pub const fn new(log_path: PathBuf) -> Self {
        Self {
            log_path,
            threshold: DEFAULT_THRESHOLD,
            json_path: None,
            log_level: LogLevel::Info,
        }
    }
}

impl From<Args> for ScanConfig {
    fn from(args: Args) -> Self {
        Self {
            log_path: args.log,
            threshold: args.threshold,
            json_path: args.json,
            log_level: args.loglevel,
        }
    }
}
