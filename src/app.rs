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

//! One scan from start to finish: read, bucket, evaluate, persist.

use crate::config::ScanConfig;
use crate::core::{persist, scan_file, PersistOutcome};

/// How a run ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunOutcome {
    /// At least one window alerted
    Alerted { persisted: bool },
    NoMatches,
    /// The log file could not be read, nothing was aggregated
    InputFailed,
    /// Alerts were found but the JSON file could not be written
    PersistFailed,
}

impl RunOutcome {
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Alerted { .. } | Self::NoMatches)
    }
}

/// Run a scan described by `config`. Failures are logged, never raised.
#[must_use]
pub fn run(config: &ScanConfig) -> RunOutcome {
    tracing::info!(
        "Scanning {} with threshold: {} entries per minute",
        config.log_path.display(),
        config.threshold
    );

    let report = match scan_file(&config.log_path, config.threshold) {
        Ok(report) => report,
        Err(e) => {
            tracing::error!("{e}");
            return RunOutcome::InputFailed;
        }
    };

    let stats = &report.stats;
    tracing::debug!(
        "Read {} lines: {} bucketed into {} windows, {} blank, {} without a valid timestamp",
        stats.lines_read,
        stats.lines_bucketed,
        stats.buckets,
        stats.skipped_blank,
        stats.skipped_bad_timestamp
    );

    if report.matches.is_empty() {
        tracing::warn!("No matches found.");
        return RunOutcome::NoMatches;
    }

    let Some(json_path) = &config.json_path else {
        return RunOutcome::Alerted { persisted: false };
    };

    match persist(&report.matches, json_path) {
        Ok(PersistOutcome::Written { count }) => {
            tracing::info!("{count} results saved to {}", json_path.display());
            RunOutcome::Alerted { persisted: true }
        }
        Ok(PersistOutcome::NothingToPersist) => RunOutcome::Alerted { persisted: false },
        Err(e) => {
            tracing::error!("Failed to write to JSON: {e}");
            RunOutcome::PersistFailed
        }
    }
}
