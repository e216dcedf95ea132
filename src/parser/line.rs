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

use chrono::{DateTime, Utc};

/// A single timestamped line from the input
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogLine {
    /// Raw line as it appeared in the source, without the line terminator
    pub raw: String,
    /// Parsed leading timestamp
    pub timestamp: DateTime<Utc>,
    /// 1-based line number in the source file
    pub line_number: usize,
}

impl LogLine {
    #[must_use]
    pub const fn new(raw: String, timestamp: DateTime<Utc>, line_number: usize) -> Self {
        Self {
            raw,
            timestamp,
            line_number,
        }
    }
}

/// Why a line was left out of aggregation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkipReason {
    /// Empty or whitespace-only line, no timestamp token at all
    Blank,
    /// First token is not a `YYYY-MM-DDTHH:MM:SSZ` timestamp
    BadTimestamp,
}

impl SkipReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Blank => "blank line",
            Self::BadTimestamp => "unparseable timestamp",
        }
    }
}

impl std::fmt::Display for SkipReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
