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

//! One-minute time windows.

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use std::fmt;

/// Display format of a window key
pub const MINUTE_KEY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Start of the one-minute window a timestamp falls into.
///
/// Seconds and sub-second fields are zeroed; everything else is kept, so two
/// keys are equal exactly when year, month, day, hour and minute agree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct MinuteKey(NaiveDateTime);

impl MinuteKey {
    #[must_use]
    pub fn from_timestamp(ts: DateTime<Utc>) -> Self {
        let naive = ts.naive_utc();
        let truncated = naive
            .with_nanosecond(0)
            .and_then(|t| t.with_second(0))
            .unwrap_or(naive);
        Self(truncated)
    }
}

impl fmt::Display for MinuteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(MINUTE_KEY_FORMAT))
    }
}
