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

//! Timestamp extraction for log lines.
//!
//! Every line is expected to start with a whitespace-delimited token of the
//! exact form `YYYY-MM-DDTHH:MM:SSZ` (UTC, second precision). Anything else
//! is reported as a [`SkipReason`] so callers can drop the line and move on.

pub mod line;

use chrono::{DateTime, NaiveDateTime, Timelike, Utc};
use line::{LogLine, SkipReason};

/// chrono format of the leading timestamp token
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%SZ";

const TIMESTAMP_LEN: usize = "YYYY-MM-DDTHH:MM:SSZ".len();

/// Parse a raw line into a [`LogLine`], or say why it has to be skipped.
///
/// A single trailing `\r` is removed for callers that pass raw CRLF lines
/// (`str::lines` already strips it).
pub fn parse_line(raw: &str, line_number: usize) -> Result<LogLine, SkipReason> {
    let raw = raw.strip_suffix('\r').unwrap_or(raw);
    let token = raw.split_whitespace().next().ok_or(SkipReason::Blank)?;
    let timestamp = parse_timestamp(token).ok_or(SkipReason::BadTimestamp)?;
    Ok(LogLine::new(raw.to_string(), timestamp, line_number))
}

/// Parse a single `YYYY-MM-DDTHH:MM:SSZ` token.
///
/// chrono alone accepts unpadded fields and signed years, so the token shape
/// is checked byte by byte first. Calendar validity is left to chrono, except
/// for second `60`, which chrono reads as a leap second and is rejected here.
#[must_use]
pub fn parse_timestamp(token: &str) -> Option<DateTime<Utc>> {
    if !has_timestamp_shape(token) {
        return None;
    }
    NaiveDateTime::parse_from_str(token, TIMESTAMP_FORMAT)
        .ok()
        .filter(|naive| naive.nanosecond() < 1_000_000_000)
        .map(|naive| naive.and_utc())
}

fn has_timestamp_shape(token: &str) -> bool {
    token.len() == TIMESTAMP_LEN
        && token.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            10 => b == b'T',
            13 | 16 => b == b':',
            19 => b == b'Z',
            _ => b.is_ascii_digit(),
        })
}
