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

//! Minute-window aggregation and threshold evaluation.

use crate::core::report::AlertMatch;
use crate::core::window::MinuteKey;
use crate::parser::line::SkipReason;
use crate::parser::parse_line;
use std::collections::BTreeMap;
use std::num::NonZeroUsize;

/// Threshold used when the caller does not pick one
pub const DEFAULT_THRESHOLD: NonZeroUsize = match NonZeroUsize::new(10) {
    Some(n) => n,
    None => unreachable!(),
};

/// Line accounting for one scan
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ScanStats {
    pub lines_read: usize,
    pub lines_bucketed: usize,
    pub skipped_blank: usize,
    pub skipped_bad_timestamp: usize,
    /// Distinct one-minute windows seen
    pub buckets: usize,
}

impl ScanStats {
    #[must_use]
    pub const fn skipped(&self) -> usize {
        self.skipped_blank + self.skipped_bad_timestamp
    }
}

/// Result of a finished aggregation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanReport {
    /// Windows at or above the threshold, oldest first
    pub matches: Vec<AlertMatch>,
    pub stats: ScanStats,
}

/// Buckets log lines by the minute of their leading timestamp.
///
/// Owned by the caller for the duration of a single input; nothing is shared
/// between instances. Matches are only computed by [`WindowAggregator::finish`],
/// after every line has been pushed.
#[derive(Debug, Default)]
pub struct WindowAggregator {
    buckets: BTreeMap<MinuteKey, Vec<String>>,
    stats: ScanStats,
}

impl WindowAggregator {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Feed one raw line. Lines without a valid timestamp are counted and dropped.
    pub fn push_line(&mut self, line_number: usize, raw: &str) {
        self.stats.lines_read += 1;

        match parse_line(raw, line_number) {
            Ok(line) => {
                self.buckets
                    .entry(MinuteKey::from_timestamp(line.timestamp))
                    .or_default()
                    .push(line.raw);
                self.stats.lines_bucketed += 1;
            }
            Err(reason) => {
                tracing::debug!("Skipping line {line_number}: {reason}");
                match reason {
                    SkipReason::Blank => self.stats.skipped_blank += 1,
                    SkipReason::BadTimestamp => self.stats.skipped_bad_timestamp += 1,
                }
            }
        }
    }

    /// Feed every line of `lines`, numbering them from 1.
    pub fn extend<I, S>(&mut self, lines: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        for (idx, raw) in lines.into_iter().enumerate() {
            self.push_line(idx + 1, raw.as_ref());
        }
    }

    #[must_use]
    pub const fn stats(&self) -> &ScanStats {
        &self.stats
    }

    /// Close the pass and report every window with at least `threshold` lines.
    #[must_use]
    pub fn finish(self, threshold: NonZeroUsize) -> ScanReport {
        let mut stats = self.stats;
        stats.buckets = self.buckets.len();

        let mut matches = Vec::new();
        for (key, lines) in self.buckets {
            let count = lines.len();
            tracing::debug!("{key} → {count} entries");

            if count >= threshold.get() {
                tracing::info!("Alert! {count} entries in {key}");
                matches.push(AlertMatch {
                    timestamp: key.to_string(),
                    count,
                    log_lines: lines,
                });
            }
        }

        ScanReport { matches, stats }
    }
}

/// Bucket `lines` into one-minute windows and return those with at least
/// `threshold` entries.
#[must_use]
pub fn aggregate<I, S>(lines: I, threshold: NonZeroUsize) -> Vec<AlertMatch>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut aggregator = WindowAggregator::new();
    aggregator.extend(lines);
    aggregator.finish(threshold).matches
}

#[cfg(test)]
mod tests {
    use super::*;

    fn threshold(n: usize) -> NonZeroUsize {
        NonZeroUsize::new(n).expect("non-zero test threshold")
    }

    fn minute_of_lines(n: usize) -> Vec<String> {
        (0..n)
            .map(|i| format!("2024-01-01T00:00:{:02}Z event {i}", i * 5))
            .collect()
    }

    #[test]
    fn test_default_threshold() {
        assert_eq!(DEFAULT_THRESHOLD.get(), 10);
    }

    #[test]
    fn test_ten_lines_threshold_ten() {
        let lines = minute_of_lines(10);
        let matches = aggregate(&lines, threshold(10));

        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].timestamp, "2024-01-01 00:00");
        assert_eq!(matches[0].count, 10);
        assert_eq!(matches[0].log_lines, lines);
    }

    #[test]
    fn test_ten_lines_threshold_eleven() {
        assert!(aggregate(minute_of_lines(10), threshold(11)).is_empty());
    }

    #[test]
    fn test_threshold_boundary() {
        assert!(aggregate(minute_of_lines(4), threshold(5)).is_empty());

        let matches = aggregate(minute_of_lines(5), threshold(5));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].count, 5);
    }

    #[test]
    fn test_threshold_one_alerts_every_window() {
        let lines = [
            "2024-01-01T00:00:00Z a",
            "2024-01-01T00:01:00Z b",
            "2024-01-01T01:01:00Z c",
        ];
        assert_eq!(aggregate(lines, threshold(1)).len(), 3);
    }

    #[test]
    fn test_order_within_window_is_file_order() {
        let lines = [
            "2024-01-01T00:00:50Z late second first",
            "2024-01-01T00:00:10Z early second",
            "2024-01-01T00:00:30Z middle",
        ];
        let matches = aggregate(lines, threshold(3));
        assert_eq!(matches[0].log_lines, lines);
    }

    #[test]
    fn test_windows_are_reported_oldest_first() {
        let lines = [
            "2024-01-01T00:05:00Z later window",
            "2024-01-01T00:05:01Z later window",
            "2024-01-01T00:01:00Z earlier window",
            "2024-01-01T00:01:01Z earlier window",
        ];
        let keys: Vec<String> = aggregate(lines, threshold(2))
            .into_iter()
            .map(|m| m.timestamp)
            .collect();
        assert_eq!(keys, ["2024-01-01 00:01", "2024-01-01 00:05"]);
    }

    #[test]
    fn test_malformed_lines_are_not_counted() {
        let mut lines = Vec::new();
        for i in 0..6 {
            lines.push(format!("2024-03-10T08:15:{:02}Z ok {i}", i * 7));
            lines.push("garbage without timestamp".to_string());
            lines.push(String::new());
        }
        lines.push("2024-03-10T08:15:59 no zulu".to_string());

        let mut aggregator = WindowAggregator::new();
        aggregator.extend(&lines);
        let report = aggregator.finish(threshold(6));

        assert_eq!(report.matches.len(), 1);
        assert_eq!(report.matches[0].count, 6);
        assert!(report.matches[0]
            .log_lines
            .iter()
            .all(|l| l.starts_with("2024-03-10T08:15:")));

        assert_eq!(report.stats.lines_read, 19);
        assert_eq!(report.stats.lines_bucketed, 6);
        assert_eq!(report.stats.skipped_blank, 6);
        assert_eq!(report.stats.skipped_bad_timestamp, 7);
        assert_eq!(
            report.stats.lines_read,
            report.stats.lines_bucketed + report.stats.skipped()
        );
    }

    #[test]
    fn test_second_sixty_does_not_fill_a_window() {
        let mut lines: Vec<String> = (0..9)
            .map(|s| format!("2024-01-01T00:00:{s:02}Z ok"))
            .collect();
        lines.push("2024-01-01T00:00:60Z bogus".to_string());

        let mut aggregator = WindowAggregator::new();
        aggregator.extend(&lines);
        let report = aggregator.finish(threshold(10));

        assert!(report.matches.is_empty());
        assert_eq!(report.stats.lines_bucketed, 9);
        assert_eq!(report.stats.skipped_bad_timestamp, 1);
    }

    #[test]
    fn test_bad_first_line_does_not_abort() {
        let lines = [
            "",
            "not a timestamp",
            "2024-01-01T00:00:00Z a",
            "2024-01-01T00:00:01Z b",
        ];
        let matches = aggregate(lines, threshold(2));
        assert_eq!(matches.len(), 1);
        assert_eq!(matches[0].count, 2);
    }

    #[test]
    fn test_bucket_count_in_stats() {
        let mut aggregator = WindowAggregator::new();
        aggregator.extend([
            "2024-01-01T00:00:00Z",
            "2024-01-01T00:00:59Z",
            "2024-01-01T00:01:00Z",
            "2025-01-01T00:00:00Z",
        ]);
        assert_eq!(aggregator.stats().lines_bucketed, 4);

        let report = aggregator.finish(DEFAULT_THRESHOLD);
        assert_eq!(report.stats.buckets, 3);
        assert!(report.matches.is_empty());
    }

    #[test]
    fn test_separate_aggregators_do_not_share_state() {
        let first = aggregate(minute_of_lines(3), threshold(3));
        let second = aggregate(minute_of_lines(3), threshold(3));
        assert_eq!(first[0].count, 3);
        assert_eq!(second[0].count, 3);
    }

    #[test]
    fn test_empty_input() {
        let report = WindowAggregator::new().finish(threshold(1));
        assert_eq!(report, ScanReport::default());
    }
}
