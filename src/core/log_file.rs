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

//! Reading a log file from disk into the aggregator.

use crate::core::aggregator::{ScanReport, WindowAggregator};
use std::fs::{self, File};
use std::io::{self, Read};
use std::num::NonZeroUsize;
use std::path::{Path, PathBuf};
use std::time::Instant;
use thiserror::Error;

/// Failure to get at the input file. Nothing is aggregated in these cases.
#[derive(Debug, Error)]
pub enum ScanError {
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Permission denied: {}", .0.display())]
    PermissionDenied(PathBuf),
    #[error("Expected a file but found a directory: {}", .0.display())]
    IsDirectory(PathBuf),
    #[error("An error occurred: {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl ScanError {
    fn from_io(path: &Path, source: io::Error) -> Self {
        match source.kind() {
            io::ErrorKind::NotFound => Self::NotFound(path.to_path_buf()),
            io::ErrorKind::PermissionDenied => Self::PermissionDenied(path.to_path_buf()),
            _ => Self::Io {
                path: path.to_path_buf(),
                source,
            },
        }
    }
}

/// Read the whole file at `path` and aggregate it with `threshold`.
///
/// Invalid UTF-8 sequences are dropped rather than rejected, so a stray binary byte
/// only affects the line it sits on.
pub fn scan_file(path: &Path, threshold: NonZeroUsize) -> Result<ScanReport, ScanError> {
    let content = read_valid_utf8(path)?;

    let parse_start = Instant::now();
    let mut aggregator = WindowAggregator::new();
    aggregator.extend(content.lines());
    let report = aggregator.finish(threshold);

    tracing::debug!(
        "Aggregating {} lines from {} took {:?}",
        report.stats.lines_read,
        path.display(),
        parse_start.elapsed()
    );
    Ok(report)
}

fn read_valid_utf8(path: &Path) -> Result<String, ScanError> {
    // Opening a directory succeeds on Unix, so check first
    let metadata = fs::metadata(path).map_err(|e| ScanError::from_io(path, e))?;
    if metadata.is_dir() {
        return Err(ScanError::IsDirectory(path.to_path_buf()));
    }
    tracing::debug!("File size: {} bytes", metadata.len());

    let read_start = Instant::now();
    let mut buffer = Vec::new();
    File::open(path)
        .and_then(|mut file| file.read_to_end(&mut buffer))
        .map_err(|e| ScanError::from_io(path, e))?;
    tracing::debug!(
        "File I/O took {:?} to read {} bytes",
        read_start.elapsed(),
        buffer.len()
    );

    Ok(buffer.utf8_chunks().map(|chunk| chunk.valid()).collect())
}
