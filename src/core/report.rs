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

//! Alert records and their JSON output file.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// A one-minute window whose entry count reached the threshold
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AlertMatch {
    /// Window start as `YYYY-MM-DD HH:MM`
    pub timestamp: String,
    pub count: usize,
    /// Member lines in file order
    pub log_lines: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PersistOutcome {
    /// No matches, the destination was left alone
    NothingToPersist,
    Written { count: usize },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("cannot write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("cannot serialize alerts: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Write all matches to `destination` as a single JSON array.
///
/// An empty slice never touches the filesystem, so an existing file at
/// `destination` survives a run that found nothing.
pub fn persist(
    matches: &[AlertMatch],
    destination: &Path,
) -> Result<PersistOutcome, PersistError> {
    if matches.is_empty() {
        tracing::debug!(
            "Nothing to persist, leaving {} untouched",
            destination.display()
        );
        return Ok(PersistOutcome::NothingToPersist);
    }

    // Serialize fully before touching the destination
    let mut buffer = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buffer, formatter);
    matches.serialize(&mut ser)?;
    buffer.push(b'\n');

    fs::write(destination, &buffer).map_err(|source| PersistError::Io {
        path: destination.to_path_buf(),
        source,
    })?;

    Ok(PersistOutcome::Written {
        count: matches.len(),
    })
}
