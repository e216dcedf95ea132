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

//! `LogSniff` - alert on one-minute bursts in timestamped log files.
//!
//! Lines are bucketed by the minute of their leading `YYYY-MM-DDTHH:MM:SSZ`
//! timestamp. Once the whole file has been read, every bucket holding at
//! least `threshold` lines becomes an [`core::AlertMatch`], which can be
//! written out as JSON with [`core::persist`].

pub mod app;
pub mod config;
pub mod core;
pub mod logging;
pub mod parser;
