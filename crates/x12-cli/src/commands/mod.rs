// Dweve X12 - ANSI ASC X12 EDI toolkit
//
// Copyright (c) 2025 Dweve IP B.V. and individual contributors.
//
// SPDX-License-Identifier: Apache-2.0
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License in the LICENSE file at the
// root of this repository or at: http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! CLI command implementations

mod format;
mod inspect;
mod parse;
mod validate;

pub use format::{format, FormatArgs};
pub use inspect::inspect;
pub use parse::{parse, ExportFormat, ParseSummary};
pub use validate::validate;

use crate::error::CliError;
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Default maximum file size to prevent OOM attacks (1 GB)
/// Can be overridden via X12_MAX_FILE_SIZE environment variable
pub const DEFAULT_MAX_FILE_SIZE: u64 = 1024 * 1024 * 1024;

/// Get the maximum file size from environment or use default.
fn get_max_file_size() -> u64 {
    std::env::var("X12_MAX_FILE_SIZE")
        .ok()
        .and_then(|s| s.parse::<u64>().ok())
        .unwrap_or(DEFAULT_MAX_FILE_SIZE)
}

/// Read a file from disk with size validation.
///
/// Files larger than `X12_MAX_FILE_SIZE` bytes are rejected before any
/// memory is allocated for their contents.
///
/// # Errors
///
/// Returns `Err` if the metadata cannot be read, the file is too large, or
/// its contents are not UTF-8.
///
/// # Examples
///
/// ```no_run
/// use x12_cli::commands::read_file;
///
/// # fn main() -> Result<(), x12_cli::error::CliError> {
/// let content = read_file("eligibility.edi")?;
/// assert!(content.starts_with("ISA"));
/// # Ok(())
/// # }
/// ```
pub fn read_file(path: impl AsRef<Path>) -> Result<String, CliError> {
    let path = path.as_ref();
    let metadata = fs::metadata(path).map_err(|e| CliError::io_error(path, e))?;

    let max_file_size = get_max_file_size();
    if metadata.len() > max_file_size {
        return Err(CliError::file_too_large(path, metadata.len(), max_file_size));
    }

    fs::read_to_string(path).map_err(|e| CliError::io_error(path, e))
}

/// Write content to a file or stdout.
pub fn write_output(content: &str, path: Option<&str>) -> Result<(), CliError> {
    match path {
        Some(p) => fs::write(p, content).map_err(|e| CliError::io_error(p, e)),
        None => io::stdout()
            .write_all(content.as_bytes())
            .map_err(|e| CliError::io_error("<stdout>", e)),
    }
}

/// Read and parse `path`.
fn parse_file(path: impl AsRef<Path>) -> Result<x12_core::Document, CliError> {
    let content = read_file(path)?;
    Ok(x12_core::parse(&content)?)
}
