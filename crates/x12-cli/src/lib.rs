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

//! X12 CLI library for command-line parsing and execution.
//!
//! # Commands
//!
//! - **parse**: Export one file, or every file in a directory, as JSON or XML
//! - **validate**: Report every violation found in an interchange
//! - **format**: Re-emit an interchange with other delimiters
//! - **inspect**: Print the envelope tree as an outline
//!
//! # Examples
//!
//! ```no_run
//! use x12_cli::commands::{self, ExportFormat};
//! use std::path::Path;
//!
//! # fn main() -> Result<(), x12_cli::error::CliError> {
//! commands::validate("eligibility.edi", false)?;
//! commands::parse(Path::new("inbound"), ExportFormat::Json, Path::new("exported"), false)?;
//! # Ok(())
//! # }
//! ```
//!
//! # Security
//!
//! - **File size limits**: files above `X12_MAX_FILE_SIZE` bytes (default 1 GB)
//!   are rejected before reading
//! - **Parser limits**: segment count and hierarchy depth are bounded by
//!   [`x12_core::Limits`]

pub mod cli;
pub mod commands;
pub mod error;
