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

//! CLI command definitions and argument parsing.

use crate::commands::{self, ExportFormat, FormatArgs};
use crate::error::CliError;
use clap::{Subcommand, ValueEnum};
use std::path::PathBuf;

/// Log verbosity for the `--log` option.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    /// Directive understood by `EnvFilter`.
    pub fn as_str(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

/// Top-level CLI commands.
///
/// # Examples
///
/// ```no_run
/// use clap::Parser;
/// use x12_cli::cli::Commands;
///
/// #[derive(Parser)]
/// struct Cli {
///     #[command(subcommand)]
///     command: Commands,
/// }
/// ```
#[derive(Subcommand)]
pub enum Commands {
    /// Parse interchanges and export them as JSON or XML
    ///
    /// PATH may be a file or a directory; every regular file of a directory
    /// is processed in parallel. Files that fail to parse or validate are
    /// logged and skipped.
    Parse {
        /// Input file or directory
        #[arg(value_name = "PATH")]
        path: PathBuf,

        /// Export format
        #[arg(short, long, value_enum, default_value_t = ExportFormat::Json)]
        export: ExportFormat,

        /// Output directory (created if missing)
        #[arg(short, long, default_value = ".")]
        output: PathBuf,

        /// Include the normalized input text in the export
        #[arg(long)]
        with_text: bool,
    },

    /// Validate an interchange
    ///
    /// Prints every violation found. Exits with status 1 when the file is
    /// invalid or cannot be parsed.
    Validate {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Print the report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Re-emit an interchange, optionally with other delimiters
    Format {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Output file path (defaults to stdout)
        #[arg(short, long)]
        output: Option<String>,

        /// Element separator to write
        #[arg(long)]
        element_separator: Option<char>,

        /// Segment terminator to write
        #[arg(long)]
        segment_terminator: Option<char>,

        /// Sub-element separator to write (ISA16)
        #[arg(long)]
        sub_element_separator: Option<char>,

        /// Put each segment on its own line
        #[arg(long)]
        line_breaks: bool,
    },

    /// Print the envelope tree of an interchange
    Inspect {
        /// Input file path
        #[arg(value_name = "FILE")]
        file: String,

        /// Show every element of every segment
        #[arg(short, long)]
        verbose: bool,
    },
}

impl Commands {
    /// Execute the command.
    ///
    /// # Errors
    ///
    /// Returns `Err` if file I/O fails, the input cannot be parsed, or (for
    /// `validate`) the document is invalid.
    pub fn execute(self) -> Result<(), CliError> {
        match self {
            Commands::Parse {
                path,
                export,
                output,
                with_text,
            } => commands::parse(&path, export, &output, with_text).map(|_| ()),
            Commands::Validate { file, json } => commands::validate(&file, json),
            Commands::Format {
                file,
                output,
                element_separator,
                segment_terminator,
                sub_element_separator,
                line_breaks,
            } => commands::format(
                &file,
                output.as_deref(),
                &FormatArgs {
                    element_separator,
                    segment_terminator,
                    sub_element_separator,
                    line_breaks,
                },
            ),
            Commands::Inspect { file, verbose } => commands::inspect(&file, verbose),
        }
    }
}
