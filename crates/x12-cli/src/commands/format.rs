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

//! Format command - re-emit an interchange

use super::{parse_file, write_output};
use crate::error::CliError;
use x12_core::WriteOptions;

/// Delimiter overrides for [`format`].
#[derive(Debug, Clone, Default)]
pub struct FormatArgs {
    pub element_separator: Option<char>,
    pub segment_terminator: Option<char>,
    pub sub_element_separator: Option<char>,
    pub line_breaks: bool,
}

/// Re-emit `file` with the parsed delimiters, overridden by `args`.
///
/// # Errors
///
/// Returns `Err` if the file cannot be parsed, two delimiters coincide, or
/// the output cannot be written.
pub fn format(file: &str, output: Option<&str>, args: &FormatArgs) -> Result<(), CliError> {
    let doc = parse_file(file)?;

    let mut config = doc.config().clone();
    if let Some(c) = args.element_separator {
        config.element_separator = c;
    }
    if let Some(c) = args.segment_terminator {
        config.segment_terminator = c;
    }
    if let Some(c) = args.sub_element_separator {
        config.sub_element_separator = c;
    }

    let delimiters = [
        config.element_separator,
        config.segment_terminator,
        config.sub_element_separator,
    ];
    if delimiters[0] == delimiters[1]
        || delimiters[0] == delimiters[2]
        || delimiters[1] == delimiters[2]
    {
        return Err(CliError::invalid_input(format!(
            "delimiters must be distinct, got element {:?}, segment {:?}, sub-element {:?}",
            delimiters[0], delimiters[1], delimiters[2]
        )));
    }

    let options = WriteOptions::default().with_line_breaks(args.line_breaks);
    let mut edi = doc.format_with(&config, &options);
    if output.is_none() && !edi.ends_with('\n') {
        edi.push('\n');
    }
    write_output(&edi, output)
}
