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

//! Validate command - structural and field validation

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;
use serde_json::json;

/// Validate an interchange and print every violation.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed, or has violations.
///
/// # Output
///
/// Prints `✓`/`✗` with the file name, a summary of the envelopes found and
/// one line per violation. With `json` the same information is printed as a
/// JSON object instead.
pub fn validate(file: &str, json: bool) -> Result<(), CliError> {
    let doc = match parse_file(file) {
        Ok(doc) => doc,
        Err(e) => {
            if !json {
                println!("{} {}", "✗".red().bold(), file);
            }
            return Err(e);
        }
    };
    let report = doc.validate();

    if json {
        let violations: Vec<_> = report
            .iter()
            .map(|v| {
                json!({
                    "category": v.category().to_string(),
                    "segment": v.segment(),
                    "message": v.to_string(),
                })
            })
            .collect();
        let out = json!({
            "file": file,
            "valid": report.is_valid(),
            "violations": violations,
        });
        println!("{}", serde_json::to_string_pretty(&out)?);
    } else if report.is_valid() {
        let interchange = doc.interchange();
        println!("{} {}", "✓".green().bold(), file);
        println!("  Version: {}", doc.config().version);
        println!("  Control number: {}", interchange.control_number());
        println!("  Groups: {}", interchange.groups().count());
        println!(
            "  Transaction sets: {}",
            interchange
                .groups()
                .map(|g| g.transaction_sets().count())
                .sum::<usize>()
                + interchange.ungrouped_transaction_sets().count()
        );
        println!("  Segments: {}", doc.segment_count());
    } else {
        println!("{} {}", "✗".red().bold(), file);
        for violation in &report {
            println!("  {}", violation.to_string().yellow());
        }
    }

    if report.is_valid() {
        Ok(())
    } else {
        Err(CliError::invalid(file, report.len()))
    }
}
