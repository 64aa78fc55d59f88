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

//! Parse command - export interchanges as JSON or XML

use super::parse_file;
use crate::error::CliError;
use clap::ValueEnum;
use rayon::prelude::*;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{debug, error, info};
use x12_json::ToJsonConfig;
use x12_xml::ToXmlConfig;

/// Export format of the `parse` command.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Json,
    Xml,
}

impl ExportFormat {
    /// File extension of exported documents.
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Json => "json",
            ExportFormat::Xml => "xml",
        }
    }
}

/// Outcome of a [`parse`] run.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParseSummary {
    /// Files written, in input order.
    pub exported: Vec<PathBuf>,
    /// Inputs that failed to parse or validate.
    pub skipped: Vec<PathBuf>,
}

/// Parse `path` (a file, or every regular file in a directory) and export
/// each valid document to `output/<file-stem>.<ext>`.
///
/// Unreadable, unparsable and invalid inputs are logged and skipped.
///
/// # Errors
///
/// Returns `Err` only when the input directory cannot be listed or an
/// export cannot be written.
pub fn parse(
    path: &Path,
    format: ExportFormat,
    output: &Path,
    with_text: bool,
) -> Result<ParseSummary, CliError> {
    let inputs = collect_inputs(path)?;
    fs::create_dir_all(output).map_err(|e| CliError::io_error(output, e))?;
    debug!("Parsing {} file(s) into {}", inputs.len(), output.display());

    let results: Vec<Result<Option<PathBuf>, CliError>> = inputs
        .par_iter()
        .map(|input| export_file(input, format, output, with_text))
        .collect();

    let mut summary = ParseSummary::default();
    for (input, result) in inputs.into_iter().zip(results) {
        match result? {
            Some(written) => summary.exported.push(written),
            None => summary.skipped.push(input),
        }
    }
    info!(
        "Exported {} document(s), skipped {}",
        summary.exported.len(),
        summary.skipped.len()
    );
    Ok(summary)
}

/// The file itself, or the regular files of a directory sorted by name.
fn collect_inputs(path: &Path) -> Result<Vec<PathBuf>, CliError> {
    if !path.is_dir() {
        return Ok(vec![path.to_path_buf()]);
    }
    let mut files = Vec::new();
    for entry in fs::read_dir(path).map_err(|e| CliError::io_error(path, e))? {
        let entry = entry.map_err(|e| CliError::io_error(path, e))?;
        let file_path = entry.path();
        if file_path.is_file() {
            files.push(file_path);
        }
    }
    files.sort();
    Ok(files)
}

/// Export one input; `Ok(None)` when it was skipped.
fn export_file(
    input: &Path,
    format: ExportFormat,
    output: &Path,
    with_text: bool,
) -> Result<Option<PathBuf>, CliError> {
    let doc = match parse_file(input) {
        Ok(doc) => doc,
        Err(e) => {
            error!("Skipping {}: {}", input.display(), e);
            return Ok(None);
        }
    };

    let report = doc.validate();
    if !report.is_valid() {
        error!(
            "Skipping {}: {} validation error(s)",
            input.display(),
            report.len()
        );
        for violation in &report {
            error!("  {}", violation);
        }
        return Ok(None);
    }

    let rendered = match format {
        ExportFormat::Json => x12_json::to_json(
            &doc,
            &ToJsonConfig {
                include_text: with_text,
                ..Default::default()
            },
        ),
        ExportFormat::Xml => x12_xml::to_xml(
            &doc,
            &ToXmlConfig {
                include_text: with_text,
                ..Default::default()
            },
        ),
    };
    let rendered = match rendered {
        Ok(rendered) => rendered,
        Err(e) => {
            error!("Skipping {}: {}", input.display(), e);
            return Ok(None);
        }
    };

    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "document".to_string());
    let target = output.join(format!("{}.{}", stem, format.extension()));
    fs::write(&target, rendered).map_err(|e| CliError::io_error(&target, e))?;
    info!("Exported {} to {}", input.display(), target.display());
    Ok(Some(target))
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_test::fixtures;

    fn write(dir: &Path, name: &str, content: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_export_single_file() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        let file = write(input.path(), "po.edi", fixtures::purchase_order());

        let summary = parse(&file, ExportFormat::Json, out.path(), false).unwrap();
        assert_eq!(summary.exported, vec![out.path().join("po.json")]);
        assert!(summary.skipped.is_empty());

        let json: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(out.path().join("po.json")).unwrap()).unwrap();
        assert_eq!(json["interchange"]["header"]["ISA13"]["content"], "000000905");
    }

    #[test]
    fn test_directory_skips_bad_inputs() {
        let input = tempfile::tempdir().unwrap();
        let out = tempfile::tempdir().unwrap();
        write(input.path(), "a.edi", fixtures::eligibility_response());
        write(input.path(), "b.edi", "not an interchange");
        let (_, invalid, _) = &x12_test::fixtures::errors::invalid_documents()[0];
        write(input.path(), "c.edi", invalid);
        write(input.path(), "d.edi", fixtures::multi_group());

        let target = out.path().join("nested");
        let summary = parse(input.path(), ExportFormat::Xml, &target, false).unwrap();
        assert_eq!(
            summary.exported,
            vec![target.join("a.xml"), target.join("d.xml")]
        );
        assert_eq!(
            summary.skipped,
            vec![input.path().join("b.edi"), input.path().join("c.edi")]
        );
    }

    #[test]
    fn test_missing_input_is_skipped() {
        let out = tempfile::tempdir().unwrap();
        let summary = parse(
            Path::new("/nonexistent/input.edi"),
            ExportFormat::Json,
            out.path(),
            false,
        )
        .unwrap();
        assert!(summary.exported.is_empty());
        assert_eq!(summary.skipped.len(), 1);
    }
}
