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

//! Inspect command - envelope tree outline

use super::parse_file;
use crate::error::CliError;
use colored::Colorize;
use x12_core::{format_segment, DocumentConfiguration, TreeNode};

/// Print the envelope tree of `file` as an indented outline.
///
/// Envelopes are shown with their header segment; body segments with their
/// EDI text. With `verbose` every element is listed under its segment.
///
/// # Errors
///
/// Returns `Err` if the file cannot be read or parsed.
pub fn inspect(file: &str, verbose: bool) -> Result<(), CliError> {
    let doc = parse_file(file)?;
    let config = doc.config();

    println!("{}", "X12 Document".bold().underline());
    println!();
    println!("{}  {}", "Version:".cyan(), config.version);
    println!(
        "{}  element {:?}, segment {:?}, sub-element {:?}",
        "Delimiters:".cyan(),
        config.element_separator,
        config.segment_terminator,
        config.sub_element_separator
    );
    println!();

    print_node(&doc.to_tree_representation(), config, 0, verbose);
    Ok(())
}

fn print_node(node: &TreeNode<'_>, config: &DocumentConfiguration, indent: usize, verbose: bool) {
    let prefix = "  ".repeat(indent);
    match node {
        TreeNode::Envelope {
            header,
            trailer,
            children,
            ..
        } => {
            println!("{}{}", prefix, node.label().green().bold());
            print_segment(header, config, indent + 1, verbose);
            for child in children {
                print_node(child, config, indent + 1, verbose);
            }
            if !trailer.is_empty() {
                print_segment(trailer, config, indent + 1, verbose);
            }
        }
        TreeNode::Segment(segment) => print_segment(segment, config, indent, verbose),
    }
}

fn print_segment(
    segment: &x12_core::Segment,
    config: &DocumentConfiguration,
    indent: usize,
    verbose: bool,
) {
    let prefix = "  ".repeat(indent);
    let text = format_segment(segment, config);
    println!("{}{}", prefix, text.trim_end_matches(config.segment_terminator).dimmed());
    if verbose {
        for field in segment.fields().iter().skip(1) {
            println!(
                "{}  {} {}: {}",
                prefix,
                field.name.yellow(),
                format!("({})", field.description).dimmed(),
                field.content
            );
        }
    }
}
