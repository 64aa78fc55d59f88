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

//! EDI text writer.
//!
//! Output is canonical rather than byte-identical to the input: segments
//! whose fields are all empty are dropped entirely, and a trailing optional
//! element is only written when it has content.

use crate::config::DocumentConfiguration;
use crate::document::Document;
use crate::envelope::EnvelopeKind;
use crate::segment::Segment;
use crate::traverse::{traverse, DocumentVisitor, SegmentPosition, VisitorContext};
use std::convert::Infallible;

/// Output options for [`EdiWriter`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WriteOptions {
    /// Write `\n` after every segment terminator.
    pub line_breaks: bool,
}

impl WriteOptions {
    pub fn with_line_breaks(mut self, line_breaks: bool) -> Self {
        self.line_breaks = line_breaks;
        self
    }
}

/// Renders a document with a target configuration.
pub struct EdiWriter<'a> {
    doc: &'a Document,
    config: &'a DocumentConfiguration,
    options: &'a WriteOptions,
    /// `(from, to)` when the sub-element separator changes.
    translate: Option<(char, char)>,
    output: String,
}

impl<'a> EdiWriter<'a> {
    pub fn new(doc: &'a Document, config: &'a DocumentConfiguration, options: &'a WriteOptions) -> Self {
        let source = doc.config().sub_element_separator;
        let target = config.sub_element_separator;
        // Parsed text is a close estimate of the output size
        let capacity = doc.text().len() + if options.line_breaks { doc.segment_count() } else { 0 };
        Self {
            doc,
            config,
            options,
            translate: (source != target).then_some((source, target)),
            output: String::with_capacity(capacity),
        }
    }

    pub fn write_document(&mut self) {
        let doc = self.doc;
        match traverse(doc, self) {
            Ok(()) => {}
            Err(never) => match never {},
        }
    }

    /// ISA16 always carries the target sub-element separator.
    fn write_interchange_header(&mut self, header: &Segment) {
        let isa16 = header.fields().iter().position(|f| f.name == "ISA16");
        self.write_fields(header, isa16);
    }

    /// Write one segment, or nothing when all its fields are empty.
    pub fn write_segment(&mut self, segment: &Segment) {
        self.write_fields(segment, None);
    }

    fn write_fields(&mut self, segment: &Segment, separator_position: Option<usize>) {
        if segment.is_empty() {
            return;
        }
        for (index, field) in segment.fields().iter().enumerate() {
            if Some(index) == separator_position {
                self.output.push(self.config.sub_element_separator);
            } else {
                self.push_content(&field.content);
            }
            if separator_after(segment, index) {
                self.output.push(self.config.element_separator);
            }
        }
        self.output.push(self.config.segment_terminator);
        if self.options.line_breaks && self.config.segment_terminator != '\n' {
            self.output.push('\n');
        }
    }

    fn push_content(&mut self, content: &str) {
        match self.translate {
            Some((from, to)) if content.contains(from) => {
                self.output
                    .extend(content.chars().map(|c| if c == from { to } else { c }));
            }
            _ => self.output.push_str(content),
        }
    }

    pub fn finish(self) -> String {
        self.output
    }
}

impl DocumentVisitor for EdiWriter<'_> {
    type Error = Infallible;

    fn visit_segment(
        &mut self,
        segment: &Segment,
        position: SegmentPosition,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        if position == SegmentPosition::Header && ctx.kind == EnvelopeKind::Interchange {
            self.write_interchange_header(segment);
        } else {
            self.write_segment(segment);
        }
        Ok(())
    }
}

/// Whether an element separator follows the field at `index`.
///
/// Never after the last field. Before the last field only when it is
/// required or has content; before any other field always.
fn separator_after(segment: &Segment, index: usize) -> bool {
    let count = segment.field_count();
    if index >= count {
        return false;
    }
    match segment.get(index + 1) {
        Some(next) => next.required || !next.is_empty() || index + 1 != count,
        None => false,
    }
}

/// Render a single segment with `config`'s delimiters.
pub fn format_segment(segment: &Segment, config: &DocumentConfiguration) -> String {
    let mut out = String::new();
    if segment.is_empty() {
        return out;
    }
    for (index, field) in segment.fields().iter().enumerate() {
        out.push_str(&field.content);
        if separator_after(segment, index) {
            out.push(config.element_separator);
        }
    }
    out.push(config.segment_terminator);
    out
}
