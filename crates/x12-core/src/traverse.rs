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

//! Document traversal for writers and exporters.
//!
//! [`traverse`] walks the envelope tree depth-first in document order and
//! calls a [`DocumentVisitor`] for every envelope and segment. Each envelope
//! produces `begin_envelope`, its header, its body in order, its trailer,
//! then `end_envelope`.
//!
//! # Example
//!
//! ```
//! use x12_core::traverse::{traverse, StatsCollector};
//!
//! let text = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     \
//!             *230101*1253*^*00501*000000905*0*T*:~GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~\
//!             ST*850*0001~BEG*00*SA*123**20230101~SE*3*0001~GE*1*1~IEA*1*000000905~";
//! let doc = x12_core::parse(text).unwrap();
//!
//! let mut stats = StatsCollector::default();
//! traverse(&doc, &mut stats).unwrap();
//! assert_eq!(stats.transaction_set_count, 1);
//! assert_eq!(stats.segment_count, 7);
//! ```

use crate::document::Document;
use crate::envelope::EnvelopeKind;
use crate::segment::Segment;
use crate::view::{EnvelopeRef, NodeRef};

/// Where a segment sits in its envelope.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentPosition {
    Header,
    Body,
    Trailer,
}

/// Context provided to visitors during traversal.
#[derive(Debug, Clone)]
pub struct VisitorContext<'a> {
    /// Nesting depth of the current envelope (0 = interchange).
    pub depth: usize,
    /// Kind of the current envelope.
    pub kind: EnvelopeKind,
    /// Reference to the document being traversed.
    pub document: &'a Document,
}

impl<'a> VisitorContext<'a> {
    /// Context for the interchange.
    pub fn new(document: &'a Document) -> Self {
        Self {
            depth: 0,
            kind: EnvelopeKind::Interchange,
            document,
        }
    }

    /// Context for a child envelope of `kind`.
    pub fn child(&self, kind: EnvelopeKind) -> Self {
        Self {
            depth: self.depth + 1,
            kind,
            document: self.document,
        }
    }
}

/// Trait for visiting the envelopes and segments of a document.
///
/// Only `visit_segment` is required; the envelope hooks default to no-ops.
pub trait DocumentVisitor {
    /// Error type returned by visitor methods.
    type Error;

    fn begin_document(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        Ok(())
    }

    fn end_document(&mut self, _doc: &Document) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called before the header of every envelope.
    fn begin_envelope(&mut self, _env: EnvelopeRef<'_>, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called after the trailer of every envelope.
    fn end_envelope(&mut self, _env: EnvelopeRef<'_>, _ctx: &VisitorContext) -> Result<(), Self::Error> {
        Ok(())
    }

    /// Called for every segment, empty headers and trailers included.
    fn visit_segment(
        &mut self,
        segment: &Segment,
        position: SegmentPosition,
        ctx: &VisitorContext,
    ) -> Result<(), Self::Error>;
}

/// Traverse a document with a visitor.
pub fn traverse<V: DocumentVisitor>(doc: &Document, visitor: &mut V) -> Result<(), V::Error> {
    visitor.begin_document(doc)?;
    let ctx = VisitorContext::new(doc);
    traverse_envelope(doc.root(), &ctx, visitor)?;
    visitor.end_document(doc)
}

fn traverse_envelope<V: DocumentVisitor>(
    env: EnvelopeRef<'_>,
    ctx: &VisitorContext,
    visitor: &mut V,
) -> Result<(), V::Error> {
    visitor.begin_envelope(env, ctx)?;
    visitor.visit_segment(env.header(), SegmentPosition::Header, ctx)?;
    for node in env.nodes() {
        match node {
            NodeRef::Segment(segment) => visitor.visit_segment(segment, SegmentPosition::Body, ctx)?,
            NodeRef::Envelope(child) => {
                let child_ctx = ctx.child(child.kind());
                traverse_envelope(child, &child_ctx, visitor)?;
            }
        }
    }
    visitor.visit_segment(env.trailer(), SegmentPosition::Trailer, ctx)?;
    visitor.end_envelope(env, ctx)
}

/// A visitor that collects document statistics.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct StatsCollector {
    /// Number of functional groups visited.
    pub group_count: usize,
    /// Number of transaction sets visited.
    pub transaction_set_count: usize,
    /// Number of hierarchical loops visited.
    pub loop_count: usize,
    /// Number of non-empty segments visited.
    pub segment_count: usize,
    /// Number of body segments with no known schema.
    pub generic_segment_count: usize,
    /// Maximum envelope depth reached.
    pub max_depth: usize,
}

impl DocumentVisitor for StatsCollector {
    type Error = std::convert::Infallible;

    fn begin_envelope(&mut self, env: EnvelopeRef<'_>, ctx: &VisitorContext) -> Result<(), Self::Error> {
        match env.kind() {
            EnvelopeKind::Interchange => {}
            EnvelopeKind::Group => self.group_count += 1,
            EnvelopeKind::TransactionSet => self.transaction_set_count += 1,
            EnvelopeKind::Loop => self.loop_count += 1,
        }
        self.max_depth = self.max_depth.max(ctx.depth);
        Ok(())
    }

    fn visit_segment(
        &mut self,
        segment: &Segment,
        _position: SegmentPosition,
        _ctx: &VisitorContext,
    ) -> Result<(), Self::Error> {
        if segment.is_empty() {
            return Ok(());
        }
        self.segment_count += 1;
        if segment.id().name.starts_with("GEN") {
            self.generic_segment_count += 1;
        }
        Ok(())
    }
}
