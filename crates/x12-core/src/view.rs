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

//! Read-only typed views over the envelope arena.
//!
//! [`EnvelopeRef`] pairs a document with an envelope id. [`Interchange`],
//! [`Group`], [`TransactionSet`] and [`Loop`] wrap it and name the children
//! each kind holds, filtering the shared body by kind.

use crate::document::Document;
use crate::envelope::{Envelope, EnvelopeId, EnvelopeKind, Node};
use crate::revisions::Revision;
use crate::segment::Segment;

/// A borrowed envelope together with the document it lives in.
#[derive(Debug, Clone, Copy)]
pub struct EnvelopeRef<'a> {
    doc: &'a Document,
    id: EnvelopeId,
}

/// A borrowed body entry.
#[derive(Debug, Clone, Copy)]
pub enum NodeRef<'a> {
    Segment(&'a Segment),
    Envelope(EnvelopeRef<'a>),
}

impl<'a> EnvelopeRef<'a> {
    pub fn new(doc: &'a Document, id: EnvelopeId) -> Self {
        Self { doc, id }
    }

    pub fn id(&self) -> EnvelopeId {
        self.id
    }

    pub fn document(&self) -> &'a Document {
        self.doc
    }

    pub fn envelope(&self) -> &'a Envelope {
        self.doc.envelope(self.id)
    }

    pub fn kind(&self) -> EnvelopeKind {
        self.envelope().kind
    }

    pub fn role(&self) -> Option<&'static str> {
        self.envelope().role
    }

    pub fn revision(&self) -> Option<&'static Revision> {
        self.envelope().revision
    }

    pub fn header(&self) -> &'a Segment {
        &self.envelope().header
    }

    pub fn trailer(&self) -> &'a Segment {
        &self.envelope().trailer
    }

    /// Body entries in document order.
    pub fn nodes(&self) -> impl Iterator<Item = NodeRef<'a>> + 'a {
        let doc = self.doc;
        self.envelope().body.iter().map(move |node| match node {
            Node::Segment(segment) => NodeRef::Segment(segment),
            Node::Envelope(id) => NodeRef::Envelope(EnvelopeRef::new(doc, *id)),
        })
    }

    /// Envelopes directly in the body.
    pub fn children(&self) -> impl Iterator<Item = EnvelopeRef<'a>> + 'a {
        self.nodes().filter_map(|node| match node {
            NodeRef::Envelope(env) => Some(env),
            NodeRef::Segment(_) => None,
        })
    }

    /// Envelopes of one kind directly in the body.
    pub fn children_of(&self, kind: EnvelopeKind) -> impl Iterator<Item = EnvelopeRef<'a>> + 'a {
        self.children().filter(move |env| env.kind() == kind)
    }

    /// Segments directly in the body.
    pub fn segments(&self) -> impl Iterator<Item = &'a Segment> + 'a {
        self.envelope().segments()
    }

    /// Non-empty segments this envelope spans, header and trailer included,
    /// counting nested loops recursively. A loop has no trailer segment of its
    /// own.
    pub fn segment_count(&self) -> usize {
        let own = match self.kind() {
            EnvelopeKind::Loop => 1 + usize::from(!self.trailer().is_empty()),
            _ => 2,
        };
        own + self
            .nodes()
            .map(|node| match node {
                NodeRef::Segment(segment) => usize::from(!segment.is_empty()),
                NodeRef::Envelope(env) => env.segment_count(),
            })
            .sum::<usize>()
    }
}

macro_rules! envelope_view {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name<'a>(EnvelopeRef<'a>);

        impl<'a> $name<'a> {
            pub fn new(envelope: EnvelopeRef<'a>) -> Self {
                Self(envelope)
            }

            pub fn envelope(&self) -> EnvelopeRef<'a> {
                self.0
            }

            pub fn header(&self) -> &'a Segment {
                self.0.header()
            }

            pub fn trailer(&self) -> &'a Segment {
                self.0.trailer()
            }

            /// Segments directly in the body.
            pub fn segments(&self) -> impl Iterator<Item = &'a Segment> + 'a {
                self.0.segments()
            }
        }
    };
}

envelope_view!(
    /// The ISA/IEA envelope.
    Interchange
);
envelope_view!(
    /// A GS/GE functional group.
    Group
);
envelope_view!(
    /// An ST/SE transaction set.
    TransactionSet
);
envelope_view!(
    /// A hierarchical loop opened by an HL segment.
    Loop
);

impl<'a> Interchange<'a> {
    /// ISA13.
    pub fn control_number(&self) -> &'a str {
        self.header().value("ISA13")
    }

    /// ISA06 without its padding.
    pub fn sender(&self) -> &'a str {
        self.header().value("ISA06").trim()
    }

    /// ISA08 without its padding.
    pub fn receiver(&self) -> &'a str {
        self.header().value("ISA08").trim()
    }

    pub fn groups(&self) -> impl Iterator<Item = Group<'a>> + 'a {
        self.0.children_of(EnvelopeKind::Group).map(Group)
    }

    /// Transaction sets that arrived outside any functional group.
    pub fn ungrouped_transaction_sets(&self) -> impl Iterator<Item = TransactionSet<'a>> + 'a {
        self.0
            .children_of(EnvelopeKind::TransactionSet)
            .map(TransactionSet)
    }
}

impl<'a> Group<'a> {
    /// GS01.
    pub fn functional_id(&self) -> &'a str {
        self.header().value("GS01")
    }

    /// GS06.
    pub fn control_number(&self) -> &'a str {
        self.header().value("GS06")
    }

    /// GS08.
    pub fn version(&self) -> &'a str {
        self.header().value("GS08")
    }

    pub fn transaction_sets(&self) -> impl Iterator<Item = TransactionSet<'a>> + 'a {
        self.0
            .children_of(EnvelopeKind::TransactionSet)
            .map(TransactionSet)
    }
}

impl<'a> TransactionSet<'a> {
    /// ST01, e.g. `271`.
    pub fn identifier(&self) -> &'a str {
        self.header().value("ST01")
    }

    /// ST02.
    pub fn control_number(&self) -> &'a str {
        self.header().value("ST02")
    }

    pub fn revision(&self) -> Option<&'static Revision> {
        self.0.revision()
    }

    /// The BHT segment, when the transaction set has one.
    pub fn beginning_segment(&self) -> Option<&'a Segment> {
        self.segments().find(|s| s.identifier() == "BHT")
    }

    /// Top-level loops.
    pub fn loops(&self) -> impl Iterator<Item = Loop<'a>> + 'a {
        self.0.children_of(EnvelopeKind::Loop).map(Loop)
    }

    /// Every loop depth-first with its depth (0 = top level).
    pub fn hierarchy(&self) -> Vec<(usize, Loop<'a>)> {
        let mut out = Vec::new();
        let mut stack: Vec<(usize, Loop<'a>)> = self.loops().map(|l| (0, l)).collect();
        stack.reverse();
        while let Some((depth, lp)) = stack.pop() {
            let children: Vec<_> = lp.loops().collect();
            stack.extend(children.into_iter().rev().map(|c| (depth + 1, c)));
            out.push((depth, lp));
        }
        out
    }
}

impl<'a> Loop<'a> {
    pub fn role(&self) -> Option<&'static str> {
        self.0.role()
    }

    /// The HL segment that opened the loop.
    pub fn hierarchical_level(&self) -> &'a Segment {
        self.header()
    }

    /// HL01.
    pub fn level_id(&self) -> &'a str {
        self.header().value("HL01")
    }

    /// HL02; empty for top-level loops.
    pub fn parent_id(&self) -> &'a str {
        self.header().value("HL02")
    }

    /// HL03.
    pub fn level_code(&self) -> &'a str {
        self.header().value("HL03")
    }

    /// The first NM1 segment.
    pub fn name(&self) -> Option<&'a Segment> {
        self.segments().find(|s| s.identifier() == "NM1")
    }

    /// AAA segments in arrival order.
    pub fn request_validations(&self) -> impl Iterator<Item = &'a Segment> + 'a {
        self.segments().filter(|s| s.identifier() == "AAA")
    }

    /// Nested loops.
    pub fn loops(&self) -> impl Iterator<Item = Loop<'a>> + 'a {
        self.0.children_of(EnvelopeKind::Loop).map(Loop)
    }
}
