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

//! Envelopes: header/body/trailer containers.
//!
//! Interchange, functional group, transaction set and hierarchical loop are
//! all one [`Envelope`] structure tagged by [`EnvelopeKind`]. Envelopes live
//! in an arena owned by the [`Document`](crate::Document) and refer to their
//! children by [`EnvelopeId`].

use crate::revisions::Revision;
use crate::schema::{self, SegmentSchema};
use crate::segment::Segment;
use std::fmt;

/// Index of an envelope in its document's arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EnvelopeId(usize);

impl EnvelopeId {
    /// The interchange is always the first envelope.
    pub const INTERCHANGE: EnvelopeId = EnvelopeId(0);

    pub(crate) fn new(index: usize) -> Self {
        Self(index)
    }

    pub fn index(self) -> usize {
        self.0
    }
}

/// What an envelope represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EnvelopeKind {
    /// ISA/IEA.
    Interchange,
    /// GS/GE.
    Group,
    /// ST/SE.
    TransactionSet,
    /// HL-opened hierarchical loop; no trailer segment.
    Loop,
}

impl EnvelopeKind {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Interchange => "interchange",
            Self::Group => "group",
            Self::TransactionSet => "transaction_set",
            Self::Loop => "loop",
        }
    }

    /// Key under which exporters list the body of this kind.
    pub fn children_key(self) -> &'static str {
        match self {
            Self::Interchange => "groups",
            Self::Group => "transaction_sets",
            Self::TransactionSet => "body",
            Self::Loop => "loop_body",
        }
    }

    pub fn header_schema(self) -> Option<&'static SegmentSchema> {
        match self {
            Self::Interchange => Some(&schema::INTERCHANGE_HEADER),
            Self::Group => Some(&schema::GROUP_HEADER),
            Self::TransactionSet => Some(&schema::TRANSACTION_SET_HEADER),
            Self::Loop => None,
        }
    }

    pub fn trailer_schema(self) -> Option<&'static SegmentSchema> {
        match self {
            Self::Interchange => Some(&schema::INTERCHANGE_TRAILER),
            Self::Group => Some(&schema::GROUP_TRAILER),
            Self::TransactionSet => Some(&schema::TRANSACTION_SET_TRAILER),
            Self::Loop => None,
        }
    }
}

impl fmt::Display for EnvelopeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An entry of an envelope body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Segment(Segment),
    Envelope(EnvelopeId),
}

/// Header, ordered body, trailer.
///
/// Header and trailer always exist. Until the parser assigns them they are
/// empty segments built from the kind's schemas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Envelope {
    pub kind: EnvelopeKind,
    /// Loop role within the active revision's hierarchy, e.g. `subscriber`.
    pub role: Option<&'static str>,
    /// Revision governing a transaction set, inherited by its loops.
    pub revision: Option<&'static Revision>,
    pub header: Segment,
    pub trailer: Segment,
    pub body: Vec<Node>,
}

impl Envelope {
    /// An envelope of `kind` with default header and trailer.
    pub fn new(kind: EnvelopeKind) -> Self {
        Self {
            kind,
            role: None,
            revision: None,
            header: kind.header_schema().map_or_else(Segment::empty, Segment::from_schema),
            trailer: kind.trailer_schema().map_or_else(Segment::empty, Segment::from_schema),
            body: Vec::new(),
        }
    }

    pub fn with_header(mut self, header: Segment) -> Self {
        self.header = header;
        self
    }

    /// Segments placed directly in the body.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.body.iter().filter_map(|node| match node {
            Node::Segment(segment) => Some(segment),
            Node::Envelope(_) => None,
        })
    }

    /// Envelopes placed directly in the body.
    pub fn children(&self) -> impl Iterator<Item = EnvelopeId> + '_ {
        self.body.iter().filter_map(|node| match node {
            Node::Envelope(id) => Some(*id),
            Node::Segment(_) => None,
        })
    }
}
