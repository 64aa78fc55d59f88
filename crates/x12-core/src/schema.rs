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

//! Declarative segment schemas.
//!
//! A [`SegmentSchema`] lists the elements of one segment type in order, each
//! with its required flag and length bounds. [`Segment::from_schema`] turns a
//! schema into a segment with empty contents; the parser then assigns tokens
//! positionally.
//!
//! The envelope segments (ISA/IEA, GS/GE, ST/SE) live here. Segments that
//! only exist inside particular transaction sets are declared next to their
//! [`Revision`](crate::revisions::Revision).
//!
//! [`Segment::from_schema`]: crate::Segment::from_schema

/// Declaration of one element inside a segment schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ElementSpec {
    /// Element reference designator, e.g. `GS06`.
    pub name: &'static str,
    pub description: &'static str,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
}

impl ElementSpec {
    pub const fn required(
        name: &'static str,
        description: &'static str,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            name,
            description,
            required: true,
            min_length,
            max_length,
        }
    }

    pub const fn optional(
        name: &'static str,
        description: &'static str,
        min_length: usize,
        max_length: usize,
    ) -> Self {
        Self {
            name,
            description,
            required: false,
            min_length,
            max_length,
        }
    }
}

/// Declaration of a segment type: its identifier plus its ordered elements.
#[derive(Debug, PartialEq, Eq)]
pub struct SegmentSchema {
    /// Segment identifier, e.g. `ISA`.
    pub id: &'static str,
    /// Description of the identifier element.
    pub description: &'static str,
    /// Elements after the identifier, in position order.
    pub elements: &'static [ElementSpec],
}

impl SegmentSchema {
    /// Declared arity, not counting the identifier.
    pub fn field_count(&self) -> usize {
        self.elements.len()
    }

    /// Look up an element declaration by name.
    pub fn element(&self, name: &str) -> Option<&'static ElementSpec> {
        self.elements.iter().find(|e| e.name == name)
    }

    /// Position of an element within a segment built from this schema.
    ///
    /// Position 0 is the identifier, so the first declared element is 1.
    pub fn position(&self, name: &str) -> Option<usize> {
        self.elements
            .iter()
            .position(|e| e.name == name)
            .map(|i| i + 1)
    }
}

pub static INTERCHANGE_HEADER: SegmentSchema = SegmentSchema {
    id: "ISA",
    description: "Interchange Control Header Code",
    elements: &[
        ElementSpec::required("ISA01", "Authorization Information Qualifier", 2, 2),
        ElementSpec::required("ISA02", "Authorization Information", 10, 10),
        ElementSpec::required("ISA03", "Security Information Qualifier", 2, 2),
        ElementSpec::required("ISA04", "Security Information", 10, 10),
        ElementSpec::required("ISA05", "Interchange ID Qualifier", 2, 2),
        ElementSpec::required("ISA06", "Interchange Sender ID", 15, 15),
        ElementSpec::required("ISA07", "Interchange ID Qualifier", 2, 2),
        ElementSpec::required("ISA08", "Interchange Receiver ID", 15, 15),
        ElementSpec::required("ISA09", "Interchange Date", 6, 6),
        ElementSpec::required("ISA10", "Interchange Time", 4, 4),
        ElementSpec::required("ISA11", "Repetition Separator", 1, 1),
        ElementSpec::required("ISA12", "Interchange Control Version Number", 5, 5),
        ElementSpec::required("ISA13", "Interchange Control Number", 9, 9),
        ElementSpec::required("ISA14", "Acknowledgement Requested", 1, 1),
        ElementSpec::required("ISA15", "Interchange Usage Indicator", 1, 1),
        ElementSpec::required("ISA16", "Component Element Separator", 1, 1),
    ],
};

pub static INTERCHANGE_TRAILER: SegmentSchema = SegmentSchema {
    id: "IEA",
    description: "Interchange Control Trailer Code",
    elements: &[
        ElementSpec::required("IEA01", "Number of Included Functional Groups", 1, 5),
        ElementSpec::required("IEA02", "Interchange Control Number", 1, 9),
    ],
};

pub static GROUP_HEADER: SegmentSchema = SegmentSchema {
    id: "GS",
    description: "Functional Group Header Code",
    elements: &[
        ElementSpec::required("GS01", "Functional Identifier Code", 2, 2),
        ElementSpec::required("GS02", "Application Senders Code", 2, 15),
        ElementSpec::required("GS03", "Application Receiver Code", 2, 15),
        ElementSpec::required("GS04", "Group Date", 8, 8),
        ElementSpec::required("GS05", "Group Time", 4, 4),
        ElementSpec::required("GS06", "Group Control Number", 1, 9),
        ElementSpec::required("GS07", "Responsible Agency Code", 1, 2),
        ElementSpec::required("GS08", "Version Indicator ID Code", 1, 12),
    ],
};

pub static GROUP_TRAILER: SegmentSchema = SegmentSchema {
    id: "GE",
    description: "Functional Group Trailer Identifier",
    elements: &[
        ElementSpec::required("GE01", "Number of Transaction Sets", 1, 6),
        ElementSpec::required("GE02", "Group Control Number", 1, 9),
    ],
};

pub static TRANSACTION_SET_HEADER: SegmentSchema = SegmentSchema {
    id: "ST",
    description: "Transaction Set Header",
    elements: &[
        ElementSpec::required("ST01", "Transaction Set Identifier Code", 3, 3),
        ElementSpec::required("ST02", "Transaction Set Control Number", 4, 9),
        ElementSpec::optional("ST03", "Implementation Convention Reference", 1, 35),
    ],
};

pub static TRANSACTION_SET_TRAILER: SegmentSchema = SegmentSchema {
    id: "SE",
    description: "Transaction Set Trailer",
    elements: &[
        ElementSpec::required("SE01", "Number of Included Segments", 1, 6),
        ElementSpec::required("SE02", "Transaction Set Control Number", 4, 9),
    ],
};
