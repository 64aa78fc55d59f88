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

//! Shared test fixtures and utilities for the X12 crates.
//!
//! - **Fixtures**: complete interchanges, valid and invalid, as raw text
//! - **Builders**: a fluent [`InterchangeBuilder`](fixtures::builders::InterchangeBuilder)
//!   that computes control numbers and counts
//! - **Utilities**: helpers for comparing parsed documents
//!
//! ```rust
//! use x12_test::fixtures;
//!
//! let doc = x12_core::parse(fixtures::eligibility_response()).unwrap();
//! assert!(doc.validate().is_valid());
//!
//! for (name, text) in fixtures::all() {
//!     let doc = x12_core::parse(text).unwrap();
//!     assert!(doc.validate().is_valid(), "{} should be valid", name);
//! }
//! ```

pub mod fixtures;

use x12_core::traverse::{traverse, DocumentVisitor, SegmentPosition, VisitorContext};
use x12_core::{Document, Segment};

/// Type alias for a list of fixtures (name, text).
pub type FixtureList = Vec<(&'static str, &'static str)>;

/// Identifiers of every non-empty segment in document order.
pub fn segment_ids(doc: &Document) -> Vec<String> {
    struct Collect(Vec<String>);

    impl DocumentVisitor for Collect {
        type Error = std::convert::Infallible;

        fn visit_segment(
            &mut self,
            segment: &Segment,
            _position: SegmentPosition,
            _ctx: &VisitorContext,
        ) -> Result<(), Self::Error> {
            if !segment.is_empty() {
                self.0.push(segment.identifier().to_string());
            }
            Ok(())
        }
    }

    let mut collect = Collect(Vec::new());
    match traverse(doc, &mut collect) {
        Ok(()) => collect.0,
        Err(never) => match never {},
    }
}

/// Control numbers of every envelope: interchange, groups, transaction sets.
pub fn control_numbers(doc: &Document) -> Vec<String> {
    let interchange = doc.interchange();
    let mut out = vec![interchange.control_number().to_string()];
    for group in interchange.groups() {
        out.push(group.control_number().to_string());
        for ts in group.transaction_sets() {
            out.push(ts.control_number().to_string());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_segment_ids() {
        let doc = x12_core::parse(fixtures::purchase_order()).unwrap();
        assert_eq!(
            segment_ids(&doc),
            vec!["ISA", "GS", "ST", "BEG", "REF", "PO1", "CTT", "SE", "GE", "IEA"]
        );
    }

    #[test]
    fn test_control_numbers() {
        let doc = x12_core::parse(fixtures::purchase_order()).unwrap();
        assert_eq!(control_numbers(&doc), vec!["000000905", "1421", "000000010"]);
    }
}
