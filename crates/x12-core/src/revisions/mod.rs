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

//! Transaction-set revisions.
//!
//! A [`Revision`] names the implementation guide a transaction set follows
//! and carries the extra segment schemas it defines, how each of them is
//! routed, and the role names of its hierarchical levels. Transaction sets
//! without a matching revision are parsed generically.

pub mod x279a1;

use crate::schema::SegmentSchema;

pub use x279a1::X279A1;

/// Where a revision-defined segment goes once parsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentHandler {
    /// Appended to the transaction-set body, e.g. `BHT`.
    TransactionBody,
    /// Opens a loop in the level hierarchy, e.g. `HL`.
    HierarchicalLevel,
    /// Appended to the innermost open loop, e.g. `NM1`.
    LoopSegment,
}

/// A segment schema and its routing within a revision.
#[derive(Debug, PartialEq, Eq)]
pub struct SegmentRule {
    pub schema: &'static SegmentSchema,
    pub handler: SegmentHandler,
}

/// One implementation guide.
#[derive(Debug, PartialEq, Eq)]
pub struct Revision {
    /// Implementation convention reference, e.g. `005010X279A1`.
    pub name: &'static str,
    pub description: &'static str,
    /// Transaction set identifiers (ST01) the revision applies to.
    pub transaction_sets: &'static [&'static str],
    /// Loop role names by hierarchy depth, outermost first.
    pub hierarchy: &'static [&'static str],
    pub segments: &'static [SegmentRule],
}

impl Revision {
    /// Routing rule for a segment identifier.
    pub fn rule(&self, id: &str) -> Option<&'static SegmentRule> {
        self.segments.iter().find(|r| r.schema.id == id)
    }

    /// Role of a loop opened at `depth` (0 = top level).
    ///
    /// Levels deeper than the declared hierarchy reuse the last role.
    pub fn role(&self, depth: usize) -> Option<&'static str> {
        self.hierarchy
            .get(depth)
            .or_else(|| self.hierarchy.last())
            .copied()
    }

    pub fn applies_to(&self, transaction_set: &str) -> bool {
        self.transaction_sets.iter().any(|t| *t == transaction_set)
    }
}

/// Every built-in revision.
pub static REVISIONS: &[&Revision] = &[&X279A1];

/// Look up a built-in revision by name.
pub fn find(name: &str) -> Option<&'static Revision> {
    REVISIONS.iter().copied().find(|r| r.name == name)
}

/// Pick the revision for a transaction set.
///
/// `transaction_set` is ST01; `reference` is ST03, or GS08 when the
/// transaction set header carries no reference.
pub fn select(transaction_set: &str, reference: &str) -> Option<&'static Revision> {
    let reference = reference.trim();
    REVISIONS
        .iter()
        .copied()
        .find(|r| r.name == reference && r.applies_to(transaction_set))
}
