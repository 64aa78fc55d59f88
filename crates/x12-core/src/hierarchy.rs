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

//! Reconstruction of nested loops from HL segments.
//!
//! HL segments arrive flat, each carrying its own id (HL01) and the id of
//! its parent (HL02). The builder keeps the chain of currently open levels
//! as a stack of `(HL01, EnvelopeId)` and decides where each new level goes:
//!
//! - HL02 empty or `0`: a new top-level loop; the stack is reset.
//! - HL02 names an open level: levels above it are closed and the new loop
//!   becomes its child.
//! - HL02 names nothing open: the loop is placed at top level so no data is
//!   lost, and validation later reports the broken parent reference.

use crate::envelope::EnvelopeId;
use crate::error::{X12Error, X12Result};
use tracing::debug;

/// Where a new hierarchical level is to be attached.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Directly in the transaction-set body.
    TopLevel,
    /// Top level because HL02 referenced no open level.
    Orphan,
    /// In the body of an open loop.
    Child(EnvelopeId),
}

impl Placement {
    pub fn parent(self) -> Option<EnvelopeId> {
        match self {
            Self::Child(id) => Some(id),
            Self::TopLevel | Self::Orphan => None,
        }
    }
}

/// Stack of open hierarchical levels within one transaction set.
#[derive(Debug, Clone)]
pub struct HierarchyBuilder {
    stack: Vec<(String, EnvelopeId)>,
    max_depth: usize,
}

impl HierarchyBuilder {
    pub fn new(max_depth: usize) -> Self {
        Self {
            stack: Vec::new(),
            max_depth,
        }
    }

    /// Close every open level.
    pub fn reset(&mut self) {
        self.stack.clear();
    }

    /// Innermost open loop.
    pub fn current(&self) -> Option<EnvelopeId> {
        self.stack.last().map(|(_, id)| *id)
    }

    /// Number of open levels.
    pub fn depth(&self) -> usize {
        self.stack.len()
    }

    /// Decide where a level with parent `parent_id` goes.
    ///
    /// Closes the levels the new one is not nested in and returns the
    /// placement together with the depth of the new level (0 = top level).
    /// Call [`open`](Self::open) with the new loop's id afterwards.
    ///
    /// # Errors
    ///
    /// `Security` when the new level would exceed the depth limit.
    pub fn place(&mut self, parent_id: &str) -> X12Result<(Placement, usize)> {
        let parent_id = parent_id.trim();
        if is_root(parent_id) {
            self.stack.clear();
            return Ok((Placement::TopLevel, 0));
        }

        match self.stack.iter().rposition(|(id, _)| same_level(id, parent_id)) {
            Some(index) => {
                self.stack.truncate(index + 1);
                let depth = self.stack.len();
                if depth >= self.max_depth {
                    return Err(X12Error::security(format!(
                        "hierarchy too deep: exceeds limit of {} levels",
                        self.max_depth
                    )));
                }
                Ok((Placement::Child(self.stack[index].1), depth))
            }
            None => {
                debug!("Hierarchical parent {} is not an open level, placing at top level", parent_id);
                self.stack.clear();
                Ok((Placement::Orphan, 0))
            }
        }
    }

    /// Record the loop opened for level `level_id`.
    pub fn open(&mut self, level_id: &str, loop_id: EnvelopeId) {
        self.stack.push((level_id.trim().to_string(), loop_id));
    }
}

/// `true` when HL02 marks a top-level loop.
pub fn is_root(parent_id: &str) -> bool {
    let parent_id = parent_id.trim();
    parent_id.is_empty() || parent_id.parse::<u64>().map_or(false, |n| n == 0)
}

/// Compare two hierarchical ids, numerically when both are numbers.
pub fn same_level(a: &str, b: &str) -> bool {
    let (a, b) = (a.trim(), b.trim());
    match (a.parse::<u64>(), b.parse::<u64>()) {
        (Ok(x), Ok(y)) => x == y,
        _ => a == b,
    }
}
