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

//! Resource limits for X12 parsing.

/// Configurable limits for parser security.
///
/// These bound the resources a single document may consume. Exceeding any of
/// them aborts the parse with a [`Security`](crate::X12ErrorKind::Security) error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Limits {
    /// Maximum input size in bytes (default: 100MB).
    pub max_input_size: usize,
    /// Maximum number of segments in one document (default: 10M).
    pub max_segments: usize,
    /// Maximum nesting depth of hierarchical loops (default: 64).
    pub max_hierarchy_depth: usize,
}

impl Default for Limits {
    fn default() -> Self {
        Self {
            max_input_size: 100 * 1024 * 1024, // 100MB
            max_segments: 10_000_000,
            max_hierarchy_depth: 64,
        }
    }
}

impl Limits {
    /// Create limits with no restrictions (for testing).
    pub fn unlimited() -> Self {
        Self {
            max_input_size: usize::MAX,
            max_segments: usize::MAX,
            max_hierarchy_depth: usize::MAX,
        }
    }
}
