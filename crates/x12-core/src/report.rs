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

//! Validation report and violation types.

use std::fmt;

/// Broad category of a [`Violation`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ViolationCategory {
    /// Element content length outside its declared bounds.
    FieldValidation,
    /// Header and trailer control numbers disagree.
    IdMismatch,
    /// A declared count disagrees with the parsed count.
    SegmentCount,
    /// A hierarchical level does not reference its parent level.
    Hierarchy,
}

impl fmt::Display for ViolationCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::FieldValidation => write!(f, "FieldValidationError"),
            Self::IdMismatch => write!(f, "IDMismatchError"),
            Self::SegmentCount => write!(f, "SegmentCountError"),
            Self::Hierarchy => write!(f, "HierarchyError"),
        }
    }
}

/// A single non-fatal problem found by validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    FieldTooShort {
        /// Identifier of the segment holding the element.
        segment: String,
        /// Element name, e.g. `ISA06`.
        field: String,
        expected: usize,
        found: usize,
    },
    FieldTooLong {
        segment: String,
        field: String,
        expected: usize,
        found: usize,
    },
    IdMismatch {
        /// Identifier of the envelope header, e.g. `ST`.
        segment: String,
        header_field: String,
        header_description: String,
        header_value: String,
        trailer_field: String,
        trailer_description: String,
        trailer_value: String,
    },
    SegmentCount {
        /// Identifier of the envelope trailer, e.g. `GE`.
        segment: String,
        field: String,
        description: String,
        /// Raw declared value; not necessarily numeric.
        declared: String,
        actual: usize,
    },
    HierarchyMismatch {
        /// HL01 of the offending level.
        level: String,
        /// HL02 as found.
        parent: String,
        /// HL01 of the enclosing level, empty at top level.
        expected_parent: String,
    },
}

impl Violation {
    pub fn category(&self) -> ViolationCategory {
        match self {
            Self::FieldTooShort { .. } | Self::FieldTooLong { .. } => {
                ViolationCategory::FieldValidation
            }
            Self::IdMismatch { .. } => ViolationCategory::IdMismatch,
            Self::SegmentCount { .. } => ViolationCategory::SegmentCount,
            Self::HierarchyMismatch { .. } => ViolationCategory::Hierarchy,
        }
    }

    /// Identifier of the segment the violation refers to.
    pub fn segment(&self) -> &str {
        match self {
            Self::FieldTooShort { segment, .. }
            | Self::FieldTooLong { segment, .. }
            | Self::IdMismatch { segment, .. }
            | Self::SegmentCount { segment, .. } => segment,
            Self::HierarchyMismatch { .. } => "HL",
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] ", self.category())?;
        match self {
            Self::FieldTooShort { field, expected, found, .. } => write!(
                f,
                "Field {} is too short. Found {} characters, expected {} characters.",
                field, found, expected
            ),
            Self::FieldTooLong { field, expected, found, .. } => write!(
                f,
                "Field {} is too long. Found {} characters, expected {} characters.",
                field, found, expected
            ),
            Self::IdMismatch {
                header_field,
                header_description,
                header_value,
                trailer_field,
                trailer_description,
                trailer_value,
                ..
            } => write!(
                f,
                "The {} in {} ({}) does not match {} in {} ({})",
                header_description,
                header_field,
                header_value,
                trailer_description,
                trailer_field,
                trailer_value
            ),
            Self::SegmentCount { field, description, declared, actual, .. } => write!(
                f,
                "The {} in {} value of {} does not match the parsed count of {}",
                description, field, declared, actual
            ),
            Self::HierarchyMismatch { level, parent, expected_parent } => {
                if expected_parent.is_empty() {
                    write!(
                        f,
                        "Hierarchical level {} names parent {} which is not an open level",
                        level, parent
                    )
                } else {
                    write!(
                        f,
                        "Hierarchical level {} names parent {} but is nested under {}",
                        level, parent, expected_parent
                    )
                }
            }
        }
    }
}

/// Ordered, append-only collection of violations from one validation pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    violations: Vec<Violation>,
}

impl ValidationReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, violation: Violation) {
        self.violations.push(violation);
    }

    /// `true` when no violation was recorded.
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn len(&self) -> usize {
        self.violations.len()
    }

    pub fn is_empty(&self) -> bool {
        self.violations.is_empty()
    }

    pub fn violations(&self) -> &[Violation] {
        &self.violations
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.violations.iter()
    }

    /// Violations of one category, in report order.
    pub fn of_category(&self, category: ViolationCategory) -> impl Iterator<Item = &Violation> {
        self.violations
            .iter()
            .filter(move |v| v.category() == category)
    }

    pub fn into_violations(self) -> Vec<Violation> {
        self.violations
    }
}

impl<'a> IntoIterator for &'a ValidationReport {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.violations.iter()
    }
}

impl fmt::Display for ValidationReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_valid() {
            return write!(f, "document is valid");
        }
        for (i, violation) in self.violations.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", violation)?;
        }
        Ok(())
    }
}
