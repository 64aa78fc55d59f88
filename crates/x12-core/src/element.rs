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

//! The element: a single named, length-constrained field.

use crate::report::Violation;
use crate::schema::ElementSpec;
use std::borrow::Cow;

/// Description given to elements synthesized for unknown segments.
pub const GENERIC_DESCRIPTION: &str = "A generic element created by the parser";

/// A single field of a segment.
///
/// Schema elements borrow their name and description from the static schema
/// tables; elements synthesized for unknown segments own theirs.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Element {
    pub name: Cow<'static, str>,
    pub description: Cow<'static, str>,
    pub required: bool,
    pub min_length: usize,
    pub max_length: usize,
    pub content: String,
}

impl Element {
    /// An empty element declared by `spec`.
    pub fn from_spec(spec: &ElementSpec) -> Self {
        Self {
            name: Cow::Borrowed(spec.name),
            description: Cow::Borrowed(spec.description),
            required: spec.required,
            min_length: spec.min_length,
            max_length: spec.max_length,
            content: String::new(),
        }
    }

    /// The identifier element of a schema segment.
    ///
    /// Its bounds are the identifier's own length, so an unparsed segment
    /// (empty identifier) is reported as too short.
    pub fn identifier(id: &'static str, description: &'static str) -> Self {
        let len = id.chars().count();
        Self {
            name: Cow::Borrowed(id),
            description: Cow::Borrowed(description),
            required: true,
            min_length: len,
            max_length: len,
            content: String::new(),
        }
    }

    /// An element synthesized from a token of an unknown segment.
    ///
    /// Named `GEN<index>`, never required, and bounded to exactly the length
    /// of its content so that it always validates.
    pub fn generic(index: usize, content: impl Into<String>) -> Self {
        let content = content.into();
        let len = content.chars().count();
        Self {
            name: Cow::Owned(format!("GEN{}", index)),
            description: Cow::Borrowed(GENERIC_DESCRIPTION),
            required: false,
            min_length: len,
            max_length: len,
            content,
        }
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = content.into();
        self
    }

    /// Content length in characters.
    #[inline]
    pub fn len(&self) -> usize {
        self.content.chars().count()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Components of a composite element.
    pub fn components(&self, sub_element_separator: char) -> std::str::Split<'_, char> {
        self.content.split(sub_element_separator)
    }

    /// Check the length bounds.
    ///
    /// Only elements that are required or carry content are checked.
    /// `segment` is the identifier of the enclosing segment, carried into the
    /// violation.
    pub fn validate(&self, segment: &str) -> Option<Violation> {
        if !self.required && self.content.is_empty() {
            return None;
        }
        let found = self.len();
        if found < self.min_length {
            Some(Violation::FieldTooShort {
                segment: segment.to_string(),
                field: self.name.to_string(),
                expected: self.min_length,
                found,
            })
        } else if found > self.max_length {
            Some(Violation::FieldTooLong {
                segment: segment.to_string(),
                field: self.name.to_string(),
                expected: self.max_length,
                found,
            })
        } else {
            None
        }
    }
}
