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

//! Document delimiters and version.

/// Delimiters and version of an X12 document.
///
/// The parser derives one of these from the interchange header of every
/// document. A different configuration can be handed to
/// [`Document::format_as_edi`](crate::Document::format_as_edi) to re-emit the
/// same tree with other delimiters.
///
/// # Examples
///
/// ```
/// use x12_core::DocumentConfiguration;
///
/// let config = DocumentConfiguration::default()
///     .with_element_separator('|')
///     .with_segment_terminator('\n');
/// assert_eq!(config.element_separator, '|');
/// assert_eq!(config.sub_element_separator, '>');
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DocumentConfiguration {
    /// Interchange control version (ISA12), e.g. `00501`.
    pub version: String,
    /// Separates elements within a segment.
    pub element_separator: char,
    /// Ends every segment.
    pub segment_terminator: char,
    /// Separates components within a composite element (ISA16).
    pub sub_element_separator: char,
}

impl Default for DocumentConfiguration {
    fn default() -> Self {
        Self {
            version: "00501".to_string(),
            element_separator: '*',
            segment_terminator: '~',
            sub_element_separator: '>',
        }
    }
}

impl DocumentConfiguration {
    pub fn new(
        version: impl Into<String>,
        element_separator: char,
        segment_terminator: char,
        sub_element_separator: char,
    ) -> Self {
        Self {
            version: version.into(),
            element_separator,
            segment_terminator,
            sub_element_separator,
        }
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn with_element_separator(mut self, separator: char) -> Self {
        self.element_separator = separator;
        self
    }

    pub fn with_segment_terminator(mut self, terminator: char) -> Self {
        self.segment_terminator = terminator;
        self
    }

    pub fn with_sub_element_separator(mut self, separator: char) -> Self {
        self.sub_element_separator = separator;
        self
    }
}
