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

//! Fatal parse errors.
//!
//! Everything in here aborts [`parse`](crate::parse). Content problems found
//! after a successful parse are [`Violation`](crate::Violation)s instead and
//! never travel through `Result`.

use std::fmt;
use thiserror::Error;

/// The kind of fatal error that stopped parsing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum X12ErrorKind {
    /// Input does not start with the interchange header identifier.
    InvalidFileType,
    /// The interchange header has no segment terminator after ISA16.
    SegmentTerminatorNotFound,
    /// A configured resource limit was exceeded.
    Security,
}

impl fmt::Display for X12ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidFileType => write!(f, "InvalidFileTypeError"),
            Self::SegmentTerminatorNotFound => write!(f, "SegmentTerminatorNotFoundError"),
            Self::Security => write!(f, "SecurityError"),
        }
    }
}

/// An error that occurred while parsing an X12 document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{kind}: {message}")]
pub struct X12Error {
    /// The kind of error.
    pub kind: X12ErrorKind,
    /// Human-readable error message.
    pub message: String,
    /// The offending piece of input, when there is one.
    pub snippet: Option<String>,
    /// What the parser expected to find.
    pub expected: Option<String>,
    /// What the parser actually found.
    pub found: Option<String>,
}

impl X12Error {
    /// Create a new error.
    pub fn new(kind: X12ErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            snippet: None,
            expected: None,
            found: None,
        }
    }

    /// Attach the offending input.
    pub fn with_snippet(mut self, snippet: impl Into<String>) -> Self {
        self.snippet = Some(snippet.into());
        self
    }

    /// Attach the expected and found descriptions.
    pub fn with_expectation(mut self, expected: impl Into<String>, found: impl Into<String>) -> Self {
        self.expected = Some(expected.into());
        self.found = Some(found.into());
        self
    }

    /// The input does not begin with the interchange header identifier.
    pub fn invalid_file_type(expected: &str, found: &str) -> Self {
        let message = format!(
            "Expected Element Envelope: {} but found Element Envelope: {}. \
             The length of the expected segment is: {} the length of the segment found was: {}",
            expected,
            found,
            expected.chars().count(),
            found.chars().count()
        );
        Self::new(X12ErrorKind::InvalidFileType, message)
            .with_snippet(found)
            .with_expectation(expected, found)
    }

    /// ISA16 does not carry a second character to use as segment terminator.
    pub fn segment_terminator_not_found(isa16: &str) -> Self {
        Self::new(
            X12ErrorKind::SegmentTerminatorNotFound,
            "The segment terminator is not present in the Interchange Header, can't parse file.",
        )
        .with_snippet(isa16)
        .with_expectation(
            "a sub-element separator followed by a segment terminator",
            format!("'{}'", isa16),
        )
    }

    pub fn security(message: impl Into<String>) -> Self {
        Self::new(X12ErrorKind::Security, message)
    }
}

/// Result type for X12 parsing.
pub type X12Result<T> = Result<T, X12Error>;
