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

//! Delimiter discovery and tokenization.
//!
//! X12 documents declare their own delimiters inside the interchange header:
//! the element separator is the character right after `ISA`, and the two
//! characters after the sixteenth separator are the sub-element separator
//! and the segment terminator.

use crate::config::DocumentConfiguration;
use crate::error::{X12Error, X12Result};

/// Identifier every interchange must start with.
pub const INTERCHANGE_ID: &str = "ISA";

/// Index of the ISA12 (version) token in the header.
const VERSION_TOKEN: usize = 12;
/// Index of the ISA16 token, which also carries the segment terminator.
const SEPARATOR_TOKEN: usize = 16;

/// Derive the document configuration from normalized text.
///
/// # Errors
///
/// - `InvalidFileType` if the text does not begin with `ISA`.
/// - `SegmentTerminatorNotFound` if ISA16 is not followed by a terminator.
pub fn discover(text: &str) -> X12Result<DocumentConfiguration> {
    let prefix: String = text.chars().take(INTERCHANGE_ID.len()).collect();
    if prefix != INTERCHANGE_ID {
        return Err(X12Error::invalid_file_type(INTERCHANGE_ID, &prefix));
    }

    let element_separator = text
        .chars()
        .nth(INTERCHANGE_ID.len())
        .ok_or_else(|| X12Error::segment_terminator_not_found(""))?;

    let mut tokens = split(text, element_separator);
    let version = tokens.nth(VERSION_TOKEN).unwrap_or_default();
    let isa16 = tokens
        .nth(SEPARATOR_TOKEN - VERSION_TOKEN - 1)
        .unwrap_or_default();

    let mut chars = isa16.chars();
    let sub_element_separator = chars
        .next()
        .ok_or_else(|| X12Error::segment_terminator_not_found(isa16))?;
    let segment_terminator = chars
        .next()
        .ok_or_else(|| X12Error::segment_terminator_not_found(isa16))?;

    Ok(DocumentConfiguration::new(
        version,
        element_separator,
        segment_terminator,
        sub_element_separator,
    ))
}

/// Split `text` on `delimiter`, yielding every piece including empty ones.
///
/// ASCII delimiters use `memchr`; anything else falls back to `str::find`.
pub fn split(text: &str, delimiter: char) -> Tokens<'_> {
    Tokens {
        text,
        delimiter,
        pos: 0,
        done: false,
    }
}

/// Iterator returned by [`split`].
#[derive(Debug, Clone)]
pub struct Tokens<'a> {
    text: &'a str,
    delimiter: char,
    pos: usize,
    done: bool,
}

impl<'a> Tokens<'a> {
    #[inline]
    fn find_next(&self) -> Option<usize> {
        let rest = &self.text[self.pos..];
        if self.delimiter.is_ascii() {
            memchr::memchr(self.delimiter as u8, rest.as_bytes())
        } else {
            rest.find(self.delimiter)
        }
    }
}

impl<'a> Iterator for Tokens<'a> {
    type Item = &'a str;

    fn next(&mut self) -> Option<&'a str> {
        if self.done {
            return None;
        }
        match self.find_next() {
            Some(offset) => {
                let start = self.pos;
                let end = start + offset;
                self.pos = end + self.delimiter.len_utf8();
                Some(&self.text[start..end])
            }
            None => {
                self.done = true;
                Some(&self.text[self.pos..])
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::X12ErrorKind;

    const HEADER: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000905*0*T*:~GS*HB";

    // ==================== Discovery tests ====================

    #[test]
    fn test_discover_delimiters() {
        let config = discover(HEADER).unwrap();
        assert_eq!(config.element_separator, '*');
        assert_eq!(config.sub_element_separator, ':');
        assert_eq!(config.segment_terminator, '~');
        assert_eq!(config.version, "00501");
    }

    #[test]
    fn test_discover_other_delimiters() {
        let text = HEADER.replace('*', "|").replace('~', "\n").replace(':', ">");
        let config = discover(&text).unwrap();
        assert_eq!(config.element_separator, '|');
        assert_eq!(config.sub_element_separator, '>');
        assert_eq!(config.segment_terminator, '\n');
    }

    #[test]
    fn test_discover_wrong_prefix() {
        let err = discover("XYZ*00*").unwrap_err();
        assert_eq!(err.kind, X12ErrorKind::InvalidFileType);
        assert_eq!(err.found.as_deref(), Some("XYZ"));
        assert_eq!(err.expected.as_deref(), Some("ISA"));
    }

    #[test]
    fn test_discover_missing_terminator() {
        let text = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000905*0*T*:";
        let err = discover(text).unwrap_err();
        assert_eq!(err.kind, X12ErrorKind::SegmentTerminatorNotFound);
        assert_eq!(err.snippet.as_deref(), Some(":"));
    }

    #[test]
    fn test_discover_truncated_header() {
        let err = discover("ISA*00*01").unwrap_err();
        assert_eq!(err.kind, X12ErrorKind::SegmentTerminatorNotFound);
    }

    // ==================== Tokenizer tests ====================

    #[test]
    fn test_split_keeps_empty_tokens() {
        let tokens: Vec<_> = split("NM1*PR*2*ABC*****PI*1", '*').collect();
        assert_eq!(tokens, vec!["NM1", "PR", "2", "ABC", "", "", "", "", "PI", "1"]);
    }

    #[test]
    fn test_split_trailing_delimiter() {
        let tokens: Vec<_> = split("ST*271~SE*2~", '~').collect();
        assert_eq!(tokens, vec!["ST*271", "SE*2", ""]);
    }

    #[test]
    fn test_split_non_ascii_delimiter() {
        let tokens: Vec<_> = split("ST§271§0001", '§').collect();
        assert_eq!(tokens, vec!["ST", "271", "0001"]);
    }

    #[test]
    fn test_split_empty_input() {
        let tokens: Vec<_> = split("", '~').collect();
        assert_eq!(tokens, vec![""]);
    }
}
