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

//! Input normalization before delimiter discovery.

use crate::error::{X12Error, X12Result};
use crate::limits::Limits;

/// Normalize raw input.
///
/// This handles:
/// - Size limit
/// - BOM skipping
/// - Removal of every CR and LF
/// - Trimming of surrounding whitespace
pub fn preprocess(input: &str, limits: &Limits) -> X12Result<String> {
    if input.len() > limits.max_input_size {
        return Err(X12Error::security(format!(
            "input too large: exceeds limit of {} bytes",
            limits.max_input_size
        )));
    }

    let text = input.strip_prefix('\u{FEFF}').unwrap_or(input);

    // Fast path: nothing to strip
    if !text.contains(['\r', '\n']) {
        return Ok(text.trim().to_string());
    }

    let mut out = String::with_capacity(text.len());
    out.extend(text.chars().filter(|&c| c != '\r' && c != '\n'));
    Ok(out.trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_line_breaks() {
        let out = preprocess("ISA*00~\r\nGS*HB~\nST*271~\r", &Limits::default()).unwrap();
        assert_eq!(out, "ISA*00~GS*HB~ST*271~");
    }

    #[test]
    fn test_strips_bom_and_whitespace() {
        let out = preprocess("\u{FEFF}  ISA*00~  ", &Limits::default()).unwrap();
        assert_eq!(out, "ISA*00~");
    }

    #[test]
    fn test_keeps_inner_spaces() {
        let out = preprocess("ISA*00*          *00~", &Limits::default()).unwrap();
        assert_eq!(out, "ISA*00*          *00~");
    }

    #[test]
    fn test_rejects_oversized_input() {
        let limits = Limits {
            max_input_size: 4,
            ..Limits::default()
        };
        let err = preprocess("ISA*00~", &limits).unwrap_err();
        assert_eq!(err.kind, crate::X12ErrorKind::Security);
    }
}
