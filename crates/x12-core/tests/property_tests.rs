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

//! Property-based tests for delimiter handling and parser robustness.

use proptest::prelude::*;
use x12_core::{parse, DocumentConfiguration, X12ErrorKind};
use x12_test::fixtures;
use x12_test::{control_numbers, segment_ids};

/// Characters that never occur in fixture content.
const DELIMITERS: &[char] = &['|', '!', '+', '{', '}', '@', '~', '\'', '`'];

fn delimiters() -> impl Strategy<Value = (char, char, char)> {
    prop::sample::subsequence(DELIMITERS.to_vec(), 3)
        .prop_shuffle()
        .prop_map(|d| (d[0], d[1], d[2]))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Property: formatting with any distinct delimiters re-parses to the same document.
    #[test]
    fn prop_delimiter_injection_round_trips(
        (element, terminator, sub_element) in delimiters(),
        index in 0_usize..5,
    ) {
        let (name, text) = fixtures::all()[index];
        let doc = parse(text).unwrap();
        let config = DocumentConfiguration::new("00501", element, terminator, sub_element);
        let edi = doc.format_as_edi(&config);

        let reparsed = parse(&edi);
        prop_assert!(reparsed.is_ok(), "{} failed to re-parse: {:?}", name, reparsed.err());
        let reparsed = reparsed.unwrap();
        prop_assert_eq!(reparsed.config().element_separator, element);
        prop_assert_eq!(reparsed.config().segment_terminator, terminator);
        prop_assert_eq!(reparsed.config().sub_element_separator, sub_element);
        prop_assert_eq!(control_numbers(&reparsed), control_numbers(&doc));
        prop_assert_eq!(segment_ids(&reparsed), segment_ids(&doc));
        prop_assert!(reparsed.validate().is_valid());
    }

    /// Property: any prefix other than ISA is rejected as the wrong file type.
    #[test]
    fn prop_wrong_prefix_is_rejected(prefix in "[A-Z]{3}", rest in "[*A-Z0-9~]{0,40}") {
        prop_assume!(prefix != "ISA");
        let err = parse(&format!("{}{}", prefix, rest)).unwrap_err();
        prop_assert_eq!(err.kind, X12ErrorKind::InvalidFileType);
        prop_assert_eq!(err.found.as_deref(), Some(prefix.as_str()));
    }

    /// Property: arbitrary input after ISA never panics.
    #[test]
    fn prop_arbitrary_interchange_never_panics(rest in "\\PC{0,200}") {
        let _ = parse(&format!("ISA{}", rest));
    }

    /// Property: the validator accepts whatever the parser builds.
    #[test]
    fn prop_validate_never_panics(body in "[A-Z0-9*~:]{0,200}") {
        let text = format!(
            "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000001*0*T*:~{}",
            body
        );
        if let Ok(doc) = parse(&text) {
            let _ = doc.validate();
            let _ = doc.to_edi();
        }
    }
}
