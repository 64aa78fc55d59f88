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

//! Parse → format → parse round trips.

use x12_core::{parse, DocumentConfiguration, WriteOptions};
use x12_test::fixtures;
use x12_test::{control_numbers, segment_ids};

#[test]
fn test_round_trip_preserves_structure() {
    for (name, text) in fixtures::all() {
        let doc = parse(text).unwrap();
        let edi = doc.to_edi();
        assert!(!edi.is_empty(), "{}", name);

        let reparsed = parse(&edi).unwrap();
        assert_eq!(control_numbers(&reparsed), control_numbers(&doc), "{}", name);
        assert_eq!(segment_ids(&reparsed), segment_ids(&doc), "{}", name);
        assert_eq!(
            reparsed.validate().is_valid(),
            doc.validate().is_valid(),
            "{}",
            name
        );
    }
}

#[test]
fn test_formatting_is_idempotent() {
    for (name, text) in fixtures::all() {
        let once = parse(text).unwrap().to_edi();
        let twice = parse(&once).unwrap().to_edi();
        assert_eq!(once, twice, "{}", name);
    }
}

#[test]
fn test_purchase_order_is_reproduced_exactly() {
    let doc = parse(fixtures::purchase_order()).unwrap();
    assert_eq!(doc.to_edi(), fixtures::PURCHASE_ORDER);
}

#[test]
fn test_trailing_empty_optionals_are_elided() {
    let doc = parse(fixtures::eligibility_response()).unwrap();
    let edi = doc.to_edi();
    assert!(edi.contains("NM1*IL*1*SMITH*JOHN****MI*123456789**~"), "{}", edi);
    assert!(edi.contains("ST*271*0001*005010X279A1~"));
    assert!(edi.contains("HL*1**20*1~"));
}

#[test]
fn test_format_with_injected_delimiters() {
    let doc = parse(fixtures::purchase_order()).unwrap();
    let config = DocumentConfiguration::new("00501", '|', '\n', '^');
    let edi = doc.format_as_edi(&config);
    assert!(edi.starts_with("ISA|00|"));
    assert!(edi.contains("|000000905|1|T|^\nGS|PO|"));

    let reparsed = parse(&edi.replace('\n', "'")).unwrap();
    assert_eq!(control_numbers(&reparsed), control_numbers(&doc));
}

#[test]
fn test_sub_element_separator_is_translated() {
    let doc = parse(fixtures::multi_group()).unwrap();
    let edi = doc.format_as_edi(&DocumentConfiguration::default().with_sub_element_separator(':'));
    assert!(edi.contains("PO1*1*10*EA*2.50**VP*WIDGET:BLUE~"), "{}", edi);
    assert!(edi.contains("*0*T*:~GS*IN*"));

    let reparsed = parse(&edi).unwrap();
    assert_eq!(reparsed.config().sub_element_separator, ':');
    assert!(reparsed.validate().is_valid());
}

#[test]
fn test_line_break_output_reparses() {
    let doc = parse(fixtures::eligibility_inquiry()).unwrap();
    let edi = doc.format_with(doc.config(), &WriteOptions::default().with_line_breaks(true));
    assert_eq!(edi.lines().count(), doc.segment_count());

    let reparsed = parse(&edi).unwrap();
    assert_eq!(segment_ids(&reparsed), segment_ids(&doc));
}

#[test]
fn test_empty_segment_keeps_validation_outcome() {
    let text = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000001*0*T*:~\
        GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~\
        ST*850*0001~**~SE*2*0001~GE*1*1~IEA*1*000000001~";
    let doc = parse(text).unwrap();
    assert!(doc.validate().is_valid(), "{}", doc.validate());

    let edi = doc.to_edi();
    assert!(!edi.contains("~**~"));
    let reparsed = parse(&edi).unwrap();
    assert!(reparsed.validate().is_valid(), "{}", reparsed.validate());
}
