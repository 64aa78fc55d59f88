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

//! XML export of every fixture.

use quick_xml::events::Event;
use quick_xml::Reader;
use x12_xml::{to_xml, ToXmlConfig};
use x12_test::fixtures;

fn segment_ids(xml: &str) -> Vec<String> {
    let mut reader = Reader::from_str(xml);
    let mut ids = Vec::new();
    loop {
        match reader.read_event().unwrap() {
            Event::Start(e) if e.name().as_ref() == b"segment" => {
                let id = e
                    .try_get_attribute("id")
                    .unwrap()
                    .map(|a| String::from_utf8(a.value.into_owned()).unwrap())
                    .unwrap_or_default();
                if !id.is_empty() {
                    ids.push(id);
                }
            }
            Event::Eof => break,
            _ => {}
        }
    }
    ids
}

#[test]
fn test_every_fixture_exports_well_formed_xml() {
    for (name, text) in fixtures::all() {
        let doc = x12_core::parse(text).unwrap();
        let xml = to_xml(&doc, &ToXmlConfig::default()).unwrap();
        assert_eq!(segment_ids(&xml), x12_test::segment_ids(&doc), "{}", name);
    }
}
