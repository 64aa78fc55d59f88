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

//! Hierarchical loop reconstruction.

use x12_core::{parse, parse_with_options, ParseOptions, RevisionMode, Violation, X12ErrorKind};
use x12_test::fixtures::builders::{GroupBuilder, InterchangeBuilder, TransactionBuilder};

fn eligibility(levels: &[(&str, &str)]) -> String {
    let mut ts = TransactionBuilder::new("271", "0001")
        .reference("005010X279A1")
        .segment(&["BHT", "0022", "11", "REF1", "20230101", "1253"]);
    for (id, parent) in levels {
        ts = ts
            .level(id, parent, "20", true)
            .segment(&["NM1", "PR", "2", "PAYER", "", "", "", "", "PI", "12345"]);
    }
    InterchangeBuilder::new()
        .group(GroupBuilder::new("HB", "1").version("005010X279A1").transaction(ts))
        .build()
}

fn shape(text: &str) -> Vec<(usize, String)> {
    let doc = parse(text).unwrap();
    let ts = doc.interchange().groups().next().unwrap().transaction_sets().next().unwrap();
    ts.hierarchy()
        .into_iter()
        .map(|(depth, level)| (depth, level.level_id().to_string()))
        .collect()
}

#[test]
fn test_chain_builds_nested_loops() {
    let text = eligibility(&[("1", "0"), ("2", "1"), ("3", "2")]);
    assert_eq!(
        shape(&text),
        vec![(0, "1".to_string()), (1, "2".to_string()), (2, "3".to_string())]
    );
    assert!(parse(&text).unwrap().validate().is_valid());
}

#[test]
fn test_root_parent_resets_depth() {
    let text = eligibility(&[("1", "0"), ("2", "1"), ("10", "0")]);
    assert_eq!(
        shape(&text),
        vec![(0, "1".to_string()), (1, "2".to_string()), (0, "10".to_string())]
    );

    let doc = parse(&text).unwrap();
    let ts = doc.interchange().groups().next().unwrap().transaction_sets().next().unwrap();
    let roles: Vec<_> = ts.loops().map(|l| l.role()).collect();
    assert_eq!(roles, vec![Some("information_source"), Some("information_source")]);
}

#[test]
fn test_return_to_ancestor() {
    let text = eligibility(&[("1", ""), ("2", "1"), ("3", "2"), ("4", "3"), ("5", "2")]);
    assert_eq!(
        shape(&text),
        vec![
            (0, "1".to_string()),
            (1, "2".to_string()),
            (2, "3".to_string()),
            (3, "4".to_string()),
            (2, "5".to_string()),
        ]
    );
    assert!(parse(&text).unwrap().validate().is_valid());
}

#[test]
fn test_numeric_parent_comparison() {
    let text = eligibility(&[("1", ""), ("2", "01")]);
    assert_eq!(shape(&text), vec![(0, "1".to_string()), (1, "2".to_string())]);
    assert!(parse(&text).unwrap().validate().is_valid());
}

#[test]
fn test_role_clamps_to_deepest() {
    let text = eligibility(&[("1", ""), ("2", "1"), ("3", "2"), ("4", "3"), ("5", "4")]);
    let doc = parse(&text).unwrap();
    let ts = doc.interchange().groups().next().unwrap().transaction_sets().next().unwrap();
    let roles: Vec<_> = ts.hierarchy().into_iter().map(|(_, l)| l.role()).collect();
    assert_eq!(roles[3], Some("dependent"));
    assert_eq!(roles[4], Some("dependent"));
}

#[test]
fn test_loop_segments_stay_with_their_level() {
    let text = eligibility(&[("1", ""), ("2", "1")]);
    let doc = parse(&text).unwrap();
    let ts = doc.interchange().groups().next().unwrap().transaction_sets().next().unwrap();
    for (_, level) in ts.hierarchy() {
        assert_eq!(level.segments().count(), 1);
        assert_eq!(level.name().unwrap().value("NM103"), "PAYER");
    }
}

#[test]
fn test_unknown_parent_is_orphaned() {
    let text = eligibility(&[("1", ""), ("2", "7")]);
    assert_eq!(shape(&text), vec![(0, "1".to_string()), (0, "2".to_string())]);

    let report = parse(&text).unwrap().validate();
    assert_eq!(report.len(), 1);
    assert_eq!(
        report.violations()[0],
        Violation::HierarchyMismatch {
            level: "2".to_string(),
            parent: "7".to_string(),
            expected_parent: String::new(),
        }
    );
}

#[test]
fn test_depth_limit_is_enforced() {
    let levels: Vec<(String, String)> = (1..=5)
        .map(|i| (i.to_string(), if i == 1 { String::new() } else { (i - 1).to_string() }))
        .collect();
    let borrowed: Vec<(&str, &str)> = levels.iter().map(|(a, b)| (a.as_str(), b.as_str())).collect();
    let text = eligibility(&borrowed);

    let options = ParseOptions::builder().max_hierarchy_depth(3).build();
    let err = parse_with_options(&text, options).unwrap_err();
    assert_eq!(err.kind, X12ErrorKind::Security);

    let options = ParseOptions::builder().max_hierarchy_depth(5).build();
    assert!(parse_with_options(&text, options).is_ok());
}

#[test]
fn test_disabled_revisions_keep_levels_flat() {
    let text = eligibility(&[("1", ""), ("2", "1")]);
    let options = ParseOptions::builder().revisions(RevisionMode::Disabled).build();
    let doc = parse_with_options(&text, options).unwrap();
    let ts = doc.interchange().groups().next().unwrap().transaction_sets().next().unwrap();
    assert_eq!(ts.loops().count(), 0);
    assert_eq!(ts.segments().count(), 5);
    assert!(doc.validate().is_valid());
}
