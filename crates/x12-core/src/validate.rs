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

//! Tree validation.
//!
//! Every envelope is checked header first, then its body in order, then its
//! trailer, then the structural rules of its kind. Nothing aborts the walk:
//! all violations end up in one report.

use crate::document::Document;
use crate::envelope::EnvelopeKind;
use crate::hierarchy::{is_root, same_level};
use crate::report::{ValidationReport, Violation};
use crate::view::{EnvelopeRef, NodeRef};

/// A cross-field check attached to an envelope kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StructuralRule {
    /// Header and trailer repeat the same control number.
    ControlNumber {
        header: &'static str,
        trailer: &'static str,
    },
    /// The trailer declares how many child envelopes of `child` precede it.
    DeclaredChildren {
        trailer: &'static str,
        child: EnvelopeKind,
    },
    /// The trailer declares how many segments the envelope spans.
    DeclaredSegments { trailer: &'static str },
    /// HL02 names the HL01 of the enclosing loop.
    ParentLevel,
}

const INTERCHANGE_RULES: &[StructuralRule] = &[
    StructuralRule::ControlNumber {
        header: "ISA13",
        trailer: "IEA02",
    },
    StructuralRule::DeclaredChildren {
        trailer: "IEA01",
        child: EnvelopeKind::Group,
    },
];

const GROUP_RULES: &[StructuralRule] = &[
    StructuralRule::ControlNumber {
        header: "GS06",
        trailer: "GE02",
    },
    StructuralRule::DeclaredChildren {
        trailer: "GE01",
        child: EnvelopeKind::TransactionSet,
    },
];

const TRANSACTION_SET_RULES: &[StructuralRule] = &[
    StructuralRule::ControlNumber {
        header: "ST02",
        trailer: "SE02",
    },
    StructuralRule::DeclaredSegments { trailer: "SE01" },
];

const LOOP_RULES: &[StructuralRule] = &[StructuralRule::ParentLevel];

/// Structural rules for an envelope kind.
pub fn rules(kind: EnvelopeKind) -> &'static [StructuralRule] {
    match kind {
        EnvelopeKind::Interchange => INTERCHANGE_RULES,
        EnvelopeKind::Group => GROUP_RULES,
        EnvelopeKind::TransactionSet => TRANSACTION_SET_RULES,
        EnvelopeKind::Loop => LOOP_RULES,
    }
}

/// Validate a whole document.
pub fn validate(doc: &Document) -> ValidationReport {
    let mut report = ValidationReport::new();
    validate_envelope(doc.root(), None, &mut report);
    report
}

fn validate_envelope(env: EnvelopeRef<'_>, parent: Option<EnvelopeRef<'_>>, report: &mut ValidationReport) {
    env.header().validate_into(report);
    for node in env.nodes() {
        match node {
            NodeRef::Segment(segment) => segment.validate_into(report),
            NodeRef::Envelope(child) => validate_envelope(child, Some(env), report),
        }
    }
    env.trailer().validate_into(report);

    for rule in rules(env.kind()) {
        if let Some(violation) = check(*rule, env, parent) {
            report.add(violation);
        }
    }
}

fn check(rule: StructuralRule, env: EnvelopeRef<'_>, parent: Option<EnvelopeRef<'_>>) -> Option<Violation> {
    let (header, trailer) = (env.header(), env.trailer());
    match rule {
        StructuralRule::ControlNumber {
            header: header_field,
            trailer: trailer_field,
        } => {
            let header_value = header.value(header_field);
            let trailer_value = trailer.value(trailer_field);
            if header_value == trailer_value {
                return None;
            }
            Some(Violation::IdMismatch {
                segment: header.label().to_string(),
                header_field: header_field.to_string(),
                header_description: description(header, header_field),
                header_value: header_value.to_string(),
                trailer_field: trailer_field.to_string(),
                trailer_description: description(trailer, trailer_field),
                trailer_value: trailer_value.to_string(),
            })
        }
        StructuralRule::DeclaredChildren { trailer: field, child } => {
            declared_count(env, field, env.children_of(child).count())
        }
        StructuralRule::DeclaredSegments { trailer: field } => {
            declared_count(env, field, env.segment_count())
        }
        StructuralRule::ParentLevel => {
            let level = env.header();
            let parent_id = level.value("HL02");
            let expected = parent
                .filter(|p| p.kind() == EnvelopeKind::Loop)
                .map_or("", |p| p.header().value("HL01"));
            let consistent = if expected.is_empty() {
                is_root(parent_id)
            } else {
                same_level(parent_id, expected)
            };
            if consistent {
                return None;
            }
            Some(Violation::HierarchyMismatch {
                level: level.value("HL01").to_string(),
                parent: parent_id.to_string(),
                expected_parent: expected.to_string(),
            })
        }
    }
}

fn declared_count(env: EnvelopeRef<'_>, field: &str, actual: usize) -> Option<Violation> {
    let trailer = env.trailer();
    let declared = trailer.value(field);
    if declared.trim().parse::<usize>().map_or(false, |n| n == actual) {
        return None;
    }
    Some(Violation::SegmentCount {
        segment: trailer.label().to_string(),
        field: field.to_string(),
        description: description(trailer, field),
        declared: declared.to_string(),
        actual,
    })
}

fn description(segment: &crate::segment::Segment, field: &str) -> String {
    segment
        .field(field)
        .map_or_else(|| field.to_string(), |f| f.description.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;
    use crate::report::ViolationCategory;

    const ISA: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000905*0*T*:~";
    const GS: &str = "GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~";

    fn report(body: &str) -> ValidationReport {
        parse(&format!("{}{}{}", ISA, GS, body)).unwrap().validate()
    }

    // ==================== Rule table tests ====================

    #[test]
    fn test_every_kind_has_rules() {
        assert_eq!(rules(EnvelopeKind::Interchange).len(), 2);
        assert_eq!(rules(EnvelopeKind::Group).len(), 2);
        assert_eq!(rules(EnvelopeKind::TransactionSet).len(), 2);
        assert_eq!(rules(EnvelopeKind::Loop), &[StructuralRule::ParentLevel]);
    }

    // ==================== Structural tests ====================

    #[test]
    fn test_valid_document() {
        let report = report("ST*850*0001~BEG*00*SA*1**20230101~SE*3*0001~GE*1*1~IEA*1*000000905~");
        assert!(report.is_valid(), "{}", report);
    }

    #[test]
    fn test_group_count_mismatch() {
        let report = report("ST*850*0001~SE*2*0001~GE*2*1~IEA*1*000000905~");
        assert_eq!(report.len(), 1);
        match &report.violations()[0] {
            Violation::SegmentCount { segment, field, declared, actual, .. } => {
                assert_eq!(segment, "GE");
                assert_eq!(field, "GE01");
                assert_eq!(declared, "2");
                assert_eq!(*actual, 1);
            }
            other => panic!("unexpected violation {:?}", other),
        }
    }

    #[test]
    fn test_transaction_control_mismatch() {
        let report = report("ST*850*0001~SE*2*0002~GE*1*1~IEA*1*000000905~");
        assert_eq!(report.len(), 1);
        assert_eq!(report.violations()[0].category(), ViolationCategory::IdMismatch);
        assert_eq!(report.violations()[0].segment(), "ST");
    }

    #[test]
    fn test_segment_count_mismatch() {
        let report = report("ST*850*0001~BEG*00~SE*2*0001~GE*1*1~IEA*1*000000905~");
        assert_eq!(report.len(), 1);
        assert!(matches!(
            &report.violations()[0],
            Violation::SegmentCount { actual: 3, .. }
        ));
    }

    #[test]
    fn test_segment_count_skips_empty_segments() {
        let matching = report("ST*850*0001~**~SE*2*0001~GE*1*1~IEA*1*000000905~");
        assert!(matching.is_valid(), "{}", matching);

        let counted = report("ST*850*0001~**~SE*3*0001~GE*1*1~IEA*1*000000905~");
        assert_eq!(counted.len(), 1);
        assert!(matches!(
            &counted.violations()[0],
            Violation::SegmentCount { actual: 2, .. }
        ));
    }

    #[test]
    fn test_non_numeric_count() {
        let report = report("ST*850*0001~SE*2*0001~GE*X*1~IEA*1*000000905~");
        assert_eq!(report.of_category(ViolationCategory::SegmentCount).count(), 1);
    }

    #[test]
    fn test_missing_trailers_are_reported() {
        let report = report("ST*850*0001~BEG*00");
        // SE, GE and IEA never arrived
        assert!(report.of_category(ViolationCategory::FieldValidation).count() >= 9);
        assert_eq!(report.of_category(ViolationCategory::IdMismatch).count(), 3);
        assert_eq!(report.of_category(ViolationCategory::SegmentCount).count(), 3);
    }

    #[test]
    fn test_violations_follow_document_order() {
        let report = report("ST*850*1~SE*2*0001~GE*1*2~IEA*1*000000905~");
        let categories: Vec<_> = report.iter().map(|v| (v.segment().to_string(), v.category())).collect();
        assert_eq!(
            categories,
            vec![
                ("ST".to_string(), ViolationCategory::FieldValidation),
                ("ST".to_string(), ViolationCategory::IdMismatch),
                ("GS".to_string(), ViolationCategory::IdMismatch),
            ]
        );
    }

    // ==================== Hierarchy tests ====================

    #[test]
    fn test_orphan_level_is_reported() {
        let text = format!(
            "{}GS*HB*SENDER*RECEIVER*20230101*1253*1*X*005010X279A1~ST*271*0001~HL*1**20*1~HL*2*7*21*0~SE*4*0001~GE*1*1~IEA*1*000000905~",
            ISA
        );
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
}
