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

//! Error and invalid document fixtures.
//!
//! Fatal samples must make [`x12_core::parse`] fail. Invalid documents parse
//! fine but each produces exactly one violation of the listed category.

use super::builders::{GroupBuilder, InterchangeBuilder, TransactionBuilder};
use x12_core::ViolationCategory;

const HEADER_WITHOUT_SEPARATORS: &str =
    "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000001*0*T";

/// Inputs that do not start with `ISA`.
pub fn invalid_file_type_samples() -> Vec<(&'static str, String)> {
    vec![
        ("unknown_prefix", "XYZ*00*          *00*~".to_string()),
        (
            "group_first",
            "GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~GE*0*1~".to_string(),
        ),
        ("empty", String::new()),
    ]
}

/// Interchange headers whose ISA16 cannot supply a segment terminator.
pub fn missing_terminator_samples() -> Vec<(&'static str, String)> {
    vec![
        ("sub_separator_only", format!("{}*:", HEADER_WITHOUT_SEPARATORS)),
        ("isa16_absent", HEADER_WITHOUT_SEPARATORS.to_string()),
    ]
}

fn purchase_order(control: &str) -> TransactionBuilder {
    TransactionBuilder::new("850", control)
        .segment(&["BEG", "00", "SA", "4500012345", "", "20230101"])
        .segment(&["PO1", "1", "10", "EA", "9.95"])
}

/// Documents that parse but fail validation exactly once.
pub fn invalid_documents() -> Vec<(&'static str, String, ViolationCategory)> {
    vec![
        (
            "transaction_control_mismatch",
            InterchangeBuilder::new()
                .group(
                    GroupBuilder::new("PO", "1")
                        .transaction(purchase_order("0001").trailer_control_number("0002")),
                )
                .build(),
            ViolationCategory::IdMismatch,
        ),
        (
            "group_control_mismatch",
            InterchangeBuilder::new()
                .group(
                    GroupBuilder::new("PO", "1")
                        .transaction(purchase_order("0001"))
                        .trailer_control_number("2"),
                )
                .build(),
            ViolationCategory::IdMismatch,
        ),
        (
            "interchange_control_mismatch",
            InterchangeBuilder::new()
                .group(GroupBuilder::new("PO", "1").transaction(purchase_order("0001")))
                .trailer_control_number("000000002")
                .build(),
            ViolationCategory::IdMismatch,
        ),
        (
            "group_transaction_count",
            InterchangeBuilder::new()
                .group(
                    GroupBuilder::new("PO", "1")
                        .transaction(purchase_order("0001"))
                        .declared_transactions("2"),
                )
                .build(),
            ViolationCategory::SegmentCount,
        ),
        (
            "interchange_group_count",
            InterchangeBuilder::new()
                .group(GroupBuilder::new("PO", "1").transaction(purchase_order("0001")))
                .declared_groups("0")
                .build(),
            ViolationCategory::SegmentCount,
        ),
        (
            "transaction_segment_count",
            InterchangeBuilder::new()
                .group(
                    GroupBuilder::new("PO", "1")
                        .transaction(purchase_order("0001").declared_segments("9")),
                )
                .build(),
            ViolationCategory::SegmentCount,
        ),
        (
            "sender_too_long",
            InterchangeBuilder::new()
                .sender("SENDERIDENTIFIER1")
                .group(GroupBuilder::new("PO", "1").transaction(purchase_order("0001")))
                .build(),
            ViolationCategory::FieldValidation,
        ),
        (
            "hierarchy_orphan",
            InterchangeBuilder::new()
                .group(
                    GroupBuilder::new("HB", "1").version("005010X279A1").transaction(
                        TransactionBuilder::new("271", "0001")
                            .reference("005010X279A1")
                            .segment(&["BHT", "0022", "11", "REF1", "20230101", "1253"])
                            .level("1", "", "20", true)
                            .level("2", "5", "21", false),
                    ),
                )
                .build(),
            ViolationCategory::Hierarchy,
        ),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_documents_are_named_uniquely() {
        let docs = invalid_documents();
        let mut names: Vec<_> = docs.iter().map(|(name, _, _)| *name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), docs.len());
    }

    #[test]
    fn test_missing_terminator_samples_start_with_isa() {
        for (_, text) in missing_terminator_samples() {
            assert!(text.starts_with("ISA*"));
        }
    }
}
