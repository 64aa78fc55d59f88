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

//! 005010X279A1: Health Care Eligibility Benefit Inquiry and Response (270/271).

use super::{Revision, SegmentHandler, SegmentRule};
use crate::schema::{ElementSpec, SegmentSchema};

pub static BEGINNING_OF_HIERARCHICAL_TRANSACTION: SegmentSchema = SegmentSchema {
    id: "BHT",
    description: "Beginning of Hierarchical Transaction",
    elements: &[
        ElementSpec::required("BHT01", "Hierarchical Structure Code", 4, 4),
        ElementSpec::required("BHT02", "Transaction Set Purpose Code", 2, 2),
        ElementSpec::optional("BHT03", "Reference Identification", 1, 50),
        ElementSpec::required("BHT04", "Date", 8, 8),
        ElementSpec::required("BHT05", "Time", 4, 8),
    ],
};

pub static HIERARCHICAL_LEVEL: SegmentSchema = SegmentSchema {
    id: "HL",
    description: "Hierarchical Level",
    elements: &[
        ElementSpec::required("HL01", "Hierarchical ID Number", 1, 12),
        ElementSpec::optional("HL02", "Hierarchical Parent ID Number", 1, 12),
        ElementSpec::required("HL03", "Hierarchical Level Code", 1, 2),
        ElementSpec::required("HL04", "Hierarchical Child Code", 1, 1),
    ],
};

pub static GENERIC_NAME: SegmentSchema = SegmentSchema {
    id: "NM1",
    description: "Generic Name",
    elements: &[
        ElementSpec::required("NM101", "Entity Identifier Code", 2, 3),
        ElementSpec::required("NM102", "Entity Type Qualifier", 1, 1),
        ElementSpec::required("NM103", "Name Last or Organization Name", 1, 60),
        ElementSpec::optional("NM104", "Name First", 1, 35),
        ElementSpec::optional("NM105", "Name Middle", 1, 25),
        ElementSpec::optional("NM106", "Name Prefix", 1, 10),
        ElementSpec::optional("NM107", "Name Suffix", 1, 10),
        ElementSpec::required("NM108", "Identification Code Qualifier", 1, 2),
        ElementSpec::required("NM109", "Identification Code", 2, 80),
        ElementSpec::optional("NM110", "Entity Relationship Code", 2, 2),
        ElementSpec::optional("NM111", "Entity Identifier Code", 2, 3),
        ElementSpec::optional("NM112", "Name Last or Organization Name", 1, 60),
    ],
};

pub static REQUEST_VALIDATION: SegmentSchema = SegmentSchema {
    id: "AAA",
    description: "Request Validation",
    elements: &[
        ElementSpec::required("AAA01", "Yes/No Condition or Response Code", 1, 1),
        ElementSpec::optional("AAA02", "Agency Qualifier Code", 2, 2),
        ElementSpec::required("AAA03", "Reject Reason Code", 2, 2),
        ElementSpec::required("AAA04", "Follow-up Action Code", 1, 1),
    ],
};

pub static X279A1: Revision = Revision {
    name: "005010X279A1",
    description: "Health Care Eligibility Benefit Inquiry and Response",
    transaction_sets: &["270", "271"],
    hierarchy: &[
        "information_source",
        "information_receiver",
        "subscriber",
        "dependent",
    ],
    segments: &[
        SegmentRule {
            schema: &BEGINNING_OF_HIERARCHICAL_TRANSACTION,
            handler: SegmentHandler::TransactionBody,
        },
        SegmentRule {
            schema: &HIERARCHICAL_LEVEL,
            handler: SegmentHandler::HierarchicalLevel,
        },
        SegmentRule {
            schema: &GENERIC_NAME,
            handler: SegmentHandler::LoopSegment,
        },
        SegmentRule {
            schema: &REQUEST_VALIDATION,
            handler: SegmentHandler::LoopSegment,
        },
    ],
};
