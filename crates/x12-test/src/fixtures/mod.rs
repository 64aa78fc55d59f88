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

//! Canonical interchanges for tests.
//!
//! - **documents**: complete, valid interchanges
//! - **errors**: fatal inputs and documents with exactly one violation
//! - **builders**: builder pattern for assembling interchanges

pub mod builders;
mod documents;
pub mod errors;

pub use documents::*;

use crate::FixtureList;

/// Every valid fixture by name.
///
/// Useful for running the same test across all fixtures.
pub fn all() -> FixtureList {
    vec![
        ("eligibility_response", eligibility_response()),
        ("eligibility_inquiry", eligibility_inquiry()),
        ("purchase_order", purchase_order()),
        ("multi_group", multi_group()),
        ("purchase_order_with_line_breaks", purchase_order_with_line_breaks()),
    ]
}
