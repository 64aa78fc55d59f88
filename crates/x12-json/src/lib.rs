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

//! X12 JSON Export
//!
//! Renders the tree representation of a parsed document as JSON.
//!
//! # Shape
//!
//! ```text
//! {
//!   "text": "ISA*00*...",            // only with include_text
//!   "config": { "element_separator": "*", ... },
//!   "interchange": {
//!     "header": <segment>,
//!     "groups": [ { "header": ..., "transaction_sets": [ ... ], "trailer": ... } ],
//!     "trailer": <segment>
//!   }
//! }
//! ```
//!
//! Transaction sets list their segments and loops in order under `body`,
//! loops under `loop_body`. A segment is an object with `field_count`, `id`
//! and one key per element name.
//!
//! # Examples
//!
//! ```rust
//! use x12_json::{to_json_value, ToJsonConfig};
//!
//! let doc = x12_core::parse(x12_test::fixtures::purchase_order()).unwrap();
//! let value = to_json_value(&doc, &ToJsonConfig::default()).unwrap();
//! assert_eq!(value["interchange"]["header"]["ISA13"]["content"], "000000905");
//! ```

mod to_json;

pub use to_json::{to_json, to_json_value, ToJsonConfig};
