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

//! X12 XML Export
//!
//! Renders the tree representation of a parsed document as XML, mirroring
//! the JSON export: envelopes become elements named after their kind,
//! child envelopes are wrapped in `groups`, `transaction_sets`, `body` or
//! `loop_body`, and every element of a segment becomes
//! `<element name="...">content</element>`.
//!
//! # Examples
//!
//! ```rust
//! use x12_xml::{to_xml, ToXmlConfig};
//!
//! let doc = x12_core::parse(x12_test::fixtures::purchase_order()).unwrap();
//! let xml = to_xml(&doc, &ToXmlConfig::default()).unwrap();
//! assert!(xml.contains("<segment id=\"ISA\" field_count=\"16\">"));
//! ```

mod to_xml;

pub use to_xml::{to_xml, ToXmlConfig};
