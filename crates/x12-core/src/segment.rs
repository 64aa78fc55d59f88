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

//! The segment: an identifying element followed by ordered fields.

use crate::element::Element;
use crate::report::ValidationReport;
use crate::schema::SegmentSchema;

/// One terminator-bounded record.
///
/// `fields()[0]` is always the identifier element. `field_count` is the
/// declared arity excluding the identifier; for segments built from unknown
/// input it is one less than the number of tokens.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Segment {
    fields: Vec<Element>,
    field_count: usize,
}

impl Segment {
    /// A segment declared by `schema` with every content empty.
    pub fn from_schema(schema: &SegmentSchema) -> Self {
        let mut fields = Vec::with_capacity(schema.elements.len() + 1);
        fields.push(Element::identifier(schema.id, schema.description));
        fields.extend(schema.elements.iter().map(Element::from_spec));
        Self {
            fields,
            field_count: schema.field_count(),
        }
    }

    /// Build a segment from `schema` and assign `tokens` to it.
    pub fn parse<S: AsRef<str>>(schema: &SegmentSchema, tokens: &[S]) -> Self {
        let mut segment = Self::from_schema(schema);
        segment.assign(tokens);
        segment
    }

    /// Build a segment for input with no known schema, one element per token.
    pub fn generic<S: AsRef<str>>(tokens: &[S]) -> Self {
        let mut fields: Vec<Element> = tokens
            .iter()
            .enumerate()
            .map(|(i, t)| Element::generic(i, t.as_ref()))
            .collect();
        if fields.is_empty() {
            fields.push(Element::generic(0, ""));
        }
        Self {
            field_count: fields.len() - 1,
            fields,
        }
    }

    /// A placeholder with a single empty identifier; validates clean and
    /// serializes to nothing.
    pub fn empty() -> Self {
        Self::generic::<&str>(&[])
    }

    /// Assign tokens to fields by position.
    ///
    /// Tokens beyond the declared fields are dropped. Fields without a token
    /// keep their current content.
    pub fn assign<S: AsRef<str>>(&mut self, tokens: &[S]) {
        for (field, token) in self.fields.iter_mut().zip(tokens) {
            field.content = token.as_ref().to_string();
        }
    }

    pub fn id(&self) -> &Element {
        &self.fields[0]
    }

    /// Content of the identifier element, e.g. `NM1`.
    pub fn identifier(&self) -> &str {
        &self.fields[0].content
    }

    /// Name used for this segment in violations: the identifier content, or
    /// the declared identifier when the segment was never parsed.
    pub fn label(&self) -> &str {
        let id = self.id();
        if id.content.is_empty() {
            &id.name
        } else {
            &id.content
        }
    }

    pub fn fields(&self) -> &[Element] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [Element] {
        &mut self.fields
    }

    pub fn field_count(&self) -> usize {
        self.field_count
    }

    /// Field at `position`, where 0 is the identifier.
    pub fn get(&self, position: usize) -> Option<&Element> {
        self.fields.get(position)
    }

    /// Field by element name, e.g. `ST02`.
    pub fn field(&self, name: &str) -> Option<&Element> {
        self.fields.iter().find(|f| f.name == name)
    }

    pub fn field_mut(&mut self, name: &str) -> Option<&mut Element> {
        self.fields.iter_mut().find(|f| f.name == name)
    }

    /// Content of the named field, or `""` when there is no such field.
    pub fn value(&self, name: &str) -> &str {
        self.field(name).map_or("", |f| f.content.as_str())
    }

    /// `true` when every field, identifier included, has empty content.
    pub fn is_empty(&self) -> bool {
        self.fields.iter().all(Element::is_empty)
    }

    /// Validate every element, appending violations to `report`.
    pub fn validate_into(&self, report: &mut ValidationReport) {
        let label = self.label();
        for field in &self.fields {
            if let Some(violation) = field.validate(label) {
                report.add(violation);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::{GROUP_TRAILER, TRANSACTION_SET_HEADER};

    // ==================== Construction tests ====================

    #[test]
    fn test_from_schema() {
        let segment = Segment::from_schema(&TRANSACTION_SET_HEADER);
        assert_eq!(segment.field_count(), 3);
        assert_eq!(segment.fields().len(), 4);
        assert_eq!(segment.id().name, "ST");
        assert!(segment.is_empty());
        assert_eq!(segment.label(), "ST");
    }

    #[test]
    fn test_parse_assigns_positionally() {
        let segment = Segment::parse(&GROUP_TRAILER, &["GE", "1", "905"]);
        assert_eq!(segment.identifier(), "GE");
        assert_eq!(segment.value("GE01"), "1");
        assert_eq!(segment.value("GE02"), "905");
    }

    #[test]
    fn test_parse_truncates_extra_tokens() {
        let segment = Segment::parse(&GROUP_TRAILER, &["GE", "1", "905", "EXTRA"]);
        assert_eq!(segment.fields().len(), 3);
        assert_eq!(segment.value("GE02"), "905");
    }

    #[test]
    fn test_parse_short_input_leaves_rest_empty() {
        let segment = Segment::parse(&TRANSACTION_SET_HEADER, &["ST", "271"]);
        assert_eq!(segment.value("ST01"), "271");
        assert_eq!(segment.value("ST02"), "");
        assert_eq!(segment.value("ST03"), "");
    }

    #[test]
    fn test_generic_segment() {
        let segment = Segment::generic(&["REF", "DP", "038"]);
        assert_eq!(segment.field_count(), 2);
        assert_eq!(segment.identifier(), "REF");
        assert_eq!(segment.label(), "REF");
        assert_eq!(segment.get(2).unwrap().name, "GEN2");
    }

    #[test]
    fn test_empty_placeholder() {
        let segment = Segment::empty();
        assert!(segment.is_empty());
        assert_eq!(segment.field_count(), 0);
        let mut report = ValidationReport::new();
        segment.validate_into(&mut report);
        assert!(report.is_valid());
    }

    #[test]
    fn test_value_of_unknown_field() {
        let segment = Segment::from_schema(&GROUP_TRAILER);
        assert_eq!(segment.value("ZZ01"), "");
    }

    // ==================== Validation tests ====================

    #[test]
    fn test_unparsed_segment_reports_every_required_field() {
        let segment = Segment::from_schema(&GROUP_TRAILER);
        let mut report = ValidationReport::new();
        segment.validate_into(&mut report);
        // identifier, GE01, GE02
        assert_eq!(report.len(), 3);
        assert!(report.iter().all(|v| v.segment() == "GE"));
    }

    #[test]
    fn test_generic_segment_always_validates() {
        let segment = Segment::generic(&["PO1", "1", "", "EA"]);
        let mut report = ValidationReport::new();
        segment.validate_into(&mut report);
        assert!(report.is_valid());
    }
}
