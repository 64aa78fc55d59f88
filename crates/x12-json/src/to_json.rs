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

//! Document to JSON conversion

use serde_json::{Map, Value as JsonValue};
use x12_core::{Document, Element, EnvelopeKind, Segment, TreeNode};

/// Configuration for JSON output
#[derive(Debug, Clone)]
pub struct ToJsonConfig {
    /// Include the normalized input text under `text`
    pub include_text: bool,
    /// Render elements with their schema metadata instead of bare content
    pub include_schema: bool,
    /// Pretty-print the output of [`to_json`]
    pub pretty: bool,
}

impl Default for ToJsonConfig {
    fn default() -> Self {
        Self {
            include_text: false,
            include_schema: true,
            pretty: true,
        }
    }
}

/// Convert Document to JSON string
pub fn to_json(doc: &Document, config: &ToJsonConfig) -> Result<String, String> {
    let value = to_json_value(doc, config)?;
    let result = if config.pretty {
        serde_json::to_string_pretty(&value)
    } else {
        serde_json::to_string(&value)
    };
    result.map_err(|e| format!("JSON serialization error: {}", e))
}

/// Convert Document to serde_json::Value
pub fn to_json_value(doc: &Document, config: &ToJsonConfig) -> Result<JsonValue, String> {
    let mut map = Map::with_capacity(3);
    if config.include_text {
        map.insert("text".to_string(), JsonValue::String(doc.text().to_string()));
    }
    let settings = serde_json::to_value(doc.config())
        .map_err(|e| format!("JSON serialization error: {}", e))?;
    map.insert("config".to_string(), settings);
    map.insert(
        EnvelopeKind::Interchange.as_str().to_string(),
        node_to_json(&doc.to_tree_representation(), config)?,
    );
    Ok(JsonValue::Object(map))
}

fn node_to_json(node: &TreeNode<'_>, config: &ToJsonConfig) -> Result<JsonValue, String> {
    match node {
        TreeNode::Segment(segment) => segment_to_json(segment, config),
        TreeNode::Envelope {
            kind,
            role,
            header,
            trailer,
            children,
        } => {
            let mut map = Map::new();
            if let Some(role) = role {
                map.insert("role".to_string(), JsonValue::String(role.to_string()));
            }
            map.insert("header".to_string(), segment_to_json(header, config)?);

            match kind {
                // Ordered mix of segments and loops
                EnvelopeKind::TransactionSet | EnvelopeKind::Loop => {
                    let body = children
                        .iter()
                        .map(|child| node_to_json(child, config))
                        .collect::<Result<Vec<_>, _>>()?;
                    map.insert(kind.children_key().to_string(), JsonValue::Array(body));
                }
                // Child envelopes grouped by the key their own parent kind uses
                EnvelopeKind::Interchange | EnvelopeKind::Group => {
                    for child in children {
                        let key = match child.kind() {
                            Some(EnvelopeKind::Group) => EnvelopeKind::Interchange.children_key(),
                            Some(EnvelopeKind::TransactionSet) => EnvelopeKind::Group.children_key(),
                            _ => "segments",
                        };
                        let value = node_to_json(child, config)?;
                        match map
                            .entry(key.to_string())
                            .or_insert_with(|| JsonValue::Array(Vec::new()))
                        {
                            JsonValue::Array(items) => items.push(value),
                            _ => return Err(format!("duplicate key '{}' in {}", key, kind)),
                        }
                    }
                    map.entry(kind.children_key().to_string())
                        .or_insert_with(|| JsonValue::Array(Vec::new()));
                }
            }

            if *kind != EnvelopeKind::Loop {
                map.insert("trailer".to_string(), segment_to_json(trailer, config)?);
            }
            Ok(JsonValue::Object(map))
        }
    }
}

fn segment_to_json(segment: &Segment, config: &ToJsonConfig) -> Result<JsonValue, String> {
    let mut map = Map::with_capacity(segment.fields().len() + 1);
    map.insert(
        "field_count".to_string(),
        JsonValue::Number(segment.field_count().into()),
    );
    map.insert("id".to_string(), element_to_json(segment.id(), config)?);
    for field in segment.fields().iter().skip(1) {
        map.insert(field.name.to_string(), element_to_json(field, config)?);
    }
    Ok(JsonValue::Object(map))
}

fn element_to_json(element: &Element, config: &ToJsonConfig) -> Result<JsonValue, String> {
    if config.include_schema {
        serde_json::to_value(element).map_err(|e| format!("JSON serialization error: {}", e))
    } else {
        Ok(JsonValue::String(element.content.clone()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_test::fixtures;

    fn export(text: &str, config: &ToJsonConfig) -> JsonValue {
        let doc = x12_core::parse(text).unwrap();
        to_json_value(&doc, config).unwrap()
    }

    // ==================== Document shape tests ====================

    #[test]
    fn test_top_level_keys() {
        let value = export(fixtures::purchase_order(), &ToJsonConfig::default());
        let obj = value.as_object().unwrap();
        assert!(obj.contains_key("config"));
        assert!(obj.contains_key("interchange"));
        assert!(!obj.contains_key("text"));
        assert_eq!(value["config"]["element_separator"], "*");
        assert_eq!(value["config"]["sub_element_separator"], ":");
        assert_eq!(value["config"]["version"], "00501");
    }

    #[test]
    fn test_include_text() {
        let config = ToJsonConfig {
            include_text: true,
            ..Default::default()
        };
        let value = export(fixtures::purchase_order_with_line_breaks(), &config);
        assert_eq!(value["text"], fixtures::PURCHASE_ORDER);
    }

    #[test]
    fn test_envelope_child_keys() {
        let value = export(fixtures::eligibility_response(), &ToJsonConfig::default());
        let group = &value["interchange"]["groups"][0];
        assert_eq!(group["header"]["GS01"]["content"], "HB");
        let ts = &group["transaction_sets"][0];
        assert_eq!(ts["header"]["ST01"]["content"], "271");
        assert_eq!(ts["trailer"]["SE01"]["content"], "13");

        let body = ts["body"].as_array().unwrap();
        assert_eq!(body[0]["id"]["content"], "BHT");
        let source = &body[1];
        assert_eq!(source["role"], "information_source");
        assert_eq!(source["header"]["HL03"]["content"], "20");
        assert!(source.get("trailer").is_none());

        let receiver = &source["loop_body"][1];
        assert_eq!(receiver["role"], "information_receiver");
        assert_eq!(receiver["loop_body"][1]["role"], "subscriber");
    }

    #[test]
    fn test_empty_groups_key_is_present() {
        let text = x12_test::fixtures::builders::InterchangeBuilder::new().build();
        let value = export(&text, &ToJsonConfig::default());
        assert_eq!(value["interchange"]["groups"], JsonValue::Array(Vec::new()));
    }

    #[test]
    fn test_ungrouped_transaction_sets() {
        let text = concat!(
            "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000001*0*T*:~",
            "ST*850*0001~BEG*00*SA~SE*3*0001~",
            "IEA*0*000000001~",
        );
        let value = export(text, &ToJsonConfig::default());
        assert_eq!(value["interchange"]["groups"], JsonValue::Array(Vec::new()));
        assert_eq!(
            value["interchange"]["transaction_sets"][0]["header"]["ST02"]["content"],
            "0001"
        );
    }

    // ==================== Segment tests ====================

    #[test]
    fn test_schema_element_metadata() {
        let value = export(fixtures::purchase_order(), &ToJsonConfig::default());
        let isa06 = &value["interchange"]["header"]["ISA06"];
        assert_eq!(isa06["name"], "ISA06");
        assert_eq!(isa06["description"], "Interchange Sender ID");
        assert_eq!(isa06["required"], true);
        assert_eq!(isa06["min_length"], 15);
        assert_eq!(isa06["max_length"], 15);
        assert_eq!(isa06["content"], "SUBMITTERS.ID  ");
        assert_eq!(value["interchange"]["header"]["field_count"], 16);
    }

    #[test]
    fn test_generic_segment_fields() {
        let value = export(fixtures::purchase_order(), &ToJsonConfig::default());
        let body = &value["interchange"]["groups"][0]["transaction_sets"][0]["body"];
        let reference = &body[1];
        assert_eq!(reference["field_count"], 2);
        assert_eq!(reference["id"]["name"], "GEN0");
        assert_eq!(reference["id"]["content"], "REF");
        assert_eq!(reference["GEN1"]["content"], "DP");
        assert_eq!(reference["GEN2"]["content"], "038");
        assert_eq!(reference["GEN2"]["required"], false);
    }

    #[test]
    fn test_content_only() {
        let config = ToJsonConfig {
            include_schema: false,
            ..Default::default()
        };
        let value = export(fixtures::purchase_order(), &config);
        assert_eq!(value["interchange"]["header"]["id"], "ISA");
        assert_eq!(value["interchange"]["header"]["ISA13"], "000000905");
        assert_eq!(value["interchange"]["trailer"]["IEA01"], "1");
    }

    // ==================== Serialization tests ====================

    #[test]
    fn test_to_json_round_trips_through_serde() {
        let doc = x12_core::parse(fixtures::multi_group()).unwrap();
        let compact = to_json(
            &doc,
            &ToJsonConfig {
                pretty: false,
                ..Default::default()
            },
        )
        .unwrap();
        assert!(!compact.contains('\n'));
        let parsed: JsonValue = serde_json::from_str(&compact).unwrap();
        assert_eq!(parsed, to_json_value(&doc, &ToJsonConfig::default()).unwrap());
        assert_eq!(parsed["interchange"]["groups"].as_array().unwrap().len(), 2);
    }
}
