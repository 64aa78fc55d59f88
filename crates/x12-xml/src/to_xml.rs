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

//! Document to XML conversion

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::Writer;
use std::io::Cursor;
use x12_core::{Document, Element, EnvelopeKind, Segment, TreeNode};

/// Configuration for XML output
#[derive(Debug, Clone)]
pub struct ToXmlConfig {
    /// Pretty-print with indentation
    pub pretty: bool,
    /// Indentation string (e.g., "  " or "\t")
    pub indent: String,
    /// Root element name
    pub root_element: String,
    /// Include the normalized input text as a `text` element
    pub include_text: bool,
    /// Add schema metadata attributes to every element
    pub include_schema: bool,
}

impl Default for ToXmlConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: "  ".to_string(),
            root_element: "x12".to_string(),
            include_text: false,
            include_schema: true,
        }
    }
}

/// Convert Document to XML string
pub fn to_xml(doc: &Document, config: &ToXmlConfig) -> Result<String, String> {
    let mut writer = if config.pretty {
        let indent_char = config.indent.bytes().next().unwrap_or(b' ');
        Writer::new_with_indent(Cursor::new(Vec::new()), indent_char, config.indent.len())
    } else {
        Writer::new(Cursor::new(Vec::new()))
    };

    writer
        .write_event(Event::Decl(BytesDecl::new("1.0", Some("UTF-8"), None)))
        .map_err(|e| format!("Failed to write XML declaration: {}", e))?;

    let settings = doc.config();
    let mut root = BytesStart::new(config.root_element.as_str());
    root.push_attribute(("version", settings.version.as_str()));
    root.push_attribute(("element_separator", settings.element_separator.to_string().as_str()));
    root.push_attribute(("segment_terminator", settings.segment_terminator.to_string().as_str()));
    root.push_attribute((
        "sub_element_separator",
        settings.sub_element_separator.to_string().as_str(),
    ));
    start(&mut writer, root)?;

    if config.include_text {
        text_element(&mut writer, BytesStart::new("text"), doc.text())?;
    }
    write_node(&mut writer, &doc.to_tree_representation(), config)?;

    end(&mut writer, &config.root_element)?;

    let result = writer.into_inner().into_inner();
    String::from_utf8(result).map_err(|e| format!("Invalid UTF-8 in XML output: {}", e))
}

fn write_node<W: std::io::Write>(
    writer: &mut Writer<W>,
    node: &TreeNode<'_>,
    config: &ToXmlConfig,
) -> Result<(), String> {
    let (kind, role, header, trailer, children) = match node {
        TreeNode::Segment(segment) => return write_segment(writer, segment, config),
        TreeNode::Envelope {
            kind,
            role,
            header,
            trailer,
            children,
        } => (kind, role, header, trailer, children),
    };

    let mut elem = BytesStart::new(kind.as_str());
    if let Some(role) = role {
        elem.push_attribute(("role", *role));
    }
    start(writer, elem)?;

    start(writer, BytesStart::new("header"))?;
    write_segment(writer, header, config)?;
    end(writer, "header")?;

    match kind {
        EnvelopeKind::TransactionSet | EnvelopeKind::Loop => {
            write_children(writer, kind.children_key(), children.iter(), config)?;
        }
        EnvelopeKind::Interchange | EnvelopeKind::Group => {
            write_children(
                writer,
                kind.children_key(),
                children.iter().filter(|c| is_listed_under(c, *kind)),
                config,
            )?;
            // Transaction sets sent outside any group
            let stray: Vec<_> = children.iter().filter(|c| !is_listed_under(c, *kind)).collect();
            if !stray.is_empty() {
                let key = match kind {
                    EnvelopeKind::Interchange => EnvelopeKind::Group.children_key(),
                    _ => "segments",
                };
                write_children(writer, key, stray.into_iter(), config)?;
            }
        }
    }

    if *kind != EnvelopeKind::Loop {
        start(writer, BytesStart::new("trailer"))?;
        write_segment(writer, trailer, config)?;
        end(writer, "trailer")?;
    }
    end(writer, kind.as_str())
}

/// Whether `child` belongs under `parent`'s own child key.
fn is_listed_under(child: &TreeNode<'_>, parent: EnvelopeKind) -> bool {
    matches!(
        (parent, child.kind()),
        (EnvelopeKind::Interchange, Some(EnvelopeKind::Group))
            | (EnvelopeKind::Group, Some(EnvelopeKind::TransactionSet))
    )
}

fn write_children<'n, 'a: 'n, W: std::io::Write>(
    writer: &mut Writer<W>,
    key: &str,
    children: impl Iterator<Item = &'n TreeNode<'a>>,
    config: &ToXmlConfig,
) -> Result<(), String> {
    start(writer, BytesStart::new(key))?;
    for child in children {
        write_node(writer, child, config)?;
    }
    end(writer, key)
}

fn write_segment<W: std::io::Write>(
    writer: &mut Writer<W>,
    segment: &Segment,
    config: &ToXmlConfig,
) -> Result<(), String> {
    let mut elem = BytesStart::new("segment");
    elem.push_attribute(("id", segment.identifier()));
    elem.push_attribute(("field_count", segment.field_count().to_string().as_str()));
    start(writer, elem)?;
    for field in segment.fields().iter().skip(1) {
        write_element(writer, field, config)?;
    }
    end(writer, "segment")
}

fn write_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    element: &Element,
    config: &ToXmlConfig,
) -> Result<(), String> {
    let mut elem = BytesStart::new("element");
    elem.push_attribute(("name", element.name.as_ref()));
    if config.include_schema {
        elem.push_attribute(("description", element.description.as_ref()));
        elem.push_attribute(("required", if element.required { "true" } else { "false" }));
        elem.push_attribute(("min_length", element.min_length.to_string().as_str()));
        elem.push_attribute(("max_length", element.max_length.to_string().as_str()));
    }
    text_element(writer, elem, &element.content)
}

/// Write `elem` with `content`, or as an empty element when there is none.
fn text_element<W: std::io::Write>(
    writer: &mut Writer<W>,
    elem: BytesStart<'_>,
    content: &str,
) -> Result<(), String> {
    if content.is_empty() {
        return writer
            .write_event(Event::Empty(elem))
            .map_err(|e| format!("Failed to write empty element: {}", e));
    }
    let name = String::from_utf8_lossy(elem.name().as_ref()).into_owned();
    start(writer, elem)?;
    writer
        .write_event(Event::Text(BytesText::new(content)))
        .map_err(|e| format!("Failed to write text: {}", e))?;
    end(writer, &name)
}

fn start<W: std::io::Write>(writer: &mut Writer<W>, elem: BytesStart<'_>) -> Result<(), String> {
    writer
        .write_event(Event::Start(elem))
        .map_err(|e| format!("Failed to write start element: {}", e))
}

fn end<W: std::io::Write>(writer: &mut Writer<W>, name: &str) -> Result<(), String> {
    writer
        .write_event(Event::End(BytesEnd::new(name)))
        .map_err(|e| format!("Failed to write end element: {}", e))
}

#[cfg(test)]
mod tests {
    use super::*;
    use x12_test::fixtures;

    fn export(text: &str, config: &ToXmlConfig) -> String {
        let doc = x12_core::parse(text).unwrap();
        to_xml(&doc, config).unwrap()
    }

    fn compact() -> ToXmlConfig {
        ToXmlConfig {
            pretty: false,
            ..Default::default()
        }
    }

    // ==================== Document tests ====================

    #[test]
    fn test_declaration_and_root() {
        let xml = export(fixtures::purchase_order(), &ToXmlConfig::default());
        assert!(xml.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>"));
        assert!(xml.contains(
            "<x12 version=\"00501\" element_separator=\"*\" segment_terminator=\"~\" sub_element_separator=\":\">"
        ));
        assert!(xml.trim_end().ends_with("</x12>"));
    }

    #[test]
    fn test_envelope_nesting() {
        let xml = export(fixtures::purchase_order(), &compact());
        let order = [
            "<interchange><header><segment id=\"ISA\"",
            "<groups><group><header><segment id=\"GS\"",
            "<transaction_sets><transaction_set><header><segment id=\"ST\"",
            "<body><segment id=\"BEG\"",
            "</body><trailer><segment id=\"SE\"",
            "</transaction_set></transaction_sets><trailer><segment id=\"GE\"",
            "</group></groups><trailer><segment id=\"IEA\"",
        ];
        let mut position = 0;
        for marker in order {
            let found = xml[position..]
                .find(marker)
                .unwrap_or_else(|| panic!("missing {} after {}", marker, position));
            position += found + marker.len();
        }
    }

    #[test]
    fn test_loops_carry_roles() {
        let xml = export(fixtures::eligibility_response(), &compact());
        assert!(xml.contains("<loop role=\"information_source\"><header><segment id=\"HL\" field_count=\"4\">"));
        assert!(xml.contains("<loop role=\"subscriber\">"));
        assert!(xml.contains("<loop_body>"));
    }

    // ==================== Element tests ====================

    #[test]
    fn test_element_metadata() {
        let xml = export(fixtures::purchase_order(), &compact());
        assert!(xml.contains(
            "<element name=\"ISA13\" description=\"Interchange Control Number\" required=\"true\" min_length=\"9\" max_length=\"9\">000000905</element>"
        ));
    }

    #[test]
    fn test_content_only_and_empty_elements() {
        let config = ToXmlConfig {
            include_schema: false,
            ..compact()
        };
        let xml = export(fixtures::purchase_order(), &config);
        assert!(xml.contains("<element name=\"GEN1\">00</element>"));
        assert!(xml.contains("<element name=\"GEN4\"/>"));
        assert!(xml.contains("<element name=\"ST03\"/>"));
    }

    #[test]
    fn test_content_is_escaped() {
        let text = concat!(
            "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000001*0*T*:~",
            "GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~",
            "ST*850*0001~N1*ST*SMITH & SONS <EAST>~SE*3*0001~GE*1*1~IEA*1*000000001~",
        );
        let xml = export(text, &compact());
        assert!(xml.contains("SMITH &amp; SONS &lt;EAST&gt;"));
    }

    #[test]
    fn test_include_text() {
        let config = ToXmlConfig {
            include_text: true,
            ..compact()
        };
        let xml = export(fixtures::purchase_order(), &config);
        assert!(xml.contains("<text>ISA*00*"));
    }

    #[test]
    fn test_ungrouped_transaction_sets() {
        let text = concat!(
            "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000001*0*T*:~",
            "ST*850*0001~BEG*00*SA~SE*3*0001~",
            "IEA*0*000000001~",
        );
        let xml = export(text, &compact());
        assert!(xml.contains("<groups></groups><transaction_sets><transaction_set>"));
    }
}
