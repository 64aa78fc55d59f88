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

//! The parsed document.

use crate::config::DocumentConfiguration;
use crate::envelope::{Envelope, EnvelopeId, EnvelopeKind, Node};
use crate::report::ValidationReport;
use crate::tree::TreeNode;
use crate::view::{EnvelopeRef, Interchange};
use crate::writer::{EdiWriter, WriteOptions};

/// A parsed X12 interchange.
///
/// Owns the normalized input text, the configuration discovered from it and
/// an arena of envelopes. The interchange is always
/// [`EnvelopeId::INTERCHANGE`]; every other envelope is reachable from it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    text: String,
    config: DocumentConfiguration,
    envelopes: Vec<Envelope>,
}

impl Document {
    /// An empty document: an interchange with default header and trailer.
    pub fn new(config: DocumentConfiguration) -> Self {
        Self {
            text: String::new(),
            config,
            envelopes: vec![Envelope::new(EnvelopeKind::Interchange)],
        }
    }

    /// Normalized input text the document was parsed from.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn set_text(&mut self, text: String) {
        self.text = text;
    }

    /// Delimiters and version discovered from the interchange header.
    pub fn config(&self) -> &DocumentConfiguration {
        &self.config
    }

    /// Every envelope, in creation order.
    pub fn envelopes(&self) -> &[Envelope] {
        &self.envelopes
    }

    pub fn get(&self, id: EnvelopeId) -> Option<&Envelope> {
        self.envelopes.get(id.index())
    }

    /// # Panics
    ///
    /// Panics if `id` does not belong to this document.
    pub fn envelope(&self, id: EnvelopeId) -> &Envelope {
        &self.envelopes[id.index()]
    }

    pub(crate) fn envelope_mut(&mut self, id: EnvelopeId) -> &mut Envelope {
        &mut self.envelopes[id.index()]
    }

    pub(crate) fn alloc(&mut self, envelope: Envelope) -> EnvelopeId {
        self.envelopes.push(envelope);
        EnvelopeId::new(self.envelopes.len() - 1)
    }

    /// Read-only view of the interchange.
    pub fn interchange(&self) -> Interchange<'_> {
        Interchange::new(self.root())
    }

    /// Untyped view of the interchange envelope.
    pub fn root(&self) -> EnvelopeRef<'_> {
        EnvelopeRef::new(self, EnvelopeId::INTERCHANGE)
    }

    /// Number of non-empty segments, headers and trailers included.
    pub fn segment_count(&self) -> usize {
        self.envelopes
            .iter()
            .map(|env| {
                let body = env.body.iter().filter(|node| match node {
                    Node::Segment(segment) => !segment.is_empty(),
                    Node::Envelope(_) => false,
                });
                [&env.header, &env.trailer]
                    .iter()
                    .filter(|s| !s.is_empty())
                    .count()
                    + body.count()
            })
            .sum()
    }

    /// Validate the whole tree. Never fails; an empty report means valid.
    pub fn validate(&self) -> ValidationReport {
        crate::validate::validate(self)
    }

    /// Re-emit the document as EDI text using `config`'s delimiters.
    pub fn format_as_edi(&self, config: &DocumentConfiguration) -> String {
        self.format_with(config, &WriteOptions::default())
    }

    pub fn format_with(&self, config: &DocumentConfiguration, options: &WriteOptions) -> String {
        let mut writer = EdiWriter::new(self, config, options);
        writer.write_document();
        writer.finish()
    }

    /// Re-emit the document with its own delimiters.
    pub fn to_edi(&self) -> String {
        self.format_as_edi(&self.config)
    }

    /// Borrowed tree of the document for exporters.
    pub fn to_tree_representation(&self) -> TreeNode<'_> {
        TreeNode::build(self.root())
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new(DocumentConfiguration::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::segment::Segment;

    #[test]
    fn test_new_document() {
        let doc = Document::default();
        assert_eq!(doc.envelopes().len(), 1);
        assert_eq!(doc.envelope(EnvelopeId::INTERCHANGE).kind, EnvelopeKind::Interchange);
        assert_eq!(doc.segment_count(), 0);
        assert_eq!(doc.to_edi(), "");
    }

    #[test]
    fn test_alloc_returns_sequential_ids() {
        let mut doc = Document::default();
        let a = doc.alloc(Envelope::new(EnvelopeKind::Group));
        let b = doc.alloc(Envelope::new(EnvelopeKind::Group));
        assert_eq!(a.index(), 1);
        assert_eq!(b.index(), 2);
        assert!(doc.get(EnvelopeId::new(3)).is_none());
    }

    #[test]
    fn test_segment_count_skips_empty_segments() {
        let mut doc = Document::default();
        let ts = doc.alloc(Envelope::new(EnvelopeKind::TransactionSet));
        let env = doc.envelope_mut(ts);
        env.body.push(Node::Segment(Segment::generic(&["BEG", "00"])));
        env.body.push(Node::Segment(Segment::empty()));
        assert_eq!(doc.segment_count(), 1);
    }
}
