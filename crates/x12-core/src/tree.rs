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

//! Borrowed tree representation for exporters.

use crate::envelope::EnvelopeKind;
use crate::segment::Segment;
use crate::view::{EnvelopeRef, NodeRef};

/// A read-only structural dump of a document.
///
/// Built by [`Document::to_tree_representation`](crate::Document::to_tree_representation);
/// borrows every segment from the document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TreeNode<'a> {
    Envelope {
        kind: EnvelopeKind,
        role: Option<&'static str>,
        header: &'a Segment,
        trailer: &'a Segment,
        children: Vec<TreeNode<'a>>,
    },
    Segment(&'a Segment),
}

impl<'a> TreeNode<'a> {
    /// Build the subtree rooted at `env`.
    pub fn build(env: EnvelopeRef<'a>) -> Self {
        let children = env
            .nodes()
            .map(|node| match node {
                NodeRef::Segment(segment) => TreeNode::Segment(segment),
                NodeRef::Envelope(child) => TreeNode::build(child),
            })
            .collect();
        TreeNode::Envelope {
            kind: env.kind(),
            role: env.role(),
            header: env.header(),
            trailer: env.trailer(),
            children,
        }
    }

    /// Kind of an envelope node; `None` for segments.
    pub fn kind(&self) -> Option<EnvelopeKind> {
        match self {
            TreeNode::Envelope { kind, .. } => Some(*kind),
            TreeNode::Segment(_) => None,
        }
    }

    pub fn children(&self) -> &[TreeNode<'a>] {
        match self {
            TreeNode::Envelope { children, .. } => children,
            TreeNode::Segment(_) => &[],
        }
    }

    /// Label used by outlines: the envelope kind (with role) or the segment id.
    pub fn label(&self) -> String {
        match self {
            TreeNode::Envelope { kind, role: Some(role), .. } => format!("{} ({})", kind, role),
            TreeNode::Envelope { kind, .. } => kind.to_string(),
            TreeNode::Segment(segment) => segment.label().to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parse;

    const TEXT: &str = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000905*0*T*:~GS*HB*SENDER*RECEIVER*20230101*1253*905*X*005010X279A1~ST*271*0001*005010X279A1~HL*1**20*1~NM1*PR*2*ABC COMPANY*****PI*842610001~SE*4*0001~GE*1*905~IEA*1*000000905~";

    #[test]
    fn test_tree_mirrors_envelopes() {
        let doc = parse(TEXT).unwrap();
        let tree = doc.to_tree_representation();
        assert_eq!(tree.kind(), Some(EnvelopeKind::Interchange));

        let group = &tree.children()[0];
        assert_eq!(group.kind(), Some(EnvelopeKind::Group));
        let ts = &group.children()[0];
        let lp = &ts.children()[0];
        assert_eq!(lp.label(), "loop (information_source)");
        assert_eq!(lp.children().len(), 1);
        assert_eq!(lp.children()[0].label(), "NM1");
        assert!(lp.children()[0].children().is_empty());
    }

    #[test]
    fn test_tree_borrows_headers() {
        let doc = parse(TEXT).unwrap();
        match doc.to_tree_representation() {
            TreeNode::Envelope { header, trailer, .. } => {
                assert_eq!(header.value("ISA13"), "000000905");
                assert_eq!(trailer.value("IEA01"), "1");
            }
            TreeNode::Segment(_) => panic!("root must be an envelope"),
        }
    }
}
