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

//! Core parser, validator and writer for ANSI ASC X12 EDI documents.
//!
//! An X12 interchange is flat text whose delimiters are declared by its own
//! first segment. This crate discovers those delimiters, splits the text into
//! segments, routes every segment into a tree of envelopes (interchange,
//! functional group, transaction set, hierarchical loop), validates the tree,
//! and writes it back out with any set of delimiters.
//!
//! ```
//! use x12_core::{parse, DocumentConfiguration};
//!
//! let text = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     \
//!             *230101*1253*^*00501*000000905*0*T*:~GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~\
//!             ST*850*0001~BEG*00*SA*123**20230101~SE*3*0001~GE*1*1~IEA*1*000000905~";
//! let doc = parse(text).unwrap();
//! assert!(doc.validate().is_valid());
//!
//! let piped = doc.format_as_edi(&DocumentConfiguration::default().with_element_separator('|'));
//! assert!(piped.starts_with("ISA|00|"));
//! ```
//!
//! # Revisions
//!
//! Transaction sets whose implementation guide is known (see [`revisions`])
//! get typed segments for the guide's own segments and have their HL
//! segments rebuilt into nested [`Loop`]s. Anything else is kept as generic
//! segments in arrival order.

mod config;
mod document;
mod element;
mod envelope;
mod error;
mod hierarchy;
pub mod lex;
mod limits;
mod parser;
mod preprocess;
mod report;
pub mod revisions;
pub mod schema;
mod segment;
pub mod traverse;
mod tree;
pub mod validate;
mod view;
mod writer;

pub use config::DocumentConfiguration;
pub use document::Document;
pub use element::{Element, GENERIC_DESCRIPTION};
pub use envelope::{Envelope, EnvelopeId, EnvelopeKind, Node};
pub use error::{X12Error, X12ErrorKind, X12Result};
pub use hierarchy::{HierarchyBuilder, Placement};
pub use limits::Limits;
pub use parser::{parse, parse_with_options, ParseOptions, ParseOptionsBuilder, RevisionMode};
pub use preprocess::preprocess;
pub use report::{ValidationReport, Violation, ViolationCategory};
pub use revisions::{Revision, SegmentHandler, SegmentRule};
pub use schema::{ElementSpec, SegmentSchema};
pub use segment::Segment;
pub use traverse::{traverse, DocumentVisitor, SegmentPosition, StatsCollector, VisitorContext};
pub use tree::TreeNode;
pub use view::{EnvelopeRef, Group, Interchange, Loop, NodeRef, TransactionSet};
pub use writer::{format_segment, EdiWriter, WriteOptions};
