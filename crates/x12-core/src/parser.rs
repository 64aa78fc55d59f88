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

//! Segment router and document builder.
//!
//! Parsing runs in one pass:
//!
//! 1. [`preprocess`](crate::preprocess) normalizes the raw text.
//! 2. [`discover`](crate::lex::discover) reads the delimiters from the
//!    interchange header.
//! 3. The text is split on the segment terminator and every segment on the
//!    element separator.
//! 4. Each token list is routed by its first token to a constructor and
//!    placed into the envelope tree.
//!
//! Steps 1 and 2 can fail; once the delimiters are known, routing never
//! rejects input. Content problems are left for
//! [`Document::validate`](crate::Document::validate).

use crate::config::DocumentConfiguration;
use crate::document::Document;
use crate::envelope::{Envelope, EnvelopeId, EnvelopeKind, Node};
use crate::error::{X12Error, X12Result};
use crate::hierarchy::HierarchyBuilder;
use crate::lex::{self, INTERCHANGE_ID};
use crate::limits::Limits;
use crate::preprocess::preprocess;
use crate::revisions::{self, Revision, SegmentHandler, SegmentRule};
use crate::schema;
use crate::segment::Segment;
use tracing::debug;

/// How transaction sets pick up a [`Revision`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevisionMode {
    /// Select by ST01 plus ST03, falling back to GS08 when ST03 is empty.
    #[default]
    Auto,
    /// Parse every transaction set generically.
    Disabled,
    /// Apply one revision to every transaction set.
    Force(&'static Revision),
}

/// Parsing options.
///
/// # Examples
///
/// ```
/// use x12_core::{ParseOptions, RevisionMode};
///
/// let opts = ParseOptions::builder()
///     .max_segments(50_000)
///     .revisions(RevisionMode::Disabled)
///     .build();
/// assert_eq!(opts.limits.max_segments, 50_000);
/// ```
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Security limits.
    pub limits: Limits,
    /// Initial configuration; discovered delimiters replace it, and its
    /// version is kept when the header carries none.
    pub default_config: DocumentConfiguration,
    /// Which revision tables apply to transaction sets.
    pub revisions: RevisionMode,
}

impl ParseOptions {
    /// Create a new builder for ParseOptions.
    pub fn builder() -> ParseOptionsBuilder {
        ParseOptionsBuilder::new()
    }
}

/// Builder for [`ParseOptions`].
#[derive(Debug, Clone, Default)]
pub struct ParseOptionsBuilder {
    options: ParseOptions,
}

impl ParseOptionsBuilder {
    /// Create a builder with default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace all limits at once.
    pub fn limits(mut self, limits: Limits) -> Self {
        self.options.limits = limits;
        self
    }

    /// Set the maximum input size in bytes (default: 100MB).
    pub fn max_input_size(mut self, size: usize) -> Self {
        self.options.limits.max_input_size = size;
        self
    }

    /// Set the maximum number of segments (default: 10M).
    pub fn max_segments(mut self, count: usize) -> Self {
        self.options.limits.max_segments = count;
        self
    }

    /// Set the maximum loop nesting depth (default: 64).
    pub fn max_hierarchy_depth(mut self, depth: usize) -> Self {
        self.options.limits.max_hierarchy_depth = depth;
        self
    }

    /// Set the configuration used before the header is read.
    pub fn default_config(mut self, config: DocumentConfiguration) -> Self {
        self.options.default_config = config;
        self
    }

    /// Set how revision tables are selected (default: [`RevisionMode::Auto`]).
    pub fn revisions(mut self, mode: RevisionMode) -> Self {
        self.options.revisions = mode;
        self
    }

    /// Build the options.
    pub fn build(self) -> ParseOptions {
        self.options
    }
}

/// Parse an X12 document with default options.
///
/// # Examples
///
/// ```
/// let text = "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     \
///             *230101*1253*^*00501*000000905*0*T*:~GS*PO*SENDER*RECEIVER*20230101*1253*1*X*004010~\
///             ST*850*0001~BEG*00*SA*123**20230101~SE*3*0001~GE*1*1~IEA*1*000000905~";
/// let doc = x12_core::parse(text).unwrap();
/// assert!(doc.validate().is_valid());
/// assert_eq!(doc.interchange().groups().count(), 1);
/// ```
pub fn parse(text: &str) -> X12Result<Document> {
    parse_with_options(text, ParseOptions::default())
}

/// Parse an X12 document.
///
/// # Errors
///
/// - `Security` when the input exceeds a limit.
/// - `InvalidFileType` when the input does not start with `ISA`.
/// - `SegmentTerminatorNotFound` when ISA16 carries no terminator.
pub fn parse_with_options(text: &str, options: ParseOptions) -> X12Result<Document> {
    let text = preprocess(text, &options.limits)?;
    let mut config = lex::discover(&text)?;
    if config.version.is_empty() {
        config.version = options.default_config.version.clone();
    }
    debug!(
        "Discovered delimiters: element {:?}, segment {:?}, sub-element {:?}",
        config.element_separator, config.segment_terminator, config.sub_element_separator
    );

    let mut builder = DocumentBuilder::new(config.clone(), &options);
    let mut segments = lex::split(&text, config.segment_terminator);
    if let Some(header) = segments.next() {
        builder.interchange_header(header);
    }
    for raw in segments {
        if raw.is_empty() {
            continue;
        }
        builder.route(raw)?;
    }

    let doc = builder.finish(text);
    debug!(
        "Parsed interchange: {} envelopes, {} segments",
        doc.envelopes().len(),
        doc.segment_count()
    );
    Ok(doc)
}

/// Routing state for one parse.
struct DocumentBuilder<'o> {
    doc: Document,
    options: &'o ParseOptions,
    /// Open functional group.
    group: Option<EnvelopeId>,
    /// Open transaction set and the envelope it will be attached to.
    transaction: Option<(EnvelopeId, EnvelopeId)>,
    hierarchy: HierarchyBuilder,
    segments: usize,
}

impl<'o> DocumentBuilder<'o> {
    fn new(config: DocumentConfiguration, options: &'o ParseOptions) -> Self {
        Self {
            doc: Document::new(config),
            options,
            group: None,
            transaction: None,
            hierarchy: HierarchyBuilder::new(options.limits.max_hierarchy_depth),
            segments: 0,
        }
    }

    fn tokens<'t>(&self, raw: &'t str) -> Vec<&'t str> {
        lex::split(raw, self.doc.config().element_separator).collect()
    }

    fn interchange_header(&mut self, raw: &str) {
        let tokens = self.tokens(raw);
        let mut header = Segment::parse(&schema::INTERCHANGE_HEADER, &tokens);
        let sub_element = self.doc.config().sub_element_separator.to_string();
        if let Some(isa16) = header.field_mut("ISA16") {
            isa16.content = sub_element;
        }
        self.segments += 1;
        self.doc.envelope_mut(EnvelopeId::INTERCHANGE).header = header;
    }

    fn route(&mut self, raw: &str) -> X12Result<()> {
        self.segments += 1;
        if self.segments > self.options.limits.max_segments {
            return Err(X12Error::security(format!(
                "too many segments: exceeds limit of {}",
                self.options.limits.max_segments
            )));
        }

        let tokens = self.tokens(raw);
        match tokens[0] {
            INTERCHANGE_ID => debug!("Discarding additional interchange header"),
            "GS" => self.open_group(&tokens),
            "GE" => self.close_group(Some(Segment::parse(&schema::GROUP_TRAILER, &tokens))),
            "ST" => self.open_transaction(&tokens),
            "SE" => self.close_transaction(Some(Segment::parse(
                &schema::TRANSACTION_SET_TRAILER,
                &tokens,
            ))),
            "IEA" => {
                self.doc.envelope_mut(EnvelopeId::INTERCHANGE).trailer =
                    Segment::parse(&schema::INTERCHANGE_TRAILER, &tokens);
            }
            _ => self.body_segment(&tokens)?,
        }
        Ok(())
    }

    fn attach(&mut self, parent: EnvelopeId, child: EnvelopeId) {
        self.doc.envelope_mut(parent).body.push(Node::Envelope(child));
    }

    fn open_group(&mut self, tokens: &[&str]) {
        if self.group.is_some() {
            debug!("Group header while a group is open, closing the open group");
            self.close_group(None);
        }
        let header = Segment::parse(&schema::GROUP_HEADER, tokens);
        let id = self
            .doc
            .alloc(Envelope::new(EnvelopeKind::Group).with_header(header));
        self.group = Some(id);
    }

    /// Close the open group, with `trailer` when one was parsed.
    fn close_group(&mut self, trailer: Option<Segment>) {
        if self.transaction.is_some() {
            debug!("Closing unterminated transaction set");
            self.close_transaction(None);
        }
        match self.group.take() {
            Some(id) => {
                if let Some(trailer) = trailer {
                    self.doc.envelope_mut(id).trailer = trailer;
                }
                self.attach(EnvelopeId::INTERCHANGE, id);
            }
            None if trailer.is_some() => debug!("Discarding group trailer with no open group"),
            None => {}
        }
    }

    fn open_transaction(&mut self, tokens: &[&str]) {
        if self.transaction.is_some() {
            debug!("Transaction set header while one is open, closing the open one");
            self.close_transaction(None);
        }
        let header = Segment::parse(&schema::TRANSACTION_SET_HEADER, tokens);
        let revision = self.select_revision(&header);
        if let Some(revision) = revision {
            debug!(
                "Transaction set {} uses revision {}",
                header.value("ST02"),
                revision.name
            );
        }

        let mut envelope = Envelope::new(EnvelopeKind::TransactionSet).with_header(header);
        envelope.revision = revision;
        let id = self.doc.alloc(envelope);
        let parent = self.group.unwrap_or(EnvelopeId::INTERCHANGE);
        if self.group.is_none() {
            debug!("Transaction set outside a group, attaching to the interchange");
        }
        self.hierarchy.reset();
        self.transaction = Some((id, parent));
    }

    fn select_revision(&self, header: &Segment) -> Option<&'static Revision> {
        match self.options.revisions {
            RevisionMode::Disabled => None,
            RevisionMode::Force(revision) => Some(revision),
            RevisionMode::Auto => {
                let reference = match header.value("ST03") {
                    "" => self
                        .group
                        .map_or("", |g| self.doc.envelope(g).header.value("GS08")),
                    st03 => st03,
                };
                revisions::select(header.value("ST01"), reference)
            }
        }
    }

    fn close_transaction(&mut self, trailer: Option<Segment>) {
        match self.transaction.take() {
            Some((id, parent)) => {
                if let Some(trailer) = trailer {
                    self.doc.envelope_mut(id).trailer = trailer;
                }
                self.attach(parent, id);
                self.hierarchy.reset();
            }
            None if trailer.is_some() => {
                debug!("Discarding transaction set trailer with no open transaction set")
            }
            None => {}
        }
    }

    fn body_segment(&mut self, tokens: &[&str]) -> X12Result<()> {
        let Some((transaction, _)) = self.transaction else {
            debug!("Discarding {} segment outside a transaction set", tokens[0]);
            return Ok(());
        };

        let revision = self.doc.envelope(transaction).revision;
        let rule = revision.and_then(|r| r.rule(tokens[0]));
        match (revision, rule) {
            (Some(revision), Some(rule)) => self.revision_segment(transaction, revision, rule, tokens)?,
            (Some(_), None) => {
                let target = self.hierarchy.current().unwrap_or(transaction);
                self.push_segment(target, Segment::generic(tokens));
            }
            (None, _) => self.push_segment(transaction, Segment::generic(tokens)),
        }
        Ok(())
    }

    fn revision_segment(
        &mut self,
        transaction: EnvelopeId,
        revision: &'static Revision,
        rule: &'static SegmentRule,
        tokens: &[&str],
    ) -> X12Result<()> {
        let segment = Segment::parse(rule.schema, tokens);
        match rule.handler {
            SegmentHandler::TransactionBody => self.push_segment(transaction, segment),
            SegmentHandler::LoopSegment => {
                let target = self.hierarchy.current().unwrap_or(transaction);
                self.push_segment(target, segment);
            }
            SegmentHandler::HierarchicalLevel => {
                self.open_loop(transaction, revision, segment)?;
            }
        }
        Ok(())
    }

    fn open_loop(
        &mut self,
        transaction: EnvelopeId,
        revision: &'static Revision,
        level: Segment,
    ) -> X12Result<()> {
        let (placement, depth) = self.hierarchy.place(level.value("HL02"))?;
        let level_id = level.value("HL01").to_string();

        let mut envelope = Envelope::new(EnvelopeKind::Loop).with_header(level);
        envelope.role = revision.role(depth);
        envelope.revision = Some(revision);
        let id = self.doc.alloc(envelope);

        self.attach(placement.parent().unwrap_or(transaction), id);
        self.hierarchy.open(&level_id, id);
        Ok(())
    }

    fn push_segment(&mut self, target: EnvelopeId, segment: Segment) {
        self.doc.envelope_mut(target).body.push(Node::Segment(segment));
    }

    fn finish(mut self, text: String) -> Document {
        if self.group.is_some() || self.transaction.is_some() {
            debug!("Closing envelopes left open at end of input");
        }
        self.close_group(None);
        self.doc.set_text(text);
        self.doc
    }
}
