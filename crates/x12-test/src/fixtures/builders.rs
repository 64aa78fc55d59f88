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

//! Builder pattern for generating interchanges.
//!
//! The builders produce raw EDI text. Counts and trailer control numbers are
//! computed from what was added unless explicitly overridden, which is how
//! the error fixtures introduce exactly one inconsistency.

use x12_core::DocumentConfiguration;

/// Builder for a complete ISA/IEA interchange.
///
/// # Examples
///
/// ```
/// use x12_test::fixtures::builders::{GroupBuilder, InterchangeBuilder, TransactionBuilder};
///
/// let text = InterchangeBuilder::new()
///     .group(
///         GroupBuilder::new("PO", "1").transaction(
///             TransactionBuilder::new("850", "0001").segment(&["BEG", "00", "SA", "123"]),
///         ),
///     )
///     .build();
///
/// let doc = x12_core::parse(&text).unwrap();
/// assert!(doc.validate().is_valid());
/// ```
#[derive(Debug, Clone)]
pub struct InterchangeBuilder {
    config: DocumentConfiguration,
    sender: String,
    receiver: String,
    control_number: String,
    repetition_separator: char,
    groups: Vec<GroupBuilder>,
    declared_groups: Option<String>,
    trailer_control_number: Option<String>,
    line_breaks: bool,
}

impl Default for InterchangeBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl InterchangeBuilder {
    pub fn new() -> Self {
        Self {
            config: DocumentConfiguration::default().with_sub_element_separator(':'),
            sender: "SENDERID".to_string(),
            receiver: "RECEIVERID".to_string(),
            control_number: "000000001".to_string(),
            repetition_separator: '^',
            groups: Vec::new(),
            declared_groups: None,
            trailer_control_number: None,
            line_breaks: false,
        }
    }

    /// Delimiters and ISA12 version.
    pub fn config(mut self, config: DocumentConfiguration) -> Self {
        self.config = config;
        self
    }

    pub fn sender(mut self, sender: impl Into<String>) -> Self {
        self.sender = sender.into();
        self
    }

    pub fn receiver(mut self, receiver: impl Into<String>) -> Self {
        self.receiver = receiver.into();
        self
    }

    /// ISA13; zero-padded to nine digits when numeric.
    pub fn control_number(mut self, number: impl Into<String>) -> Self {
        self.control_number = number.into();
        self
    }

    pub fn repetition_separator(mut self, separator: char) -> Self {
        self.repetition_separator = separator;
        self
    }

    pub fn group(mut self, group: GroupBuilder) -> Self {
        self.groups.push(group);
        self
    }

    /// Override IEA01.
    pub fn declared_groups(mut self, count: impl Into<String>) -> Self {
        self.declared_groups = Some(count.into());
        self
    }

    /// Override IEA02.
    pub fn trailer_control_number(mut self, number: impl Into<String>) -> Self {
        self.trailer_control_number = Some(number.into());
        self
    }

    /// Put a CRLF after every segment terminator.
    pub fn line_breaks(mut self, line_breaks: bool) -> Self {
        self.line_breaks = line_breaks;
        self
    }

    pub fn build(&self) -> String {
        let control = match self.control_number.parse::<u64>() {
            Ok(n) => format!("{:09}", n),
            Err(_) => self.control_number.clone(),
        };
        let isa16 = self.config.sub_element_separator.to_string();
        let repetition = self.repetition_separator.to_string();
        let sender = format!("{:<15}", self.sender);
        let receiver = format!("{:<15}", self.receiver);

        let mut segments: Vec<Vec<String>> = Vec::new();
        segments.push(strings(&[
            "ISA",
            "00",
            "          ",
            "00",
            "          ",
            "ZZ",
            &sender,
            "ZZ",
            &receiver,
            "230101",
            "1253",
            &repetition,
            &self.config.version,
            &control,
            "0",
            "T",
            &isa16,
        ]));
        for group in &self.groups {
            segments.extend(group.segments());
        }
        let declared = self
            .declared_groups
            .clone()
            .unwrap_or_else(|| self.groups.len().to_string());
        let trailer_control = self.trailer_control_number.clone().unwrap_or(control);
        segments.push(vec!["IEA".to_string(), declared, trailer_control]);

        let mut out = String::new();
        for segment in segments {
            out.push_str(&segment.join(&self.config.element_separator.to_string()));
            out.push(self.config.segment_terminator);
            if self.line_breaks {
                out.push_str("\r\n");
            }
        }
        out
    }
}

/// Builder for a GS/GE functional group.
#[derive(Debug, Clone)]
pub struct GroupBuilder {
    functional_id: String,
    control_number: String,
    version: String,
    transactions: Vec<TransactionBuilder>,
    declared_transactions: Option<String>,
    trailer_control_number: Option<String>,
}

impl GroupBuilder {
    pub fn new(functional_id: impl Into<String>, control_number: impl Into<String>) -> Self {
        Self {
            functional_id: functional_id.into(),
            control_number: control_number.into(),
            version: "004010".to_string(),
            transactions: Vec::new(),
            declared_transactions: None,
            trailer_control_number: None,
        }
    }

    /// GS08.
    pub fn version(mut self, version: impl Into<String>) -> Self {
        self.version = version.into();
        self
    }

    pub fn transaction(mut self, transaction: TransactionBuilder) -> Self {
        self.transactions.push(transaction);
        self
    }

    /// Override GE01.
    pub fn declared_transactions(mut self, count: impl Into<String>) -> Self {
        self.declared_transactions = Some(count.into());
        self
    }

    /// Override GE02.
    pub fn trailer_control_number(mut self, number: impl Into<String>) -> Self {
        self.trailer_control_number = Some(number.into());
        self
    }

    fn segments(&self) -> Vec<Vec<String>> {
        let mut out = vec![strings(&[
            "GS",
            &self.functional_id,
            "SENDER",
            "RECEIVER",
            "20230101",
            "1253",
            &self.control_number,
            "X",
            &self.version,
        ])];
        for transaction in &self.transactions {
            out.extend(transaction.segments());
        }
        out.push(vec![
            "GE".to_string(),
            self.declared_transactions
                .clone()
                .unwrap_or_else(|| self.transactions.len().to_string()),
            self.trailer_control_number
                .clone()
                .unwrap_or_else(|| self.control_number.clone()),
        ]);
        out
    }
}

/// Builder for an ST/SE transaction set.
#[derive(Debug, Clone)]
pub struct TransactionBuilder {
    identifier: String,
    control_number: String,
    reference: Option<String>,
    body: Vec<Vec<String>>,
    declared_segments: Option<String>,
    trailer_control_number: Option<String>,
}

impl TransactionBuilder {
    pub fn new(identifier: impl Into<String>, control_number: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            control_number: control_number.into(),
            reference: None,
            body: Vec::new(),
            declared_segments: None,
            trailer_control_number: None,
        }
    }

    /// ST03 implementation convention reference.
    pub fn reference(mut self, reference: impl Into<String>) -> Self {
        self.reference = Some(reference.into());
        self
    }

    /// Append a body segment given as its element tokens.
    pub fn segment(mut self, tokens: &[&str]) -> Self {
        self.body.push(strings(tokens));
        self
    }

    /// Append a HL segment.
    pub fn level(self, id: &str, parent: &str, code: &str, has_children: bool) -> Self {
        self.segment(&["HL", id, parent, code, if has_children { "1" } else { "0" }])
    }

    /// Override SE01.
    pub fn declared_segments(mut self, count: impl Into<String>) -> Self {
        self.declared_segments = Some(count.into());
        self
    }

    /// Override SE02.
    pub fn trailer_control_number(mut self, number: impl Into<String>) -> Self {
        self.trailer_control_number = Some(number.into());
        self
    }

    fn segments(&self) -> Vec<Vec<String>> {
        let mut header = strings(&["ST", &self.identifier, &self.control_number]);
        if let Some(reference) = &self.reference {
            header.push(reference.clone());
        }
        let mut out = vec![header];
        out.extend(self.body.iter().cloned());
        out.push(vec![
            "SE".to_string(),
            self.declared_segments
                .clone()
                .unwrap_or_else(|| (self.body.len() + 2).to_string()),
            self.trailer_control_number
                .clone()
                .unwrap_or_else(|| self.control_number.clone()),
        ]);
        out
    }
}

fn strings(tokens: &[&str]) -> Vec<String> {
    tokens.iter().map(|t| t.to_string()).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn simple() -> InterchangeBuilder {
        InterchangeBuilder::new().group(
            GroupBuilder::new("PO", "7")
                .transaction(TransactionBuilder::new("850", "0001").segment(&["BEG", "00", "SA"])),
        )
    }

    #[test]
    fn test_build_computes_trailers() {
        let text = simple().build();
        assert!(text.starts_with("ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *"));
        assert!(text.contains("*000000001*0*T*:~GS*PO*"));
        assert!(text.contains("ST*850*0001~BEG*00*SA~SE*3*0001~GE*1*7~"));
        assert!(text.ends_with("IEA*1*000000001~"));
    }

    #[test]
    fn test_build_overrides() {
        let text = simple()
            .declared_groups("3")
            .trailer_control_number("000000002")
            .build();
        assert!(text.ends_with("IEA*3*000000002~"));
    }

    #[test]
    fn test_build_custom_delimiters() {
        let config = DocumentConfiguration::new("00401", '|', '\'', '>');
        let text = simple().config(config).build();
        assert!(text.starts_with("ISA|00|"));
        assert!(text.contains("|00401|000000001|0|T|>'GS|PO|"));
    }

    #[test]
    fn test_build_line_breaks() {
        let text = simple().line_breaks(true).build();
        assert_eq!(text.lines().count(), 7);
    }

    #[test]
    fn test_reference_and_levels() {
        let text = InterchangeBuilder::new()
            .group(
                GroupBuilder::new("HB", "1").version("005010X279A1").transaction(
                    TransactionBuilder::new("271", "0001")
                        .reference("005010X279A1")
                        .level("1", "", "20", true),
                ),
            )
            .build();
        assert!(text.contains("ST*271*0001*005010X279A1~HL*1**20*1~SE*3*0001~"));
    }
}
