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

//! Valid interchanges.

/// 271 eligibility response under 005010X279A1, three levels deep.
///
/// TRN, N3, DMG and EB have no schema in the revision and are kept as
/// generic segments inside the subscriber loop.
pub const ELIGIBILITY_RESPONSE: &str = concat!(
    "ISA*00*          *00*          *ZZ*SENDERID       *ZZ*RECEIVERID     *230101*1253*^*00501*000000905*0*T*:~",
    "GS*HB*SENDER*RECEIVER*20230101*1253*905*X*005010X279A1~",
    "ST*271*0001*005010X279A1~",
    "BHT*0022*11*10001234*20230101*1319~",
    "HL*1**20*1~",
    "NM1*PR*2*ABC COMPANY*****PI*842610001~",
    "HL*2*1*21*1~",
    "NM1*1P*2*BONE AND JOINT CLINIC*****SV*2000035~",
    "HL*3*2*22*0~",
    "TRN*2*93175-012547*9877281234~",
    "NM1*IL*1*SMITH*JOHN****MI*123456789~",
    "N3*15197 BROADWAY AVENUE~",
    "DMG*D8*19430519~",
    "EB*1**30**GOLD 123 PLAN~",
    "SE*13*0001~",
    "GE*1*905~",
    "IEA*1*000000905~",
);

/// 270 eligibility inquiry with a dependent and a second subscriber that
/// returns to the receiver level.
pub const ELIGIBILITY_INQUIRY: &str = concat!(
    "ISA*00*          *00*          *ZZ*SUBMITTERID    *ZZ*PAYERID        *230215*0930*^*00501*000000101*1*P*:~",
    "GS*HS*SUBMITTER*PAYER*20230215*0930*101*X*005010X279A1~",
    "ST*270*1234*005010X279A1~",
    "BHT*0022*13*10001234*20230215*0930~",
    "HL*1**20*1~",
    "NM1*PR*2*ABC COMPANY*****PI*842610001~",
    "HL*2*1*21*1~",
    "NM1*1P*2*BONE AND JOINT CLINIC*****SV*2000035~",
    "HL*3*2*22*1~",
    "NM1*IL*1*SMITH*ROBERT****MI*11122333301~",
    "TRN*1*93175-012547*9877281234~",
    "DMG*D8*19430519~",
    "HL*4*3*23*0~",
    "NM1*03*1*SMITH*MARY****MI*11122333302~",
    "EQ*30~",
    "HL*5*2*22*0~",
    "NM1*IL*1*DOE*JOHN****MI*11122333303~",
    "EQ*30~",
    "SE*17*1234~",
    "GE*1*101~",
    "IEA*1*000000101~",
);

/// 850 purchase order with no registered revision.
pub const PURCHASE_ORDER: &str = concat!(
    "ISA*00*          *00*          *ZZ*SUBMITTERS.ID  *ZZ*RECEIVERS.ID   *030101*1253*^*00501*000000905*1*T*:~",
    "GS*PO*4405197800*999999999*20101127*1719*1421*X*004010VICS~",
    "ST*850*000000010~",
    "BEG*00*SA*08292233294**20101127*610385385~",
    "REF*DP*038~",
    "PO1*1*120*EA*9.25*TE*CB*065322-117*PR*RO*VN*AB3542~",
    "CTT*1~",
    "SE*6*000000010~",
    "GE*1*1421~",
    "IEA*1*000000905~",
);

/// Two groups, three transaction sets, `|` element separator and `>`
/// sub-element separator.
pub const MULTI_GROUP: &str = concat!(
    "ISA|00|          |00|          |ZZ|SENDERID       |ZZ|RECEIVERID     |230301|0800|U|00401|000000777|0|T|>~",
    "GS|IN|SENDER|RECEIVER|20230301|0800|1|X|004010~",
    "ST|810|0001~",
    "BIG|20230301|INV001~",
    "TDS|10000~",
    "SE|4|0001~",
    "ST|810|0002~",
    "BIG|20230301|INV002~",
    "TDS|25000~",
    "SE|4|0002~",
    "GE|2|1~",
    "GS|PO|SENDER|RECEIVER|20230301|0800|2|X|004010~",
    "ST|850|0003~",
    "BEG|00|SA|PO123||20230301~",
    "PO1|1|10|EA|2.50||VP|WIDGET>BLUE~",
    "SE|4|0003~",
    "GE|1|2~",
    "IEA|2|000000777~",
);

/// [`PURCHASE_ORDER`] with a CRLF after every segment and a leading BOM.
pub const PURCHASE_ORDER_WITH_LINE_BREAKS: &str = concat!(
    "\u{FEFF}",
    "ISA*00*          *00*          *ZZ*SUBMITTERS.ID  *ZZ*RECEIVERS.ID   *030101*1253*^*00501*000000905*1*T*:~\r\n",
    "GS*PO*4405197800*999999999*20101127*1719*1421*X*004010VICS~\r\n",
    "ST*850*000000010~\r\n",
    "BEG*00*SA*08292233294**20101127*610385385~\r\n",
    "REF*DP*038~\r\n",
    "PO1*1*120*EA*9.25*TE*CB*065322-117*PR*RO*VN*AB3542~\r\n",
    "CTT*1~\r\n",
    "SE*6*000000010~\r\n",
    "GE*1*1421~\r\n",
    "IEA*1*000000905~\r\n",
);

pub fn eligibility_response() -> &'static str {
    ELIGIBILITY_RESPONSE
}

pub fn eligibility_inquiry() -> &'static str {
    ELIGIBILITY_INQUIRY
}

pub fn purchase_order() -> &'static str {
    PURCHASE_ORDER
}

pub fn multi_group() -> &'static str {
    MULTI_GROUP
}

pub fn purchase_order_with_line_breaks() -> &'static str {
    PURCHASE_ORDER_WITH_LINE_BREAKS
}
