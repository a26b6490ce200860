//! Pricing records and the raw text lines they are parsed from.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::report::{MeatType, ReportType};

/// Form feed emitted by text extractors between pages.
const PAGE_BREAK: char = '\u{000c}';

/// One line of text recovered from a report document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLine {
    /// Line content as extracted, untrimmed.
    pub text: String,
    /// Page number (1-indexed).
    pub page: u32,
    /// Position within the whole extracted sequence.
    pub index: usize,
}

impl RawLine {
    pub fn new(text: impl Into<String>, page: u32, index: usize) -> Self {
        Self {
            text: text.into(),
            page,
            index,
        }
    }

    /// Split extracted text into lines, starting a new page at each form feed.
    pub fn from_text(text: &str) -> Vec<RawLine> {
        let mut lines = Vec::new();
        for (page_idx, page) in text.split(PAGE_BREAK).enumerate() {
            for line in page.lines() {
                let index = lines.len();
                lines.push(RawLine::new(line, page_idx as u32 + 1, index));
            }
        }
        lines
    }

    /// Build lines from already split strings, all on page 1.
    pub fn from_strs<S: AsRef<str>>(lines: &[S]) -> Vec<RawLine> {
        lines
            .iter()
            .enumerate()
            .map(|(index, line)| RawLine::new(line.as_ref(), 1, index))
            .collect()
    }
}

/// A structured price observation for one product row.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PricingRecord {
    /// Display name; code and description joined for coded cuts.
    pub product_name: String,

    /// IMPS code, absent for ground beef and pork rows.
    pub product_code: Option<String>,

    /// Weighted average price.
    pub price: Option<Decimal>,

    /// Low end of the reported range.
    pub low_price: Option<Decimal>,

    /// High end of the reported range.
    pub high_price: Option<Decimal>,

    /// Volume in pounds.
    pub volume: Option<u64>,

    /// Report the row was parsed from.
    pub report_type: ReportType,

    /// Section or category active when the row was read.
    pub category: Option<String>,

    /// Species derived from the report type.
    pub meat_type: MeatType,

    /// Row metadata: trade count, raw code, raw description.
    #[serde(default)]
    pub additional_data: BTreeMap<String, serde_json::Value>,
}

impl PricingRecord {
    /// Number of trades backing the price, when the layout reports it.
    pub fn num_trades(&self) -> Option<u64> {
        self.additional_data.get("num_trades").and_then(|v| v.as_u64())
    }

    /// Sub-primal description as printed in the report.
    pub fn sub_primal(&self) -> Option<&str> {
        self.additional_data.get("sub_primal").and_then(|v| v.as_str())
    }
}
