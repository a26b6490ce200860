//! Market report extraction: line rules, section classifiers and the parser façade.

mod assembler;
mod parser;
pub mod rules;
pub mod sections;

pub use assembler::RecordAssembler;
pub use parser::{MarketReportParser, ParseReport, ParseStats};

use crate::models::{RawLine, ReportType};

/// Trait for report parsing.
pub trait ReportParser {
    /// Parse a document's lines as the given report type.
    fn parse_report(&self, lines: &[RawLine], report_type: ReportType) -> ParseReport;
}
