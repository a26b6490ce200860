//! Report parser façade: runs a layout classifier over a document's lines.

use std::collections::BTreeMap;
use std::time::Instant;

use serde::Serialize;
use tracing::{debug, info, info_span, warn};

use crate::error::Result;
use crate::models::config::{ParserConfig, SectionMatch, ZeroValuePolicy};
use crate::models::{Layout, PricingRecord, RawLine, ReportType};
use crate::pdf::LineSource;

use super::ReportParser;
use super::assembler::RecordAssembler;
use super::sections::markers::{BRANDED_BEEF, DAILY_SECTIONS, UNGRADED_BEEF};
use super::sections::{
    DailyClassifier, LineOutcome, PorkClassifier, SectionClassifier, SkipReason, WeeklyClassifier,
};

/// Counters describing one parse call.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ParseStats {
    /// Lines handed to the classifier.
    pub lines_seen: usize,
    /// Records emitted.
    pub records: usize,
    /// Lines that produced no record, by reason.
    pub skipped: BTreeMap<SkipReason, usize>,
    /// Records per category; uncategorized rows are not counted here.
    pub per_category: BTreeMap<String, usize>,
    /// Scanning stopped at an end marker.
    pub terminated_early: bool,
}

/// Records and diagnostics from one parse call.
#[derive(Debug, Clone, Serialize)]
pub struct ParseReport {
    pub report_type: ReportType,
    pub records: Vec<PricingRecord>,
    pub stats: ParseStats,
    pub processing_time_ms: u64,
}

/// Layout-aware parser for USDA market reports.
///
/// Holds only configuration; every call starts from fresh classifier state.
#[derive(Debug, Clone, Default)]
pub struct MarketReportParser {
    section_match: SectionMatch,
    zero_values: ZeroValuePolicy,
}

impl MarketReportParser {
    /// Create a parser with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a parser from configuration.
    pub fn from_config(config: &ParserConfig) -> Self {
        Self::new()
            .with_section_match(config.daily_section_match)
            .with_zero_values(config.pork_zero_values)
    }

    /// Set daily section marker resolution.
    pub fn with_section_match(mut self, policy: SectionMatch) -> Self {
        self.section_match = policy;
        self
    }

    /// Set zero handling for pork rows.
    pub fn with_zero_values(mut self, policy: ZeroValuePolicy) -> Self {
        self.zero_values = policy;
        self
    }

    /// Parse lines for a report type given by identifier.
    ///
    /// An unrecognized identifier logs a warning and yields no records.
    pub fn parse(&self, lines: &[RawLine], report_type: &str) -> Vec<PricingRecord> {
        match report_type.parse::<ReportType>() {
            Ok(report_type) => self.parse_report(lines, report_type).records,
            Err(e) => {
                warn!("{}", e);
                Vec::new()
            }
        }
    }

    /// Parse already extracted text, one line per row and form feeds between pages.
    pub fn parse_text(&self, text: &str, report_type: &str) -> Vec<PricingRecord> {
        self.parse(&RawLine::from_text(text), report_type)
    }

    /// Pull lines from a source and parse them.
    ///
    /// Extraction failures abort the call; nothing is retried here.
    pub fn parse_source(
        &self,
        source: &dyn LineSource,
        report_type: ReportType,
    ) -> Result<ParseReport> {
        let lines = source.lines()?;
        Ok(self.parse_report(&lines, report_type))
    }

    fn classifier_for(&self, report_type: ReportType) -> Box<dyn SectionClassifier> {
        match report_type.layout() {
            Layout::Weekly => {
                let target = match report_type {
                    ReportType::UngradedBeef => UNGRADED_BEEF,
                    _ => BRANDED_BEEF,
                };
                Box::new(WeeklyClassifier::new(target))
            }
            Layout::Daily => {
                Box::new(DailyClassifier::new(DAILY_SECTIONS).with_policy(self.section_match))
            }
            Layout::Pork => Box::new(PorkClassifier::new().with_zero_values(self.zero_values)),
        }
    }
}

impl ReportParser for MarketReportParser {
    fn parse_report(&self, lines: &[RawLine], report_type: ReportType) -> ParseReport {
        let start = Instant::now();
        let _span = info_span!("parse", report_type = %report_type).entered();

        info!("Processing {} lines for {}", lines.len(), report_type);

        let mut classifier = self.classifier_for(report_type);
        let assembler = RecordAssembler::new(report_type);
        let mut records = Vec::new();
        let mut stats = ParseStats::default();

        for line in lines {
            stats.lines_seen += 1;

            match classifier.classify(line) {
                LineOutcome::Row { fields, category } => {
                    match assembler.assemble(fields, category) {
                        Some(record) => {
                            debug!(
                                "[{}] Line {}: {} - Avg: {:?}, Range: {:?}-{:?}, Volume: {:?}",
                                record.category.as_deref().unwrap_or("-"),
                                line.index,
                                record.product_name,
                                record.price,
                                record.low_price,
                                record.high_price,
                                record.volume
                            );
                            if let Some(category) = &record.category {
                                *stats.per_category.entry(category.clone()).or_default() += 1;
                            }
                            records.push(record);
                        }
                        None => {
                            *stats.skipped.entry(SkipReason::LineParseMiss).or_default() += 1;
                        }
                    }
                }
                LineOutcome::Skipped(reason) => {
                    *stats.skipped.entry(reason).or_default() += 1;
                }
                LineOutcome::Finished => {
                    stats.terminated_early = true;
                    break;
                }
            }
        }

        stats.records = records.len();

        info!("Extracted {} pricing records from {}", records.len(), report_type);
        for (category, count) in &stats.per_category {
            info!("  {}: {} records", category, count);
        }

        ParseReport {
            report_type,
            records,
            stats,
            processing_time_ms: start.elapsed().as_millis() as u64,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_report_type_yields_nothing() {
        let parser = MarketReportParser::new();
        let lines = RawLine::from_strs(&[
            "Upper 2/3 Choice Items Cuts",
            "109E 1 Rib, ribeye, lip-on, bn-in 55 119,191 1,266.00 - 1,616.00 1,359.01",
        ]);

        assert!(parser.parse(&lines, "lamb_weekly").is_empty());
        assert_eq!(parser.parse(&lines, "branded_beef").len(), 1);
    }

    #[test]
    fn test_stats_track_skips() {
        let parser = MarketReportParser::new();
        let lines = RawLine::from_strs(&[
            "National Weekly Boxed Beef",
            "Upper 2/3 Choice Items Cuts",
            "109E 1 Rib, ribeye, lip-on, bn-in 55 119,191 1,266.00 - 1,616.00 1,359.01",
            "Lower 1/3 Choice Items",
            "112A 3 Rib, ribeye, lip-on, bnls 20 50,000 900.00 - 950.00 925.00",
        ]);

        let report = parser.parse_report(&lines, ReportType::BrandedBeef);

        assert_eq!(report.stats.lines_seen, 4);
        assert_eq!(report.stats.records, 1);
        assert!(report.stats.terminated_early);
        assert_eq!(report.stats.skipped[&SkipReason::OutsideSection], 1);
        assert_eq!(report.stats.per_category["Upper 2/3 Choice"], 1);
    }

    #[test]
    fn test_from_config() {
        let config = ParserConfig {
            daily_section_match: SectionMatch::LastMatch,
            pork_zero_values: ZeroValuePolicy::Accept,
        };
        let parser = MarketReportParser::from_config(&config);

        assert_eq!(parser.section_match, SectionMatch::LastMatch);
        assert_eq!(parser.zero_values, ZeroValuePolicy::Accept);
    }
}
