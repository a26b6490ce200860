//! Pork layout: a column header opens the data region, then category
//! headers label the rows that follow them.

use tracing::info;

use crate::models::RawLine;
use crate::models::config::ZeroValuePolicy;
use crate::report::rules::{LineGrammar, PorkCutGrammar, is_category_header, is_noise_line};

use super::markers::PORK_DATA_START;
use super::{LineOutcome, SectionClassifier, SkipReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum PorkState {
    SeekingDataStart,
    Parsing,
}

/// Classifier for category-driven pork reports.
#[derive(Debug, Clone)]
pub struct PorkClassifier {
    state: PorkState,
    grammar: PorkCutGrammar,
    category: Option<String>,
}

impl PorkClassifier {
    pub fn new() -> Self {
        Self {
            state: PorkState::SeekingDataStart,
            grammar: PorkCutGrammar::new(),
            category: None,
        }
    }

    /// Set how zero volume or prices are treated.
    pub fn with_zero_values(mut self, policy: ZeroValuePolicy) -> Self {
        self.grammar = self.grammar.with_zero_values(policy);
        self
    }
}

impl Default for PorkClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl SectionClassifier for PorkClassifier {
    fn classify(&mut self, line: &RawLine) -> LineOutcome {
        let trimmed = line.text.trim();
        if trimmed.is_empty() {
            return LineOutcome::Skipped(SkipReason::Blank);
        }

        // Checked ahead of the noise filter: the marker row is itself a header
        let lower = trimmed.to_lowercase();
        if PORK_DATA_START.iter().all(|term| lower.contains(term)) {
            self.state = PorkState::Parsing;
            info!("Found data section header at line {}: {}", line.index, trimmed);
            return LineOutcome::Skipped(SkipReason::SectionHeader);
        }

        if self.state == PorkState::SeekingDataStart {
            return LineOutcome::Skipped(SkipReason::OutsideSection);
        }

        if is_noise_line(trimmed) {
            return LineOutcome::Skipped(SkipReason::Noise);
        }

        if let Some(fields) = self.grammar.parse_line(trimmed) {
            return LineOutcome::Row {
                fields,
                category: self.category.clone(),
            };
        }

        if is_category_header(trimmed) {
            info!("Found category header at line {}: {}", line.index, trimmed);
            self.category = Some(trimmed.to_string());
            return LineOutcome::Skipped(SkipReason::CategoryHeader);
        }

        LineOutcome::Skipped(SkipReason::CategoryHeuristicMiss)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(classifier: &mut PorkClassifier, lines: &[&str]) -> Vec<LineOutcome> {
        RawLine::from_strs(lines)
            .iter()
            .map(|line| classifier.classify(line))
            .collect()
    }

    #[test]
    fn test_nothing_read_before_data_start() {
        let mut classifier = PorkClassifier::new();
        let outcomes = run(
            &mut classifier,
            &[
                "Loin",
                "1/4 Trimmed Loin VAC 171,141 92.50 - 109.90 97.72",
                "Item   Pounds   Price Range   Wtd Avg",
                "Loin",
                "1/4 Trimmed Loin VAC 171,141 92.50 - 109.90 97.72",
            ],
        );

        assert_eq!(outcomes[0], LineOutcome::Skipped(SkipReason::OutsideSection));
        assert_eq!(outcomes[1], LineOutcome::Skipped(SkipReason::OutsideSection));
        assert_eq!(outcomes[2], LineOutcome::Skipped(SkipReason::SectionHeader));
        assert_eq!(outcomes[3], LineOutcome::Skipped(SkipReason::CategoryHeader));
        assert!(matches!(
            &outcomes[4],
            LineOutcome::Row { category: Some(c), .. } if c == "Loin"
        ));
    }

    #[test]
    fn test_rows_before_any_category() {
        let mut classifier = PorkClassifier::new();
        let outcomes = run(
            &mut classifier,
            &["Pounds Price", "Spareribs 42,000 150.00 - 170.00 161.20"],
        );

        assert!(matches!(&outcomes[1], LineOutcome::Row { category: None, .. }));
    }

    #[test]
    fn test_zero_rows_fall_through_to_heuristic() {
        let mut classifier = PorkClassifier::new();
        let outcomes = run(
            &mut classifier,
            &["Pounds Price", "Loin", "1/4 Trimmed Loin VAC 171,141 0.00 - 109.90 97.72"],
        );

        assert_eq!(
            outcomes[2],
            LineOutcome::Skipped(SkipReason::CategoryHeuristicMiss)
        );

        let mut lenient = PorkClassifier::new().with_zero_values(ZeroValuePolicy::Accept);
        let outcomes = run(
            &mut lenient,
            &["Pounds Price", "Loin", "1/4 Trimmed Loin VAC 171,141 0.00 - 109.90 97.72"],
        );
        assert!(matches!(&outcomes[2], LineOutcome::Row { .. }));
    }

    #[test]
    fn test_noise_inside_data_region() {
        let mut classifier = PorkClassifier::new();
        let outcomes = run(&mut classifier, &["Pounds Price", "Total 1,203,334", "Page 2"]);

        assert_eq!(outcomes[1], LineOutcome::Skipped(SkipReason::Noise));
        assert_eq!(outcomes[2], LineOutcome::Skipped(SkipReason::Noise));
    }
}
