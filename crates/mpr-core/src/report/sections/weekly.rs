//! Weekly layout: one target section, closed by an end marker.

use tracing::{debug, info};

use crate::models::RawLine;
use crate::report::rules::{LineGrammar, StandardCutGrammar, is_noise_line};

use super::markers::WeeklyTarget;
use super::{LineOutcome, SectionClassifier, SkipReason};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WeeklyState {
    Seeking,
    InSection,
    Done,
}

/// Classifier for single-section weekly reports.
#[derive(Debug, Clone)]
pub struct WeeklyClassifier {
    target: WeeklyTarget,
    state: WeeklyState,
    grammar: StandardCutGrammar,
}

impl WeeklyClassifier {
    pub fn new(target: WeeklyTarget) -> Self {
        Self {
            target,
            state: WeeklyState::Seeking,
            grammar: StandardCutGrammar,
        }
    }
}

impl SectionClassifier for WeeklyClassifier {
    fn classify(&mut self, line: &RawLine) -> LineOutcome {
        if self.state == WeeklyState::Done {
            return LineOutcome::Finished;
        }

        let trimmed = line.text.trim();
        let lower = trimmed.to_lowercase();

        // A banner repeated at a page top re-enters rather than closes
        if self.target.section.matches(&lower) {
            self.state = WeeklyState::InSection;
            info!("Found target section at line {}: {}", line.index, trimmed);
            return LineOutcome::Skipped(SkipReason::SectionHeader);
        }

        if self.state == WeeklyState::Seeking {
            return LineOutcome::Skipped(SkipReason::OutsideSection);
        }

        if self.target.ends_at(&lower) {
            self.state = WeeklyState::Done;
            info!(
                "Reached end of {} section at line {}",
                self.target.section.name, line.index
            );
            return LineOutcome::Finished;
        }

        if trimmed.is_empty() {
            return LineOutcome::Skipped(SkipReason::Blank);
        }
        if is_noise_line(trimmed) {
            return LineOutcome::Skipped(SkipReason::Noise);
        }

        match self.grammar.parse_line(trimmed) {
            Some(fields) => LineOutcome::Row {
                fields,
                category: Some(self.target.section.name.to_string()),
            },
            None => {
                debug!("No row grammar matched line {}: {}", line.index, trimmed);
                LineOutcome::Skipped(SkipReason::LineParseMiss)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::report::sections::markers::{BRANDED_BEEF, UNGRADED_BEEF};

    fn run(target: WeeklyTarget, lines: &[&str]) -> Vec<LineOutcome> {
        let mut classifier = WeeklyClassifier::new(target);
        RawLine::from_strs(lines)
            .iter()
            .map(|line| classifier.classify(line))
            .collect()
    }

    #[test]
    fn test_rows_only_inside_section() {
        let outcomes = run(
            BRANDED_BEEF,
            &[
                "109E 1 Rib, ribeye, lip-on, bn-in 55 119,191 1,266.00 - 1,616.00 1,359.01",
                "Upper 2/3 Choice Items Cuts",
                "IMPS  Sub-Primal  Trades  Pounds  Price Range  Weighted Avg",
                "109E 1 Rib, ribeye, lip-on, bn-in 55 119,191 1,266.00 - 1,616.00 1,359.01",
                "",
                "not a row",
            ],
        );

        assert_eq!(outcomes[0], LineOutcome::Skipped(SkipReason::OutsideSection));
        assert_eq!(outcomes[1], LineOutcome::Skipped(SkipReason::SectionHeader));
        assert_eq!(outcomes[2], LineOutcome::Skipped(SkipReason::Noise));
        assert!(matches!(
            &outcomes[3],
            LineOutcome::Row { category: Some(c), .. } if c == "Upper 2/3 Choice"
        ));
        assert_eq!(outcomes[4], LineOutcome::Skipped(SkipReason::Blank));
        assert_eq!(outcomes[5], LineOutcome::Skipped(SkipReason::LineParseMiss));
    }

    #[test]
    fn test_end_marker_is_terminal() {
        let outcomes = run(
            UNGRADED_BEEF,
            &[
                "Ungraded Cuts, Fat Limitations 1-6",
                "Branded Product",
                "112A 3 Rib, ribeye, lip-on, bnls 20 50,000 900.00 - 950.00 925.00",
                "Ungraded Cuts, Fat Limitations 1-6",
            ],
        );

        assert_eq!(outcomes[1], LineOutcome::Finished);
        assert_eq!(outcomes[2], LineOutcome::Finished);
        assert_eq!(outcomes[3], LineOutcome::Finished);
    }

    #[test]
    fn test_end_marker_ignored_before_section() {
        let outcomes = run(
            BRANDED_BEEF,
            &["Lower 1/3 Choice Items", "Upper 2/3 Choice Items Cuts"],
        );

        assert_eq!(outcomes[0], LineOutcome::Skipped(SkipReason::OutsideSection));
        assert_eq!(outcomes[1], LineOutcome::Skipped(SkipReason::SectionHeader));
    }
}
