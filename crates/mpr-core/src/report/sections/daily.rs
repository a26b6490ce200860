//! Daily layout: several sections, each announced by a keyword header.
//!
//! There is no end marker. Every line is checked against the marker list, so
//! a later header anywhere in the document reassigns the current section.

use tracing::{debug, info};

use crate::models::RawLine;
use crate::models::config::SectionMatch;
use crate::report::rules::{GroundBeefGrammar, LineGrammar, StandardCutGrammar, is_noise_line};

use super::markers::{GROUND_BEEF_SECTION, SectionMarker};
use super::{LineOutcome, SectionClassifier, SkipReason};

/// Classifier for multi-section daily reports.
#[derive(Debug, Clone)]
pub struct DailyClassifier {
    markers: &'static [SectionMarker],
    policy: SectionMatch,
    current: Option<&'static str>,
}

impl DailyClassifier {
    pub fn new(markers: &'static [SectionMarker]) -> Self {
        Self {
            markers,
            policy: SectionMatch::default(),
            current: None,
        }
    }

    /// Set how a line matching several markers is resolved.
    pub fn with_policy(mut self, policy: SectionMatch) -> Self {
        self.policy = policy;
        self
    }

    fn match_marker(&self, lower: &str) -> Option<&'static SectionMarker> {
        let mut hits = self.markers.iter().filter(|m| m.matches(lower));
        match self.policy {
            SectionMatch::FirstMatch => hits.next(),
            SectionMatch::LastMatch => hits.next_back(),
        }
    }
}

impl SectionClassifier for DailyClassifier {
    fn classify(&mut self, line: &RawLine) -> LineOutcome {
        let trimmed = line.text.trim();
        let lower = trimmed.to_lowercase();

        if let Some(marker) = self.match_marker(&lower) {
            self.current = Some(marker.name);
            info!("Found section at line {}: {}", line.index, marker.name);
            return LineOutcome::Skipped(SkipReason::SectionHeader);
        }

        let Some(section) = self.current else {
            return LineOutcome::Skipped(SkipReason::OutsideSection);
        };

        if trimmed.is_empty() {
            return LineOutcome::Skipped(SkipReason::Blank);
        }
        if is_noise_line(trimmed) {
            return LineOutcome::Skipped(SkipReason::Noise);
        }

        let parsed = if section == GROUND_BEEF_SECTION {
            GroundBeefGrammar.parse_line(trimmed)
        } else {
            StandardCutGrammar.parse_line(trimmed)
        };

        match parsed {
            Some(fields) => LineOutcome::Row {
                fields,
                category: Some(section.to_string()),
            },
            None => {
                debug!("[{}] No row grammar matched line {}: {}", section, line.index, trimmed);
                LineOutcome::Skipped(SkipReason::LineParseMiss)
            }
        }
    }
}
