//! Section classifiers: one left-to-right state machine per report layout.
//!
//! A classifier sees every line once, in order, and decides whether the line
//! is a data row (and under which section), something to skip, or the end of
//! the readable region.

mod daily;
pub mod markers;
mod pork;
mod weekly;

pub use daily::DailyClassifier;
pub use markers::{SectionMarker, WeeklyTarget};
pub use pork::PorkClassifier;
pub use weekly::WeeklyClassifier;

use serde::Serialize;

use crate::models::RawLine;

use super::rules::ParsedLineFields;

/// Why a line produced no record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// Empty or whitespace-only line.
    Blank,
    /// No section is active yet.
    OutsideSection,
    /// Header, subtotal or footer line.
    Noise,
    /// Line opened a section or the data region.
    SectionHeader,
    /// Line set the current pork category.
    CategoryHeader,
    /// Line inside a section matched no row grammar.
    LineParseMiss,
    /// Pork line that was neither a row nor a category header.
    CategoryHeuristicMiss,
}

/// Result of classifying one line.
#[derive(Debug, Clone, PartialEq)]
pub enum LineOutcome {
    /// A data row and the section it belongs to.
    Row {
        fields: ParsedLineFields,
        category: Option<String>,
    },
    /// The line carries no record.
    Skipped(SkipReason),
    /// Nothing after this line is read.
    Finished,
}

/// A per-layout line classifier.
pub trait SectionClassifier {
    /// Classify the next line of the document.
    fn classify(&mut self, line: &RawLine) -> LineOutcome;
}
