//! Report catalog: the fixed set of USDA report families the parser understands.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MprError;

/// Identifier of a supported market report.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ReportType {
    /// Boxed Beef Cuts, branded product (weekly).
    BrandedBeef,
    /// Boxed Beef Cuts, ungraded product (weekly).
    UngradedBeef,
    /// National Daily Boxed Beef Cutout and Cuts, afternoon edition.
    DailyAfternoon,
    /// Negotiated pork cuts.
    PorkCuts,
}

/// Table layout family a report is printed in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Layout {
    /// One target section bounded by an end marker.
    Weekly,
    /// Several keyword-announced sections, including ground beef.
    Daily,
    /// Category headers followed by uncoded cut rows.
    Pork,
}

/// Species a report prices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MeatType {
    Beef,
    Pork,
}

impl ReportType {
    /// Every catalog entry, in display order.
    pub const ALL: [ReportType; 4] = [
        ReportType::BrandedBeef,
        ReportType::UngradedBeef,
        ReportType::DailyAfternoon,
        ReportType::PorkCuts,
    ];

    /// Stable identifier used on the command line and in output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BrandedBeef => "branded_beef",
            Self::UngradedBeef => "ungraded_beef",
            Self::DailyAfternoon => "daily_afternoon",
            Self::PorkCuts => "pork_cuts",
        }
    }

    /// Title of the report as published.
    pub fn title(&self) -> &'static str {
        match self {
            Self::BrandedBeef => "Boxed Beef Cuts-Branded Product-Negotiated Sales",
            Self::UngradedBeef => "Boxed Beef Cuts-Ungraded Product",
            Self::DailyAfternoon => {
                "National Daily Boxed Beef Cutout And Boxed Beef Cuts - Afternoon"
            }
            Self::PorkCuts => "Pork Cuts-Negotiated Sales",
        }
    }

    pub fn layout(&self) -> Layout {
        match self {
            Self::BrandedBeef | Self::UngradedBeef => Layout::Weekly,
            Self::DailyAfternoon => Layout::Daily,
            Self::PorkCuts => Layout::Pork,
        }
    }

    pub fn meat_type(&self) -> MeatType {
        match self {
            Self::PorkCuts => MeatType::Pork,
            _ => MeatType::Beef,
        }
    }
}

impl FromStr for ReportType {
    type Err = MprError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim().to_lowercase();
        ReportType::ALL
            .into_iter()
            .find(|t| t.as_str() == key)
            .ok_or_else(|| MprError::UnknownReportType(s.to_string()))
    }
}

impl fmt::Display for ReportType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Layout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Weekly => "weekly",
            Self::Daily => "daily",
            Self::Pork => "pork",
        }
    }
}

impl MeatType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Beef => "beef",
            Self::Pork => "pork",
        }
    }
}

impl fmt::Display for MeatType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
