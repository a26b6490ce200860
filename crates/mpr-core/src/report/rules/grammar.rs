//! Row grammars for the three table shapes found in market reports.
//!
//! Columns are inferred from token order, not from visual alignment. A grammar
//! either matches a whole line or returns `None`; a miss is the normal outcome
//! for headers, banners and category labels.

use rust_decimal::Decimal;
use tracing::trace;

use crate::models::config::ZeroValuePolicy;

use super::numbers::{parse_decimal, parse_quantity};
use super::patterns::{GROUND_BEEF_ROW, PORK_CUT_ROW, STANDARD_CUT_ROW};

/// Trailing volume and price columns shared by every row shape.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceColumns {
    /// Number of trades, absent in pork rows.
    pub trades: Option<u64>,
    /// Volume in pounds.
    pub volume: Option<u64>,
    pub low_price: Option<Decimal>,
    pub high_price: Option<Decimal>,
    pub weighted_average: Option<Decimal>,
}

/// Fields recovered from a data row, one variant per grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParsedLineFields {
    /// Coded cut: `CODE SEQ DESCRIPTION TRADES POUNDS LOW - HIGH AVG`.
    StandardCut {
        code: String,
        description: String,
        columns: PriceColumns,
    },
    /// Ground beef blend: `NAME TRADES POUNDS LOW - HIGH AVG`.
    GroundBeefCut { name: String, columns: PriceColumns },
    /// Pork cut: `NAME POUNDS LOW - HIGH AVG`.
    PorkCut { name: String, columns: PriceColumns },
}

impl ParsedLineFields {
    pub fn columns(&self) -> &PriceColumns {
        match self {
            Self::StandardCut { columns, .. }
            | Self::GroundBeefCut { columns, .. }
            | Self::PorkCut { columns, .. } => columns,
        }
    }

    /// Printed description of the product, without any code.
    pub fn description(&self) -> &str {
        match self {
            Self::StandardCut { description, .. } => description,
            Self::GroundBeefCut { name, .. } | Self::PorkCut { name, .. } => name,
        }
    }

    pub fn code(&self) -> Option<&str> {
        match self {
            Self::StandardCut { code, .. } => Some(code),
            _ => None,
        }
    }
}

/// A fixed-column row grammar.
pub trait LineGrammar {
    /// Parse a full line, or `None` if the line does not have this shape.
    fn parse_line(&self, line: &str) -> Option<ParsedLineFields>;
}

/// Grammar for coded cut rows used by the weekly and most daily sections.
#[derive(Debug, Clone, Copy, Default)]
pub struct StandardCutGrammar;

/// Grammar for the daily ground beef section.
#[derive(Debug, Clone, Copy, Default)]
pub struct GroundBeefGrammar;

/// Grammar for pork cut rows.
#[derive(Debug, Clone, Copy, Default)]
pub struct PorkCutGrammar {
    zero_values: ZeroValuePolicy,
}

impl PorkCutGrammar {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set how zero volume or prices are treated.
    pub fn with_zero_values(mut self, policy: ZeroValuePolicy) -> Self {
        self.zero_values = policy;
        self
    }

    fn accepts(&self, columns: &PriceColumns) -> bool {
        let (Some(volume), Some(low), Some(high), Some(avg)) = (
            columns.volume,
            columns.low_price,
            columns.high_price,
            columns.weighted_average,
        ) else {
            return false;
        };

        match self.zero_values {
            ZeroValuePolicy::Accept => true,
            ZeroValuePolicy::Reject => {
                volume != 0 && !low.is_zero() && !high.is_zero() && !avg.is_zero()
            }
        }
    }
}

impl LineGrammar for StandardCutGrammar {
    fn parse_line(&self, line: &str) -> Option<ParsedLineFields> {
        let caps = STANDARD_CUT_ROW.captures(line.trim())?;

        // caps[2] is the report's sequence number, only used to anchor the row
        Some(ParsedLineFields::StandardCut {
            code: caps[1].to_string(),
            description: caps[3].trim().to_string(),
            columns: PriceColumns {
                trades: parse_quantity(&caps[4]),
                volume: parse_quantity(&caps[5]),
                low_price: parse_decimal(&caps[6]),
                high_price: parse_decimal(&caps[7]),
                weighted_average: parse_decimal(&caps[8]),
            },
        })
    }
}

impl LineGrammar for GroundBeefGrammar {
    fn parse_line(&self, line: &str) -> Option<ParsedLineFields> {
        let caps = GROUND_BEEF_ROW.captures(line.trim())?;

        Some(ParsedLineFields::GroundBeefCut {
            name: caps[1].trim().to_string(),
            columns: PriceColumns {
                trades: parse_quantity(&caps[2]),
                volume: parse_quantity(&caps[3]),
                low_price: parse_decimal(&caps[4]),
                high_price: parse_decimal(&caps[5]),
                weighted_average: parse_decimal(&caps[6]),
            },
        })
    }
}

impl LineGrammar for PorkCutGrammar {
    fn parse_line(&self, line: &str) -> Option<ParsedLineFields> {
        let caps = PORK_CUT_ROW.captures(line.trim())?;

        let columns = PriceColumns {
            trades: None,
            volume: parse_quantity(&caps[2]),
            low_price: parse_decimal(&caps[3]),
            high_price: parse_decimal(&caps[4]),
            weighted_average: parse_decimal(&caps[5]),
        };

        if !self.accepts(&columns) {
            trace!("Rejected pork row with missing or zero values: {}", line.trim());
            return None;
        }

        Some(ParsedLineFields::PorkCut {
            name: caps[1].trim().to_string(),
            columns,
        })
    }
}
