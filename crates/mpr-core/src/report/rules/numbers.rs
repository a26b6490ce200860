//! Number normalization for noisy report tokens.
//!
//! Tokens such as `$1,266.00` or `119,191` are reduced to their first signed
//! numeric run. A token without digits is not an error, it simply yields `None`.

use std::str::FromStr;

use rust_decimal::Decimal;
use rust_decimal::prelude::ToPrimitive;

use super::patterns::NUMBER;

/// How the extracted number should be interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NumberMode {
    /// Whole units; any fractional part is truncated.
    Integer,
    /// Decimal amount, kept exactly.
    Decimal,
}

/// Extract the first number from `text` in the requested mode.
pub fn extract_number(text: &str, mode: NumberMode) -> Option<Decimal> {
    let cleaned: String = text
        .chars()
        .filter(|c| *c != '$' && *c != ',' && !c.is_whitespace())
        .collect();

    let found = NUMBER.find(&cleaned)?.as_str();
    let value = Decimal::from_str(found.trim_end_matches('.')).ok()?;

    match mode {
        NumberMode::Integer => Some(value.trunc()),
        NumberMode::Decimal => Some(value),
    }
}

/// Parse a price or other decimal token.
pub fn parse_decimal(text: &str) -> Option<Decimal> {
    extract_number(text, NumberMode::Decimal)
}

/// Parse a count or weight token.
pub fn parse_integer(text: &str) -> Option<i64> {
    extract_number(text, NumberMode::Integer)?.to_i64()
}

/// Parse a count or weight token that must not be negative.
pub fn parse_quantity(text: &str) -> Option<u64> {
    parse_integer(text).and_then(|n| u64::try_from(n).ok())
}
