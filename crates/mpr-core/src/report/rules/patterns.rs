//! Common regex patterns for market report rows.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // First signed number left after separators are stripped
    pub static ref NUMBER: Regex = Regex::new(r"-?\d+\.?\d*").unwrap();

    // CODE  SEQ  DESCRIPTION  TRADES  POUNDS  LOW - HIGH  AVG
    pub static ref STANDARD_CUT_ROW: Regex = Regex::new(
        r"^(\S+)\s+(\d+)\s+(.+?)\s+(\d+)\s+([\d,]+)\s+([\d,.]+)\s*-\s*([\d,.]+)\s+([\d,.]+)\s*$"
    ).unwrap();

    // NAME  TRADES  POUNDS  LOW - HIGH  AVG
    pub static ref GROUND_BEEF_ROW: Regex = Regex::new(
        r"^(.+?)\s+(\d+)\s+([\d,]+)\s+([\d,.]+)\s*-\s*([\d,.]+)\s+([\d,.]+)\s*$"
    ).unwrap();

    // NAME  POUNDS  LOW - HIGH  AVG
    pub static ref PORK_CUT_ROW: Regex = Regex::new(
        r"^(.+?)\s+([\d,]+)\s+([\d,.]+)\s*-\s*([\d,.]+)\s+([\d,.]+)\s*$"
    ).unwrap();

    // Category header disqualifiers
    pub static ref PRICE_LIKE: Regex = Regex::new(r"\d+\.\d{2}").unwrap();
    pub static ref DIGIT_RUN: Regex = Regex::new(r"\d{3,}").unwrap();
    pub static ref ANY_DIGIT: Regex = Regex::new(r"\d").unwrap();
}
