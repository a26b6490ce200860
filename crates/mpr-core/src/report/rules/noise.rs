//! Header, subtotal and footer detection.

/// Terms that mark a line as table furniture rather than data.
///
/// Matched as lowercase substrings, so keep entries specific.
pub const NOISE_TERMS: &[&str] = &[
    "total",
    "subtotal",
    "average",
    "grand total",
    "report",
    "date",
    "page",
    "continued",
    "usda",
    "imps",
    "sub-primal",
    "trades",
    "pounds",
    "price",
    "range",
    "weighted",
];

/// True if the line is a header, subtotal or page footer and must be skipped.
pub fn is_noise_line(text: &str) -> bool {
    let lower = text.to_lowercase();
    NOISE_TERMS.iter().any(|term| lower.contains(term))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_headers_and_footers() {
        assert!(is_noise_line(
            "IMPS   Sub-Primal   FL   Trades   Pounds   Price Range   Weighted Avg"
        ));
        assert!(is_noise_line("Page 2 of 4"));
        assert!(is_noise_line("   (continued)"));
        assert!(is_noise_line("Grand Total                     1,203,334"));
        assert!(is_noise_line("USDA Livestock, Poultry & Grain Market News"));
    }

    #[test]
    fn test_data_rows_pass() {
        assert!(!is_noise_line(
            "109E 1 Rib, ribeye, lip-on, bn-in 55 119,191 1,266.00 - 1,616.00 1,359.01"
        ));
        assert!(!is_noise_line("193 1 Flank, steak 12 20,110 780.00 - 890.00 826.51"));
        assert!(!is_noise_line("Loin"));
    }
}
