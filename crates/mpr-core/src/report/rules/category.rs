//! Shape heuristics for pork category headers.
//!
//! Pork reports label each block of rows with a primal name on its own line
//! ("Loin", "Butt", ...). Nothing marks these lines apart from their shape, so
//! the check is an approximation built from two small vocabularies.

use super::patterns::{ANY_DIGIT, DIGIT_RUN, PRICE_LIKE};

/// Primal names accepted as headers on sight.
pub const KNOWN_CATEGORIES: &[&str] = &[
    "loin", "butt", "ham", "belly", "picnic", "sparerib", "jowl", "variety", "trim", "fat", "skin",
];

/// Words that never appear in a category header.
pub const NON_CATEGORY_TERMS: &[&str] = &[
    "total",
    "average",
    "source",
    "usda",
    "page",
    "report",
    "national",
    "weekly",
    "daily",
    "agricultural",
    "marketing",
    "vac",
    "fzn",
    "combo",
    "paper",
    "poly",
    "bnls",
    "bone",
];

/// Longest line still considered a header.
pub const MAX_HEADER_LEN: usize = 30;

/// Most words a header of unknown name may have.
pub const MAX_HEADER_WORDS: usize = 2;

/// True if the line looks like a pork category header.
pub fn is_category_header(line: &str) -> bool {
    let trimmed = line.trim();
    let lower = trimmed.to_lowercase();

    let known = KNOWN_CATEGORIES.iter().any(|cat| {
        lower == *cat
            || lower
                .strip_prefix(cat)
                .is_some_and(|rest| rest.starts_with(' '))
    });
    if known {
        return true;
    }

    // Product lines whose price columns were left blank
    if trimmed.ends_with('-') {
        return false;
    }

    if trimmed.chars().count() > MAX_HEADER_LEN {
        return false;
    }

    if PRICE_LIKE.is_match(trimmed) || DIGIT_RUN.is_match(trimmed) {
        return false;
    }

    if NON_CATEGORY_TERMS.iter().any(|term| lower.contains(term)) {
        return false;
    }

    trimmed.split_whitespace().count() <= MAX_HEADER_WORDS && !ANY_DIGIT.is_match(trimmed)
}
