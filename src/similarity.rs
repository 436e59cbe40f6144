//! Edit-distance string similarity
//!
//! Used when exact and substring lookups fail, e.g. "passionfruit" against
//! "passion fruit". Both sides are reduced to lowercase alphanumerics first
//! so spacing and punctuation never block a match.

use strsim::levenshtein;

/// Threshold for the inventory check inside compatibility analysis
pub const COMPATIBILITY_THRESHOLD: f64 = 0.90;
/// Threshold for general ingredient lookups such as search
pub const SEARCH_THRESHOLD: f64 = 0.85;
/// Threshold for resolving a free-text cocktail name to a known recipe
pub const NAME_RESOLUTION_THRESHOLD: f64 = 0.70;

/// Lowercase and drop every non-alphanumeric character
pub fn fuzzy_normalize(s: &str) -> String {
    s.chars()
        .flat_map(char::to_lowercase)
        .filter(|c| c.is_alphanumeric())
        .collect()
}

/// Similarity score between two strings (0.0-1.0)
///
/// `(longest - distance) / longest` over the fuzzy-normalized forms. Two
/// strings that normalize to nothing are identical and score 1.0.
pub fn similarity(a: &str, b: &str) -> f64 {
    let a = fuzzy_normalize(a);
    let b = fuzzy_normalize(b);

    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }

    let distance = levenshtein(&a, &b);
    (longest - distance) as f64 / longest as f64
}

/// Whether two strings are at least `threshold` similar
pub fn are_similar(a: &str, b: &str, threshold: f64) -> bool {
    similarity(a, b) >= threshold
}

/// Levenshtein distance between two strings, counted in chars
pub fn levenshtein_distance(a: &str, b: &str) -> usize {
    levenshtein(a, b)
}
