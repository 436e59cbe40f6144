//! Ingredient line normalization
//!
//! Turns a raw recipe line such as `"1 1/2 oz Fresh Lime Juice"` into the
//! canonical form used for index lookups (`"lime juice"`).

use std::sync::LazyLock;

use regex::Regex;

/// Leading quantity: integer, decimal, fraction or mixed number
static QUANTITY: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*\d+(?:\.\d+)?(?:\s+\d+)?(?:\s*/\s*\d+)?\s*").expect("Invalid regex pattern")
});

static UNITS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        r"\b(?:ounces?|oz|teaspoons?|tsp|tablespoons?|tbsp",
        r"|dash(?:es)?|drops?|cups?|ml|cl)\b"
    ))
    .expect("Invalid regex pattern")
});

static ADJECTIVES: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b(?:fresh|chilled|cold|room temperature|hot)\b").expect("Invalid regex pattern")
});

static WHITESPACE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s+").expect("Invalid regex pattern"));

/// Normalize an ingredient line for matching
///
/// Lowercases, strips a leading quantity, then unit words, then
/// temperature/freshness adjectives, and collapses whitespace. May return an
/// empty string when the line held nothing but a measurement.
pub fn normalize_ingredient(line: &str) -> String {
    let lower = line.to_lowercase();
    let without_quantity = QUANTITY.replace(&lower, "");
    let without_units = UNITS.replace_all(&without_quantity, "");
    let without_adjectives = ADJECTIVES.replace_all(&without_units, "");
    WHITESPACE
        .replace_all(&without_adjectives, " ")
        .trim()
        .to_string()
}
