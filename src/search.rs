//! Lookups and views over an analysis result
//!
//! None of this changes how recipes are scored; it filters, reorders and
//! searches what [`crate::analyzer::analyze`] produced.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize_ingredient;
use crate::similarity::are_similar;
use crate::types::{AnalysisResult, Recipe, RecipeMatch, Tier};

/// Recipes returned when a query names no known ingredient
pub const UNFILTERED_LIMIT: usize = 30;
/// Recipes returned when a query names known ingredients
pub const FILTERED_LIMIT: usize = 20;

/// Ingredient words recognised in free-text queries
pub const QUERY_KEYWORDS: [&str; 43] = [
    "pineapple", "lime", "lemon", "orange", "grapefruit", "passionfruit", "passion fruit",
    "mango", "coconut", "banana", "strawberry", "raspberry", "blackberry",
    "mint", "basil", "thyme", "rosemary", "cucumber",
    "ginger", "vanilla", "cinnamon", "nutmeg",
    "rum", "bourbon", "whiskey", "gin", "vodka", "tequila", "mezcal", "cognac", "brandy",
    "vermouth", "campari", "aperol", "chartreuse", "bitters",
    "syrup", "honey", "agave", "sugar", "grenadine", "orgeat", "falernum",
];

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    /// Highest compatibility first, ties in analysis order
    #[default]
    Compatibility,
    NameAsc,
    NameDesc,
}

/// Presentation filter; unset fields do not filter
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultFilter {
    /// Keep only these tiers
    pub tiers: Option<Vec<Tier>>,
    /// Keep recipes missing exactly this many lines
    pub missing_exactly: Option<usize>,
    /// Keep recipes missing at most this many lines
    pub max_missing: Option<usize>,
}

impl ResultFilter {
    pub fn perfect_only() -> Self {
        Self {
            missing_exactly: Some(0),
            ..Self::default()
        }
    }

    pub fn missing_one() -> Self {
        Self {
            missing_exactly: Some(1),
            ..Self::default()
        }
    }

    pub fn accepts(&self, recipe_match: &RecipeMatch) -> bool {
        let missing = recipe_match.missing.len();
        self.tiers
            .as_ref()
            .map_or(true, |tiers| tiers.contains(&recipe_match.tier))
            && self.missing_exactly.map_or(true, |n| missing == n)
            && self.max_missing.map_or(true, |n| missing <= n)
    }
}

/// Filter and sort a result, regrouping the survivors into their tiers
pub fn apply_filters(
    result: &AnalysisResult,
    filter: &ResultFilter,
    order: SortOrder,
) -> AnalysisResult {
    let mut kept: Vec<&RecipeMatch> = result.iter().filter(|m| filter.accepts(m)).collect();

    match order {
        SortOrder::Compatibility => kept.sort_by(|a, b| b.compatibility.cmp(&a.compatibility)),
        SortOrder::NameAsc => kept.sort_by(|a, b| compare_names(a.name(), b.name())),
        SortOrder::NameDesc => kept.sort_by(|a, b| compare_names(b.name(), a.name())),
    }

    let mut view = AnalysisResult::default();
    for recipe_match in kept {
        view.push(recipe_match.clone());
    }
    view
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase()
        .cmp(&b.to_lowercase())
        .then_with(|| a.cmp(b))
}

/// Recipes in any tier that use an ingredient
///
/// A recipe qualifies when one of its lines, normalized, contains or is
/// contained by the normalized ingredient, or is at least `threshold`
/// similar to it.
pub fn recipes_with_ingredient<'a>(
    result: &'a AnalysisResult,
    ingredient: &str,
    threshold: f64,
) -> Vec<&'a RecipeMatch> {
    let wanted = normalize_ingredient(ingredient);
    if wanted.is_empty() {
        return Vec::new();
    }

    result
        .iter()
        .filter(|recipe_match| {
            recipe_match.recipe.ingredient_lines().any(|line| {
                let normalized = normalize_ingredient(line);
                !normalized.is_empty()
                    && (normalized.contains(&wanted)
                        || wanted.contains(&normalized)
                        || are_similar(&normalized, &wanted, threshold))
            })
        })
        .collect()
}

/// Find the recipe a free-text cocktail name refers to
///
/// Case-insensitive exact title match first, then the first recipe at
/// least `threshold` similar, searching perfect, very good, then good.
pub fn resolve_recipe_name<'a>(
    result: &'a AnalysisResult,
    name: &str,
    threshold: f64,
) -> Option<&'a RecipeMatch> {
    let wanted = name.trim().to_lowercase();
    if wanted.is_empty() {
        return None;
    }

    result
        .iter()
        .find(|m| m.name().to_lowercase() == wanted)
        .or_else(|| result.iter().find(|m| are_similar(m.name(), &wanted, threshold)))
}

/// Which branch of keyword selection produced the recipes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KeywordCoverage {
    /// Query named no known ingredient
    Unfiltered,
    /// Every returned recipe contains all named ingredients
    All,
    /// No recipe had them all; each returned one has at least one
    Partial,
    /// No recipe mentions any named ingredient
    Nothing,
}

#[derive(Debug, Clone)]
pub struct KeywordSelection<'a> {
    pub keywords: Vec<&'static str>,
    pub coverage: KeywordCoverage,
    /// Matches before truncation
    pub total: usize,
    pub recipes: Vec<&'a Recipe>,
}

/// Narrow recipes to those mentioning ingredients named in a query
///
/// Used to keep a recommendation prompt small. Matching is plain substring
/// search over the lowercase ingredient text.
pub fn select_by_keywords<'a>(recipes: &'a [Recipe], query: &str) -> KeywordSelection<'a> {
    let query = query.to_lowercase();
    let keywords: Vec<&'static str> = QUERY_KEYWORDS
        .iter()
        .copied()
        .filter(|keyword| query.contains(keyword))
        .collect();

    if keywords.is_empty() {
        return KeywordSelection {
            keywords,
            coverage: KeywordCoverage::Unfiltered,
            total: recipes.len(),
            recipes: recipes.iter().take(UNFILTERED_LIMIT).collect(),
        };
    }

    let texts: Vec<String> = recipes
        .iter()
        .map(|recipe| recipe.ingredients.join("\n").to_lowercase())
        .collect();

    let mentions = |text: &String, require_all: bool| {
        if require_all {
            keywords.iter().all(|k| text.contains(k))
        } else {
            keywords.iter().any(|k| text.contains(k))
        }
    };

    let with_all: Vec<&'a Recipe> = recipes
        .iter()
        .zip(&texts)
        .filter(|(_, text)| mentions(*text, true))
        .map(|(recipe, _)| recipe)
        .collect();

    let (coverage, mut selected) = if with_all.is_empty() {
        let with_any: Vec<&'a Recipe> = recipes
            .iter()
            .zip(&texts)
            .filter(|(_, text)| mentions(*text, false))
            .map(|(recipe, _)| recipe)
            .collect();
        if with_any.is_empty() {
            (KeywordCoverage::Nothing, with_any)
        } else {
            (KeywordCoverage::Partial, with_any)
        }
    } else {
        (KeywordCoverage::All, with_all)
    };

    let total = selected.len();
    selected.truncate(FILTERED_LIMIT);

    tracing::debug!(?keywords, ?coverage, total, "selected recipes by keyword");

    KeywordSelection {
        keywords,
        coverage,
        total,
        recipes: selected,
    }
}
