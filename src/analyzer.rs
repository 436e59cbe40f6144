//! Compatibility analyzer - scores recipes against an availability index

use serde::{Deserialize, Serialize};

use crate::aliases::AliasTable;
use crate::error::ConfigError;
use crate::index::AvailabilityIndex;
use crate::normalize::normalize_ingredient;
use crate::similarity::{
    are_similar, COMPATIBILITY_THRESHOLD, NAME_RESOLUTION_THRESHOLD, SEARCH_THRESHOLD,
};
use crate::types::{AnalysisResult, InventoryItem, Recipe, RecipeMatch, Tier};

/// Fuzzy-match thresholds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchConfig {
    /// Used when checking a recipe line against the inventory
    pub compatibility_threshold: f64,
    /// Used by ingredient search over results
    pub search_threshold: f64,
    /// Used when resolving a free-text cocktail name
    pub name_resolution_threshold: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            compatibility_threshold: COMPATIBILITY_THRESHOLD,
            search_threshold: SEARCH_THRESHOLD,
            name_resolution_threshold: NAME_RESOLUTION_THRESHOLD,
        }
    }
}

impl MatchConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: MatchConfig = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        let thresholds = [
            ("compatibility_threshold", self.compatibility_threshold),
            ("search_threshold", self.search_threshold),
            ("name_resolution_threshold", self.name_resolution_threshold),
        ];
        for (name, value) in thresholds {
            if !(0.0..=1.0).contains(&value) {
                return Err(ConfigError::ThresholdOutOfRange { name, value });
            }
        }
        Ok(())
    }
}

/// How a line was judged available
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineMatch {
    Garnish,
    Exact,
    Substring,
    Fuzzy,
}

/// Decide whether an ingredient line is satisfied, and by which stage
///
/// Garnish lines always pass. Otherwise the normalized line is looked up
/// directly, then by substring containment in either direction, then by
/// fuzzy similarity. A line that normalizes to nothing never matches.
pub fn classify_line(line: &str, index: &AvailabilityIndex, threshold: f64) -> Option<LineMatch> {
    if line.to_lowercase().contains("garnish") {
        return Some(LineMatch::Garnish);
    }

    let normalized = normalize_ingredient(line);
    if normalized.is_empty() {
        return None;
    }

    if index.contains(&normalized) {
        return Some(LineMatch::Exact);
    }

    if index
        .iter()
        .any(|entry| normalized.contains(entry) || entry.contains(normalized.as_str()))
    {
        return Some(LineMatch::Substring);
    }

    if index
        .iter()
        .any(|entry| are_similar(&normalized, entry, threshold))
    {
        return Some(LineMatch::Fuzzy);
    }

    None
}

/// Whether an ingredient line is satisfied by the index
pub fn has_ingredient(line: &str, index: &AvailabilityIndex, threshold: f64) -> bool {
    classify_line(line, index, threshold).is_some()
}

/// `round(100 * matched / total)`, 0 for an empty recipe
pub fn compatibility_percent(matched: usize, total: usize) -> u8 {
    if total == 0 {
        return 0;
    }
    // integer half-up rounding
    ((200 * matched + total) / (2 * total)) as u8
}

/// Score one recipe; `None` when it has no name or no ingredient text
pub fn analyze_recipe(
    recipe: &Recipe,
    index: &AvailabilityIndex,
    threshold: f64,
) -> Option<RecipeMatch> {
    if recipe.name.trim().is_empty() || recipe.ingredients.is_empty() {
        tracing::debug!(recipe = %recipe.name, "skipping recipe without name or ingredients");
        return None;
    }

    let mut matched = Vec::new();
    let mut missing = Vec::new();

    for line in recipe.ingredient_lines() {
        match classify_line(line, index, threshold) {
            Some(stage) => {
                tracing::trace!(recipe = %recipe.name, line, ?stage, "ingredient available");
                matched.push(line.to_string());
            }
            None => {
                tracing::trace!(recipe = %recipe.name, line, "ingredient missing");
                missing.push(line.to_string());
            }
        }
    }

    let compatibility = compatibility_percent(matched.len(), matched.len() + missing.len());

    Some(RecipeMatch {
        recipe: recipe.clone(),
        compatibility,
        matched,
        missing,
        tier: Tier::from_compatibility(compatibility),
    })
}

/// Analyze recipes against an index with the default threshold
pub fn analyze(index: &AvailabilityIndex, recipes: &[Recipe]) -> AnalysisResult {
    analyze_with(index, recipes, &MatchConfig::default())
}

/// Analyze recipes against an index
///
/// Each tier keeps the order recipes were supplied in. Recipes under the
/// lowest tier floor are dropped. An index holding only pantry staples
/// yields an empty result.
pub fn analyze_with(
    index: &AvailabilityIndex,
    recipes: &[Recipe],
    config: &MatchConfig,
) -> AnalysisResult {
    let mut result = AnalysisResult::default();
    if !index.has_inventory() {
        tracing::debug!(recipes = recipes.len(), "no stocked inventory, nothing to analyze");
        return result;
    }

    for recipe_match in recipes
        .iter()
        .filter_map(|recipe| analyze_recipe(recipe, index, config.compatibility_threshold))
    {
        result.push(recipe_match);
    }

    tracing::debug!(
        recipes = recipes.len(),
        perfect = result.perfect.len(),
        very_good = result.very_good.len(),
        good = result.good.len(),
        "analysis complete"
    );

    result
}

/// Alias table and thresholds bundled for repeated analysis runs
///
/// Holds no inventory or results; every call builds its own index.
#[derive(Debug, Clone, Default)]
pub struct Analyzer {
    aliases: AliasTable,
    config: MatchConfig,
}

impl Analyzer {
    pub fn new(aliases: AliasTable, config: MatchConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { aliases, config })
    }

    pub fn aliases(&self) -> &AliasTable {
        &self.aliases
    }

    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    pub fn build_index(&self, inventory: &[InventoryItem]) -> AvailabilityIndex {
        AvailabilityIndex::build(inventory, &self.aliases)
    }

    /// Build a fresh index from `inventory` and analyze `recipes` against it
    pub fn analyze(&self, inventory: &[InventoryItem], recipes: &[Recipe]) -> AnalysisResult {
        let index = self.build_index(inventory);
        analyze_with(&index, recipes, &self.config)
    }
}
