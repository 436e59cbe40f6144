//! Shopping list - which missing ingredients unlock the most recipes

use ahash::AHashMap;

use crate::normalize::normalize_ingredient;
use crate::types::{AnalysisResult, ShoppingItem};

/// Rank missing ingredients from the very-good and good tiers
///
/// Lines are normalized; empty results and anything mentioning ice or a
/// garnish are skipped. Sorted by the number of distinct recipes unlocked,
/// most first; ties keep first-seen order. The full list is returned.
pub fn generate_shopping_list(result: &AnalysisResult) -> Vec<ShoppingItem> {
    let mut items: Vec<ShoppingItem> = Vec::new();
    let mut positions: AHashMap<String, usize> = AHashMap::new();

    for recipe_match in result.very_good.iter().chain(result.good.iter()) {
        for line in &recipe_match.missing {
            let ingredient = normalize_ingredient(line);
            let skipped = ingredient.contains("ice") || ingredient.contains("garnish");
            if ingredient.is_empty() || skipped {
                continue;
            }

            let position = *positions.entry(ingredient.clone()).or_insert_with(|| {
                items.push(ShoppingItem {
                    ingredient,
                    unlock_count: 0,
                    occurrences: 0,
                    recipes: Vec::new(),
                });
                items.len() - 1
            });

            let item = &mut items[position];
            item.occurrences += 1;
            let name = recipe_match.name();
            if !item.recipes.iter().any(|r| r == name) {
                item.recipes.push(name.to_string());
                item.unlock_count = item.recipes.len();
            }
        }
    }

    // stable sort keeps first-seen order among ties
    items.sort_by(|a, b| b.unlock_count.cmp(&a.unlock_count));
    items
}
