//! Caller-owned analysis session
//!
//! Holds one inventory/recipe snapshot and the result computed from it.
//! Edits reanalyze in place and are rejected, leaving the session as it was,
//! when they would empty the inventory or the recipe list. The analyzer
//! itself keeps nothing between calls.

use crate::analyzer::Analyzer;
use crate::error::AnalysisError;
use crate::search::{
    apply_filters, recipes_with_ingredient, resolve_recipe_name, ResultFilter, SortOrder,
};
use crate::shopping::generate_shopping_list;
use crate::types::{AnalysisResult, InventoryItem, Recipe, RecipeMatch, ShoppingItem};

#[derive(Debug, Clone)]
pub struct AnalysisSession {
    analyzer: Analyzer,
    inventory: Vec<InventoryItem>,
    recipes: Vec<Recipe>,
    result: AnalysisResult,
}

impl AnalysisSession {
    /// Validate the snapshot and run the first analysis
    pub fn new(
        analyzer: Analyzer,
        inventory: Vec<InventoryItem>,
        recipes: Vec<Recipe>,
    ) -> Result<Self, AnalysisError> {
        if inventory.is_empty() {
            return Err(AnalysisError::NoInventory);
        }
        if recipes.is_empty() {
            return Err(AnalysisError::NoRecipes);
        }

        let result = analyzer.analyze(&inventory, &recipes);
        Ok(Self {
            analyzer,
            inventory,
            recipes,
            result,
        })
    }

    pub fn inventory(&self) -> &[InventoryItem] {
        &self.inventory
    }

    pub fn recipes(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn result(&self) -> &AnalysisResult {
        &self.result
    }

    pub fn into_result(self) -> AnalysisResult {
        self.result
    }

    /// Replace the inventory and reanalyze
    ///
    /// A rejected edit leaves the session untouched.
    pub fn set_inventory(&mut self, inventory: Vec<InventoryItem>) -> Result<(), AnalysisError> {
        if inventory.is_empty() {
            return Err(AnalysisError::NoInventory);
        }
        self.result = self.analyzer.analyze(&inventory, &self.recipes);
        self.inventory = inventory;
        Ok(())
    }

    /// Replace the recipes and reanalyze
    pub fn set_recipes(&mut self, recipes: Vec<Recipe>) -> Result<(), AnalysisError> {
        if recipes.is_empty() {
            return Err(AnalysisError::NoRecipes);
        }
        self.result = self.analyzer.analyze(&self.inventory, &recipes);
        self.recipes = recipes;
        Ok(())
    }

    /// Add an item, replacing any existing one with the same name
    pub fn add_item(&mut self, item: InventoryItem) -> Result<(), AnalysisError> {
        let mut inventory: Vec<InventoryItem> = self
            .inventory
            .iter()
            .filter(|existing| !same_name(&existing.name, &item.name))
            .cloned()
            .collect();
        inventory.push(item);
        self.set_inventory(inventory)
    }

    /// Remove every item with this name, ignoring case
    pub fn remove_item(&mut self, name: &str) -> Result<(), AnalysisError> {
        let inventory = self
            .inventory
            .iter()
            .filter(|existing| !same_name(&existing.name, name))
            .cloned()
            .collect();
        self.set_inventory(inventory)
    }

    /// Ranked shopping list, truncated to `limit` entries when given
    pub fn shopping_list(&self, limit: Option<usize>) -> Vec<ShoppingItem> {
        let mut list = generate_shopping_list(&self.result);
        if let Some(limit) = limit {
            list.truncate(limit);
        }
        list
    }

    pub fn view(&self, filter: &ResultFilter, order: SortOrder) -> AnalysisResult {
        apply_filters(&self.result, filter, order)
    }

    pub fn search_ingredient(&self, ingredient: &str) -> Vec<&RecipeMatch> {
        let threshold = self.analyzer.config().search_threshold;
        recipes_with_ingredient(&self.result, ingredient, threshold)
    }

    pub fn resolve_name(&self, name: &str) -> Option<&RecipeMatch> {
        let threshold = self.analyzer.config().name_resolution_threshold;
        resolve_recipe_name(&self.result, name, threshold)
    }
}

fn same_name(a: &str, b: &str) -> bool {
    a.trim().to_lowercase() == b.trim().to_lowercase()
}
