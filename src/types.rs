//! Core data types for inventory, recipes and analysis results

use std::collections::BTreeMap;

use serde::{Deserialize, Deserializer, Serialize};

/// Missing and `null` fields both fall back to the type's default
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

/// A bottle or pantry item the user owns
///
/// Deserializes from either a bare name (`"Hamilton 86"`, assumed in stock)
/// or a record such as an uploaded CSV row. Fields that play no part in
/// matching (spirit type, ABV, tasting notes) are kept in `details`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "InventoryRow")]
pub struct InventoryItem {
    pub name: String,
    pub in_stock: bool,
    #[serde(flatten)]
    pub details: BTreeMap<String, serde_json::Value>,
}

impl InventoryItem {
    pub fn new(name: impl Into<String>, in_stock: bool) -> Self {
        Self {
            name: name.into(),
            in_stock,
            details: BTreeMap::new(),
        }
    }

    pub fn in_stock(name: impl Into<String>) -> Self {
        Self::new(name, true)
    }
}

/// Inventory rows as they arrive from an upload or API payload
#[derive(Deserialize)]
#[serde(untagged)]
enum InventoryRow {
    Name(String),
    Record(InventoryRecord),
}

#[derive(Deserialize)]
struct InventoryRecord {
    #[serde(default, deserialize_with = "null_as_default", alias = "Name")]
    name: String,
    #[serde(default, alias = "inStock")]
    in_stock: Option<bool>,
    #[serde(default, alias = "Stock Number", alias = "stockNumber")]
    stock_number: Option<StockLevel>,
    #[serde(flatten)]
    details: BTreeMap<String, serde_json::Value>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum StockLevel {
    Count(f64),
    Text(String),
}

impl StockLevel {
    fn is_positive(&self) -> bool {
        match self {
            StockLevel::Count(n) => *n > 0.0,
            StockLevel::Text(s) => s.trim().parse::<f64>().is_ok_and(|n| n > 0.0),
        }
    }
}

impl From<InventoryRow> for InventoryItem {
    fn from(row: InventoryRow) -> Self {
        match row {
            InventoryRow::Name(name) => InventoryItem::in_stock(name),
            InventoryRow::Record(record) => {
                // An explicit flag wins; a stock count of zero means out of stock.
                let in_stock = match (record.in_stock, &record.stock_number) {
                    (Some(flag), _) => flag,
                    (None, Some(level)) => level.is_positive(),
                    (None, None) => true,
                };
                Self {
                    name: record.name,
                    in_stock,
                    details: record.details,
                }
            }
        }
    }
}

/// A cocktail recipe with one ingredient per line
///
/// Uploaded rows missing a name or ingredients still deserialize, with those
/// fields empty, and are skipped by analysis.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "RecipeRecord")]
pub struct Recipe {
    pub name: String,
    pub ingredients: Vec<String>,
    pub instructions: String,
    pub glass: String,
}

impl Recipe {
    pub fn new(name: impl Into<String>, ingredients: Vec<String>) -> Self {
        Self {
            name: name.into(),
            ingredients,
            instructions: String::new(),
            glass: String::new(),
        }
    }

    /// Build a recipe from a newline-separated ingredient blob
    pub fn from_text(name: impl Into<String>, ingredients: &str) -> Self {
        Self::new(name, ingredients.lines().map(str::to_string).collect())
    }

    pub fn with_instructions(mut self, instructions: impl Into<String>) -> Self {
        self.instructions = instructions.into();
        self
    }

    pub fn with_glass(mut self, glass: impl Into<String>) -> Self {
        self.glass = glass.into();
        self
    }

    /// Non-blank ingredient lines, trimmed, in recipe order
    pub fn ingredient_lines(&self) -> impl Iterator<Item = &str> {
        self.ingredients
            .iter()
            .flat_map(|chunk| chunk.lines())
            .map(str::trim)
            .filter(|line| !line.is_empty())
    }
}

#[derive(Deserialize)]
struct RecipeRecord {
    #[serde(default, deserialize_with = "null_as_default", alias = "Drink Name")]
    name: String,
    #[serde(default, deserialize_with = "null_as_default", alias = "Ingredients")]
    ingredients: IngredientText,
    #[serde(default, deserialize_with = "null_as_default", alias = "Instructions")]
    instructions: String,
    #[serde(default, deserialize_with = "null_as_default", alias = "Glass")]
    glass: String,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum IngredientText {
    Blob(String),
    Lines(Vec<String>),
}

impl Default for IngredientText {
    fn default() -> Self {
        IngredientText::Lines(Vec::new())
    }
}

impl From<RecipeRecord> for Recipe {
    fn from(record: RecipeRecord) -> Self {
        let ingredients = match record.ingredients {
            IngredientText::Blob(text) => text.lines().map(str::to_string).collect(),
            IngredientText::Lines(lines) => lines,
        };
        Self {
            name: record.name,
            ingredients,
            instructions: record.instructions,
            glass: record.glass,
        }
    }
}

/// Result tier for a recipe, by compatibility percentage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Tier {
    Perfect,
    VeryGood,
    Good,
    Excluded,
}

/// Lowest compatibility for the very-good tier
pub const VERY_GOOD_FLOOR: u8 = 80;
/// Lowest compatibility kept in any tier
pub const GOOD_FLOOR: u8 = 60;

impl Tier {
    pub fn from_compatibility(compatibility: u8) -> Self {
        if compatibility >= 100 {
            Tier::Perfect
        } else if compatibility >= VERY_GOOD_FLOOR {
            Tier::VeryGood
        } else if compatibility >= GOOD_FLOOR {
            Tier::Good
        } else {
            Tier::Excluded
        }
    }
}

/// One recipe scored against the current inventory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecipeMatch {
    pub recipe: Recipe,
    pub compatibility: u8,
    pub matched: Vec<String>,
    pub missing: Vec<String>,
    pub tier: Tier,
}

impl RecipeMatch {
    pub fn name(&self) -> &str {
        &self.recipe.name
    }

    pub fn total(&self) -> usize {
        self.matched.len() + self.missing.len()
    }
}

/// Tiered output of one analysis run
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub perfect: Vec<RecipeMatch>,
    pub very_good: Vec<RecipeMatch>,
    pub good: Vec<RecipeMatch>,
}

impl AnalysisResult {
    /// Place a match into its tier; excluded matches are dropped
    pub fn push(&mut self, recipe_match: RecipeMatch) {
        match recipe_match.tier {
            Tier::Perfect => self.perfect.push(recipe_match),
            Tier::VeryGood => self.very_good.push(recipe_match),
            Tier::Good => self.good.push(recipe_match),
            Tier::Excluded => {}
        }
    }

    pub fn tier(&self, tier: Tier) -> &[RecipeMatch] {
        match tier {
            Tier::Perfect => &self.perfect,
            Tier::VeryGood => &self.very_good,
            Tier::Good => &self.good,
            Tier::Excluded => &[],
        }
    }

    /// All kept matches, perfect first
    pub fn iter(&self) -> impl Iterator<Item = &RecipeMatch> {
        self.perfect
            .iter()
            .chain(self.very_good.iter())
            .chain(self.good.iter())
    }

    pub fn len(&self) -> usize {
        self.perfect.len() + self.very_good.len() + self.good.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// A missing ingredient worth buying, with the recipes it would unlock
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoppingItem {
    pub ingredient: String,
    pub unlock_count: usize,
    pub occurrences: usize,
    pub recipes: Vec<String>,
}
