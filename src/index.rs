//! Availability index - everything the current inventory can satisfy

use ahash::AHashSet;

use crate::aliases::AliasTable;
use crate::types::InventoryItem;

/// Ingredients assumed on hand regardless of inventory
pub const PANTRY_STAPLES: [&str; 8] = [
    "ice",
    "crushed ice",
    "ice cubes",
    "water",
    "salt",
    "mint",
    "fresh mint",
    "sugar",
];

/// Staples hidden from ingredient pickers
const UNSEARCHABLE: [&str; 5] = ["ice", "crushed ice", "ice cubes", "water", "salt"];

/// Lowercase names of in-stock items, their aliases, and pantry staples
///
/// Built fresh for each analysis run and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct AvailabilityIndex {
    entries: AHashSet<String>,
    stocked: usize,
}

impl AvailabilityIndex {
    /// Build an index using the given alias table
    pub fn build(items: &[InventoryItem], aliases: &AliasTable) -> Self {
        let mut entries = AHashSet::new();
        let mut stocked = 0;

        for item in items.iter().filter(|item| item.in_stock) {
            let name = item.name.trim();
            if name.is_empty() {
                continue;
            }
            stocked += 1;
            entries.extend(aliases.expand(name));
        }

        entries.extend(PANTRY_STAPLES.iter().map(|s| s.to_string()));

        tracing::debug!(
            items = items.len(),
            stocked,
            entries = entries.len(),
            "built availability index"
        );

        Self { entries, stocked }
    }

    /// Build an index using the compiled-in alias table
    pub fn from_inventory(items: &[InventoryItem]) -> Self {
        Self::build(items, &AliasTable::default())
    }

    /// Whether any in-stock inventory item went into the index
    pub fn has_inventory(&self) -> bool {
        self.stocked > 0
    }

    pub fn contains(&self, entry: &str) -> bool {
        self.entries.contains(entry)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Sorted entries worth offering in an ingredient picker
    pub fn searchable_ingredients(&self) -> Vec<&str> {
        let mut ingredients: Vec<&str> = self
            .iter()
            .filter(|entry| !UNSEARCHABLE.contains(entry))
            .collect();
        ingredients.sort_unstable();
        ingredients
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_inventory_has_staples() {
        let index = AvailabilityIndex::from_inventory(&[]);
        assert_eq!(index.len(), PANTRY_STAPLES.len());
        assert!(index.contains("sugar"));
        assert!(index.contains("crushed ice"));
        assert!(!index.has_inventory());
    }

    #[test]
    fn test_out_of_stock_items_ignored() {
        let items = vec![
            InventoryItem::new("Orgeat", false),
            InventoryItem::in_stock("Falernum"),
        ];
        let index = AvailabilityIndex::from_inventory(&items);
        assert!(!index.contains("orgeat"));
        assert!(index.contains("falernum"));
        assert!(index.contains("velvet falernum"));
        assert!(index.has_inventory());
    }

    #[test]
    fn test_entries_are_lowercase() {
        let index = AvailabilityIndex::from_inventory(&[InventoryItem::in_stock("Hamilton 86")]);
        assert!(index.contains("hamilton 86"));
        assert!(index.contains("gold rum"));
        assert!(index.iter().all(|e| e == e.to_lowercase()));
    }

    #[test]
    fn test_blank_names_skipped() {
        let index = AvailabilityIndex::from_inventory(&[InventoryItem::in_stock("   ")]);
        assert!(!index.contains(""));
    }

    #[test]
    fn test_searchable_ingredients_hide_basics() {
        let index = AvailabilityIndex::from_inventory(&[InventoryItem::in_stock("Orgeat")]);
        let searchable = index.searchable_ingredients();
        assert_eq!(searchable, vec!["fresh mint", "mint", "orgeat", "orgeat syrup", "sugar"]);
    }
}
