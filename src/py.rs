//! Python bindings for the cocktail core using PyO3

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::analyzer::Analyzer;
use crate::normalize::normalize_ingredient;
use crate::session::AnalysisSession;
use crate::similarity::similarity;
use crate::types::{InventoryItem, Recipe};

/// Similarity between two ingredient strings (Python function)
#[pyfunction]
pub fn py_similarity(a: &str, b: &str) -> f64 {
    similarity(a, b)
}

/// Normalized form of an ingredient line (Python function)
#[pyfunction]
pub fn py_normalize_ingredient(line: &str) -> String {
    normalize_ingredient(line)
}

/// Python wrapper staging an inventory/recipe snapshot
///
/// The analyzed session is built on first use and cached until the next
/// edit.
#[pyclass]
pub struct PyCocktailAnalyzer {
    analyzer: Analyzer,
    inventory: Vec<InventoryItem>,
    recipes: Vec<Recipe>,
    session: Option<AnalysisSession>,
}

impl PyCocktailAnalyzer {
    fn session(&mut self) -> PyResult<&AnalysisSession> {
        let session = match self.session.take() {
            Some(session) => session,
            None => AnalysisSession::new(
                self.analyzer.clone(),
                self.inventory.clone(),
                self.recipes.clone(),
            )
            .map_err(|e| PyErr::new::<PyValueError, _>(e.to_string()))?,
        };
        Ok(self.session.insert(session))
    }
}

#[pymethods]
impl PyCocktailAnalyzer {
    #[new]
    fn new() -> Self {
        Self {
            analyzer: Analyzer::default(),
            inventory: Vec::new(),
            recipes: Vec::new(),
            session: None,
        }
    }

    /// Add an inventory item
    #[pyo3(signature = (name, in_stock = true))]
    fn add_inventory_item(&mut self, name: String, in_stock: bool) {
        self.inventory.push(InventoryItem::new(name, in_stock));
        self.session = None;
    }

    /// Add a recipe from a newline-separated ingredient blob
    #[pyo3(signature = (name, ingredients, instructions = String::new(), glass = String::new()))]
    fn add_recipe(&mut self, name: String, ingredients: &str, instructions: String, glass: String) {
        self.recipes.push(
            Recipe::from_text(name, ingredients)
                .with_instructions(instructions)
                .with_glass(glass),
        );
        self.session = None;
    }

    /// Load inventory rows and recipes from JSON arrays
    fn load_json(&mut self, inventory_json: &str, recipes_json: &str) -> PyResult<()> {
        let to_py_err = |e: serde_json::Error| {
            PyErr::new::<PyValueError, _>(format!("Invalid JSON: {}", e))
        };
        self.inventory = serde_json::from_str(inventory_json).map_err(to_py_err)?;
        self.recipes = serde_json::from_str(recipes_json).map_err(to_py_err)?;
        self.session = None;
        Ok(())
    }

    /// Run an analysis and return the tiered result as JSON
    fn analyze(&mut self) -> PyResult<String> {
        let result = self.session()?.result();
        serde_json::to_string(result).map_err(|e| {
            PyErr::new::<PyValueError, _>(format!("Failed to serialize result: {}", e))
        })
    }

    /// Ranked shopping list as a list of dicts
    #[pyo3(signature = (limit = 15))]
    fn shopping_list<'py>(
        &mut self,
        limit: usize,
        py: Python<'py>,
    ) -> PyResult<Vec<Bound<'py, PyDict>>> {
        self.session()?
            .shopping_list(Some(limit))
            .into_iter()
            .map(|item| -> PyResult<Bound<'py, PyDict>> {
                let dict = PyDict::new_bound(py);
                dict.set_item("ingredient", item.ingredient)?;
                dict.set_item("unlock_count", item.unlock_count)?;
                dict.set_item("occurrences", item.occurrences)?;
                dict.set_item("recipes", item.recipes)?;
                Ok(dict)
            })
            .collect()
    }

    /// Clear inventory and recipes
    fn clear(&mut self) {
        self.inventory.clear();
        self.recipes.clear();
        self.session = None;
    }

    /// Number of recipes loaded
    fn len(&self) -> usize {
        self.recipes.len()
    }
}
