//! Cocktail core - ingredient compatibility matching
//!
//! Decides which recipes an inventory of bottles can make: normalizes free
//! text ingredient lines, expands bottle names into the generic styles they
//! satisfy, matches lines exactly, by substring or by edit distance, and
//! ranks recipes into perfect / very good / good tiers with a shopping list
//! of the purchases that unlock the most near misses.

pub mod error;
pub mod types;
pub mod normalize;
pub mod similarity;
pub mod aliases;
pub mod index;
pub mod analyzer;
pub mod shopping;
pub mod search;
pub mod session;

pub use error::*;
pub use types::*;
pub use normalize::*;
pub use similarity::*;
pub use aliases::*;
pub use index::*;
pub use analyzer::*;
pub use shopping::*;
pub use search::*;
pub use session::*;

// Python bindings
#[cfg(feature = "python")]
pub mod py;

#[cfg(feature = "python")]
use pyo3::prelude::*;

#[cfg(feature = "python")]
#[pymodule]
fn cocktail_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    use py::*;
    m.add_class::<PyCocktailAnalyzer>()?;
    m.add_function(wrap_pyfunction!(py_similarity, m)?)?;
    m.add_function(wrap_pyfunction!(py_normalize_ingredient, m)?)?;
    Ok(())
}
