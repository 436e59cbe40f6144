//! Alias expansion for inventory bottle names
//!
//! Recipes ask for styles ("gold rum", "demerara rum"); inventories hold
//! products ("Hamilton 86"). An [`AliasTable`] is an ordered list of
//! keyword-triggered rules mapping a bottle name to the generic terms it
//! also satisfies. The default table is compiled in from
//! `data/aliases.json`; hosts can load their own with
//! [`AliasTable::from_json`].

use std::sync::LazyLock;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

static DEFAULT_TABLE: LazyLock<AliasTable> = LazyLock::new(|| {
    let json = include_str!("../data/aliases.json");
    AliasTable::from_json(json).expect("Failed to parse aliases.json")
});

/// One keyword-triggered alias bundle
///
/// Fires when the lowercase bottle name contains at least one of
/// `contains_any` (when given), every one of `contains_all`, and none of
/// `excludes`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AliasRule {
    #[serde(default)]
    pub contains_any: Vec<String>,
    #[serde(default)]
    pub contains_all: Vec<String>,
    #[serde(default)]
    pub excludes: Vec<String>,
    pub aliases: Vec<String>,
}

impl AliasRule {
    pub fn matches(&self, name: &str) -> bool {
        let any = self.contains_any.is_empty()
            || self.contains_any.iter().any(|k| name.contains(k.as_str()));
        let all = self.contains_all.iter().all(|k| name.contains(k.as_str()));
        let excluded = self.excludes.iter().any(|k| name.contains(k.as_str()));
        any && all && !excluded
    }
}

/// Ordered set of alias rules; every matching rule applies
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct AliasTable {
    rules: Vec<AliasRule>,
}

#[derive(Deserialize)]
struct RawTable {
    rules: Vec<AliasRule>,
}

impl AliasTable {
    /// Build a table, rejecting rules that could never fire or add nothing
    pub fn new(rules: Vec<AliasRule>) -> Result<Self, ConfigError> {
        for (index, rule) in rules.iter().enumerate() {
            if rule.contains_any.is_empty() && rule.contains_all.is_empty() {
                return Err(ConfigError::EmptyTrigger { index });
            }
            if rule.aliases.is_empty() {
                return Err(ConfigError::EmptyAliases { index });
            }
        }

        // Keywords and aliases are compared against lowercase names
        let rules = rules
            .into_iter()
            .map(|rule| AliasRule {
                contains_any: lowercase_all(rule.contains_any),
                contains_all: lowercase_all(rule.contains_all),
                excludes: lowercase_all(rule.excludes),
                aliases: lowercase_all(rule.aliases),
            })
            .collect();

        Ok(Self { rules })
    }

    /// Parse a table from `{"rules": [...]}` JSON
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let raw: RawTable = serde_json::from_str(json)?;
        Self::new(raw.rules)
    }

    /// A table with no rules; bottles only satisfy their own name
    pub fn empty() -> Self {
        Self { rules: Vec::new() }
    }

    pub fn rules(&self) -> &[AliasRule] {
        &self.rules
    }

    /// Append a rule after the existing ones
    pub fn with_rule(mut self, rule: AliasRule) -> Result<Self, ConfigError> {
        let mut rules = std::mem::take(&mut self.rules);
        rules.push(rule);
        Self::new(rules)
    }

    /// The bottle name itself followed by every alias it satisfies
    ///
    /// `name` is lowercased before matching. Duplicates are dropped, first
    /// occurrence wins.
    pub fn expand(&self, name: &str) -> Vec<String> {
        let name = name.to_lowercase();
        let mut seen: AHashSet<String> = AHashSet::new();
        let mut expanded = Vec::new();

        seen.insert(name.clone());
        expanded.push(name.clone());

        for rule in self.rules.iter().filter(|rule| rule.matches(&name)) {
            for alias in &rule.aliases {
                if seen.insert(alias.clone()) {
                    expanded.push(alias.clone());
                }
            }
        }

        expanded
    }
}

impl Default for AliasTable {
    fn default() -> Self {
        DEFAULT_TABLE.clone()
    }
}

fn lowercase_all(values: Vec<String>) -> Vec<String> {
    values.into_iter().map(|v| v.to_lowercase()).collect()
}
