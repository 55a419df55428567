//! Name-to-category lookup.
//!
//! The `CategoryRegistry` maps exact item names to categories. Any name it
//! does not know resolves to `Category::Regular`.

use rustc_hash::FxHashMap;

use super::category::Category;
use crate::core::error::{Error, Result};

/// The name of the aged cheese.
pub const AGED_BRIE: &str = "Aged Brie";
/// The name of the concert pass.
pub const BACKSTAGE_PASS: &str = "Backstage passes to a TAFKAL80ETC concert";
/// The name of the legendary hammer.
pub const SULFURAS: &str = "Sulfuras, Hand of Ragnaros";
/// The name of the conjured item the shop stocks.
pub const CONJURED_MANA_CAKE: &str = "Conjured Mana Cake";

/// Registry of item names with special handling.
///
/// ## Example
///
/// ```
/// use gilded_rose::categories::{Category, CategoryRegistry};
///
/// let mut registry = CategoryRegistry::with_defaults();
/// registry.register("Conjured Healing Potion", Category::Conjured).unwrap();
///
/// assert_eq!(registry.resolve("Aged Brie"), Category::AgedBrie);
/// assert_eq!(registry.resolve("Conjured Healing Potion"), Category::Conjured);
/// assert_eq!(registry.resolve("Elixir of the Mongoose"), Category::Regular);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CategoryRegistry {
    names: FxHashMap<String, Category>,
}

impl CategoryRegistry {
    /// Create an empty registry. Every name resolves to `Regular`.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a registry holding the shop's standard special items.
    #[must_use]
    pub fn with_defaults() -> Self {
        let mut names = FxHashMap::default();
        names.insert(AGED_BRIE.to_string(), Category::AgedBrie);
        names.insert(BACKSTAGE_PASS.to_string(), Category::BackstagePass);
        names.insert(SULFURAS.to_string(), Category::Legendary);
        names.insert(CONJURED_MANA_CAKE.to_string(), Category::Conjured);
        Self { names }
    }

    /// Register a name.
    ///
    /// Fails if the name is already registered.
    pub fn register(&mut self, name: impl Into<String>, category: Category) -> Result<()> {
        let name = name.into();
        if self.names.contains_key(&name) {
            return Err(Error::duplicate_name(name));
        }
        self.names.insert(name, category);
        Ok(())
    }

    /// Category for `name`. Exact match only; unknown names are `Regular`.
    #[must_use]
    pub fn resolve(&self, name: &str) -> Category {
        self.names.get(name).copied().unwrap_or_default()
    }

    /// Check if a name is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.names.contains_key(name)
    }

    /// Number of registered names.
    #[must_use]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over registered names and their categories.
    pub fn iter(&self) -> impl Iterator<Item = (&str, Category)> {
        self.names.iter().map(|(name, category)| (name.as_str(), *category))
    }
}
