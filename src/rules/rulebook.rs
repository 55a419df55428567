//! Category lookup plus configuration, applied to items.

use tracing::trace;

use crate::categories::{Category, CategoryRegistry};
use crate::core::config::ShopConfig;
use crate::core::error::Result;
use crate::core::item::Item;

/// Everything needed to advance an item by one day.
///
/// A `Rulebook` does not own items. `GildedRose` wraps one together with its
/// stock, and callers that keep items elsewhere can use `apply_all` directly.
///
/// ```
/// use gilded_rose::{Item, Rulebook};
///
/// let rulebook = Rulebook::standard();
/// let mut items = [Item::new("Aged Brie", 2, 0), Item::new("Elixir of the Mongoose", 5, 7)];
///
/// rulebook.apply_all(&mut items);
///
/// assert_eq!(items[0].quality, 1);
/// assert_eq!(items[1].quality, 6);
/// ```
#[derive(Clone, Debug)]
pub struct Rulebook {
    registry: CategoryRegistry,
    config: ShopConfig,
}

impl Default for Rulebook {
    fn default() -> Self {
        Self::standard()
    }
}

impl Rulebook {
    /// Create a rulebook, validating `config`.
    pub fn new(registry: CategoryRegistry, config: ShopConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { registry, config })
    }

    /// The shop's standard names and rules.
    #[must_use]
    pub fn standard() -> Self {
        Self {
            registry: CategoryRegistry::with_defaults(),
            config: ShopConfig::default(),
        }
    }

    /// The name lookup.
    #[must_use]
    pub fn registry(&self) -> &CategoryRegistry {
        &self.registry
    }

    /// The configuration.
    #[must_use]
    pub fn config(&self) -> &ShopConfig {
        &self.config
    }

    /// Category the item's name resolves to.
    #[must_use]
    pub fn category_of(&self, item: &Item) -> Category {
        self.registry.resolve(item.name())
    }

    /// Advance one item by one day.
    pub fn apply(&self, item: &mut Item) {
        let category = self.category_of(item);
        let (sell_in, quality) = (item.sell_in, item.quality);

        category.rule()(item, &self.config);

        trace!(
            name = item.name(),
            %category,
            sell_in_before = sell_in,
            quality_before = quality,
            sell_in = item.sell_in,
            quality = item.quality,
            "item updated"
        );
    }

    /// Advance every item by one day.
    pub fn apply_all(&self, items: &mut [Item]) {
        for item in items {
            self.apply(item);
        }
    }
}
