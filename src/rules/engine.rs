//! The nightly update engine.
//!
//! `GildedRose` holds the shop's stock and a `Rulebook`. Each call to
//! `update_quality` is one day: every item is visited exactly once and
//! updated by its category's rule.

use tracing::debug;

use super::rulebook::Rulebook;
use crate::core::item::Item;

/// The shop.
///
/// ```
/// use gilded_rose::{GildedRose, Item};
///
/// let mut shop = GildedRose::new(vec![
///     Item::new("+5 Dexterity Vest", 10, 20),
///     Item::new("Sulfuras, Hand of Ragnaros", 0, 80),
/// ]);
///
/// shop.update_quality();
///
/// assert_eq!(shop.items()[0].to_string(), "+5 Dexterity Vest, 9, 19");
/// assert_eq!(shop.items()[1].to_string(), "Sulfuras, Hand of Ragnaros, 0, 80");
/// ```
#[derive(Clone, Debug)]
pub struct GildedRose {
    items: Vec<Item>,
    rulebook: Rulebook,
}

impl GildedRose {
    /// Create a shop with the standard rules.
    #[must_use]
    pub fn new(items: Vec<Item>) -> Self {
        Self::with_rulebook(items, Rulebook::standard())
    }

    /// Create a shop with a custom rulebook.
    #[must_use]
    pub fn with_rulebook(items: Vec<Item>, rulebook: Rulebook) -> Self {
        Self { items, rulebook }
    }

    /// Advance every item by one day.
    pub fn update_quality(&mut self) {
        debug!(items = self.items.len(), "updating quality");
        self.rulebook.apply_all(&mut self.items);
    }

    /// Advance every item by `days` days.
    pub fn advance(&mut self, days: u32) {
        for _ in 0..days {
            self.update_quality();
        }
    }

    /// The stock.
    #[must_use]
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    /// Mutable access to the stock, for callers adjusting items between days.
    pub fn items_mut(&mut self) -> &mut [Item] {
        &mut self.items
    }

    /// The rulebook in use.
    #[must_use]
    pub fn rulebook(&self) -> &Rulebook {
        &self.rulebook
    }

    /// Hand the stock back to the caller.
    #[must_use]
    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}
