//! The shop's standard opening stock.

use crate::categories::{AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, SULFURAS};
use crate::core::config::ShopConfig;
use crate::core::item::Item;

/// Opening stock, with legendary items at `config.legendary_quality`.
#[must_use]
pub fn standard_stock_with(config: &ShopConfig) -> Vec<Item> {
    let legendary = config.legendary_quality;
    vec![
        Item::new("+5 Dexterity Vest", 10, 20),
        Item::new(AGED_BRIE, 2, 0),
        Item::new("Elixir of the Mongoose", 5, 7),
        Item::new(SULFURAS, 0, legendary),
        Item::new(SULFURAS, -1, legendary),
        Item::new(BACKSTAGE_PASS, 15, 20),
        Item::new(BACKSTAGE_PASS, 10, 49),
        Item::new(BACKSTAGE_PASS, 5, 49),
        Item::new(CONJURED_MANA_CAKE, 3, 6),
    ]
}

/// Opening stock under the default configuration.
#[must_use]
pub fn standard_stock() -> Vec<Item> {
    standard_stock_with(&ShopConfig::default())
}
