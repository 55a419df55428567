//! Per-category update rules.
//!
//! Each rule advances one item by one day. Rules only touch the item they are
//! given, and all quality movement goes through the bounded helpers in
//! `core::quality`.

use crate::categories::Category;
use crate::core::config::ShopConfig;
use crate::core::item::Item;
use crate::core::quality::{decrease_quality, decrease_quality_by, increase_quality};

/// A daily update rule.
pub type UpdateRule = fn(&mut Item, &ShopConfig);

impl Category {
    /// The update rule for this category.
    #[must_use]
    pub fn rule(self) -> UpdateRule {
        match self {
            Category::Regular => update_regular,
            Category::AgedBrie => update_aged_brie,
            Category::BackstagePass => update_backstage_pass,
            Category::Legendary => update_legendary,
            Category::Conjured => update_conjured,
        }
    }
}

/// -1 per day, -2 once expired.
pub fn update_regular(item: &mut Item, config: &ShopConfig) {
    item.quality = decrease_quality(item.quality, config.bounds);
    item.sell_in = item.sell_in.saturating_sub(1);

    if item.is_expired() {
        item.quality = decrease_quality(item.quality, config.bounds);
    }
}

/// +1 per day, +2 once expired.
pub fn update_aged_brie(item: &mut Item, config: &ShopConfig) {
    item.quality = increase_quality(item.quality, config.bounds);
    item.sell_in = item.sell_in.saturating_sub(1);

    if item.is_expired() {
        item.quality = increase_quality(item.quality, config.bounds);
    }
}

/// +1, +2 within `near` days, +3 within `imminent` days, 0 after the concert.
pub fn update_backstage_pass(item: &mut Item, config: &ShopConfig) {
    let bounds = config.bounds;
    item.quality = increase_quality(item.quality, bounds);

    // Thresholds look at the days left before today's decrement.
    if item.sell_in <= config.backstage.near {
        item.quality = increase_quality(item.quality, bounds);
    }
    if item.sell_in <= config.backstage.imminent {
        item.quality = increase_quality(item.quality, bounds);
    }

    item.sell_in = item.sell_in.saturating_sub(1);

    if item.is_expired() {
        item.quality = bounds.min;
    }
}

/// No-op.
pub fn update_legendary(_item: &mut Item, _config: &ShopConfig) {}

/// Regular decay with every step repeated `conjured_factor` times.
pub fn update_conjured(item: &mut Item, config: &ShopConfig) {
    let steps = config.conjured_factor;
    item.quality = decrease_quality_by(item.quality, steps, config.bounds);
    item.sell_in = item.sell_in.saturating_sub(1);

    if item.is_expired() {
        item.quality = decrease_quality_by(item.quality, steps, config.bounds);
    }
}
