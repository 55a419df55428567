//! Item categories.

use serde::{Deserialize, Serialize};

/// Behavior tag deciding which update rule an item follows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    /// Loses quality each day, twice as fast once expired.
    #[default]
    Regular,
    /// Gains quality with age, twice as fast once expired.
    AgedBrie,
    /// Gains quality as the concert nears, worthless after it.
    BackstagePass,
    /// Never sold, never degrades.
    Legendary,
    /// Degrades like a regular item, only faster.
    Conjured,
}

impl Category {
    /// All categories, in declaration order.
    pub const ALL: [Category; 5] = [
        Category::Regular,
        Category::AgedBrie,
        Category::BackstagePass,
        Category::Legendary,
        Category::Conjured,
    ];

    /// Legendary items are exempt from quality bounds and never change.
    #[must_use]
    pub const fn is_legendary(self) -> bool {
        matches!(self, Category::Legendary)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Regular => "regular",
            Category::AgedBrie => "aged brie",
            Category::BackstagePass => "backstage pass",
            Category::Legendary => "legendary",
            Category::Conjured => "conjured",
        };
        f.write_str(name)
    }
}
