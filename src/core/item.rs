//! The inventory record.

use serde::{Deserialize, Serialize};

/// A single line of stock.
///
/// `name` is the item's identity and decides which update rule applies, so it
/// is read-only once constructed. `sell_in` and `quality` are plain fields the
/// engine mutates in place and callers inspect directly.
///
/// ```
/// use gilded_rose::Item;
///
/// let item = Item::new("Aged Brie", 2, 0);
/// assert_eq!(item.name(), "Aged Brie");
/// assert_eq!(item.to_string(), "Aged Brie, 2, 0");
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Item {
    name: String,
    /// Days left before the sell-by date. Negative once it has passed.
    pub sell_in: i32,
    /// Desirability score.
    pub quality: i32,
}

impl Item {
    /// Create a new item.
    pub fn new(name: impl Into<String>, sell_in: i32, quality: i32) -> Self {
        Self {
            name: name.into(),
            sell_in,
            quality,
        }
    }

    /// The item's name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Has the sell-by date passed?
    #[must_use]
    pub fn is_expired(&self) -> bool {
        self.sell_in < 0
    }
}

impl std::fmt::Display for Item {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}, {}, {}", self.name, self.sell_in, self.quality)
    }
}
