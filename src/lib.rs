//! # gilded-rose
//!
//! Nightly quality and sell-in updates for the Gilded Rose's stock.
//!
//! ## Design Principles
//!
//! 1. **Name Decides Behavior**: An item's category comes from an exact
//!    lookup of its name. Unknown names are regular items.
//!
//! 2. **Enum Dispatch**: Each `Category` maps to one plain update function.
//!    Adding a category means adding a variant and a rule, nothing else.
//!
//! 3. **Bounded Steps**: Quality moves one checked step at a time, so a
//!    double decrement from quality 1 stops at 0.
//!
//! ## Quick Start
//!
//! ```
//! use gilded_rose::{GildedRose, Item};
//!
//! let mut shop = GildedRose::new(vec![
//!     Item::new("Aged Brie", 2, 0),
//!     Item::new("Conjured Mana Cake", 3, 6),
//! ]);
//!
//! shop.update_quality();
//!
//! assert_eq!(shop.items()[0].quality, 1);
//! assert_eq!(shop.items()[1].quality, 4);
//! ```
//!
//! ## Modules
//!
//! - `core`: Items, bounded quality arithmetic, configuration, errors
//! - `categories`: Item categories and the name registry
//! - `rules`: Per-category rules, the `Rulebook`, and the `GildedRose` engine
//! - `stock`: Standard stock, seeded random stock, daily reports

pub mod core;
pub mod categories;
pub mod rules;
pub mod stock;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    BackstageThresholds, Error, Item, QualityBounds, Result, ShopConfig,
};

pub use crate::categories::{Category, CategoryRegistry};

pub use crate::rules::{GildedRose, Rulebook, UpdateRule};

pub use crate::stock::{standard_stock, DailyReport, StockGenerator};
