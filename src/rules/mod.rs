//! Update rules and the engine that applies them.
//!
//! - `update`: One function per category, dispatched by `Category::rule`
//! - `rulebook`: Name lookup plus configuration, applied to any item slice
//! - `engine`: `GildedRose`, the shop that owns its stock

pub mod update;
pub mod rulebook;
pub mod engine;

pub use update::{
    update_aged_brie, update_backstage_pass, update_conjured, update_legendary, update_regular,
    UpdateRule,
};
pub use rulebook::Rulebook;
pub use engine::GildedRose;
