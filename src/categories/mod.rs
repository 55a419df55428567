//! Item categories and the name lookup that assigns them.
//!
//! ## Key Types
//!
//! - `Category`: The five behaviors an item can follow
//! - `CategoryRegistry`: Exact-name lookup, defaulting to `Regular`

pub mod category;
pub mod registry;

pub use category::Category;
pub use registry::{CategoryRegistry, AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, SULFURAS};
