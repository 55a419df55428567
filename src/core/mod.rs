//! Core types: items, bounded quality arithmetic, configuration, errors.

pub mod item;
pub mod quality;
pub mod config;
pub mod error;

pub use item::Item;
pub use quality::{decrease_quality, decrease_quality_by, increase_quality, QualityBounds};
pub use config::{BackstageThresholds, ShopConfig};
pub use error::{Error, Result};
