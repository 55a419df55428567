//! Shop configuration.
//!
//! The defaults reproduce the shop's standing rules:
//! - Quality stays within `[0, 50]`
//! - Backstage passes gain an extra point at 10 days and another at 5
//! - Conjured items degrade twice as fast as regular ones
//! - Legendary items are stocked at quality 80
//!
//! Configs can be built in code with the `with_*` methods or deserialized;
//! missing fields fall back to the defaults.

use serde::{Deserialize, Serialize};

use super::error::{Error, Result};
use super::quality::QualityBounds;

/// Sell-in thresholds at which backstage passes gain extra quality.
///
/// Both are compared against `sell_in` before that day's decrement.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackstageThresholds {
    /// At or below this many days, +1 extra.
    pub near: i32,
    /// At or below this many days, a further +1.
    pub imminent: i32,
}

impl Default for BackstageThresholds {
    fn default() -> Self {
        Self {
            near: 10,
            imminent: 5,
        }
    }
}

/// Configuration for a `Rulebook`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ShopConfig {
    /// Quality range for every non-legendary item.
    pub bounds: QualityBounds,

    /// Backstage pass appreciation thresholds.
    pub backstage: BackstageThresholds,

    /// Single steps per quality change for conjured items.
    pub conjured_factor: u32,

    /// Quality legendary items are stocked at. Never changed by updates.
    pub legendary_quality: i32,
}

impl Default for ShopConfig {
    fn default() -> Self {
        Self {
            bounds: QualityBounds::default(),
            backstage: BackstageThresholds::default(),
            conjured_factor: 2,
            legendary_quality: 80,
        }
    }
}

impl ShopConfig {
    /// Create a config with the standard rules.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quality range.
    #[must_use]
    pub fn with_bounds(mut self, min: i32, max: i32) -> Self {
        self.bounds = QualityBounds::new(min, max);
        self
    }

    /// Set the backstage pass thresholds.
    #[must_use]
    pub fn with_backstage_thresholds(mut self, near: i32, imminent: i32) -> Self {
        self.backstage = BackstageThresholds { near, imminent };
        self
    }

    /// Set how many steps a conjured item loses per regular step.
    #[must_use]
    pub fn with_conjured_factor(mut self, factor: u32) -> Self {
        self.conjured_factor = factor;
        self
    }

    /// Set the quality legendary items are stocked at.
    #[must_use]
    pub fn with_legendary_quality(mut self, quality: i32) -> Self {
        self.legendary_quality = quality;
        self
    }

    /// Check the config is internally consistent.
    pub fn validate(&self) -> Result<()> {
        if self.bounds.min > self.bounds.max {
            return Err(Error::invalid_config(format!(
                "min quality {} exceeds max quality {}",
                self.bounds.min, self.bounds.max
            )));
        }
        if self.backstage.imminent > self.backstage.near {
            return Err(Error::invalid_config(format!(
                "backstage imminent threshold {} exceeds near threshold {}",
                self.backstage.imminent, self.backstage.near
            )));
        }
        if self.conjured_factor == 0 {
            return Err(Error::invalid_config("conjured factor must be at least 1"));
        }
        Ok(())
    }
}
