//! Bounded quality arithmetic.
//!
//! Every quality change is a single step checked against the bounds on its
//! own. A rule that moves quality by two applies two steps, so an item at
//! quality 1 losing two points lands on 0 rather than overshooting and being
//! clamped afterwards.
//!
//! Values a caller set outside the bounds are left alone: an increment only
//! applies below `max` and a decrement only applies above `min`.

use serde::{Deserialize, Serialize};

/// Inclusive range an ordinary item's quality stays within.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityBounds {
    pub min: i32,
    pub max: i32,
}

impl QualityBounds {
    /// Create bounds. Validated by `ShopConfig::validate`.
    #[must_use]
    pub const fn new(min: i32, max: i32) -> Self {
        Self { min, max }
    }

    /// Is `quality` within the bounds?
    #[must_use]
    pub const fn contains(self, quality: i32) -> bool {
        quality >= self.min && quality <= self.max
    }
}

impl Default for QualityBounds {
    fn default() -> Self {
        Self::new(0, 50)
    }
}

/// Raise quality by one step, stopping at `bounds.max`.
#[must_use]
pub fn increase_quality(quality: i32, bounds: QualityBounds) -> i32 {
    if quality < bounds.max {
        quality + 1
    } else {
        quality
    }
}

/// Lower quality by one step, stopping at `bounds.min`.
#[must_use]
pub fn decrease_quality(quality: i32, bounds: QualityBounds) -> i32 {
    if quality > bounds.min {
        quality - 1
    } else {
        quality
    }
}

/// Apply `steps` individually checked decrements.
#[must_use]
pub fn decrease_quality_by(quality: i32, steps: u32, bounds: QualityBounds) -> i32 {
    (0..steps).fold(quality, |q, _| decrease_quality(q, bounds))
}
