//! Seeded random stock for soak tests and benchmarks.
//!
//! Uses ChaCha8 so the same seed always produces the same inventory.
//!
//! ```
//! use gilded_rose::stock::StockGenerator;
//!
//! let a = StockGenerator::new(42).generate(100);
//! let b = StockGenerator::new(42).generate(100);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::categories::{AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, SULFURAS};
use crate::core::config::ShopConfig;
use crate::core::error::Result;
use crate::core::item::Item;

const NAMES: &[&str] = &[
    "+5 Dexterity Vest",
    "Elixir of the Mongoose",
    "Potion of Minor Healing",
    "Ring of Warmth",
    AGED_BRIE,
    BACKSTAGE_PASS,
    SULFURAS,
    CONJURED_MANA_CAKE,
];

/// Deterministic random inventory source.
#[derive(Clone, Debug)]
pub struct StockGenerator {
    rng: ChaCha8Rng,
    config: ShopConfig,
    max_sell_in: i32,
}

impl StockGenerator {
    /// Create a generator for the default configuration.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self::from_parts(seed, ShopConfig::default())
    }

    /// Create a generator whose items respect `config`'s bounds.
    ///
    /// Fails if `config` does not pass `ShopConfig::validate`.
    pub fn with_config(seed: u64, config: ShopConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::from_parts(seed, config))
    }

    fn from_parts(seed: u64, config: ShopConfig) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            config,
            max_sell_in: 20,
        }
    }

    /// Sell-in values are drawn from `-max_sell_in / 2..=max_sell_in`.
    #[must_use]
    pub fn with_max_sell_in(mut self, max_sell_in: i32) -> Self {
        self.max_sell_in = max_sell_in.max(0);
        self
    }

    /// Generate one item.
    ///
    /// Legendary items get `legendary_quality`; everything else gets an
    /// in-bounds quality.
    pub fn item(&mut self) -> Item {
        let name = NAMES.choose(&mut self.rng).copied().unwrap_or(AGED_BRIE);
        let sell_in = self.rng.gen_range(-self.max_sell_in / 2..=self.max_sell_in);
        let quality = if name == SULFURAS {
            self.config.legendary_quality
        } else {
            self.rng.gen_range(self.config.bounds.min..=self.config.bounds.max)
        };
        Item::new(name, sell_in, quality)
    }

    /// Generate `count` items.
    pub fn generate(&mut self, count: usize) -> Vec<Item> {
        (0..count).map(|_| self.item()).collect()
    }
}
