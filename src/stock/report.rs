//! Day-by-day stock report.
//!
//! Renders the classic text layout:
//!
//! ```text
//! -------- day 0 --------
//! name, sellIn, quality
//! +5 Dexterity Vest, 10, 20
//! ...
//!
//! -------- day 1 --------
//! ...
//! ```

use crate::core::item::Item;
use crate::rules::{GildedRose, Rulebook};

/// Snapshots of the stock at the end of each simulated day.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DailyReport {
    days: Vec<Vec<Item>>,
}

impl DailyReport {
    /// Run `items` through `days` updates, recording day 0 through `days`.
    #[must_use]
    pub fn simulate(items: Vec<Item>, days: u32, rulebook: Rulebook) -> Self {
        let mut shop = GildedRose::with_rulebook(items, rulebook);
        let mut snapshots = Vec::new();

        snapshots.push(shop.items().to_vec());
        for _ in 0..days {
            shop.update_quality();
            snapshots.push(shop.items().to_vec());
        }

        Self { days: snapshots }
    }

    /// Stock as it stood on `day`.
    #[must_use]
    pub fn day(&self, day: usize) -> Option<&[Item]> {
        self.days.get(day).map(Vec::as_slice)
    }

    /// Number of recorded days, including day 0.
    #[must_use]
    pub fn len(&self) -> usize {
        self.days.len()
    }

    /// Always false: day 0 is always recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.days.is_empty()
    }
}

impl std::fmt::Display for DailyReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (day, items) in self.days.iter().enumerate() {
            writeln!(f, "-------- day {day} --------")?;
            writeln!(f, "name, sellIn, quality")?;
            for item in items {
                writeln!(f, "{item}")?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Render the report for `items` over `days` days under `rulebook`.
#[must_use]
pub fn render_days(items: Vec<Item>, days: u32, rulebook: Rulebook) -> String {
    DailyReport::simulate(items, days, rulebook).to_string()
}
