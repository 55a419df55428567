//! Property tests for the update rules.

use gilded_rose::categories::{AGED_BRIE, BACKSTAGE_PASS, CONJURED_MANA_CAKE, SULFURAS};
use gilded_rose::{GildedRose, Item, StockGenerator};
use proptest::prelude::*;

fn one_day(name: &str, sell_in: i32, quality: i32) -> Item {
    let mut shop = GildedRose::new(vec![Item::new(name, sell_in, quality)]);
    shop.update_quality();
    shop.into_items().remove(0)
}

/// Unclamped regular loss for an item with `sell_in` days left.
fn regular_loss(sell_in: i32) -> i32 {
    if sell_in - 1 < 0 {
        2
    } else {
        1
    }
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 1000,
        ..ProptestConfig::default()
    })]

    /// Property: regular items lose one point a day, two once expired, floored at 0.
    #[test]
    fn regular_decay(sell_in in -50i32..50, quality in 0i32..=50) {
        let item = one_day("Regular Item", sell_in, quality);

        prop_assert_eq!(item.sell_in, sell_in - 1);
        prop_assert_eq!(item.quality, (quality - regular_loss(sell_in)).max(0));
    }

    /// Property: unregistered names follow the regular rule.
    #[test]
    fn unknown_names_are_regular(
        name in "[a-z]{1,12}",
        sell_in in -50i32..50,
        quality in 0i32..=50,
    ) {
        let item = one_day(&name, sell_in, quality);
        let regular = one_day("Regular Item", sell_in, quality);

        prop_assert_eq!((item.sell_in, item.quality), (regular.sell_in, regular.quality));
    }

    /// Property: Aged Brie never loses quality and never passes 50.
    #[test]
    fn aged_brie_appreciates(sell_in in -50i32..50, quality in 0i32..=50) {
        let item = one_day(AGED_BRIE, sell_in, quality);

        prop_assert!(item.quality >= quality);
        prop_assert!(item.quality <= 50);
        prop_assert_eq!(item.sell_in, sell_in - 1);
    }

    /// Property: backstage passes are worthless once the concert has passed.
    #[test]
    fn backstage_pass_worthless_after_concert(sell_in in -50i32..=0, quality in 0i32..=50) {
        let item = one_day(BACKSTAGE_PASS, sell_in, quality);

        prop_assert!(item.sell_in < 0);
        prop_assert_eq!(item.quality, 0);
    }

    /// Property: backstage passes gain 1-3 points before the concert, capped at 50.
    #[test]
    fn backstage_pass_appreciates(sell_in in 1i32..50, quality in 0i32..=50) {
        let item = one_day(BACKSTAGE_PASS, sell_in, quality);
        let gain = 1 + i32::from(sell_in <= 10) + i32::from(sell_in <= 5);

        prop_assert_eq!(item.quality, (quality + gain).min(50));
    }

    /// Property: legendary items never change, however many days pass.
    #[test]
    fn legendary_never_changes(
        sell_in in -50i32..50,
        quality in -100i32..200,
        days in 0u32..30,
    ) {
        let mut shop = GildedRose::new(vec![Item::new(SULFURAS, sell_in, quality)]);
        shop.advance(days);

        prop_assert_eq!(&shop.items()[0], &Item::new(SULFURAS, sell_in, quality));
    }

    /// Property: conjured items lose twice the regular amount, floored at 0.
    #[test]
    fn conjured_decays_twice_as_fast(sell_in in -50i32..50, quality in 0i32..=50) {
        let conjured = one_day(CONJURED_MANA_CAKE, sell_in, quality);
        let regular = one_day("Regular Item", sell_in, quality);

        prop_assert_eq!(conjured.sell_in, regular.sell_in);
        prop_assert_eq!(conjured.quality, (quality - 2 * regular_loss(sell_in)).max(0));
        if regular.quality > 0 && conjured.quality > 0 {
            prop_assert_eq!(quality - conjured.quality, 2 * (quality - regular.quality));
        }
    }

    /// Property: in-range stock stays in range for any number of days.
    #[test]
    fn quality_stays_in_bounds(seed in any::<u64>(), days in 0u32..60) {
        let mut shop = GildedRose::new(StockGenerator::new(seed).generate(40));
        shop.advance(days);

        for item in shop.items() {
            if item.name() == SULFURAS {
                prop_assert_eq!(item.quality, 80);
            } else {
                prop_assert!((0..=50).contains(&item.quality), "{}", item);
            }
        }
    }
}
