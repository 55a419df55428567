//! Multi-day simulation tests.
//!
//! These run the standard opening stock and generated stock through several
//! days and check the results end to end.

use gilded_rose::categories::{Category, CategoryRegistry, SULFURAS};
use gilded_rose::stock::{render_days, standard_stock, DailyReport, StockGenerator};
use gilded_rose::{GildedRose, Item, Rulebook, ShopConfig};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

const TWO_DAY_REPORT: &str = "\
-------- day 0 --------
name, sellIn, quality
+5 Dexterity Vest, 10, 20
Aged Brie, 2, 0
Elixir of the Mongoose, 5, 7
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 15, 20
Backstage passes to a TAFKAL80ETC concert, 10, 49
Backstage passes to a TAFKAL80ETC concert, 5, 49
Conjured Mana Cake, 3, 6

-------- day 1 --------
name, sellIn, quality
+5 Dexterity Vest, 9, 19
Aged Brie, 1, 1
Elixir of the Mongoose, 4, 6
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 14, 21
Backstage passes to a TAFKAL80ETC concert, 9, 50
Backstage passes to a TAFKAL80ETC concert, 4, 50
Conjured Mana Cake, 2, 4

-------- day 2 --------
name, sellIn, quality
+5 Dexterity Vest, 8, 18
Aged Brie, 0, 2
Elixir of the Mongoose, 3, 5
Sulfuras, Hand of Ragnaros, 0, 80
Sulfuras, Hand of Ragnaros, -1, 80
Backstage passes to a TAFKAL80ETC concert, 13, 22
Backstage passes to a TAFKAL80ETC concert, 8, 50
Backstage passes to a TAFKAL80ETC concert, 3, 50
Conjured Mana Cake, 1, 2

";

/// Test the standard stock report over two days.
#[test]
fn test_standard_stock_report() {
    init_tracing();
    assert_eq!(render_days(standard_stock(), 2, Rulebook::standard()), TWO_DAY_REPORT);
}

/// Test the standard stock after the concert has passed.
#[test]
fn test_standard_stock_after_concert() {
    init_tracing();
    let mut shop = GildedRose::new(standard_stock());
    shop.advance(16);

    let items = shop.items();
    // Past the concert every pass is worthless.
    for item in items.iter().filter(|i| i.name().starts_with("Backstage")) {
        assert_eq!(item.quality, 0, "{item}");
    }
    // Aged Brie has been gaining two a day since day 2.
    assert_eq!(items[1], Item::new("Aged Brie", -14, 30));
    // Regular and conjured stock has bottomed out or is close to it.
    assert_eq!(items[2], Item::new("Elixir of the Mongoose", -11, 0));
    assert_eq!(items[8], Item::new("Conjured Mana Cake", -13, 0));
    // Legendary stock is untouched.
    assert_eq!(items[3], Item::new(SULFURAS, 0, 80));
    assert_eq!(items[4], Item::new(SULFURAS, -1, 80));
}

/// Test that report snapshots agree with a shop advanced directly.
#[test]
fn test_report_matches_engine() {
    let stock = StockGenerator::new(11).generate(25);
    let report = DailyReport::simulate(stock.clone(), 10, Rulebook::standard());

    let mut shop = GildedRose::new(stock);
    for day in 0..=10 {
        assert_eq!(report.day(day).unwrap(), shop.items(), "day {day}");
        shop.update_quality();
    }
}

/// Test a shop with custom names and configuration.
#[test]
fn test_custom_rulebook() {
    init_tracing();
    let mut registry = CategoryRegistry::with_defaults();
    registry.register("Conjured Healing Potion", Category::Conjured).unwrap();
    registry.register("Sulfuras, Hammer of Ragnaros", Category::Legendary).unwrap();

    let config = ShopConfig::new().with_bounds(0, 100).with_conjured_factor(3);
    let rulebook = Rulebook::new(registry, config).unwrap();

    let mut shop = GildedRose::with_rulebook(
        vec![
            Item::new("Conjured Healing Potion", 1, 20),
            Item::new("Sulfuras, Hammer of Ragnaros", 3, 120),
            Item::new("Aged Brie", 0, 99),
        ],
        rulebook,
    );
    shop.advance(2);

    let items = shop.items();
    // Day 1: -3 (not yet expired). Day 2: -3, -3 (expired).
    assert_eq!(items[0], Item::new("Conjured Healing Potion", -1, 11));
    assert_eq!(items[1], Item::new("Sulfuras, Hammer of Ragnaros", 3, 120));
    assert_eq!(items[2], Item::new("Aged Brie", -2, 100));
}

/// Test that a large generated stock is processed without surprises.
#[test]
fn test_generated_stock_soak() {
    let stock = StockGenerator::new(2024).generate(5_000);
    let legendary_before: Vec<_> = stock
        .iter()
        .filter(|i| i.name() == SULFURAS)
        .cloned()
        .collect();

    let mut shop = GildedRose::new(stock);
    shop.advance(100);

    let legendary_after: Vec<_> = shop
        .items()
        .iter()
        .filter(|i| i.name() == SULFURAS)
        .cloned()
        .collect();
    assert_eq!(legendary_before, legendary_after);

    for item in shop.items().iter().filter(|i| i.name() != SULFURAS) {
        assert!((0..=50).contains(&item.quality), "{item}");
    }
}
