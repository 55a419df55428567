//! Python bindings for the gilded-rose shop.
//!
//! # Quick Start
//!
//! ```python
//! from gilded_rose import GildedRose, Item
//!
//! items = [Item("Aged Brie", 2, 0), Item("Elixir of the Mongoose", 5, 7)]
//! shop = GildedRose(items)
//! shop.update_quality()
//!
//! print(items[0])  # Aged Brie, 1, 1
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_shop;

pub use py_core::*;
pub use py_shop::*;

/// gilded_rose: nightly quality updates for the shop's stock.
#[pymodule]
fn gilded_rose(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyItem>()?;
    m.add_class::<PyGildedRose>()?;
    m.add_function(wrap_pyfunction!(py_standard_stock, m)?)?;

    Ok(())
}
