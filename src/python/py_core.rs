//! Item bindings for Python.

use pyo3::prelude::*;

use crate::core::Item;

/// Python wrapper for Item.
///
/// `name` is read-only; `sell_in` and `quality` can be set freely.
#[pyclass(name = "Item")]
#[derive(Clone, Debug)]
pub struct PyItem {
    #[pyo3(get)]
    pub name: String,
    #[pyo3(get, set)]
    pub sell_in: i32,
    #[pyo3(get, set)]
    pub quality: i32,
}

#[pymethods]
impl PyItem {
    #[new]
    fn new(name: String, sell_in: i32, quality: i32) -> Self {
        Self {
            name,
            sell_in,
            quality,
        }
    }

    fn __repr__(&self) -> String {
        Item::from(self).to_string()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.name == other.name && self.sell_in == other.sell_in && self.quality == other.quality
    }
}

impl From<&PyItem> for Item {
    fn from(item: &PyItem) -> Self {
        Item::new(item.name.clone(), item.sell_in, item.quality)
    }
}

impl From<Item> for PyItem {
    fn from(item: Item) -> Self {
        Self {
            name: item.name().to_string(),
            sell_in: item.sell_in,
            quality: item.quality,
        }
    }
}
