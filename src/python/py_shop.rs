//! Shop bindings for Python.

use pyo3::prelude::*;

use crate::core::Item;
use crate::rules::Rulebook;
use crate::stock::standard_stock;

use super::py_core::PyItem;

/// Python wrapper for GildedRose.
///
/// Holds references to the caller's `Item` objects and updates them in
/// place, so the caller sees the new values without fetching them back.
#[pyclass(name = "GildedRose")]
pub struct PyGildedRose {
    items: Vec<Py<PyItem>>,
    rulebook: Rulebook,
}

#[pymethods]
impl PyGildedRose {
    #[new]
    fn new(items: Vec<Py<PyItem>>) -> Self {
        Self {
            items,
            rulebook: Rulebook::standard(),
        }
    }

    /// The items this shop updates (the same objects passed in).
    #[getter]
    fn items(&self, py: Python<'_>) -> Vec<Py<PyItem>> {
        self.items.iter().map(|item| item.clone_ref(py)).collect()
    }

    /// Advance every item by one day.
    fn update_quality(&self, py: Python<'_>) {
        for item in &self.items {
            let mut item = item.bind(py).borrow_mut();
            let mut native = Item::from(&*item);
            self.rulebook.apply(&mut native);
            item.sell_in = native.sell_in;
            item.quality = native.quality;
        }
    }

    /// Advance every item by `days` days.
    fn advance(&self, py: Python<'_>, days: u32) {
        for _ in 0..days {
            self.update_quality(py);
        }
    }
}

/// The standard opening stock as fresh `Item` objects.
#[pyfunction]
#[pyo3(name = "standard_stock")]
pub fn py_standard_stock() -> Vec<PyItem> {
    standard_stock().into_iter().map(PyItem::from).collect()
}
