//! Supplier directory filter state.

#[cfg(test)]
#[path = "suppliers_test.rs"]
mod suppliers_test;

use catalog::fixtures::SUPPLIERS;
use catalog::{Supplier, SupplierCategory, filter_suppliers};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SupplierFilterState {
    pub category: SupplierCategory,
    pub location: String,
}

impl SupplierFilterState {
    pub fn select_category(&mut self, category: SupplierCategory) {
        self.category = category;
    }

    pub fn set_location(&mut self, location: String) {
        self.location = location;
    }

    /// Suppliers shown for the current filter values.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static Supplier> {
        filter_suppliers(SUPPLIERS, self.category, &self.location)
    }
}
