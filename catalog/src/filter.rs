//! Pure list filters behind the supplier and order controls.
//!
//! Filters never reorder or mutate: the result is always a subsequence of the
//! input slice, borrowed from it.

#[cfg(test)]
#[path = "filter_test.rs"]
mod filter_test;

use std::str::FromStr;

use crate::ParseError;
use crate::model::{Order, OrderStatus, Supplier};

// =============================================================================
// SUPPLIERS
// =============================================================================

/// Category buttons on the supplier directory.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum SupplierCategory {
    #[default]
    All,
    Food,
    Shipping,
    Protective,
    Custom,
}

impl SupplierCategory {
    pub const ALL: [Self; 5] = [Self::All, Self::Food, Self::Shipping, Self::Protective, Self::Custom];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Food => "food",
            Self::Shipping => "shipping",
            Self::Protective => "protective",
            Self::Custom => "custom",
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Categories",
            Self::Food => "Food Containers",
            Self::Shipping => "Shipping Boxes",
            Self::Protective => "Protective Wrap",
            Self::Custom => "Custom Solutions",
        }
    }

    /// Lowercase keyword matched against specialties; `None` matches all.
    #[must_use]
    pub fn keyword(self) -> Option<&'static str> {
        match self {
            Self::All => None,
            other => Some(other.id()),
        }
    }
}

impl FromStr for SupplierCategory {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|c| c.id() == s)
            .ok_or_else(|| ParseError::UnknownCategory(s.to_owned()))
    }
}

#[must_use]
pub fn supplier_matches_category(supplier: &Supplier, category: SupplierCategory) -> bool {
    let Some(keyword) = category.keyword() else {
        return true;
    };
    supplier
        .specialties
        .iter()
        .any(|specialty| specialty.to_lowercase().contains(keyword))
}

/// Case-insensitive substring match on the supplier's location. Blank input
/// matches everything.
#[must_use]
pub fn supplier_matches_location(supplier: &Supplier, location: &str) -> bool {
    let needle = location.trim().to_lowercase();
    needle.is_empty() || supplier.location.to_lowercase().contains(&needle)
}

#[must_use]
pub fn filter_suppliers<'a>(suppliers: &'a [Supplier], category: SupplierCategory, location: &str) -> Vec<&'a Supplier> {
    suppliers
        .iter()
        .filter(|s| supplier_matches_category(s, category) && supplier_matches_location(s, location))
        .collect()
}

// =============================================================================
// ORDERS
// =============================================================================

/// Value of the order status select.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum StatusFilter {
    #[default]
    All,
    Only(OrderStatus),
}

impl StatusFilter {
    /// Options in select order.
    pub const OPTIONS: [Self; 5] = [
        Self::All,
        Self::Only(OrderStatus::Pending),
        Self::Only(OrderStatus::InProgress),
        Self::Only(OrderStatus::Completed),
        Self::Only(OrderStatus::Rejected),
    ];

    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::All => "all",
            Self::Only(status) => status.id(),
        }
    }

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::All => "All Status",
            Self::Only(status) => status.label(),
        }
    }

    #[must_use]
    pub fn matches(self, status: OrderStatus) -> bool {
        match self {
            Self::All => true,
            Self::Only(selected) => selected == status,
        }
    }
}

impl FromStr for StatusFilter {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::OPTIONS
            .into_iter()
            .find(|f| f.id() == s)
            .ok_or_else(|| ParseError::UnknownStatus(s.to_owned()))
    }
}

/// Case-insensitive substring match on id, supplier or product. Blank input
/// matches everything.
#[must_use]
pub fn order_matches_query(order: &Order, query: &str) -> bool {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return true;
    }
    [order.id, order.supplier, order.product]
        .iter()
        .any(|field| field.to_lowercase().contains(&needle))
}

#[must_use]
pub fn filter_orders<'a>(orders: &'a [Order], filter: StatusFilter, query: &str) -> Vec<&'a Order> {
    orders
        .iter()
        .filter(|o| filter.matches(o.status) && order_matches_query(o, query))
        .collect()
}
