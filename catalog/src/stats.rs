//! Figures derived from the fixture tables.

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::model::{Contact, ForecastPoint, Order, OrderStatus, Supplier};

#[must_use]
pub fn count_by_status(orders: &[Order], status: OrderStatus) -> usize {
    orders.iter().filter(|o| o.status == status).count()
}

/// Sum of order values in whole dollars.
#[must_use]
pub fn total_order_value(orders: &[Order]) -> u32 {
    orders.iter().map(|o| o.total_value).sum()
}

/// Rounded mean of a percent series; `0` for an empty series.
fn mean_percent(values: impl Iterator<Item = u8>) -> u8 {
    let (sum, count) = values.fold((0u32, 0u32), |(sum, count), v| (sum + u32::from(v), count + 1));
    if count == 0 {
        return 0;
    }
    // Half-up rounding; the mean of u8 values always fits in u8.
    u8::try_from((sum * 2 + count) / (count * 2)).unwrap_or(u8::MAX)
}

#[must_use]
pub fn average_order_sustainability(orders: &[Order]) -> u8 {
    mean_percent(orders.iter().map(|o| o.sustainability))
}

#[must_use]
pub fn average_supplier_sustainability(suppliers: &[Supplier]) -> u8 {
    mean_percent(suppliers.iter().map(|s| s.sustainability))
}

#[must_use]
pub fn average_confidence(points: &[ForecastPoint]) -> u8 {
    mean_percent(points.iter().map(|p| p.confidence))
}

#[must_use]
pub fn supplier_contact(suppliers: &[Supplier], name: &str) -> Option<Contact> {
    suppliers.iter().find(|s| s.name == name).map(|s| s.contact)
}

/// Supplier names for the order request select, in directory order.
#[must_use]
pub fn supplier_names(suppliers: &[Supplier]) -> Vec<&'static str> {
    suppliers.iter().map(|s| s.name).collect()
}
