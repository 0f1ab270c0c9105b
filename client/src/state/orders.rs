//! Order management state: status filter, search, request form, expanded card.
//!
//! DESIGN
//! ======
//! The request form is accepted unconditionally. Submitting hands the draft
//! back to the page (for logging and the toast) and resets the form; no order
//! is created.

#[cfg(test)]
#[path = "orders_test.rs"]
mod orders_test;

use catalog::fixtures::ORDERS;
use catalog::{Order, StatusFilter, filter_orders};
use serde::Serialize;

/// Contents of the "Create New Order Request" form.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct OrderDraft {
    pub supplier: String,
    pub product: String,
    pub quantity: String,
    pub budget: String,
    pub delivery_date: String,
    pub requirements: String,
}

/// Names one editable field of an [`OrderDraft`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DraftField {
    Supplier,
    Product,
    Quantity,
    Budget,
    DeliveryDate,
    Requirements,
}

impl OrderDraft {
    fn slot(&mut self, field: DraftField) -> &mut String {
        match field {
            DraftField::Supplier => &mut self.supplier,
            DraftField::Product => &mut self.product,
            DraftField::Quantity => &mut self.quantity,
            DraftField::Budget => &mut self.budget,
            DraftField::DeliveryDate => &mut self.delivery_date,
            DraftField::Requirements => &mut self.requirements,
        }
    }

    #[must_use]
    pub fn get(&self, field: DraftField) -> &str {
        match field {
            DraftField::Supplier => &self.supplier,
            DraftField::Product => &self.product,
            DraftField::Quantity => &self.quantity,
            DraftField::Budget => &self.budget,
            DraftField::DeliveryDate => &self.delivery_date,
            DraftField::Requirements => &self.requirements,
        }
    }

    pub fn set(&mut self, field: DraftField, value: String) {
        *self.slot(field) = value;
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct OrdersState {
    pub status_filter: StatusFilter,
    pub query: String,
    pub show_form: bool,
    pub draft: OrderDraft,
    /// Order id whose details panel is open.
    pub expanded: Option<&'static str>,
}

impl OrdersState {
    pub fn set_status_filter(&mut self, filter: StatusFilter) {
        self.status_filter = filter;
    }

    /// Apply a raw `<select>` value. Unknown values reset to all statuses.
    pub fn select_status(&mut self, raw: &str) {
        self.status_filter = raw.parse().unwrap_or_default();
    }

    pub fn set_query(&mut self, query: String) {
        self.query = query;
    }

    pub fn open_form(&mut self) {
        self.show_form = true;
    }

    pub fn cancel_form(&mut self) {
        self.show_form = false;
        self.draft = OrderDraft::default();
    }

    /// Close the form and return what was entered.
    pub fn submit_form(&mut self) -> OrderDraft {
        self.show_form = false;
        std::mem::take(&mut self.draft)
    }

    /// Open the form prefilled from an existing pending order so the user can
    /// send a revised request.
    pub fn start_revision(&mut self, order: &Order) {
        self.draft = OrderDraft {
            supplier: order.supplier.to_owned(),
            product: order.product.to_owned(),
            quantity: order.quantity.to_string(),
            budget: order.total_value.to_string(),
            delivery_date: order.delivery_date.unwrap_or_default().to_owned(),
            requirements: String::new(),
        };
        self.show_form = true;
    }

    pub fn toggle_details(&mut self, order_id: &'static str) {
        self.expanded = if self.expanded == Some(order_id) { None } else { Some(order_id) };
    }

    #[must_use]
    pub fn is_expanded(&self, order_id: &str) -> bool {
        self.expanded == Some(order_id)
    }

    /// Orders shown for the current filter values.
    #[must_use]
    pub fn visible(&self) -> Vec<&'static Order> {
        filter_orders(ORDERS, self.status_filter, &self.query)
    }
}
