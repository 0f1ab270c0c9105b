//! Transient notifications.
//!
//! DESIGN
//! ======
//! Mirrors a single-slot toaster: pushing a toast evicts the oldest once
//! `TOAST_LIMIT` is reached. Ids are monotonically increasing so a dismiss
//! timer for an evicted toast is a harmless no-op.

#[cfg(test)]
#[path = "toast_test.rs"]
mod toast_test;

pub const TOAST_LIMIT: usize = 1;
pub const TOAST_DURATION_MS: u64 = 5_000;

pub const ORDER_SENT_TITLE: &str = "Order Request Sent";
pub const ORDER_SENT_DESCRIPTION: &str =
    "Your order request has been sent to the supplier. You'll receive a response within 24 hours.";
pub const QUOTE_SENT_TITLE: &str = "Quote Request Sent";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub title: String,
    pub description: String,
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ToastState {
    pub items: Vec<Toast>,
    pub last_id: u64,
}

impl ToastState {
    /// Show a toast and return its id.
    pub fn push(&mut self, title: impl Into<String>, description: impl Into<String>) -> u64 {
        self.last_id += 1;
        self.items.push(Toast { id: self.last_id, title: title.into(), description: description.into() });
        if self.items.len() > TOAST_LIMIT {
            let overflow = self.items.len() - TOAST_LIMIT;
            self.items.drain(..overflow);
        }
        self.last_id
    }

    /// Remove toast `id`. Returns whether it was still showing.
    pub fn dismiss(&mut self, id: u64) -> bool {
        let before = self.items.len();
        self.items.retain(|t| t.id != id);
        self.items.len() != before
    }
}

/// Description for the quote toast fired from a supplier card.
pub fn quote_sent_description(supplier: &str) -> String {
    format!("{supplier} has received your quote request and typically replies within 48 hours.")
}
