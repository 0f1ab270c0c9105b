//! Fixture catalog and view-model helpers for the EcoPack360 dashboard.
//!
//! This crate is UI-framework agnostic so the Leptos client (and its SSR
//! server) can consume the same records, filters and derived figures. Every
//! table is `'static` fixture data; nothing here allocates state or mutates a
//! record.

pub mod filter;
pub mod fixtures;
pub mod format;
pub mod model;
pub mod page;
pub mod stats;

pub use filter::{StatusFilter, SupplierCategory, filter_orders, filter_suppliers};
pub use model::*;
pub use page::PageId;

/// Error returned when a UI control value does not name a known option.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    #[error("unknown page id: {0}")]
    UnknownPage(String),
    #[error("unknown supplier category: {0}")]
    UnknownCategory(String),
    #[error("unknown order status: {0}")]
    UnknownStatus(String),
}
