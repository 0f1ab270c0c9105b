//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render fixture records and page chrome. Shared state (current
//! page, toasts) comes from Leptos context providers; page-local state is
//! passed in as signals or callbacks.

pub mod charts;
pub mod glyph;
pub mod navigation;
pub mod order_card;
pub mod order_request_form;
pub mod page_header;
pub mod score_bar;
pub mod status_badge;
pub mod supplier_card;
pub mod tiles;
pub mod toaster;
