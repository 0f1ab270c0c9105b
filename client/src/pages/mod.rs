//! Page modules for the five dashboard views.
//!
//! ARCHITECTURE
//! ============
//! `index` is the only routed screen. It renders navigation plus exactly one
//! of the other pages, chosen by `UiState::page`. Each page owns its local
//! state and delegates rendering details to `components`.

pub mod dashboard;
pub mod forecasting;
pub mod impact;
pub mod index;
pub mod orders;
pub mod suppliers;
