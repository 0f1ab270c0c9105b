//! Client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by view (`forecast`, `suppliers`, `orders`) plus app-wide
//! chrome (`ui`, `toast`). Every model is a plain struct with pure transition
//! methods; pages wrap them in `RwSignal`s so the transitions stay testable
//! without a browser.

pub mod forecast;
pub mod orders;
pub mod suppliers;
pub mod toast;
pub mod ui;
