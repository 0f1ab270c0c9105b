//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Pure helpers (chart geometry, class/style strings) live here so pages and
//! components stay focused on markup and can be tested without a browser.

pub mod chart;
pub mod style;
