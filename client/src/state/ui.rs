//! App-wide UI chrome state (current page, mobile menu).
//!
//! DESIGN
//! ======
//! The current page lives here rather than in the URL: view switching is an
//! in-memory state change and the router only mounts the shell.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use catalog::PageId;

/// Shell state provided via context as `RwSignal<UiState>`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub page: PageId,
    pub menu_open: bool,
}

impl UiState {
    /// Switch to `page` and close the mobile menu. Returns whether the page
    /// changed.
    pub fn navigate(&mut self, page: PageId) -> bool {
        self.menu_open = false;
        if self.page == page {
            return false;
        }
        self.page = page;
        true
    }

    pub fn toggle_menu(&mut self) {
        self.menu_open = !self.menu_open;
    }

    pub fn close_menu(&mut self) {
        self.menu_open = false;
    }
}
