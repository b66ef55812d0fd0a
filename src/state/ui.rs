//! Local UI chrome state (theme, mobile menu).
//!
//! DESIGN
//! ======
//! Keeps presentation concerns out of `auth` so the session state machine
//! stays free of anything that does not affect routing.

#[cfg(test)]
#[path = "ui_test.rs"]
mod ui_test;

use crate::state::theme::Theme;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct UiState {
    pub theme: Theme,
    pub mobile_menu_open: bool,
}

impl UiState {
    pub fn toggle_mobile_menu(&mut self) {
        self.mobile_menu_open = !self.mobile_menu_open;
    }

    /// Called after any navigation from the menu.
    pub fn close_mobile_menu(&mut self) {
        self.mobile_menu_open = false;
    }
}
