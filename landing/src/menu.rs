//! Mobile menu state, the only mutable state on the page.

/// Id of the mobile navigation panel.
pub const MOBILE_MENU_ID: &str = "mobile-menu";

/// Open/closed state of the mobile navigation panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum MenuState {
    #[default]
    Closed,
    Open,
}

impl MenuState {
    pub fn toggle(&mut self) {
        *self = match self {
            MenuState::Closed => MenuState::Open,
            MenuState::Open => MenuState::Closed,
        };
    }

    /// A navigation entry was chosen or the panel was dismissed.
    pub fn close(&mut self) {
        *self = MenuState::Closed;
    }

    /// Keyboard handling; returns `true` when the key changed the state.
    pub fn on_key(&mut self, key: &str) -> bool {
        if key == "Escape" && self.is_open() {
            self.close();
            return true;
        }
        false
    }

    pub fn is_open(self) -> bool {
        self == MenuState::Open
    }

    /// Value for the toggle's `aria-expanded`.
    pub fn aria_expanded(self) -> &'static str {
        if self.is_open() { "true" } else { "false" }
    }

    /// Id for the toggle's `aria-controls`; the panel only exists while open.
    pub fn controls(self) -> Option<&'static str> {
        self.is_open().then_some(MOBILE_MENU_ID)
    }

    /// Accessible name of the toggle button.
    pub fn toggle_label(self) -> &'static str {
        if self.is_open() {
            "Close menu"
        } else {
            "Open menu"
        }
    }
}
