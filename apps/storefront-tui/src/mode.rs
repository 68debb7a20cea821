//! TUI interaction modes

/// The current interaction mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing the menu and cart (default)
    #[default]
    Normal,
    /// Typing into the contact form (activated with i)
    Insert,
    /// Checkout confirmation dialog is open
    Confirm,
}

impl Mode {
    /// Returns a short code for compact display.
    pub fn short_code(&self) -> &'static str {
        match self {
            Mode::Normal => "NOR",
            Mode::Insert => "INS",
            Mode::Confirm => "CNF",
        }
    }
}

/// Which panel receives navigation keys in normal mode
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Focus {
    #[default]
    Menu,
    Cart,
}

impl Focus {
    pub fn toggle(self) -> Self {
        match self {
            Focus::Menu => Focus::Cart,
            Focus::Cart => Focus::Menu,
        }
    }
}
