//! Keybinding definitions

use crossterm::event::KeyCode;

/// Keybinding action
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Quit the application
    Quit,
    /// Switch focus between menu and cart
    SwitchFocus,
    /// Move up in list
    MoveUp,
    /// Move down in list
    MoveDown,
    /// Add the selected menu item with the entered quantity
    AddSelected,
    /// Append a digit to the quantity field
    QtyDigit(char),
    /// Delete the last quantity digit
    QtyBackspace,
    /// Increase the selected cart line
    Increment,
    /// Decrease the selected cart line
    Decrement,
    /// Remove the selected cart line
    Remove,
    /// Empty the cart
    ClearCart,
    /// Open or close the cart drawer
    ToggleDrawer,
    /// Start checkout
    Checkout,
    /// Edit the contact form
    EditContact,
    /// Escape: close drawer or dismiss overlays
    Cancel,
    /// Toggle help
    ToggleHelp,
}

/// Get the action for a key in normal mode
pub fn normal_mode_action(code: KeyCode) -> Option<Action> {
    match code {
        KeyCode::Char('q') => Some(Action::Quit),
        KeyCode::Tab => Some(Action::SwitchFocus),
        KeyCode::Char('j') | KeyCode::Down => Some(Action::MoveDown),
        KeyCode::Char('k') | KeyCode::Up => Some(Action::MoveUp),
        KeyCode::Enter | KeyCode::Char('a') => Some(Action::AddSelected),
        KeyCode::Char(c) if c.is_ascii_digit() => Some(Action::QtyDigit(c)),
        KeyCode::Backspace => Some(Action::QtyBackspace),
        KeyCode::Char('+') | KeyCode::Char('=') => Some(Action::Increment),
        KeyCode::Char('-') => Some(Action::Decrement),
        KeyCode::Char('x') | KeyCode::Delete => Some(Action::Remove),
        KeyCode::Char('X') => Some(Action::ClearCart),
        KeyCode::Char('c') => Some(Action::ToggleDrawer),
        KeyCode::Char('o') => Some(Action::Checkout),
        KeyCode::Char('i') => Some(Action::EditContact),
        KeyCode::Char('?') => Some(Action::ToggleHelp),
        KeyCode::Esc => Some(Action::Cancel),
        _ => None,
    }
}
