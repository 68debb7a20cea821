//! TUI widgets

mod cart_badge;
mod status_bar;

pub use cart_badge::CartBadge;
pub use status_bar::StatusBar;
