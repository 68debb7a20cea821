//! TUI views

mod contact;
mod drawer;
mod menu;
mod summary;

pub use contact::{ContactField, ContactPanel};
pub use drawer::DrawerPanel;
pub use menu::MenuView;
pub use summary::SummaryView;
