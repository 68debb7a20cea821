//! Application state and main render loop

use std::cell::Cell;
use std::time::Instant;

use chrono::Datelike;
use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Position, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use tracing::debug;

use storefront_core::{
    checkout, order_summary, CartManager, DrawerEvent, DrawerState, KeyValueStore,
};

use crate::keybindings::{normal_mode_action, Action};
use crate::mode::{Focus, Mode};
use crate::surface::ViewSlot;
use crate::views::{ContactField, ContactPanel, DrawerPanel, MenuView, SummaryView};
use crate::widgets::{CartBadge, StatusBar};

const DEFAULT_HINT: &str =
    "Enter add | Tab focus | +/- qty | x remove | c cart | o checkout | i contact | ? help | q quit";

/// Where the last frame put the clickable parts.
#[derive(Debug, Clone, Copy, Default)]
struct HitAreas {
    badge: Rect,
    drawer: Option<Rect>,
    drawer_close: Rect,
}

/// Main application state
pub struct App<S: KeyValueStore> {
    /// Current mode (NORMAL, INSERT, CONFIRM)
    pub mode: Mode,
    /// Owner of the cart
    pub manager: CartManager<S>,
    /// Inline summary render surface
    pub summary_slot: ViewSlot,
    /// Drawer render surface
    pub drawer_slot: ViewSlot,
    /// Drawer visibility
    pub drawer: DrawerState,
    /// Which panel navigation keys apply to
    pub focus: Focus,
    pub menu: MenuView,
    pub summary: SummaryView,
    pub contact: ContactPanel,
    /// Status message
    pub status_message: Option<String>,
    status_is_error: bool,
    /// Whether to show the help overlay
    pub show_help: bool,
    /// Confirmation text after a completed checkout
    pub receipt_message: Option<String>,
    /// Checkout was started from the drawer
    checkout_from_drawer: bool,
    hits: Cell<HitAreas>,
}

impl<S: KeyValueStore> App<S> {
    /// Create a new application instance around a loaded cart manager
    pub fn new(mut manager: CartManager<S>) -> Self {
        let summary_slot = ViewSlot::new();
        let drawer_slot = ViewSlot::new();
        manager.add_surface(summary_slot.clone());
        manager.add_surface(drawer_slot.clone());

        Self {
            mode: Mode::Normal,
            manager,
            summary_slot,
            drawer_slot,
            drawer: DrawerState::new(),
            focus: Focus::Menu,
            menu: MenuView::new(),
            summary: SummaryView::new(),
            contact: ContactPanel::new(),
            status_message: None,
            status_is_error: false,
            show_help: false,
            receipt_message: None,
            checkout_from_drawer: false,
            hits: Cell::new(HitAreas::default()),
        }
    }

    /// Expire timed feedback
    pub fn tick(&mut self, now: Instant) {
        self.menu.tick(now);
        self.contact.tick(now);
    }

    // ==================== Rendering ====================

    /// Render the application
    pub fn render(&mut self, frame: &mut Frame, now: Instant) {
        let size = frame.area();

        // Header, body, contact form, footer, status line
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1), // Header
                Constraint::Min(0),    // Menu + summary
                Constraint::Length(6), // Contact form
                Constraint::Length(1), // Footer
                Constraint::Length(1), // Status line
            ])
            .split(size);

        let badge = self.render_header(frame, chunks[0]);

        let body = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
            .split(chunks[1]);

        let summary_view = self.summary_slot.latest();
        self.summary
            .clamp(summary_view.as_ref().map(|v| v.lines.len()).unwrap_or(0));

        self.menu.render(
            frame,
            body[0],
            self.manager.catalog(),
            self.manager.currency_symbol(),
            self.focus == Focus::Menu && self.mode == Mode::Normal,
            now,
        );
        self.summary.render(
            frame,
            body[1],
            summary_view.as_ref(),
            self.focus == Focus::Cart && self.mode == Mode::Normal,
        );

        self.contact
            .render(frame, chunks[2], self.mode == Mode::Insert, now);
        self.render_footer(frame, chunks[3]);
        self.render_status_line(frame, chunks[4]);

        let mut hits = HitAreas {
            badge,
            ..HitAreas::default()
        };
        if self.drawer.is_open() {
            let area = DrawerPanel::area(chunks[1]);
            let selected = (self.focus == Focus::Cart).then_some(self.summary.selected);
            DrawerPanel::render(frame, area, self.drawer_slot.latest().as_ref(), selected);
            hits.drawer = Some(area);
            hits.drawer_close = DrawerPanel::close_area(area);
        }
        self.hits.set(hits);

        if self.mode == Mode::Confirm {
            self.render_confirm(frame, size);
        } else if let Some(message) = &self.receipt_message {
            render_popup(frame, size, "Order received", message);
        }

        if self.show_help {
            self.render_help_overlay(frame, size);
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) -> Rect {
        let title = Paragraph::new(Line::from(vec![Span::styled(
            " Little Pizzeria ",
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        )]))
        .style(Style::default().bg(Color::DarkGray));
        frame.render_widget(title, area);

        let count = self
            .summary_slot
            .latest()
            .map(|view| view.item_count)
            .unwrap_or(0);
        let badge = CartBadge::new(count, self.drawer.is_open());
        let width = badge.width().min(area.width);
        let badge_area = Rect {
            x: area.x + area.width - width,
            y: area.y,
            width,
            height: 1,
        };
        frame.render_widget(badge, badge_area);
        badge_area
    }

    fn render_footer(&self, frame: &mut Frame, area: Rect) {
        let year = chrono::Local::now().year();
        let footer = Paragraph::new(format!("© {} Little Pizzeria · Pickup only", year))
            .style(Style::default().fg(Color::DarkGray));
        frame.render_widget(footer, area);
    }

    fn render_status_line(&self, frame: &mut Frame, area: Rect) {
        let message = match (self.mode, self.contact.active) {
            (Mode::Insert, ContactField::Name) => {
                "Editing name | Tab phone | Enter send | Esc done"
            }
            (Mode::Insert, ContactField::Phone) => {
                "Editing phone | Tab name | Enter send | Esc done"
            }
            (Mode::Confirm, _) => "Enter/y place order | Esc/n cancel",
            (Mode::Normal, _) => self.status_message.as_deref().unwrap_or(DEFAULT_HINT),
        };
        let is_error = self.mode == Mode::Normal && self.status_is_error;
        frame.render_widget(StatusBar::new(self.mode, message, is_error), area);
    }

    fn render_confirm(&self, frame: &mut Frame, area: Rect) {
        let totals = self.manager.compute_totals();
        let symbol = self.manager.currency_symbol();
        let text = format!(
            "{}\n\nSubtotal: {}\nTax: {}\nTotal: {}\n\nPlace this order? (y/n)",
            order_summary(self.manager.cart(), self.manager.catalog()),
            storefront_core::format_currency(totals.subtotal, symbol),
            storefront_core::format_currency(totals.tax, symbol),
            storefront_core::format_currency(totals.total, symbol),
        );
        render_popup(frame, area, "Checkout", &text);
    }

    fn render_help_overlay(&self, frame: &mut Frame, area: Rect) {
        let help_text = r#"
Storefront - Help

Menu (Tab to switch focus):
  j/k     - Move up/down
  0-9     - Type quantity
  Enter/a - Add to cart

Cart:
  +/-     - Increase/decrease quantity
  x       - Remove line
  X       - Clear cart
  o       - Checkout

Drawer:
  c       - Open/close the cart drawer
  Esc     - Close drawer
  Click outside the drawer to close it

Contact:
  i       - Edit contact form
  Tab     - Switch field
  Enter   - Send

Other:
  ?       - Toggle this help
  q       - Quit
"#;

        let block = Block::default()
            .title("Help")
            .borders(Borders::ALL)
            .style(Style::default().bg(Color::Black));

        let help_area = centered_rect(60, 80, area);
        frame.render_widget(Clear, help_area);
        let paragraph = Paragraph::new(help_text).block(block);
        frame.render_widget(paragraph, help_area);
    }

    // ==================== Input ====================

    /// Handle a key press, returns true if app should quit
    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match self.mode {
            Mode::Normal => self.handle_normal_key(key.code, now),
            Mode::Insert => self.handle_insert_key(key, now),
            Mode::Confirm => self.handle_confirm_key(key.code),
        }
    }

    fn handle_normal_key(&mut self, code: KeyCode, now: Instant) -> bool {
        // Any key dismisses the receipt
        if self.receipt_message.take().is_some() {
            return false;
        }

        let Some(action) = normal_mode_action(code) else {
            return false;
        };
        self.summary.clamp(self.manager.cart().len());

        match action {
            Action::Quit => return true,
            Action::SwitchFocus => self.focus = self.focus.toggle(),
            Action::MoveDown => match self.focus {
                Focus::Menu => self.menu.next(self.manager.catalog().len()),
                Focus::Cart => self.summary.next(self.manager.cart().len()),
            },
            Action::MoveUp => match self.focus {
                Focus::Menu => self.menu.prev(self.manager.catalog().len()),
                Focus::Cart => self.summary.prev(),
            },
            Action::AddSelected => {
                if self.focus == Focus::Menu {
                    self.add_selected(now);
                }
            }
            Action::QtyDigit(c) => {
                if self.focus == Focus::Menu {
                    self.menu.push_digit(c);
                }
            }
            Action::QtyBackspace => {
                if self.focus == Focus::Menu {
                    self.menu.backspace();
                }
            }
            Action::Increment => {
                if let Some(id) = self.selected_line_id() {
                    self.manager.increment(&id);
                }
            }
            Action::Decrement => {
                if let Some(id) = self.selected_line_id() {
                    self.manager.decrement(&id);
                }
            }
            Action::Remove => {
                if let Some(id) = self.selected_line_id() {
                    self.manager.remove(&id);
                    self.set_status("Removed from cart");
                }
            }
            Action::ClearCart => {
                self.manager.clear_cart();
                self.set_status("Cart cleared");
            }
            Action::ToggleDrawer => {
                self.drawer.handle(DrawerEvent::TriggerClicked);
            }
            Action::Checkout => self.begin_checkout(),
            Action::EditContact => {
                self.mode = Mode::Insert;
            }
            Action::Cancel => {
                if self.show_help {
                    self.show_help = false;
                } else {
                    self.drawer.handle(DrawerEvent::Escape);
                }
            }
            Action::ToggleHelp => self.show_help = !self.show_help,
        }
        false
    }

    fn handle_insert_key(&mut self, key: KeyEvent, now: Instant) -> bool {
        match key.code {
            KeyCode::Esc => {
                self.mode = Mode::Normal;
            }
            KeyCode::Tab => self.contact.switch_field(),
            KeyCode::Enter => {
                let status = self.contact.submit(now);
                if !status.is_error() {
                    self.mode = Mode::Normal;
                }
            }
            _ => self.contact.input(key),
        }
        false
    }

    fn handle_confirm_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Enter | KeyCode::Char('y') => {
                self.mode = Mode::Normal;
                if let Some(receipt) = checkout(&mut self.manager) {
                    self.receipt_message = Some(receipt.confirmation_message());
                    self.set_status(format!("Order {} placed", receipt.id));
                }
                if self.checkout_from_drawer {
                    self.drawer.close();
                }
                self.checkout_from_drawer = false;
            }
            KeyCode::Esc | KeyCode::Char('n') => {
                debug!("Checkout cancelled");
                self.mode = Mode::Normal;
                self.checkout_from_drawer = false;
            }
            _ => {}
        }
        false
    }

    /// Handle a mouse event
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if mouse.kind != MouseEventKind::Down(MouseButton::Left) {
            return;
        }
        let at = Position::new(mouse.column, mouse.row);
        let hits = self.hits.get();
        debug!("Click at {},{}", at.x, at.y);

        if hits.badge.contains(at) {
            self.drawer.handle(DrawerEvent::TriggerClicked);
            return;
        }
        if let Some(drawer) = hits.drawer {
            if hits.drawer_close.contains(at) {
                self.drawer.handle(DrawerEvent::CloseClicked);
            } else if !drawer.contains(at) {
                self.drawer.handle(DrawerEvent::OutsideClick);
            }
        }
    }

    // ==================== Helpers ====================

    fn add_selected(&mut self, now: Instant) {
        let Some(item) = self.manager.catalog().items().get(self.menu.selected) else {
            return;
        };
        let id = item.id.clone();
        let name = item.name.clone();
        let qty = self.menu.qty();

        self.manager.add_to_cart(&id, i64::from(qty));
        self.menu.mark_added(&id, now);
        self.set_status(format!("Added {} × {}", qty, name));
    }

    fn selected_line_id(&self) -> Option<String> {
        if self.focus != Focus::Cart {
            return None;
        }
        self.manager
            .cart()
            .lines()
            .get(self.summary.selected)
            .map(|line| line.id.clone())
    }

    fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = false;
    }

    fn set_error(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_is_error = true;
    }

    fn begin_checkout(&mut self) {
        if self.manager.cart().is_empty() {
            self.set_error("Cart is empty");
            return;
        }
        self.checkout_from_drawer = self.drawer.is_open();
        self.mode = Mode::Confirm;
    }
}

fn render_popup(frame: &mut Frame, area: Rect, title: &str, text: &str) {
    let popup = centered_rect(60, 50, area);
    frame.render_widget(Clear, popup);
    let paragraph = Paragraph::new(text.to_string())
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .title(title.to_string())
                .borders(Borders::ALL)
                .style(Style::default().bg(Color::Black)),
        );
    frame.render_widget(paragraph, popup);
}

/// Helper function to create a centered rect
fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}
