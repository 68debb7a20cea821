//! Menu view - the catalog with a quantity field and add control

use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState},
    Frame,
};

use storefront_core::quantity::ADD_FLOOR;
use storefront_core::{format_currency, normalize_qty, Catalog};

/// How long the add control reads "Added ✓".
pub const ADDED_FEEDBACK: Duration = Duration::from_millis(700);

/// Menu view state
pub struct MenuView {
    /// Selected catalog index
    pub selected: usize,
    /// Raw quantity text for the selected item
    pub qty_input: String,
    /// The field still holds the default and the next digit replaces it
    pristine: bool,
    /// Item id that was just added, and when
    added: Option<(String, Instant)>,
    list_state: ListState,
}

impl MenuView {
    pub fn new() -> Self {
        Self {
            selected: 0,
            qty_input: "1".to_string(),
            pristine: true,
            added: None,
            list_state: ListState::default(),
        }
    }

    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1) % count;
            self.reset_qty();
        }
    }

    pub fn prev(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + count - 1) % count;
            self.reset_qty();
        }
    }

    pub fn push_digit(&mut self, c: char) {
        if self.pristine {
            self.qty_input.clear();
            self.pristine = false;
        }
        if self.qty_input.len() < 4 {
            self.qty_input.push(c);
        }
    }

    pub fn backspace(&mut self) {
        self.qty_input.pop();
        self.pristine = false;
    }

    /// Quantity to add, clamped to at least 1.
    pub fn qty(&self) -> u32 {
        normalize_qty(&self.qty_input, ADD_FLOOR)
    }

    fn reset_qty(&mut self) {
        self.qty_input = "1".to_string();
        self.pristine = true;
    }

    /// Start the "Added ✓" feedback for `id`.
    pub fn mark_added(&mut self, id: &str, now: Instant) {
        self.added = Some((id.to_string(), now));
    }

    /// Whether `id` is still showing add feedback at `now`.
    pub fn shows_added(&self, id: &str, now: Instant) -> bool {
        matches!(&self.added, Some((added, at)) if added == id && now.duration_since(*at) < ADDED_FEEDBACK)
    }

    /// Drop expired feedback.
    pub fn tick(&mut self, now: Instant) {
        if let Some((_, at)) = &self.added {
            if now.duration_since(*at) >= ADDED_FEEDBACK {
                self.added = None;
            }
        }
    }

    /// Render the menu
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        catalog: &Catalog,
        currency_symbol: &str,
        focused: bool,
        now: Instant,
    ) {
        let items: Vec<ListItem> = catalog
            .items()
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let selected = i == self.selected;
                let mut lines = vec![
                    Line::from(vec![
                        Span::styled(item.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(
                            format_currency(item.price, currency_symbol),
                            Style::default().fg(Color::Green),
                        ),
                    ]),
                    Line::from(Span::styled(
                        item.description.clone(),
                        Style::default().fg(Color::DarkGray),
                    )),
                ];

                if selected {
                    let add_label = if self.shows_added(&item.id, now) {
                        "Added ✓"
                    } else {
                        "Enter: Add"
                    };
                    lines.push(Line::from(vec![
                        Span::raw("Qty: "),
                        Span::styled(
                            format!("[{:>3}]", self.qty_input),
                            Style::default().fg(Color::Cyan),
                        ),
                        Span::raw("  "),
                        Span::styled(add_label, Style::default().fg(Color::Yellow)),
                    ]));
                }

                ListItem::new(lines)
            })
            .collect();

        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let highlight = if focused {
            Style::default().bg(Color::Yellow).fg(Color::Black)
        } else {
            Style::default()
        };
        let list = List::new(items)
            .block(
                Block::default()
                    .title("Menu")
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .highlight_style(highlight);

        self.list_state.select(Some(self.selected));
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}

impl Default for MenuView {
    fn default() -> Self {
        Self::new()
    }
}
