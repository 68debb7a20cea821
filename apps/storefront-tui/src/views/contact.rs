//! Contact form panel - name and phone fields with inline status

use std::time::Instant;

use crossterm::event::KeyEvent;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use tui_textarea::TextArea;

use storefront_core::contact::STATUS_TTL;
use storefront_core::{ContactForm, ContactStatus};

/// Which field receives typed input
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ContactField {
    #[default]
    Name,
    Phone,
}

/// Contact form panel state
pub struct ContactPanel {
    name: TextArea<'static>,
    phone: TextArea<'static>,
    pub active: ContactField,
    status: Option<(ContactStatus, Instant)>,
}

impl ContactPanel {
    pub fn new() -> Self {
        Self {
            name: field("Name"),
            phone: field("Phone"),
            active: ContactField::Name,
            status: None,
        }
    }

    /// Feed a key to the active field.
    pub fn input(&mut self, key: KeyEvent) {
        match self.active {
            ContactField::Name => self.name.input(key),
            ContactField::Phone => self.phone.input(key),
        };
    }

    pub fn switch_field(&mut self) {
        self.active = match self.active {
            ContactField::Name => ContactField::Phone,
            ContactField::Phone => ContactField::Name,
        };
    }

    /// Current field contents as a core form.
    pub fn form(&self) -> ContactForm {
        ContactForm {
            name: self.name.lines().join(" "),
            phone: self.phone.lines().join(" "),
        }
    }

    /// Validate and simulate sending; a successful send clears both fields.
    pub fn submit(&mut self, now: Instant) -> ContactStatus {
        let mut form = self.form();
        let status = form.submit();
        if !status.is_error() {
            self.name = field("Name");
            self.phone = field("Phone");
            self.active = ContactField::Name;
        }
        self.status = Some((status.clone(), now));
        status
    }

    /// Status still within its display window.
    pub fn status(&self, now: Instant) -> Option<&ContactStatus> {
        match &self.status {
            Some((status, at)) if now.duration_since(*at) < STATUS_TTL => Some(status),
            _ => None,
        }
    }

    /// Drop an expired status.
    pub fn tick(&mut self, now: Instant) {
        if self.status(now).is_none() {
            self.status = None;
        }
    }

    /// Render the panel
    pub fn render(&mut self, frame: &mut Frame, area: Rect, editing: bool, now: Instant) {
        let border_style = if editing {
            Style::default().fg(Color::Green)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title("Contact us (i to edit, Tab to switch, Enter to send)")
            .borders(Borders::ALL)
            .border_style(border_style);
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(3), Constraint::Min(0)])
            .split(inner);
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
            .split(rows[0]);

        for (textarea, which) in [
            (&mut self.name, ContactField::Name),
            (&mut self.phone, ContactField::Phone),
        ] {
            let active = editing && self.active == which;
            let cursor = if active {
                Style::default().add_modifier(Modifier::REVERSED)
            } else {
                Style::default()
            };
            textarea.set_cursor_style(cursor);
        }
        frame.render_widget(&self.name, cols[0]);
        frame.render_widget(&self.phone, cols[1]);

        if let Some(status) = self.status(now) {
            let color = if status.is_error() {
                Color::LightRed
            } else {
                Color::Green
            };
            let paragraph =
                Paragraph::new(status.message().to_string()).style(Style::default().fg(color));
            frame.render_widget(paragraph, rows[1]);
        }
    }
}

impl Default for ContactPanel {
    fn default() -> Self {
        Self::new()
    }
}

fn field(title: &'static str) -> TextArea<'static> {
    let mut textarea = TextArea::default();
    textarea.set_block(Block::default().borders(Borders::ALL).title(title));
    textarea.set_cursor_line_style(Style::default());
    textarea
}
