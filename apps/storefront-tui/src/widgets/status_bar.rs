//! Bottom status line: mode, hints, transient messages.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::mode::Mode;

/// A one-line bar with the mode code and a message.
pub struct StatusBar<'a> {
    mode: Mode,
    message: &'a str,
    is_error: bool,
}

impl<'a> StatusBar<'a> {
    pub fn new(mode: Mode, message: &'a str, is_error: bool) -> Self {
        Self {
            mode,
            message,
            is_error,
        }
    }

    /// Get the display color for a mode.
    pub fn mode_color(mode: Mode) -> Color {
        match mode {
            Mode::Normal => Color::Blue,
            Mode::Insert => Color::Green,
            Mode::Confirm => Color::Magenta,
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let message_style = if self.is_error {
            Style::default().fg(Color::LightRed)
        } else {
            Style::default()
        };
        let line = Line::from(vec![
            Span::styled(
                format!("[{}]", self.mode.short_code()),
                Style::default()
                    .fg(Color::White)
                    .bg(Self::mode_color(self.mode))
                    .add_modifier(Modifier::BOLD),
            ),
            Span::raw(" "),
            Span::styled(self.message.to_string(), message_style),
        ]);
        Paragraph::new(line)
            .style(Style::default().bg(Color::DarkGray))
            .render(area, buf);
    }
}
