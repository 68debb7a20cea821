//! Cart trigger with item-count badge.

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::Widget,
};

/// The header control that opens the drawer, showing the unit count.
pub struct CartBadge {
    count: u64,
    open: bool,
}

impl CartBadge {
    pub fn new(count: u64, open: bool) -> Self {
        Self { count, open }
    }

    /// Text as drawn, e.g. `[Cart 3]`.
    pub fn label(&self) -> String {
        format!("[Cart {}]", self.count)
    }

    /// Columns needed to draw the badge.
    pub fn width(&self) -> u16 {
        self.label().chars().count() as u16
    }

    fn style(&self) -> Style {
        let bg = if self.open { Color::Yellow } else { Color::Red };
        Style::default()
            .fg(Color::Black)
            .bg(bg)
            .add_modifier(Modifier::BOLD)
    }
}

impl Widget for CartBadge {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let text = self.label();
        // Only render if we have space
        if area.width >= self.width() && area.height >= 1 {
            buf.set_string(area.x, area.y, &text, self.style());
        }
    }
}
