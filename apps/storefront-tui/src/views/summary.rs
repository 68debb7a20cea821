//! Inline order summary - cart lines with per-line controls and totals

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};

use storefront_core::CartView;

pub const EMPTY_MESSAGE: &str = "Your cart is empty. Add pizzas from the menu.";

/// Summary view state
pub struct SummaryView {
    /// Selected cart line index
    pub selected: usize,
    list_state: ListState,
}

impl SummaryView {
    pub fn new() -> Self {
        Self {
            selected: 0,
            list_state: ListState::default(),
        }
    }

    pub fn next(&mut self, count: usize) {
        if count > 0 {
            self.selected = (self.selected + 1).min(count - 1);
        }
    }

    pub fn prev(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    /// Keep the selection inside the current line count.
    pub fn clamp(&mut self, count: usize) {
        self.selected = self.selected.min(count.saturating_sub(1));
    }

    /// Render the summary from the latest snapshot
    pub fn render(
        &mut self,
        frame: &mut Frame,
        area: Rect,
        view: Option<&CartView>,
        focused: bool,
    ) {
        let border_style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        let block = Block::default()
            .title("Your Order")
            .borders(Borders::ALL)
            .border_style(border_style);

        let Some(view) = view else {
            frame.render_widget(Paragraph::new(EMPTY_MESSAGE).block(block), area);
            return;
        };

        let inner = block.inner(area);
        frame.render_widget(block, area);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Lines
                Constraint::Length(4), // Totals
                Constraint::Length(1), // Checkout
            ])
            .split(inner);

        self.render_lines(frame, chunks[0], view, focused);
        render_totals(frame, chunks[1], view);
        render_checkout(frame, chunks[2], view);
    }

    fn render_lines(&mut self, frame: &mut Frame, area: Rect, view: &CartView, focused: bool) {
        if view.is_empty() {
            let paragraph =
                Paragraph::new(EMPTY_MESSAGE).style(Style::default().fg(Color::DarkGray));
            frame.render_widget(paragraph, area);
            return;
        }

        let items: Vec<ListItem> = view
            .lines
            .iter()
            .map(|line| {
                ListItem::new(vec![
                    Line::from(vec![
                        Span::styled(line.name.clone(), Style::default().add_modifier(Modifier::BOLD)),
                        Span::raw("  "),
                        Span::styled(view.money(line.unit_price), Style::default().fg(Color::DarkGray)),
                    ]),
                    Line::from(vec![
                        Span::raw("[−] "),
                        Span::styled(line.qty.to_string(), Style::default().fg(Color::Cyan)),
                        Span::raw(" [+]   [Remove]"),
                    ]),
                ])
            })
            .collect();

        let highlight = if focused {
            Style::default().bg(Color::Yellow).fg(Color::Black)
        } else {
            Style::default()
        };
        self.list_state.select(Some(self.selected));
        frame.render_stateful_widget(
            List::new(items).highlight_style(highlight),
            area,
            &mut self.list_state,
        );
    }
}

impl Default for SummaryView {
    fn default() -> Self {
        Self::new()
    }
}

fn render_totals(frame: &mut Frame, area: Rect, view: &CartView) {
    let row = |label: &str, amount: f64, bold: bool| {
        let style = if bold {
            Style::default().add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        Line::from(vec![
            Span::styled(format!("{:<10}", label), style),
            Span::styled(view.money(amount), style),
        ])
    };

    let lines = vec![
        Line::from("─".repeat(area.width as usize)),
        row("Subtotal", view.totals.subtotal, false),
        row("Tax", view.totals.tax, false),
        row("Total", view.totals.total, true),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

fn render_checkout(frame: &mut Frame, area: Rect, view: &CartView) {
    let style = if view.checkout_enabled() {
        Style::default().fg(Color::Black).bg(Color::Green)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    frame.render_widget(Paragraph::new(Span::styled(" [o] Checkout ", style)), area);
}

#[cfg(test)]
mod tests {
    use ratatui::{backend::TestBackend, Terminal};
    use storefront_core::{Cart, CartLine, Catalog};

    use super::*;

    fn full_view() -> CartView {
        let catalog = Catalog::builtin();
        let cart = Cart::from_lines(
            catalog
                .items()
                .iter()
                .map(|item| CartLine::new(item.id.clone(), 1)),
        );
        CartView::build(&cart, &catalog, 0.08, "$")
    }

    fn draw(summary: &mut SummaryView, view: &CartView, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(40, height)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                summary.render(f, area, Some(view), true);
            })
            .unwrap();
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn last_line_visible_when_selected_on_short_terminal() {
        let view = full_view();
        let mut summary = SummaryView::new();

        let screen = draw(&mut summary, &view, 12);
        assert!(screen.contains("Margherita"));
        assert!(!screen.contains("Four Cheese"));

        for _ in 0..view.lines.len() {
            summary.next(view.lines.len());
        }
        let screen = draw(&mut summary, &view, 12);
        assert!(screen.contains("Four Cheese"));
        assert!(!screen.contains("Margherita"));
    }

    #[test]
    fn selection_stays_in_bounds() {
        let mut summary = SummaryView::new();
        summary.next(2);
        summary.next(2);
        assert_eq!(summary.selected, 1);
        summary.clamp(1);
        assert_eq!(summary.selected, 0);
        summary.prev();
        assert_eq!(summary.selected, 0);
        summary.clamp(0);
        assert_eq!(summary.selected, 0);
    }
}
