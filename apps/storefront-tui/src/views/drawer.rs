//! Slide-out cart drawer overlay

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState, Paragraph},
    Frame,
};

use storefront_core::CartView;

pub const EMPTY_MESSAGE: &str = "Cart is empty.";

const DRAWER_WIDTH: u16 = 42;
const CLOSE_LABEL: &str = "[x]";

/// Drawer panel geometry and drawing
pub struct DrawerPanel;

impl DrawerPanel {
    /// Area the drawer occupies: a column pinned to the right edge of `body`.
    pub fn area(body: Rect) -> Rect {
        let width = DRAWER_WIDTH.min(body.width);
        Rect {
            x: body.x + body.width - width,
            y: body.y,
            width,
            height: body.height,
        }
    }

    /// The close control in the drawer's top border.
    pub fn close_area(drawer: Rect) -> Rect {
        let width = CLOSE_LABEL.len() as u16;
        if drawer.width < width + 2 {
            return Rect::default();
        }
        Rect {
            x: drawer.x + drawer.width - width - 1,
            y: drawer.y,
            width,
            height: 1,
        }
    }

    /// Render the drawer from the latest snapshot
    ///
    /// `selected` is the cart line the per-line controls act on; the list
    /// scrolls to keep it visible.
    pub fn render(frame: &mut Frame, area: Rect, view: Option<&CartView>, selected: Option<usize>) {
        frame.render_widget(Clear, area);

        let block = Block::default()
            .title("Cart")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .style(Style::default().bg(Color::Black));
        let inner = block.inner(area);
        frame.render_widget(block, area);

        let close = Self::close_area(area);
        if close.width > 0 {
            frame.buffer_mut().set_string(
                close.x,
                close.y,
                CLOSE_LABEL,
                Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
            );
        }

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Min(0),    // Lines
                Constraint::Length(2), // Subtotal + checkout
            ])
            .split(inner);

        match view {
            Some(view) if !view.is_empty() => {
                render_lines(frame, chunks[0], view, selected);
                render_footer(frame, chunks[1], view);
            }
            _ => {
                let paragraph =
                    Paragraph::new(EMPTY_MESSAGE).style(Style::default().fg(Color::DarkGray));
                frame.render_widget(paragraph, chunks[0]);
                let disabled = Paragraph::new(Span::styled(
                    " [o] Checkout ",
                    Style::default().fg(Color::DarkGray),
                ));
                frame.render_widget(disabled, chunks[1]);
            }
        }
    }
}

fn render_lines(frame: &mut Frame, area: Rect, view: &CartView, selected: Option<usize>) {
    let width = area.width as usize;
    let items: Vec<ListItem> = view
        .lines
        .iter()
        .map(|line| {
            let total = view.money(line.line_total);
            let name_width = width.saturating_sub(total.chars().count() + 1);
            ListItem::new(vec![
                Line::from(vec![
                    Span::styled(
                        format!("{:<name_width$}", line.name),
                        Style::default().add_modifier(Modifier::BOLD),
                    ),
                    Span::raw(" "),
                    Span::styled(total, Style::default().add_modifier(Modifier::BOLD)),
                ]),
                Line::from(Span::styled(
                    format!("{} × {}", line.qty, view.money(line.unit_price)),
                    Style::default().fg(Color::DarkGray),
                )),
            ])
        })
        .collect();
    let list = List::new(items).highlight_style(Style::default().bg(Color::Yellow).fg(Color::Black));
    let mut state = ListState::default().with_selected(selected);
    frame.render_stateful_widget(list, area, &mut state);
}

fn render_footer(frame: &mut Frame, area: Rect, view: &CartView) {
    let lines = vec![
        Line::from(vec![
            Span::raw("Subtotal: "),
            Span::styled(
                view.money(view.totals.subtotal),
                Style::default().add_modifier(Modifier::BOLD),
            ),
        ]),
        Line::from(Span::styled(
            " [o] Checkout ",
            Style::default().fg(Color::Black).bg(Color::Green),
        )),
    ];
    frame.render_widget(Paragraph::new(lines), area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drawer_pins_right() {
        let body = Rect::new(0, 1, 100, 30);
        let drawer = DrawerPanel::area(body);
        assert_eq!(drawer, Rect::new(58, 1, 42, 30));
        let close = DrawerPanel::close_area(drawer);
        assert_eq!(close, Rect::new(96, 1, 3, 1));
    }

    #[test]
    fn selected_line_scrolls_into_view() {
        use ratatui::{backend::TestBackend, Terminal};
        use storefront_core::{Cart, CartLine, Catalog};

        let catalog = Catalog::builtin();
        let cart = Cart::from_lines(
            catalog
                .items()
                .iter()
                .map(|item| CartLine::new(item.id.clone(), 2)),
        );
        let view = CartView::build(&cart, &catalog, 0.08, "$");

        let mut terminal = Terminal::new(TestBackend::new(42, 10)).unwrap();
        terminal
            .draw(|f| {
                let area = f.area();
                DrawerPanel::render(f, area, Some(&view), Some(5));
            })
            .unwrap();
        let screen: String = terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect();
        assert!(screen.contains("Four Cheese"));
        assert!(!screen.contains("Margherita"));
    }

    #[test]
    fn narrow_body_uses_full_width() {
        let body = Rect::new(0, 0, 20, 10);
        assert_eq!(DrawerPanel::area(body), body);
    }
}
