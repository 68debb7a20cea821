//! Render surface seam.
//!
//! Views never read the cart directly. After every mutation the manager
//! builds a [`CartView`] and hands it to each registered [`RenderSurface`],
//! which redraws itself in full.

use crate::currency::format_currency;
use crate::totals::{compute_totals, Totals};
use crate::{Cart, Catalog};

/// A cart line resolved against the catalog for display.
#[derive(Debug, Clone, PartialEq)]
pub struct LineView {
    pub id: String,
    /// Catalog name, or the raw id when the catalog has no such item
    pub name: String,
    pub unit_price: f64,
    pub qty: u32,
    pub line_total: f64,
    pub known: bool,
}

/// Immutable snapshot of everything a surface needs to draw the cart.
#[derive(Debug, Clone, PartialEq)]
pub struct CartView {
    pub lines: Vec<LineView>,
    pub totals: Totals,
    pub item_count: u64,
    pub currency_symbol: String,
}

impl CartView {
    pub fn build(cart: &Cart, catalog: &Catalog, tax_rate: f64, currency_symbol: &str) -> Self {
        let lines = cart
            .lines()
            .iter()
            .map(|line| {
                let resolved = catalog.resolve(&line.id);
                LineView {
                    id: line.id.clone(),
                    name: resolved.name.to_string(),
                    unit_price: resolved.price,
                    qty: line.qty,
                    line_total: resolved.price * f64::from(line.qty),
                    known: resolved.known,
                }
            })
            .collect();

        Self {
            lines,
            totals: compute_totals(cart, catalog, tax_rate),
            item_count: cart.item_count(),
            currency_symbol: currency_symbol.to_string(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Checkout controls are only enabled with something in the cart.
    pub fn checkout_enabled(&self) -> bool {
        self.item_count > 0
    }

    /// Format an amount with this view's currency symbol.
    pub fn money(&self, amount: f64) -> String {
        format_currency(amount, &self.currency_symbol)
    }
}

/// A view driven by cart snapshots.
pub trait RenderSurface {
    /// Redraw from `view`. Called once after load and after every mutation.
    fn render(&mut self, view: &CartView);
}

impl<F: FnMut(&CartView)> RenderSurface for F {
    fn render(&mut self, view: &CartView) {
        self(view)
    }
}
