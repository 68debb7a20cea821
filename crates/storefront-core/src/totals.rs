//! Derived cart totals.

use crate::{Cart, Catalog};

/// Default sales tax rate applied to the subtotal.
pub const DEFAULT_TAX_RATE: f64 = 0.08;

/// Subtotal, tax, and grand total for a cart.
///
/// Always recomputed from the cart and catalog; never persisted. Values are
/// unrounded; rounding to cents is a display concern.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Totals {
    pub subtotal: f64,
    pub tax: f64,
    pub total: f64,
}

impl Totals {
    pub fn zero() -> Self {
        Self::default()
    }
}

/// Fold the cart against the catalog. Unknown ids contribute nothing.
pub fn compute_totals(cart: &Cart, catalog: &Catalog, tax_rate: f64) -> Totals {
    let subtotal = cart
        .lines()
        .iter()
        .map(|line| catalog.price_of(&line.id).unwrap_or(0.0) * f64::from(line.qty))
        .sum::<f64>();
    let tax = subtotal * tax_rate;
    Totals {
        subtotal,
        tax,
        total: subtotal + tax,
    }
}
