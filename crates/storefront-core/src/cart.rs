//! Cart lines and the cart value.
//!
//! A [`Cart`] is an ordered list of lines with at most one line per catalog
//! id and every quantity at least 1. The mutating methods here keep that
//! invariant; persistence and view notification live in
//! [`CartManager`](crate::CartManager).

use serde::{Deserialize, Serialize};
use tracing::warn;

/// One catalog id and how many of it are in the cart.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CartLine {
    pub id: String,
    pub qty: u32,
}

impl CartLine {
    pub fn new(id: impl Into<String>, qty: u32) -> Self {
        Self { id: id.into(), qty }
    }
}

/// The ordered set of lines the shopper has selected.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a cart from arbitrary lines, merging duplicate ids in first-seen
    /// order and dropping lines with a zero quantity.
    pub fn from_lines(lines: impl IntoIterator<Item = CartLine>) -> Self {
        let mut cart = Self::new();
        for line in lines {
            if line.qty == 0 {
                continue;
            }
            cart.add(&line.id, line.qty);
        }
        cart
    }

    /// Decode persisted cart state.
    ///
    /// Anything that is not a JSON array of `{id, qty}` yields an empty cart.
    pub fn from_json(json: &str) -> Self {
        match serde_json::from_str::<Vec<PersistedLine>>(json) {
            Ok(lines) => Self::from_lines(lines.into_iter().map(PersistedLine::into_line)),
            Err(e) => {
                warn!("Discarding malformed cart state: {}", e);
                Self::new()
            }
        }
    }

    /// Encode for persistence as a JSON array of `{id, qty}`.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.lines)
    }

    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    pub fn get(&self, id: &str) -> Option<&CartLine> {
        self.lines.iter().find(|line| line.id == id)
    }

    /// Current quantity for `id`, 0 when absent.
    pub fn qty_of(&self, id: &str) -> u32 {
        self.get(id).map(|line| line.qty).unwrap_or(0)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.get(id).is_some()
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Total units across all lines.
    pub fn item_count(&self) -> u64 {
        self.lines.iter().map(|line| u64::from(line.qty)).sum()
    }

    /// Increase an existing line or append a new one. `qty` must be >= 1.
    pub(crate) fn add(&mut self, id: &str, qty: u32) {
        debug_assert!(qty >= 1);
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) => line.qty = line.qty.saturating_add(qty),
            None => self.lines.push(CartLine::new(id, qty)),
        }
    }

    /// Set a line's quantity; 0 removes it. Never creates a line.
    ///
    /// Returns whether the cart changed.
    pub(crate) fn set(&mut self, id: &str, qty: u32) -> bool {
        if qty == 0 {
            let before = self.lines.len();
            self.lines.retain(|line| line.id != id);
            return self.lines.len() != before;
        }
        match self.lines.iter_mut().find(|line| line.id == id) {
            Some(line) if line.qty != qty => {
                line.qty = qty;
                true
            }
            _ => false,
        }
    }

    pub(crate) fn clear(&mut self) {
        self.lines.clear();
    }
}

/// Lenient shape for persisted lines; negative or fractional quantities
/// from older writers are tolerated and normalized.
#[derive(Deserialize)]
struct PersistedLine {
    id: String,
    qty: f64,
}

impl PersistedLine {
    fn into_line(self) -> CartLine {
        let qty = if self.qty.is_finite() && self.qty >= 1.0 {
            self.qty.min(f64::from(u32::MAX)) as u32
        } else {
            0
        };
        CartLine::new(self.id, qty)
    }
}
