//! Checkout stub.
//!
//! There is no payment backend. Checkout captures a receipt of what was
//! ordered and empties the cart.

use chrono::{DateTime, Utc};
use tracing::info;
use uuid::Uuid;

use crate::currency::format_currency;
use crate::store::KeyValueStore;
use crate::totals::Totals;
use crate::{Cart, CartManager, Catalog};

/// Notice appended to every confirmation.
pub const NO_PAYMENT_NOTICE: &str =
    "This demo site does not process payments. Implement a backend or payment gateway to complete orders.";

/// What was ordered at checkout time.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderReceipt {
    pub id: Uuid,
    pub placed_at: DateTime<Utc>,
    /// e.g. `2× Margherita, 1× Pepperoni`
    pub summary: String,
    pub totals: Totals,
    pub currency_symbol: String,
}

impl OrderReceipt {
    /// Confirmation text shown to the shopper.
    pub fn confirmation_message(&self) -> String {
        format!(
            "Thanks! Order received:\n{}\nTotal: {}\n\n{}",
            self.summary,
            format_currency(self.totals.total, &self.currency_symbol),
            NO_PAYMENT_NOTICE
        )
    }
}

/// One-line description of the cart contents.
///
/// Ids missing from the catalog are listed by id.
pub fn order_summary(cart: &Cart, catalog: &Catalog) -> String {
    cart.lines()
        .iter()
        .map(|line| format!("{}× {}", line.qty, catalog.resolve(&line.id).name))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Capture a receipt and clear the cart.
///
/// An empty cart is not an order: returns `None` and leaves state untouched.
pub fn checkout<S: KeyValueStore>(manager: &mut CartManager<S>) -> Option<OrderReceipt> {
    if manager.cart().is_empty() {
        return None;
    }

    let receipt = OrderReceipt {
        id: Uuid::new_v4(),
        placed_at: Utc::now(),
        summary: order_summary(manager.cart(), manager.catalog()),
        totals: manager.compute_totals(),
        currency_symbol: manager.currency_symbol().to_string(),
    };
    info!("Order {} received: {}", receipt.id, receipt.summary);

    manager.clear_cart();
    Some(receipt)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn empty_cart_checkout_is_noop() {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        assert!(checkout(&mut manager).is_none());
        assert_eq!(manager.store().get("lp_cart_v1").unwrap(), None);
    }

    #[test]
    fn checkout_clears_and_reports() {
        let mut manager = CartManager::with_defaults(Catalog::builtin(), MemoryStore::new());
        manager.add_to_cart("margherita", 2);
        manager.add_to_cart("pepperoni", 1);

        let receipt = checkout(&mut manager).unwrap();
        assert_eq!(receipt.summary, "2× Margherita, 1× Pepperoni");
        assert!((receipt.totals.subtotal - 39.0).abs() < 1e-9);
        assert!(manager.cart().is_empty());
        assert_eq!(manager.store().get("lp_cart_v1").unwrap().as_deref(), Some("[]"));

        let message = receipt.confirmation_message();
        assert!(message.contains("Total: $42.12"));
        assert!(message.ends_with(NO_PAYMENT_NOTICE));
    }
}
