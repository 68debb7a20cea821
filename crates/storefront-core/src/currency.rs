//! Currency display formatting.

/// Default currency symbol prefixed to amounts.
pub const DEFAULT_CURRENCY_SYMBOL: &str = "$";

/// Format an amount with two decimals, symbol-prefixed (`$12.50`).
///
/// Negative amounts put the sign before the symbol.
pub fn format_currency(amount: f64, symbol: &str) -> String {
    let amount = if amount.is_finite() { amount } else { 0.0 };
    let formatted = format!("{:.2}", amount.abs());
    if amount < 0.0 && formatted != "0.00" {
        format!("-{}{}", symbol, formatted)
    } else {
        format!("{}{}", symbol, formatted)
    }
}
