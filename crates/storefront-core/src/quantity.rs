//! Quantity input normalization.
//!
//! User-entered quantities are never rejected. They are parsed leniently and
//! clamped to a lower bound: 1 when adding to the cart, 0 when setting a
//! line's quantity (where 0 means remove).

/// Lower bound for quantities passed to an add.
pub const ADD_FLOOR: u32 = 1;

/// Lower bound for quantities passed to a set.
pub const SET_FLOOR: u32 = 0;

/// Clamp an integer quantity to `floor`, saturating at `u32::MAX`.
pub fn clamp_qty(value: i64, floor: u32) -> u32 {
    let clamped = value.max(i64::from(floor));
    u32::try_from(clamped).unwrap_or(u32::MAX)
}

/// Parse raw quantity text and clamp it to `floor`.
///
/// Parsing takes the integer prefix of the trimmed input, so `"3.7"` is 3
/// and `"5 pizzas"` is 5. Empty input counts as 1. Input without a leading
/// integer yields `floor`.
///
/// # Examples
/// ```
/// use storefront_core::normalize_qty;
/// assert_eq!(normalize_qty("4", 1), 4);
/// assert_eq!(normalize_qty("-2", 1), 1);
/// assert_eq!(normalize_qty("abc", 1), 1);
/// assert_eq!(normalize_qty("", 0), 1);
/// ```
pub fn normalize_qty(raw: &str, floor: u32) -> u32 {
    let raw = raw.trim();
    if raw.is_empty() {
        return clamp_qty(1, floor);
    }
    match parse_integer_prefix(raw) {
        Some(value) => clamp_qty(value, floor),
        None => floor,
    }
}

fn parse_integer_prefix(input: &str) -> Option<i64> {
    let (negative, digits) = match input.as_bytes().first()? {
        b'-' => (true, &input[1..]),
        b'+' => (false, &input[1..]),
        _ => (false, input),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for byte in digits.bytes() {
        if !byte.is_ascii_digit() {
            break;
        }
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'));
    }

    if !seen {
        return None;
    }
    Some(if negative { -value } else { value })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clamp_below_floor() {
        assert_eq!(clamp_qty(-5, ADD_FLOOR), 1);
        assert_eq!(clamp_qty(0, ADD_FLOOR), 1);
        assert_eq!(clamp_qty(-5, SET_FLOOR), 0);
        assert_eq!(clamp_qty(7, SET_FLOOR), 7);
    }

    #[test]
    fn clamp_saturates() {
        assert_eq!(clamp_qty(i64::MAX, ADD_FLOOR), u32::MAX);
    }

    #[test]
    fn integer_prefix() {
        assert_eq!(parse_integer_prefix("12abc"), Some(12));
        assert_eq!(parse_integer_prefix("-3"), Some(-3));
        assert_eq!(parse_integer_prefix("+8"), Some(8));
        assert_eq!(parse_integer_prefix("x1"), None);
        assert_eq!(parse_integer_prefix("-"), None);
    }
}
