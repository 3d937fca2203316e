//! Decimal price utilities.
//!
//! ## Overview
//!
//! Unit prices, subtotals and order totals are `rust_decimal::Decimal` values.
//! Decimal arithmetic is exact in base 10, so `599.99 * 2` is `1199.98` with
//! no binary floating-point residue.
//!
//! All arithmetic goes through the `checked_*` helpers below: an overflow is
//! reported as `None` and turned into a typed error by the caller, never a panic.
//!
//! ## Examples
//!
//! ```
//! use order_desk::types::price::{checked_subtotal, format_price};
//! use rust_decimal::Decimal;
//!
//! let subtotal = checked_subtotal(Decimal::new(1000, 2), 3).unwrap();
//! assert_eq!(format_price(subtotal), "30.00");
//! ```

use rust_decimal::Decimal;

/// Decimal places used when rendering prices for humans
const DISPLAY_DP: u32 = 2;

// ============================================================================
// Validation
// ============================================================================

/// A unit price is valid when it is zero or positive.
#[inline]
pub fn is_valid_price(price: Decimal) -> bool {
    price >= Decimal::ZERO
}

// ============================================================================
// Arithmetic
// ============================================================================

/// Price a line: `unit_price * quantity`
///
/// Returns `None` on overflow.
pub fn checked_subtotal(unit_price: Decimal, quantity: u32) -> Option<Decimal> {
    unit_price.checked_mul(Decimal::from(quantity))
}

/// Sum a sequence of subtotals
///
/// An empty sequence sums to zero. Returns `None` on overflow.
///
/// # Example
///
/// ```
/// use order_desk::types::price::checked_total;
/// use rust_decimal::Decimal;
///
/// let parts = [Decimal::new(110, 2), Decimal::new(220, 2)];
/// assert_eq!(checked_total(parts), Some(Decimal::new(330, 2)));
/// ```
pub fn checked_total<I>(subtotals: I) -> Option<Decimal>
where
    I: IntoIterator<Item = Decimal>,
{
    subtotals
        .into_iter()
        .try_fold(Decimal::ZERO, |acc, value| acc.checked_add(value))
}

// ============================================================================
// Rendering
// ============================================================================

/// Render a price with two decimal places
///
/// ```
/// use order_desk::types::price::format_price;
/// use rust_decimal::Decimal;
///
/// assert_eq!(format_price(Decimal::from(5)), "5.00");
/// assert_eq!(format_price(Decimal::new(125, 3)), "0.12");
/// ```
pub fn format_price(price: Decimal) -> String {
    format!("{:.2}", price.round_dp(DISPLAY_DP))
}

// ============================================================================
// Unit Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    fn d(s: &str) -> Decimal {
        Decimal::from_str(s).unwrap()
    }

    #[test]
    fn test_negative_zero_is_valid() {
        assert!(is_valid_price(d("-0")));
        assert!(!is_valid_price(d("-0.0001")));
    }

    #[test]
    fn test_checked_subtotal() {
        assert_eq!(checked_subtotal(d("10.00"), 3), Some(d("30.00")));
        assert_eq!(checked_subtotal(d("599.99"), 2), Some(d("1199.98")));
        assert_eq!(checked_subtotal(d("7.5"), 0), Some(Decimal::ZERO));
    }

    #[test]
    fn test_checked_subtotal_overflow() {
        assert_eq!(checked_subtotal(Decimal::MAX, 2), None);
    }

    #[test]
    fn test_checked_total() {
        assert_eq!(checked_total(Vec::new()), Some(Decimal::ZERO));
        assert_eq!(checked_total([d("0.1"), d("0.2")]), Some(d("0.3")));
        assert_eq!(checked_total([Decimal::MAX, Decimal::ONE]), None);
    }

    #[test]
    fn test_format_price() {
        assert_eq!(format_price(d("30")), "30.00");
        assert_eq!(format_price(d("1199.98")), "1199.98");
        assert_eq!(format_price(d("0.005")), "0.00");
    }
}
