//! Monetary rounding policy.
//!
//! All monetary arithmetic in the engine uses fixed-point [`Decimal`]
//! values; the single rounding policy is round-half-up at 2 decimal places,
//! applied exactly once per computed field. Centralizing it here is what
//! guarantees the gross/deductions/net reconciliation property.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places for monetary amounts.
pub const MONEY_SCALE: u32 = 2;

/// Rounds a monetary amount to 2 decimal places, half-up.
///
/// # Example
///
/// ```
/// use payslip_engine::calculation::round_money;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let amount = Decimal::from_str("1234.565").unwrap();
/// assert_eq!(round_money(amount), Decimal::from_str("1234.57").unwrap());
/// ```
pub fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(MONEY_SCALE, RoundingStrategy::MidpointAwayFromZero)
}
