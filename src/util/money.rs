//! Money arithmetic.
//!
//! Stored prices and totals keep up to 4 decimal places. Sums presented to users are rounded
//! once, after summation, to 2 places with halves rounded away from zero.

use rust_decimal::{Decimal, RoundingStrategy};

/// Number of decimal places shown for money amounts.
pub const MONEY_DECIMAL_PLACES: u32 = 2;

/// Rounds a money amount for presentation.
///
/// # Example
/// ```ignore
/// assert_eq!(round_money(Decimal::new(10005, 3)), Decimal::new(1001, 2)); // 10.005 -> 10.01
/// ```
pub fn round_money(value: Decimal) -> Decimal {
    value.round_dp_with_strategy(MONEY_DECIMAL_PLACES, RoundingStrategy::MidpointAwayFromZero)
}

/// Sums unrounded amounts and rounds the result once.
pub fn sum_money<I>(values: I) -> Decimal
where
    I: IntoIterator<Item = Decimal>,
{
    round_money(values.into_iter().sum())
}
