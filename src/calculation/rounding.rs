//! Cent rounding.
//!
//! Both the per-child figures and the household totals go through
//! [`round_to_cents`] so that each rounding point behaves identically.

use rust_decimal::{Decimal, RoundingStrategy};

/// Rounds a money amount to two decimal places, half away from zero.
///
/// The result always carries exactly two decimal places.
///
/// # Examples
///
/// ```
/// use subsidy_engine::calculation::round_to_cents;
/// use rust_decimal::Decimal;
/// use std::str::FromStr;
///
/// let d = |s: &str| Decimal::from_str(s).unwrap();
/// assert_eq!(round_to_cents(d("123.454")), d("123.45"));
/// assert_eq!(round_to_cents(d("123.455")), d("123.46"));
/// assert_eq!(round_to_cents(d("-123.455")), d("-123.46"));
/// ```
pub fn round_to_cents(value: Decimal) -> Decimal {
    let mut rounded = value.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    rounded.rescale(2);
    rounded
}
