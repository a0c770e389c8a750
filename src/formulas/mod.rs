//! Closed-form interest and repayment formulas
//!
//! All rates are annual percentages (5.0 means 5%) and every result is
//! rounded to two decimal places.

mod bond;
mod interest;

pub use bond::{bond_repayment, monthly_rate};
pub use interest::{compound_interest, simple_interest};

use rust_decimal::prelude::ToPrimitive;
use rust_decimal::{Decimal, RoundingStrategy};

/// Round to two decimal places, ties to even on the exact binary value
///
/// 0.125 is exactly representable and rounds to 0.12; 2.675 is stored just
/// below the tie and rounds to 2.67. Values outside the decimal range
/// (non-finite or above ~7.9e28) are returned unchanged.
pub fn round2(value: f64) -> f64 {
    Decimal::from_f64_retain(value)
        .map(|d| d.round_dp_with_strategy(2, RoundingStrategy::MidpointNearestEven))
        .and_then(|d| d.to_f64())
        .unwrap_or(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round2() {
        assert_eq!(round2(100.00000000000001), 100.0);
        assert_eq!(round2(102.50000000000003), 102.5);
        assert_eq!(round2(277.77777777777777), 277.78);
        assert_eq!(round2(-1.234), -1.23);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn test_round2_ties_to_even() {
        assert_eq!(round2(0.125), 0.12);
        assert_eq!(round2(0.625), 0.62);
        assert_eq!(round2(0.375), 0.38);
        assert_eq!(round2(-0.125), -0.12);
        // Stored as 2.67499999999999982236431605997495353221893310546875
        assert_eq!(round2(2.675), 2.67);
    }

    #[test]
    fn test_round2_out_of_range() {
        assert_eq!(round2(f64::INFINITY), f64::INFINITY);
        assert!(round2(f64::NAN).is_nan());
        assert_eq!(round2(1e30), 1e30);
    }
}
