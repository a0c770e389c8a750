//! Bond (home loan) repayment using the standard amortization formula

use super::round2;

/// Convert an annual percentage rate into a monthly decimal rate
pub fn monthly_rate(annual_rate: f64) -> f64 {
    annual_rate / 100.0 / 12.0
}

/// Monthly repayment on a loan of `present_value` over `months`
///
/// Formula: (P × i) / (1 - (1 + i)^(-n)) with i the monthly rate.
/// A zero (or negative) rate falls back to straight-line P / n. Both branches
/// are rounded to two decimals.
///
/// `months` must be non-zero; a zero term divides by zero and yields a
/// non-finite result.
pub fn bond_repayment(present_value: f64, annual_rate: f64, months: i32) -> f64 {
    let i = monthly_rate(annual_rate);

    if i > 0.0 {
        round2((present_value * i) / (1.0 - (1.0 + i).powf(-f64::from(months))))
    } else {
        log::trace!("Zero-rate bond, using straight-line repayment over {} months", months);
        round2(present_value / f64::from(months))
    }
}
