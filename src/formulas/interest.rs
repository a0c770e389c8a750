//! Simple and compound interest on a lump-sum investment

use super::round2;

/// Interest earned without compounding: P × r × t
pub fn simple_interest(principal: f64, annual_rate: f64, years: i32) -> f64 {
    round2(principal * (annual_rate / 100.0) * f64::from(years))
}

/// Interest earned with annual compounding: P × ((1 + r)^t - 1)
///
/// Returns the accrued interest only, not the maturity value A = P(1 + r)^t.
/// Zero years yields zero interest.
pub fn compound_interest(principal: f64, annual_rate: f64, years: f64) -> f64 {
    round2(principal * ((1.0 + annual_rate / 100.0).powf(years) - 1.0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;

    #[test]
    fn test_simple_interest() {
        assert_eq!(simple_interest(1000.0, 5.0, 2), 100.0);
        assert_eq!(simple_interest(2500.0, 3.5, 4), 350.0);
        assert_eq!(simple_interest(1000.0, 5.0, 0), 0.0);
        assert_eq!(simple_interest(0.0, 5.0, 10), 0.0);
    }

    #[test]
    fn test_simple_interest_half_cent_ties() {
        assert_eq!(simple_interest(1.0, 12.5, 1), 0.12);
        assert_eq!(simple_interest(2.5, 25.0, 1), 0.62);
    }

    #[test]
    fn test_simple_interest_matches_formula() {
        for &(p, r, y) in &[(1234.56, 7.25, 3), (99.99, 0.5, 1), (1_000_000.0, 12.0, 30)] {
            let expected = round2(p * r / 100.0 * f64::from(y));
            assert_abs_diff_eq!(simple_interest(p, r, y), expected, epsilon = 1e-9);
        }
    }

    #[test]
    fn test_compound_interest() {
        // (1.05^2 - 1) × 1000 = 102.5
        assert_eq!(compound_interest(1000.0, 5.0, 2.0), 102.5);
        // (1.07^10 - 1) × 5000 = 4835.757...
        assert_eq!(compound_interest(5000.0, 7.0, 10.0), 4835.76);
    }

    #[test]
    fn test_compound_interest_zero_years() {
        assert_eq!(compound_interest(1000.0, 5.0, 0.0), 0.0);
        assert_eq!(compound_interest(1000.0, -3.0, 0.0), 0.0);
    }

    #[test]
    fn test_compound_exceeds_simple_after_first_year() {
        let simple = simple_interest(10_000.0, 6.0, 5);
        let compound = compound_interest(10_000.0, 6.0, 5.0);
        assert!(compound > simple);
        // One year compounds exactly like simple interest
        assert_eq!(compound_interest(10_000.0, 6.0, 1.0), simple_interest(10_000.0, 6.0, 1));
    }
}
