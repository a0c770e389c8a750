//! Console rendering of calculator results

use crate::session::{CalcOutcome, InterestType};

/// Format a float the way the calculator has always echoed numbers
///
/// Shortest round-trip digits. Whole values keep a trailing ".0" (5 -> "5.0").
/// Magnitudes below 1e-4 or from 1e16 up switch to exponent notation with a
/// signed, two-digit exponent (0.00001 -> "1e-05", 1e16 -> "1e+16").
pub fn format_number(value: f64) -> String {
    if value.is_nan() {
        return "nan".to_string();
    }
    if value.is_infinite() || value == 0.0 {
        return format!("{:?}", value);
    }

    let magnitude = value.abs();
    if !(1e-4..1e16).contains(&magnitude) {
        let sci = format!("{:e}", value);
        return match sci.split_once('e') {
            Some((mantissa, exponent)) => {
                let exponent: i32 = exponent.parse().unwrap_or(0);
                let sign = if exponent < 0 { '-' } else { '+' };
                format!("{}e{}{:02}", mantissa, sign, exponent.abs())
            }
            None => sci,
        };
    }

    if value.fract() == 0.0 {
        format!("{:.1}", value)
    } else {
        format!("{}", value)
    }
}

/// Result sentence for a completed calculation (without the leading blank line)
pub fn result_line(outcome: &CalcOutcome) -> String {
    match outcome {
        CalcOutcome::Investment(quote) => {
            let kind = match quote.interest_type {
                InterestType::Simple => "simple",
                InterestType::Compound => "compound",
            };
            format!(
                "The amount you'll get back after {} years at {}% {} interest is: {}",
                quote.years,
                format_number(quote.annual_rate),
                kind,
                format_number(quote.interest),
            )
        }
        CalcOutcome::Bond(quote) => {
            format!("The monthly repayment amount is: {}", format_number(quote.repayment))
        }
    }
}
