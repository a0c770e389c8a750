//! Investment and bond calculator flows
//!
//! Each flow asks for its parameters in a fixed order, runs the matching
//! formula, prints the result and returns it as a typed [`CalcOutcome`].

use super::{BondQuote, CalcOutcome, InterestType, InvestmentQuote, Session};
use crate::config::OutputFormat;
use crate::error::{CalcError, Result};
use crate::formulas::{bond_repayment, compound_interest, simple_interest};
use crate::output::result_line;
use log::{debug, warn};
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> Session<R, W> {
    /// Interest earned on a lump sum, simple or compound
    ///
    /// An unrecognised interest type is reported on the console and returned
    /// as `CalcError::InvalidInterestType`; it is not asked again.
    pub fn run_investment(&mut self) -> Result<CalcOutcome> {
        self.say("\nInvestment Calculator")?;

        let principal: f64 = self.ask_number("Enter the principal amount: ", "principal")?;
        let annual_rate: f64 = self.ask_number("Enter the interest rate (%): ", "interest rate")?;
        let years: i32 = self.ask_number("Enter the number of years: ", "years")?;

        let answer = self.read_answer("Enter 'simple' or 'compound' interest: ")?;
        let interest_type = match answer.parse::<InterestType>() {
            Ok(kind) => kind,
            Err(err) => {
                warn!("Unknown interest type {:?}", answer);
                self.say(&err.to_string())?;
                return Err(err);
            }
        };

        let interest = match interest_type {
            InterestType::Simple => simple_interest(principal, annual_rate, years),
            InterestType::Compound => compound_interest(principal, annual_rate, f64::from(years)),
        };
        debug!(
            "{:?} interest on {} at {}% for {} years = {}",
            interest_type, principal, annual_rate, years, interest
        );

        let outcome = CalcOutcome::Investment(InvestmentQuote {
            principal,
            annual_rate,
            years,
            interest_type,
            interest,
        });
        self.report(&outcome)?;
        Ok(outcome)
    }

    /// Monthly repayment on a home loan
    pub fn run_bond(&mut self) -> Result<CalcOutcome> {
        self.say("\nBond Calculator")?;

        let present_value: f64 =
            self.ask_number("Enter the present value of the house: ", "present value")?;
        let annual_rate: f64 =
            self.ask_number("Enter the annual interest rate (%): ", "interest rate")?;
        let months: i32 =
            self.ask_number("Enter the number of months for bond repayment: ", "months")?;

        if months == 0 {
            warn!("Rejected zero-month bond term");
            return Err(CalcError::ZeroTerm);
        }

        let repayment = bond_repayment(present_value, annual_rate, months);
        debug!(
            "Bond of {} at {}% over {} months = {} per month",
            present_value, annual_rate, months, repayment
        );

        let outcome = CalcOutcome::Bond(BondQuote {
            present_value,
            annual_rate,
            months,
            repayment,
        });
        self.report(&outcome)?;
        Ok(outcome)
    }

    fn report(&mut self, outcome: &CalcOutcome) -> Result<()> {
        match self.config.format {
            OutputFormat::Text => self.say(&format!("\n{}", result_line(outcome))),
            OutputFormat::Json => {
                let json = serde_json::to_string(outcome)?;
                self.say(&json)
            }
        }
    }
}
