//! Interactive calculator session: menu loop, calculator flows and their outcomes

mod console;
mod flows;
mod menu;

use crate::config::SessionConfig;
use crate::error::CalcError;
use serde::Serialize;
use std::io::{BufRead, Write};
use std::str::FromStr;

/// Top-level menu entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Investment,
    Bond,
}

impl FromStr for MenuChoice {
    type Err = CalcError;

    /// Case-insensitive, surrounding whitespace ignored
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "investment" => Ok(MenuChoice::Investment),
            "bond" => Ok(MenuChoice::Bond),
            _ => Err(CalcError::InvalidMenuChoice(s.to_string())),
        }
    }
}

/// Interest calculation used by the investment calculator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InterestType {
    Simple,
    Compound,
}

impl FromStr for InterestType {
    type Err = CalcError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(InterestType::Simple),
            "compound" => Ok(InterestType::Compound),
            _ => Err(CalcError::InvalidInterestType(s.to_string())),
        }
    }
}

/// Inputs and accrued interest of an investment calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct InvestmentQuote {
    pub principal: f64,
    /// Annual rate in percentage points
    pub annual_rate: f64,
    pub years: i32,
    pub interest_type: InterestType,
    /// Interest earned, rounded to cents
    pub interest: f64,
}

/// Inputs and monthly repayment of a bond calculation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BondQuote {
    pub present_value: f64,
    /// Annual rate in percentage points
    pub annual_rate: f64,
    pub months: i32,
    pub repayment: f64,
}

/// Result of one completed calculator run
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "calculator", rename_all = "lowercase")]
pub enum CalcOutcome {
    Investment(InvestmentQuote),
    Bond(BondQuote),
}

/// A calculator session bound to an input and output stream
pub struct Session<R, W> {
    input: R,
    output: W,
    config: SessionConfig,
}

impl<R: BufRead, W: Write> Session<R, W> {
    pub fn new(input: R, output: W, config: SessionConfig) -> Self {
        Self { input, output, config }
    }

    /// Consume the session and hand back the output stream
    pub fn into_output(self) -> W {
        self.output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_menu_choice_parsing() {
        assert_eq!("investment".parse::<MenuChoice>().unwrap(), MenuChoice::Investment);
        assert_eq!("Bond".parse::<MenuChoice>().unwrap(), MenuChoice::Bond);
        assert_eq!("  BOND \n".parse::<MenuChoice>().unwrap(), MenuChoice::Bond);
        assert!(matches!(
            "xyz".parse::<MenuChoice>(),
            Err(CalcError::InvalidMenuChoice(s)) if s == "xyz"
        ));
        assert!("".parse::<MenuChoice>().is_err());
    }

    #[test]
    fn test_interest_type_parsing() {
        assert_eq!("Simple".parse::<InterestType>().unwrap(), InterestType::Simple);
        assert_eq!("COMPOUND".parse::<InterestType>().unwrap(), InterestType::Compound);
        assert!(matches!(
            "daily".parse::<InterestType>(),
            Err(CalcError::InvalidInterestType(s)) if s == "daily"
        ));
    }

    #[test]
    fn test_outcome_json() {
        let outcome = CalcOutcome::Bond(BondQuote {
            present_value: 1200.0,
            annual_rate: 0.0,
            months: 12,
            repayment: 100.0,
        });
        let json: serde_json::Value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(json["calculator"], "bond");
        assert_eq!(json["months"], 12);
        assert_eq!(json["repayment"], 100.0);
    }
}
