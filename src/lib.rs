//! Finance calculators: simple interest, compound interest and bond repayments
//!
//! The formulas are pure functions in [`formulas`]. The interactive menu and
//! the calculator flows live in [`session`], generic over any reader/writer
//! pair so they can be driven from a terminal or from in-memory buffers.

pub mod config;
pub mod error;
pub mod formulas;
pub mod output;
pub mod session;

pub use config::{InvalidNumberPolicy, OutputFormat, SessionConfig};
pub use error::{CalcError, Result};
pub use formulas::{bond_repayment, compound_interest, round2, simple_interest};
pub use session::{BondQuote, CalcOutcome, InterestType, InvestmentQuote, MenuChoice, Session};
