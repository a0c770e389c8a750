//! Error kinds produced by the calculator session

use thiserror::Error;

/// Everything that can stop or short-circuit a calculator run
#[derive(Debug, Error)]
pub enum CalcError {
    /// A numeric answer could not be parsed
    #[error("Invalid number '{input}' for {field}")]
    InvalidNumber { field: &'static str, input: String },

    /// Investment subtype was neither "simple" nor "compound"
    #[error("Invalid input for interest type. Please enter 'simple' or 'compound'.")]
    InvalidInterestType(String),

    /// Top-level menu choice was neither "investment" nor "bond"
    #[error("Invalid input. Please enter either 'investment' or 'bond'.")]
    InvalidMenuChoice(String),

    /// Bond term of zero months has no repayment
    #[error("The number of months for bond repayment must not be zero")]
    ZeroTerm,

    /// Input stream ended while a prompt was waiting for an answer
    #[error("Input closed before an answer was given")]
    InputClosed,

    #[error("Console I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize result: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl CalcError {
    /// Whether the run still counts as completed when this error is returned.
    ///
    /// An unrecognised interest type ends the session normally; everything
    /// else is fatal to the process.
    pub fn completes_run(&self) -> bool {
        matches!(self, CalcError::InvalidInterestType(_))
    }
}

pub type Result<T> = std::result::Result<T, CalcError>;
