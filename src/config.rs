//! Session configuration

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// What to do when a numeric answer cannot be parsed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum InvalidNumberPolicy {
    /// Abandon the session with `CalcError::InvalidNumber`
    #[default]
    Exit,
    /// Report the bad answer and ask the same question again
    Retry,
}

/// How a completed calculation is written to the console
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Human-readable sentence
    #[default]
    Text,
    /// One JSON object per result
    Json,
}

/// Options for a calculator session
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SessionConfig {
    #[serde(default)]
    pub on_invalid_number: InvalidNumberPolicy,

    #[serde(default)]
    pub format: OutputFormat,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.on_invalid_number, InvalidNumberPolicy::Exit);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SessionConfig = serde_json::from_str(r#"{"on_invalid_number": "retry"}"#)
            .expect("Failed to parse config");
        assert_eq!(config.on_invalid_number, InvalidNumberPolicy::Retry);
        assert_eq!(config.format, OutputFormat::Text);
    }
}
