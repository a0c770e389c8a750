//! Prompting and answer parsing on the session's streams

use super::Session;
use crate::config::InvalidNumberPolicy;
use crate::error::{CalcError, Result};
use log::warn;
use std::io::{BufRead, Write};
use std::str::FromStr;

impl<R: BufRead, W: Write> Session<R, W> {
    /// Write a full line to the output
    pub(crate) fn say(&mut self, line: &str) -> Result<()> {
        writeln!(self.output, "{}", line)?;
        Ok(())
    }

    /// Show `prompt` and read one line of input, without its line terminator
    pub(crate) fn read_answer(&mut self, prompt: &str) -> Result<String> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(CalcError::InputClosed);
        }
        let answer = line.trim_end_matches(['\n', '\r']).to_string();
        Ok(answer)
    }

    /// Prompt for a number, applying the configured policy to unparseable answers
    pub(crate) fn ask_number<T: FromStr>(&mut self, prompt: &str, field: &'static str) -> Result<T> {
        loop {
            let answer = self.read_answer(prompt)?;
            let trimmed = answer.trim();

            if let Ok(value) = trimmed.parse::<T>() {
                return Ok(value);
            }

            warn!("Rejected {} answer {:?}", field, trimmed);
            let err = CalcError::InvalidNumber { field, input: trimmed.to_string() };
            match self.config.on_invalid_number {
                InvalidNumberPolicy::Exit => return Err(err),
                InvalidNumberPolicy::Retry => self.say(&format!("{}. Please try again.", err))?,
            }
        }
    }
}
