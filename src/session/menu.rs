//! Top-level menu state machine
//!
//! AwaitingChoice -> (valid choice) -> Done
//! AwaitingChoice -> (invalid choice) -> AwaitingChoice
//!
//! Exactly one calculator runs per session. Whatever that calculator returns,
//! including an unrecognised interest type, ends the session.

use super::{CalcOutcome, MenuChoice, Session};
use crate::error::Result;
use log::{debug, warn};
use std::io::{BufRead, Write};

const BANNER: [&str; 3] = [
    "Welcome to the Financial Calculators program!",
    "Enter 'investment' to calculate the amount of interest you'll earn on your investment.",
    "Enter 'bond' to calculate the amount you'll have to pay on a home loan.",
];

const MENU_PROMPT: &str = "Enter your choice from the menu above to proceed: ";

#[derive(Debug)]
enum MenuState {
    AwaitingChoice,
    Done(Result<CalcOutcome>),
}

impl<R: BufRead, W: Write> Session<R, W> {
    /// Print the banner, loop until a valid menu choice, run that calculator
    ///
    /// Console failures and end of input abort the loop with an error; all
    /// other outcomes come from the chosen calculator.
    pub fn run(&mut self) -> Result<CalcOutcome> {
        for line in BANNER {
            self.say(line)?;
        }

        let mut state = MenuState::AwaitingChoice;
        loop {
            state = match state {
                MenuState::AwaitingChoice => self.next_state()?,
                MenuState::Done(result) => return result,
            };
        }
    }

    /// Run the calculator behind a menu choice
    pub fn run_choice(&mut self, choice: MenuChoice) -> Result<CalcOutcome> {
        debug!("Running {:?} calculator", choice);
        match choice {
            MenuChoice::Investment => self.run_investment(),
            MenuChoice::Bond => self.run_bond(),
        }
    }

    fn next_state(&mut self) -> Result<MenuState> {
        let answer = self.read_answer(MENU_PROMPT)?;
        match answer.parse::<MenuChoice>() {
            Ok(choice) => Ok(MenuState::Done(self.run_choice(choice))),
            Err(err) => {
                warn!("Unknown menu choice {:?}", answer);
                self.say(&err.to_string())?;
                Ok(MenuState::AwaitingChoice)
            }
        }
    }
}
