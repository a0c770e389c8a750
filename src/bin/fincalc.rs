//! Interactive finance calculators on the terminal
//!
//! Asks for a calculator (investment or bond), collects its inputs and prints
//! the result. Set RUST_LOG=debug to trace calculations on stderr.

use anyhow::Result;
use clap::Parser;
use finance_calculators::{InvalidNumberPolicy, OutputFormat, Session, SessionConfig};
use log::debug;
use std::io;

#[derive(Parser)]
#[command(name = "fincalc")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// What to do when a numeric answer cannot be parsed
    #[arg(long, value_enum, default_value = "exit")]
    on_invalid_number: InvalidNumberPolicy,

    /// How to print the calculated result
    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let config = SessionConfig {
        on_invalid_number: cli.on_invalid_number,
        format: cli.format,
    };
    debug!("Starting session with {:?}", config);

    let mut session = Session::new(io::stdin().lock(), io::stdout().lock(), config);
    match session.run() {
        Ok(outcome) => {
            debug!("Session finished with {:?}", outcome);
            Ok(())
        }
        // Already reported on the console; the run is over
        Err(err) if err.completes_run() => Ok(()),
        Err(err) => Err(err.into()),
    }
}
