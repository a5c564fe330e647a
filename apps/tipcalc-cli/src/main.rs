//! # Tip Calculator Entry Point
//!
//! ## Startup Sequence
//! 1. Parse flags
//! 2. Initialize tracing (logging, stderr)
//! 3. Resolve configuration (locale, round-up default)
//! 4. Build the screen state from the flags
//! 5. Print once, or enter the interactive loop

use clap::Parser;
use std::process::ExitCode;

use tipcalc_cli::args::{Cli, OutputFormat};

fn main() -> ExitCode {
    let cli = Cli::parse();
    let format = cli.format;

    match tipcalc_cli::run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            match format {
                OutputFormat::Json => match serde_json::to_string(&err.to_payload()) {
                    Ok(json) => eprintln!("{json}"),
                    Err(_) => eprintln!("Error: {err}"),
                },
                OutputFormat::Plain => eprintln!("Error: {err}"),
            }
            ExitCode::FAILURE
        }
    }
}
