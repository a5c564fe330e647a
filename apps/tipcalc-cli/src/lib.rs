//! # Tip Calculator Terminal Library
//!
//! The presentation shell around `tipcalc-core`.
//!
//! ## Module Organization
//! ```text
//! tipcalc_cli/
//! ├── lib.rs          ◄─── You are here (startup, one-shot & interactive runs)
//! ├── args.rs         ◄─── Command line flags
//! ├── state/
//! │   ├── mod.rs      ◄─── State type exports
//! │   ├── screen.rs   ◄─── TipScreen: field text, switch, derived tip
//! │   └── config.rs   ◄─── ConfigState: locale resolution
//! ├── commands/
//! │   └── mod.rs      ◄─── Interactive line commands
//! └── error.rs        ◄─── CliError and its JSON form
//! ```
//!
//! ## Data Flow
//! ```text
//! keystroke / command ──► TipScreen setter ──► TipRequest ──► compute ──► render
//!                         (raw text kept)      (numbers)      (core)      (stdout)
//! ```

pub mod args;
pub mod commands;
pub mod error;
pub mod state;

use std::io::{self, BufRead, Write};

use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use args::{Cli, LogLevel, OutputFormat};
use commands::{Outcome, ScreenCommand, HELP};
use error::CliResult;
use state::{ConfigState, TipScreen};

/// Runs the application for parsed flags.
///
/// ## Startup Sequence
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │  1. Initialize Logging                                                  │
/// │     • RUST_LOG if set, otherwise --log-level (default: warn)            │
/// │     • Always stderr, so stdout only carries the tip                     │
/// │                                                                         │
/// │  2. Resolve Configuration                                               │
/// │     • --locale > TIPCALC_LOCALE > LC_ALL/LC_MONETARY/LANG > en-US       │
/// │     • --symbol / --fraction-digits overrides (validated)                │
/// │                                                                         │
/// │  3. Build Screen State                                                  │
/// │     • Field text from --amount / --tip, switch from --round-up          │
/// │                                                                         │
/// │  4. Output                                                              │
/// │     • One-shot: print tip line (or JSON view)                           │
/// │     • Interactive: command loop on stdin                                │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
pub fn run(cli: Cli) -> CliResult<()> {
    init_tracing(cli.log_level);

    let config = ConfigState::from_env(cli.locale.as_deref())
        .with_overrides(cli.symbol.as_deref(), cli.fraction_digits)?;
    info!(
        locale = %config.locale.tag,
        source = ?config.locale_source,
        "configuration resolved"
    );

    let mut screen = TipScreen::new(config.locale.clone());
    screen.set_amount_input(cli.amount);
    screen.set_tip_input(cli.tip);
    screen.set_round_up(cli.round_up || config.round_up);

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if cli.interactive {
        let stdin = io::stdin();
        run_interactive(&mut screen, stdin.lock(), &mut out)
    } else {
        run_once(&screen, cli.format, &mut out)
    }
}

/// Prints the current tip once.
///
/// - `plain`: `Tip Amount: $7.50`
/// - `json`: the full [`state::ScreenView`]
pub fn run_once<W: Write>(screen: &TipScreen, format: OutputFormat, out: &mut W) -> CliResult<()> {
    match format {
        OutputFormat::Plain => writeln!(out, "{}", screen.tip_text())?,
        OutputFormat::Json => {
            serde_json::to_writer_pretty(&mut *out, &screen.view())?;
            writeln!(out)?;
        }
    }
    Ok(())
}

/// Runs the interactive command loop until `quit` or end of input.
///
/// Bad commands are reported on `out` and the loop continues.
/// Only I/O failures end the session with an error.
pub fn run_interactive<R: BufRead, W: Write>(
    screen: &mut TipScreen,
    input: R,
    out: &mut W,
) -> CliResult<()> {
    writeln!(out, "{}", screen.render())?;
    writeln!(out, "Type 'help' for commands.")?;

    for line in input.lines() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }

        let command = match line.parse::<ScreenCommand>() {
            Ok(command) => command,
            Err(err) => {
                debug!(%line, "rejected command");
                writeln!(out, "Error: {err}")?;
                continue;
            }
        };

        match command.apply(screen) {
            Outcome::Changed => writeln!(out, "{}", screen.tip_text())?,
            Outcome::Show => writeln!(out, "{}", screen.render())?,
            Outcome::Help => writeln!(out, "{HELP}")?,
            Outcome::Quit => break,
        }
        out.flush()?;
    }

    Ok(())
}

/// Initializes the tracing subscriber for structured logging.
///
/// ## Log Levels
/// - `RUST_LOG=debug` - Show debug messages (every recomputation)
/// - `RUST_LOG=tipcalc_cli=trace` - Trace this crate only
/// - Default: the `--log-level` flag
fn init_tracing(level: LogLevel) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    // A second init (tests calling run twice) is not an error worth failing on
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .try_init();
}

#[cfg(test)]
mod tests {
    use super::*;
    use tipcalc_core::CurrencyLocale;

    fn screen_with(amount: &str, tip: &str, round_up: bool) -> TipScreen {
        let mut screen = TipScreen::new(CurrencyLocale::en_us());
        screen.set_amount_input(amount);
        screen.set_tip_input(tip);
        screen.set_round_up(round_up);
        screen
    }

    fn output_of(bytes: Vec<u8>) -> String {
        String::from_utf8(bytes).unwrap()
    }

    #[test]
    fn test_run_once_plain() {
        let screen = screen_with("50", "15", false);
        let mut out = Vec::new();
        run_once(&screen, OutputFormat::Plain, &mut out).unwrap();
        assert_eq!(output_of(out), "Tip Amount: $7.50\n");
    }

    #[test]
    fn test_run_once_json() {
        let screen = screen_with("50", "15", true);
        let mut out = Vec::new();
        run_once(&screen, OutputFormat::Json, &mut out).unwrap();

        let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(json["result"]["formatted"], "$8.00");
        assert_eq!(json["roundUp"], true);
    }

    #[test]
    fn test_interactive_session() {
        let mut screen = TipScreen::new(CurrencyLocale::en_us());
        let input = "amount 33.33\ntip 18\nround on\n\nbogus\nquit\namount 1\n";
        let mut out = Vec::new();

        run_interactive(&mut screen, input.as_bytes(), &mut out).unwrap();
        let output = output_of(out);
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines[0], "Calculate Tip");
        assert!(lines.contains(&"Tip Amount: $6.00"));
        assert!(output.contains("Error: Unknown command: 'bogus'"));
        // Nothing after quit is applied
        assert_eq!(screen.amount_input(), "33.33");
        assert!(screen.round_up());
    }

    #[test]
    fn test_interactive_recomputes_after_every_change() {
        let mut screen = TipScreen::new(CurrencyLocale::en_us());
        let input = "amount 50\ntip 15\nround toggle\nround off\n";
        let mut out = Vec::new();

        run_interactive(&mut screen, input.as_bytes(), &mut out).unwrap();
        let output = output_of(out);
        let tips: Vec<&str> = output
            .lines()
            .filter(|line| line.starts_with("Tip Amount: "))
            .collect();

        assert_eq!(
            tips,
            vec![
                "Tip Amount: $0.00", // initial render
                "Tip Amount: $0.00", // amount only, no default tip
                "Tip Amount: $7.50",
                "Tip Amount: $8.00",
                "Tip Amount: $7.50",
            ]
        );
    }

    #[test]
    fn test_interactive_help_and_show() {
        let mut screen = TipScreen::new(CurrencyLocale::en_us());
        let mut out = Vec::new();

        run_interactive(&mut screen, "help\nshow\n".as_bytes(), &mut out).unwrap();
        let output = output_of(out);

        assert!(output.contains("round on|off|toggle"));
        assert_eq!(output.matches("Calculate Tip").count(), 2);
    }
}
