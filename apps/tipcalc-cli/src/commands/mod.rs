//! # Screen Commands
//!
//! Interactive line commands that drive the [`TipScreen`].
//!
//! ## Command Set
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Input line               Screen change              Output             │
//! │  ──────────               ─────────────              ──────             │
//! │                                                                         │
//! │  amount 50        ──────► set_amount_input("50") ──► tip line          │
//! │  tip 15           ──────► set_tip_input("15") ─────► tip line          │
//! │  round on|off|toggle ───► set_round_up(..) ────────► tip line          │
//! │  show             ──────► (none) ──────────────────► whole screen      │
//! │  clear            ──────► clear() ─────────────────► tip line          │
//! │  help             ──────► (none) ──────────────────► command list      │
//! │  quit | exit      ──────► (none) ──────────────────► end of session    │
//! │                                                                         │
//! │  `amount` / `tip` with no argument empty the field.                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::str::FromStr;

use crate::error::CliError;
use crate::state::TipScreen;

pub const HELP: &str = "\
Commands:
  amount <text>          set the bill amount (empty clears it)
  tip <text>             set the tip percentage (empty clears it)
  round on|off|toggle    round the tip up to a whole unit
  show                   print the whole screen
  clear                  reset all fields
  help                   show this list
  quit                   leave";

/// Position change for the round-up switch.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoundUpAction {
    On,
    Off,
    Toggle,
}

/// One parsed line of interactive input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenCommand {
    Amount(String),
    Tip(String),
    RoundUp(RoundUpAction),
    Show,
    Clear,
    Help,
    Quit,
}

/// What the session loop should do after a command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// State changed: print the tip line
    Changed,

    /// Print the whole screen
    Show,

    /// Print the command list
    Help,

    /// End the session
    Quit,
}

impl FromStr for ScreenCommand {
    type Err = CliError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_ascii_lowercase().as_str() {
            "amount" | "bill" => Ok(ScreenCommand::Amount(rest.to_string())),
            "tip" | "percent" => Ok(ScreenCommand::Tip(rest.to_string())),
            "round" => parse_round(rest).map(ScreenCommand::RoundUp),
            "show" => Ok(ScreenCommand::Show),
            "clear" => Ok(ScreenCommand::Clear),
            "help" | "?" => Ok(ScreenCommand::Help),
            "quit" | "exit" => Ok(ScreenCommand::Quit),
            _ => Err(CliError::UnknownCommand(word.to_string())),
        }
    }
}

fn parse_round(arg: &str) -> Result<RoundUpAction, CliError> {
    match arg.to_ascii_lowercase().as_str() {
        "on" | "yes" | "true" => Ok(RoundUpAction::On),
        "off" | "no" | "false" => Ok(RoundUpAction::Off),
        "" | "toggle" => Ok(RoundUpAction::Toggle),
        other => Err(CliError::invalid_argument(
            "round",
            format!("expected on, off or toggle, got '{other}'"),
        )),
    }
}

impl ScreenCommand {
    /// Applies the command to the screen.
    pub fn apply(self, screen: &mut TipScreen) -> Outcome {
        match self {
            ScreenCommand::Amount(text) => {
                screen.set_amount_input(text);
                Outcome::Changed
            }
            ScreenCommand::Tip(text) => {
                screen.set_tip_input(text);
                Outcome::Changed
            }
            ScreenCommand::RoundUp(RoundUpAction::On) => {
                screen.set_round_up(true);
                Outcome::Changed
            }
            ScreenCommand::RoundUp(RoundUpAction::Off) => {
                screen.set_round_up(false);
                Outcome::Changed
            }
            ScreenCommand::RoundUp(RoundUpAction::Toggle) => {
                screen.toggle_round_up();
                Outcome::Changed
            }
            ScreenCommand::Clear => {
                screen.clear();
                Outcome::Changed
            }
            ScreenCommand::Show => Outcome::Show,
            ScreenCommand::Help => Outcome::Help,
            ScreenCommand::Quit => Outcome::Quit,
        }
    }
}
