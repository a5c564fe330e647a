//! # Tip Screen State
//!
//! The single screen of the calculator: two text fields, one switch and
//! the tip line.
//!
//! ## Screen Operations Flow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Screen State Operations                              │
//! │                                                                         │
//! │  User Action            Method                   State Change           │
//! │  ───────────            ──────                   ────────────           │
//! │                                                                         │
//! │  Type bill ────────────► set_amount_input() ───► amount_input = text    │
//! │  Type tip % ───────────► set_tip_input() ──────► tip_input = text       │
//! │  Flip switch ──────────► set_round_up() ───────► round_up = on/off      │
//! │  Start over ───────────► clear() ──────────────► all fields reset       │
//! │                                                                         │
//! │  Every change ends in refresh(): the tip is recomputed before the      │
//! │  method returns, so any read after a write sees the new tip.           │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::Serialize;
use tipcalc_core::{CurrencyLocale, TipRequest, TipResult};
use tracing::debug;

pub const TITLE: &str = "Calculate Tip";
pub const BILL_AMOUNT_LABEL: &str = "Bill Amount";
pub const SERVICE_LABEL: &str = "How was the service?";
pub const ROUND_UP_LABEL: &str = "Round up tip?";
pub const TIP_AMOUNT_LABEL: &str = "Tip Amount";

/// Owner of the screen's input state and the tip derived from it.
#[derive(Debug, Clone)]
pub struct TipScreen {
    locale: CurrencyLocale,
    amount_input: String,
    tip_input: String,
    round_up: bool,
    result: TipResult,
}

/// Snapshot of the screen for rendering or JSON output.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ScreenView {
    pub amount_input: String,
    pub tip_input: String,
    pub round_up: bool,
    pub locale: String,
    pub request: TipRequest,
    pub result: TipResult,
}

impl TipScreen {
    /// Creates an empty screen. The tip starts at zero.
    pub fn new(locale: CurrencyLocale) -> Self {
        let result = TipRequest::default().evaluate(&locale);
        TipScreen {
            locale,
            amount_input: String::new(),
            tip_input: String::new(),
            round_up: false,
            result,
        }
    }

    pub fn locale(&self) -> &CurrencyLocale {
        &self.locale
    }

    pub fn amount_input(&self) -> &str {
        &self.amount_input
    }

    pub fn tip_input(&self) -> &str {
        &self.tip_input
    }

    pub fn round_up(&self) -> bool {
        self.round_up
    }

    /// Replaces the bill field text.
    pub fn set_amount_input(&mut self, text: impl Into<String>) {
        self.amount_input = text.into();
        self.refresh();
    }

    /// Replaces the tip percentage field text.
    pub fn set_tip_input(&mut self, text: impl Into<String>) {
        self.tip_input = text.into();
        self.refresh();
    }

    /// Sets the round-up switch.
    pub fn set_round_up(&mut self, round_up: bool) {
        self.round_up = round_up;
        self.refresh();
    }

    /// Flips the round-up switch and returns its new position.
    pub fn toggle_round_up(&mut self) -> bool {
        self.set_round_up(!self.round_up);
        self.round_up
    }

    /// Empties both fields and turns rounding off.
    pub fn clear(&mut self) {
        self.amount_input.clear();
        self.tip_input.clear();
        self.round_up = false;
        self.refresh();
    }

    /// Builds the engine request from the current field text.
    pub fn request(&self) -> TipRequest {
        TipRequest::from_inputs(&self.amount_input, &self.tip_input, self.round_up)
    }

    /// Latest tip result.
    pub fn result(&self) -> &TipResult {
        &self.result
    }

    /// The output line, e.g. `Tip Amount: $7.50`.
    pub fn tip_text(&self) -> String {
        format!("{}: {}", TIP_AMOUNT_LABEL, self.result.formatted)
    }

    pub fn view(&self) -> ScreenView {
        ScreenView {
            amount_input: self.amount_input.clone(),
            tip_input: self.tip_input.clone(),
            round_up: self.round_up,
            locale: self.locale.tag.clone(),
            request: self.request(),
            result: self.result.clone(),
        }
    }

    /// Renders the whole screen as text.
    ///
    /// ```text
    /// Calculate Tip
    ///
    /// Bill Amount: 50
    /// How was the service?: 15
    /// Round up tip? [x]
    ///
    /// Tip Amount: $8.00
    /// ```
    pub fn render(&self) -> String {
        format!(
            "{TITLE}\n\n{BILL_AMOUNT_LABEL}: {}\n{SERVICE_LABEL}: {}\n{ROUND_UP_LABEL} [{}]\n\n{}",
            self.amount_input,
            self.tip_input,
            if self.round_up { "x" } else { " " },
            self.tip_text()
        )
    }

    fn refresh(&mut self) {
        let request = self.request();
        self.result = request.evaluate(&self.locale);
        debug!(
            amount = request.amount,
            tip_percent = request.tip_percent,
            round_up = request.round_up,
            tip = %self.result.formatted,
            "tip recomputed"
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> TipScreen {
        TipScreen::new(CurrencyLocale::en_us())
    }

    #[test]
    fn test_new_screen_shows_zero() {
        let screen = screen();
        assert_eq!(screen.tip_text(), "Tip Amount: $0.00");
        assert!(!screen.round_up());
    }

    #[test]
    fn test_read_after_write() {
        let mut screen = screen();
        screen.set_amount_input("50");
        assert_eq!(screen.result().formatted, "$0.00");

        screen.set_tip_input("15");
        assert_eq!(screen.result().formatted, "$7.50");

        screen.set_round_up(true);
        assert_eq!(screen.result().formatted, "$8.00");
    }

    #[test]
    fn test_unparseable_input_is_zero() {
        let mut screen = screen();
        screen.set_amount_input("fifty");
        screen.set_tip_input("15");
        assert_eq!(screen.tip_text(), "Tip Amount: $0.00");
    }

    #[test]
    fn test_no_implicit_default_tip() {
        let mut screen = screen();
        screen.set_amount_input("50");
        assert_eq!(screen.request().tip_percent, 0.0);
        assert_eq!(screen.tip_text(), "Tip Amount: $0.00");
    }

    #[test]
    fn test_toggle_round_up() {
        let mut screen = screen();
        screen.set_amount_input("33.33");
        screen.set_tip_input("18");
        assert!(screen.toggle_round_up());
        assert_eq!(screen.result().formatted, "$6.00");
        assert!(!screen.toggle_round_up());
    }

    #[test]
    fn test_clear() {
        let mut screen = screen();
        screen.set_amount_input("50");
        screen.set_tip_input("15");
        screen.set_round_up(true);
        screen.clear();

        assert_eq!(screen.amount_input(), "");
        assert_eq!(screen.tip_input(), "");
        assert!(!screen.round_up());
        assert_eq!(screen.result().formatted, "$0.00");
    }

    #[test]
    fn test_locale_is_used() {
        let mut screen = TipScreen::new(CurrencyLocale::from_tag("de-DE").unwrap());
        screen.set_amount_input("50");
        screen.set_tip_input("15");
        assert_eq!(screen.tip_text(), "Tip Amount: 7,50\u{a0}€");
    }

    #[test]
    fn test_render() {
        let mut screen = screen();
        screen.set_amount_input("50");
        screen.set_tip_input("15");
        screen.set_round_up(true);

        assert_eq!(
            screen.render(),
            "Calculate Tip\n\nBill Amount: 50\nHow was the service?: 15\nRound up tip? [x]\n\nTip Amount: $8.00"
        );
    }

    #[test]
    fn test_view_serializes() {
        let mut screen = screen();
        screen.set_amount_input("50");
        screen.set_tip_input("15");

        let json = serde_json::to_value(screen.view()).unwrap();
        assert_eq!(json["amountInput"], "50");
        assert_eq!(json["locale"], "en-US");
        assert_eq!(json["request"]["tipPercent"], 15.0);
        assert_eq!(json["result"]["formatted"], "$7.50");
    }
}
