//! # State Module
//!
//! Application state for the terminal shell.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  ┌──────────────────────────────┐   ┌──────────────────────────────┐   │
//! │  │          TipScreen           │   │         ConfigState          │   │
//! │  │                              │   │                              │   │
//! │  │  amount_input  (raw text)    │   │  locale (resolved once)      │   │
//! │  │  tip_input     (raw text)    │   │  locale_source               │   │
//! │  │  round_up      (switch)      │   │  round_up default            │   │
//! │  │  result        (derived)     │   │                              │   │
//! │  └──────────────────────────────┘   └──────────────────────────────┘   │
//! │                                                                         │
//! │  THREAD SAFETY:                                                        │
//! │  • TipScreen: single owner, mutated through &mut self only             │
//! │  • ConfigState: read-only after start-up                               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod config;
mod screen;

pub use config::{ConfigState, LocaleSource};
pub use screen::{ScreenView, TipScreen};
