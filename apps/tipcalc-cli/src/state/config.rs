//! # Configuration State
//!
//! Stores configuration resolved at startup.
//!
//! ## Configuration Sources (Priority Order)
//! 1. Command line flags (`--locale`, `--round-up`)
//! 2. Environment variables (`TIPCALC_LOCALE`, `TIPCALC_ROUND_UP`)
//! 3. POSIX locale variables (`LC_ALL`, `LC_MONETARY`, `LANG`)
//! 4. Defaults (`en-US`, no rounding)
//!
//! ## Thread Safety
//! Configuration is read-only after initialization, so no mutex needed.

use serde::Serialize;
use tipcalc_core::{CoreResult, CurrencyLocale, DEFAULT_LOCALE_TAG};
use tracing::{debug, warn};

/// Environment variable holding the preferred locale tag.
pub const LOCALE_ENV: &str = "TIPCALC_LOCALE";

/// Environment variable presetting the round-up switch.
pub const ROUND_UP_ENV: &str = "TIPCALC_ROUND_UP";

/// POSIX variables consulted, highest priority first.
const POSIX_LOCALE_ENVS: [&str; 3] = ["LC_ALL", "LC_MONETARY", "LANG"];

/// Where the active locale came from.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase", tag = "kind", content = "name")]
pub enum LocaleSource {
    /// `--locale` flag
    Flag,

    /// An environment variable (name included)
    Env(String),

    /// Nothing usable was configured
    Default,
}

/// Application configuration.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConfigState {
    /// Currency conventions passed to the tip engine
    pub locale: CurrencyLocale,

    /// Where `locale` came from
    pub locale_source: LocaleSource,

    /// Initial position of the round-up switch
    pub round_up: bool,
}

impl Default for ConfigState {
    /// Returns default configuration.
    ///
    /// ## Default Values
    /// - Locale: en-US ($, 2 fraction digits)
    /// - Round up: off
    fn default() -> Self {
        ConfigState {
            locale: CurrencyLocale::from_tag_or_default(DEFAULT_LOCALE_TAG),
            locale_source: LocaleSource::Default,
            round_up: false,
        }
    }
}

impl ConfigState {
    /// Creates a ConfigState from the process environment.
    pub fn from_env(locale_flag: Option<&str>) -> Self {
        ConfigState::from_vars(locale_flag, |key| std::env::var(key).ok())
    }

    /// Creates a ConfigState from a flag value and a variable lookup.
    ///
    /// ## Fallback Logging
    /// - An explicit tag (flag or `TIPCALC_LOCALE`) that cannot be
    ///   resolved is logged at WARN, then the next source is tried
    /// - Ambient POSIX values (`C.UTF-8` in most containers) are
    ///   skipped at DEBUG
    pub fn from_vars<F>(locale_flag: Option<&str>, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = ConfigState::default();

        if let Some(value) = lookup(ROUND_UP_ENV) {
            config.round_up = parse_switch(&value);
        }

        let explicit = locale_flag
            .map(|tag| (tag.to_string(), LocaleSource::Flag))
            .into_iter()
            .chain(lookup(LOCALE_ENV).map(|tag| (tag, LocaleSource::Env(LOCALE_ENV.to_string()))));

        for (tag, source) in explicit {
            match CurrencyLocale::from_tag(&tag) {
                Ok(locale) => {
                    config.locale = locale;
                    config.locale_source = source;
                    return config;
                }
                Err(err) => warn!(%tag, ?source, "{err}, trying next locale source"),
            }
        }

        for name in POSIX_LOCALE_ENVS {
            let Some(tag) = lookup(name).filter(|tag| !tag.is_empty()) else {
                continue;
            };

            match CurrencyLocale::from_tag(&tag) {
                Ok(locale) => {
                    config.locale = locale;
                    config.locale_source = LocaleSource::Env(name.to_string());
                    return config;
                }
                Err(err) => debug!(%tag, variable = name, "{err}, skipping"),
            }
        }

        debug!(locale = DEFAULT_LOCALE_TAG, "no usable locale configured, using default");
        config
    }

    /// Applies `--symbol` and `--fraction-digits` overrides to the locale.
    ///
    /// ## Errors
    /// Validation errors from the core crate (empty symbol, too many digits).
    pub fn with_overrides(
        mut self,
        symbol: Option<&str>,
        fraction_digits: Option<u32>,
    ) -> CoreResult<Self> {
        if let Some(symbol) = symbol {
            self.locale = self.locale.with_symbol(symbol)?;
        }

        if let Some(digits) = fraction_digits {
            self.locale = self.locale.with_fraction_digits(digits)?;
        }

        Ok(self)
    }
}

/// Reads a boolean switch value (`1`, `true`, `yes`, `on`).
fn parse_switch(value: &str) -> bool {
    matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "yes" | "on"
    )
}
