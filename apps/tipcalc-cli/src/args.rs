use clap::{Parser, ValueEnum};

#[derive(Parser, Debug)]
#[command(name = "tipcalc")]
#[command(about = "Calculate a tip and format it as currency", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Bill amount, as typed (unparseable text counts as 0)
    #[arg(long, short = 'a', default_value = "", allow_hyphen_values = true)]
    pub amount: String,

    /// Tip percentage, as typed (unparseable text counts as 0)
    #[arg(long, short = 't', default_value = "", allow_hyphen_values = true)]
    pub tip: String,

    /// Round the tip up to the next whole currency unit
    #[arg(long, short = 'r')]
    pub round_up: bool,

    /// Locale for currency formatting, e.g. en-US or de_DE.UTF-8
    #[arg(long)]
    pub locale: Option<String>,

    /// Override the currency symbol of the locale
    #[arg(long)]
    pub symbol: Option<String>,

    /// Override the number of fraction digits of the locale
    #[arg(long)]
    pub fraction_digits: Option<u32>,

    #[arg(long, value_enum, default_value = "plain")]
    pub format: OutputFormat,

    #[arg(long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,

    /// Read commands from stdin and re-render after each one
    #[arg(long, short = 'i')]
    pub interactive: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}
