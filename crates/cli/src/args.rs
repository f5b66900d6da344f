use clap::builder::FalseyValueParser;
use clap::{ArgAction, Parser, ValueEnum};
use repl_extensions::settings::DEFAULT_ENVIRONMENT;
use std::path::PathBuf;

/// Command-line arguments for the REPL console.
///
/// Every option also reads from a `REPLCLI_*` environment variable; an
/// explicit flag wins over the variable, which wins over configuration files.
#[derive(Parser, Debug, Clone)]
#[command(
    name = "repl-console",
    version = env!("CARGO_PKG_VERSION"),
    about = "REPL Console - extensible interactive command shell",
    long_about = "REPL Console reads one command per line, tokenizes it, and dispatches it \
                  to a registered command. Type `help` or `?` at the prompt to list the \
                  available commands."
)]
pub struct CliArgs {
    /// Base configuration file (TOML or JSON)
    #[arg(short = 'c', long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Hosting environment; selects the `appsettings.{environment}` overlay
    #[arg(
        short = 'e',
        long = "environment",
        env = "REPLCLI_ENVIRONMENT",
        default_value = DEFAULT_ENVIRONMENT,
        value_name = "NAME"
    )]
    pub environment: String,

    /// Overrides the application name
    #[arg(long = "app-name", env = "REPLCLI_APP_NAME", value_name = "NAME")]
    pub app_name: Option<String>,

    /// Overrides the initial prompt
    #[arg(long = "prompt", env = "REPLCLI_PROMPT", value_name = "PROMPT")]
    pub prompt: Option<String>,

    /// Replaces the configured external command sources (comma separated)
    #[arg(
        long = "command-source",
        env = "REPLCLI_COMMAND_SOURCES",
        value_delimiter = ',',
        value_name = "MODULE"
    )]
    pub command_sources: Vec<String>,

    /// Disables colored output; a non-empty `NO_COLOR` has the same effect
    #[arg(
        long = "no-color",
        env = "NO_COLOR",
        action = ArgAction::SetTrue,
        value_parser = FalseyValueParser::new()
    )]
    pub no_color: bool,

    /// Log level used when RUST_LOG is not set
    #[arg(long = "log-level", value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Log level enumeration
#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogLevel {
    /// Trace level logging
    Trace,
    /// Debug level logging
    Debug,
    /// Info level logging
    Info,
    /// Warning level logging
    Warn,
    /// Error level logging
    Error,
}

impl From<LogLevel> for tracing::Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => tracing::Level::TRACE,
            LogLevel::Debug => tracing::Level::DEBUG,
            LogLevel::Info => tracing::Level::INFO,
            LogLevel::Warn => tracing::Level::WARN,
            LogLevel::Error => tracing::Level::ERROR,
        }
    }
}
