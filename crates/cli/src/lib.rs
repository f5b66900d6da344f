//! REPL Console
//!
//! An interactive shell that reads one command per line, tokenizes it and
//! dispatches it to a command registered by the console itself or by a
//! linked crate carrying the `repl_commands!` marker.

pub mod args;
pub mod commands;
pub mod config;
pub mod console_service;
pub mod host;
pub mod service;

// Linked so its command source is visible to `LinkedSources`.
use repl_custom_commands as _;

pub use args::{CliArgs, LogLevel};
pub use config::{ConfigFormat, ConsoleConfig, ConsoleSection};
pub use console_service::{
    CommandDispatch, CommandDispatcher, CommandLoader, CommandTable, LinkedSources, Source,
    SourceCatalog, StaticSources, TerminalConsole,
};
pub use host::SystemHost;
pub use service::ReplService;

/// Console version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
