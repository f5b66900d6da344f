//! REPL Extensions Framework
//!
//! Extension points shared by the REPL console and the crates that plug
//! commands into it: the command contract, the plugin marker, and the
//! collaborator traits commands are built against.

pub mod command;
pub mod console;
pub mod error;
pub mod host;
pub mod plugin;
pub mod settings;

#[cfg(any(test, feature = "testing"))]
pub mod testing;

// Re-export commonly used types
pub use command::{invoke, CommandContext, CommandHandler, CommandResult};
pub use console::{palette, ReplConsole};
pub use error::SourceError;
pub use host::ProcessHost;
pub use plugin::{CommandFactory, CommandSource};
pub use settings::AppSettings;

pub use crossterm::style::Color;
pub use tokio_util::sync::CancellationToken;

#[doc(hidden)]
pub use inventory;
