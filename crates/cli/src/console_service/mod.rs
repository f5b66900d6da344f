//! Console service: tokenizing, loading, and dispatching commands.

pub mod command_dispatcher;
pub mod command_loader;
pub mod command_table;
pub mod command_tokenizer;
pub mod console_helper;

pub use command_dispatcher::{CommandDispatch, CommandDispatcher, HELP_COMMANDS};
pub use command_loader::{CommandLoader, LinkedSources, Source, SourceCatalog, StaticSources};
pub use command_table::CommandTable;
pub use command_tokenizer::{tokenize, CommandLine};
pub use console_helper::TerminalConsole;
