//! Custom REPL Commands
//!
//! An external command source. The shell picks these commands up only when
//! [`MODULE_NAME`] is listed in its configured command sources.

pub mod change_prompt;

pub use change_prompt::ChangePromptCommand;

use repl_extensions::{repl_commands, CommandContext, CommandHandler};
use std::sync::Arc;

/// Name under which this crate registers its commands.
pub const MODULE_NAME: &str = "repl-custom-commands";

/// Builds every command this crate contributes.
pub fn commands(ctx: &CommandContext) -> anyhow::Result<Vec<Arc<dyn CommandHandler>>> {
    let prompt: Arc<dyn CommandHandler> = Arc::new(ChangePromptCommand::new(ctx));
    Ok(vec![prompt])
}

repl_commands!(MODULE_NAME, commands);
