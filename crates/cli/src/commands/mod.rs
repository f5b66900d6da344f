//! Built-in commands compiled into the console.

pub mod clear;
pub mod exit;
pub mod hello;

pub use clear::ClearCommand;
pub use exit::ExitCommand;
pub use hello::HelloCommand;

use repl_extensions::{CommandContext, CommandHandler};
use std::sync::Arc;

/// The in-process command source, in registration order.
pub fn builtin_commands(ctx: &CommandContext) -> Vec<Arc<dyn CommandHandler>> {
    vec![
        Arc::new(ClearCommand::new(ctx)) as Arc<dyn CommandHandler>,
        Arc::new(ExitCommand::new(ctx)),
        Arc::new(HelloCommand::new(ctx)),
    ]
}
