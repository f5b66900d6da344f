//! `hello` command.

use async_trait::async_trait;
use repl_extensions::{
    CancellationToken, CommandContext, CommandHandler, CommandResult, ReplConsole,
};
use std::sync::Arc;
use tracing::debug;

pub struct HelloCommand {
    console: Arc<dyn ReplConsole>,
}

impl HelloCommand {
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            console: Arc::clone(&ctx.console),
        }
    }
}

/// `"Hello: "` followed by the arguments joined with `", "`.
pub fn greeting(args: &[String]) -> String {
    format!("Hello: {}", args.join(", "))
}

#[async_trait]
impl CommandHandler for HelloCommand {
    fn name(&self) -> &str {
        "hello"
    }

    fn description(&self) -> &str {
        "Prints a nice greeting."
    }

    async fn handle(&self, args: &[String], _token: CancellationToken) -> CommandResult {
        self.console.write_line(&greeting(args));
        debug!("Hello responded with greeting message.");
        Ok(())
    }
}
