//! `exit` command.

use async_trait::async_trait;
use repl_extensions::{
    CancellationToken, CommandContext, CommandHandler, CommandResult, ProcessHost, ReplConsole,
};
use std::sync::Arc;
use tracing::info;

/// Exit code used for a normal shutdown.
pub const EXIT_SUCCESS: i32 = 0;

/// Says goodbye and terminates the host process.
pub struct ExitCommand {
    console: Arc<dyn ReplConsole>,
    host: Arc<dyn ProcessHost>,
    description: String,
}

impl ExitCommand {
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            console: Arc::clone(&ctx.console),
            host: Arc::clone(&ctx.host),
            description: format!("Exits {}.", ctx.settings.app_name()),
        }
    }
}

#[async_trait]
impl CommandHandler for ExitCommand {
    fn name(&self) -> &str {
        "exit"
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn handle(&self, _args: &[String], _token: CancellationToken) -> CommandResult {
        self.console.write_line("Bye...");
        info!(code = EXIT_SUCCESS, "exiting");
        self.host.exit(EXIT_SUCCESS);
        Ok(())
    }
}
