//! `cls` command.

use async_trait::async_trait;
use repl_extensions::{
    CancellationToken, CommandContext, CommandHandler, CommandResult, ReplConsole,
};
use std::sync::Arc;

/// Clears the console display.
pub struct ClearCommand {
    console: Arc<dyn ReplConsole>,
}

impl ClearCommand {
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            console: Arc::clone(&ctx.console),
        }
    }
}

#[async_trait]
impl CommandHandler for ClearCommand {
    fn name(&self) -> &str {
        "cls"
    }

    fn description(&self) -> &str {
        "Clears the Console Screen."
    }

    async fn handle(&self, _args: &[String], _token: CancellationToken) -> CommandResult {
        self.console.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use repl_extensions::testing::{ConsoleEvent, RecordingConsole, RecordingHost};
    use repl_extensions::AppSettings;

    #[tokio::test]
    async fn clears_regardless_of_arguments() {
        let console = Arc::new(RecordingConsole::new());
        let ctx = CommandContext::new(
            console.clone(),
            Arc::new(AppSettings::default()),
            Arc::new(RecordingHost::new()),
        );
        let command = ClearCommand::new(&ctx);
        let token = CancellationToken::new();
        token.cancel();

        command.handle(&[], CancellationToken::new()).await.unwrap();
        command
            .handle(&["ignored".to_string()], token)
            .await
            .unwrap();

        assert_eq!(console.events(), vec![ConsoleEvent::Clear, ConsoleEvent::Clear]);
    }
}
