//! `prompt` command - replaces the shell prompt.

use async_trait::async_trait;
use repl_extensions::{
    AppSettings, CancellationToken, CommandContext, CommandHandler, CommandResult, ReplConsole,
};
use std::sync::Arc;
use tracing::debug;

const DESCRIPTION: &str = "Changes the prompt displayed in the console.

    prompt <newPrompt>

    newPrompt: The new prompt to be displayed.";

const INVALID_ARGUMENTS: &str = "\nInvalid number of arguments.  Please provide a prompt.\n";

/// Sets the prompt to its single argument, trimmed, plus one trailing space.
pub struct ChangePromptCommand {
    console: Arc<dyn ReplConsole>,
    settings: Arc<AppSettings>,
}

impl ChangePromptCommand {
    pub fn new(ctx: &CommandContext) -> Self {
        Self {
            console: Arc::clone(&ctx.console),
            settings: Arc::clone(&ctx.settings),
        }
    }
}

#[async_trait]
impl CommandHandler for ChangePromptCommand {
    fn name(&self) -> &str {
        "prompt"
    }

    fn description(&self) -> &str {
        DESCRIPTION
    }

    async fn handle(&self, args: &[String], _token: CancellationToken) -> CommandResult {
        let [new_prompt] = args else {
            self.console.write_error(INVALID_ARGUMENTS);
            return Ok(());
        };

        let prompt = format!("{} ", new_prompt.trim());
        debug!(prompt = %prompt, "prompt changed");
        self.settings.set_prompt(prompt);
        Ok(())
    }
}
