//! Routes a command name to help, the unknown-command message, or a handler.

use super::command_table::CommandTable;
use async_trait::async_trait;
use repl_extensions::{invoke, palette, CancellationToken, CommandResult, ReplConsole};
use std::sync::Arc;
use tracing::debug;

/// Names that always print the help listing and are never looked up.
pub const HELP_COMMANDS: [&str; 2] = ["help", "?"];

/// Entry point the shell loop dispatches through.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CommandDispatch: Send + Sync {
    /// Dispatches one command.
    ///
    /// Unknown commands are reported on the console and return `Ok`; only a
    /// failure inside an invoked handler is returned as `Err`.
    async fn invoke(
        &self,
        command: &str,
        args: &[String],
        token: CancellationToken,
    ) -> CommandResult;
}

/// Dispatcher over an immutable [`CommandTable`].
pub struct CommandDispatcher {
    console: Arc<dyn ReplConsole>,
    commands: CommandTable,
    help_header: String,
}

impl CommandDispatcher {
    pub fn new(console: Arc<dyn ReplConsole>, commands: CommandTable, app_name: &str) -> Self {
        Self {
            console,
            commands,
            help_header: help_header(app_name),
        }
    }

    fn print_help(&self) {
        self.console.write_line(&self.help_header);
        for command in self.commands.iter() {
            self.console.write_line(command.name());
            self.console
                .write_line(&format!("  {}\n", command.description()));
        }
    }

    fn print_unknown_command(&self, command: &str) {
        self.console
            .write_colored("\nError: Unknown Command '", palette::FIREBRICK);
        self.console
            .write_colored(command, palette::MEDIUM_SLATE_BLUE);
        self.console.write_line_colored("'\n", palette::FIREBRICK);
    }
}

#[async_trait]
impl CommandDispatch for CommandDispatcher {
    async fn invoke(
        &self,
        command: &str,
        args: &[String],
        token: CancellationToken,
    ) -> CommandResult {
        if HELP_COMMANDS.contains(&command) {
            self.print_help();
            return Ok(());
        }

        let Some(handler) = self.commands.get(command) else {
            debug!(command, "unknown command");
            self.print_unknown_command(command);
            return Ok(());
        };

        invoke(handler.as_ref(), args, token).await
    }
}

fn help_header(app_name: &str) -> String {
    let title = format!("{app_name} - Command Line Help");
    let underline = "-".repeat(title.chars().count());
    format!("\n{title}\n{underline}\n")
}
