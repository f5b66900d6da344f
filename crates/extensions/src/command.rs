//! Command handler contract.
//!
//! A command is a name, a (possibly multi-line) description and an async
//! entry point. The shell never calls [`CommandHandler::handle`] directly; it
//! goes through [`invoke`], which adds the diagnostics every command shares.

use crate::console::ReplConsole;
use crate::host::ProcessHost;
use crate::settings::AppSettings;
use async_trait::async_trait;
use std::fmt;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;
use tracing::debug;

/// Result type returned by command entry points.
pub type CommandResult = anyhow::Result<()>;

/// A command that can be registered with the shell.
#[async_trait]
pub trait CommandHandler: Send + Sync {
    /// Unique, case-sensitive command name.
    fn name(&self) -> &str;

    /// Help text shown by `help`.
    fn description(&self) -> &str;

    /// Runs the command.
    ///
    /// Cancellation is cooperative; commands that finish immediately may
    /// ignore the token.
    async fn handle(&self, args: &[String], token: CancellationToken) -> CommandResult;
}

impl fmt::Debug for dyn CommandHandler {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandHandler")
            .field("name", &self.name())
            .finish()
    }
}

/// Invokes a command, logging which command is being handled first.
pub async fn invoke(
    handler: &dyn CommandHandler,
    args: &[String],
    token: CancellationToken,
) -> CommandResult {
    debug!(command = handler.name(), "Handle {} command", handler.name());
    handler.handle(args, token).await
}

/// Collaborators handed to command factories.
#[derive(Clone)]
pub struct CommandContext {
    pub console: Arc<dyn ReplConsole>,
    pub settings: Arc<AppSettings>,
    pub host: Arc<dyn ProcessHost>,
}

impl CommandContext {
    pub fn new(
        console: Arc<dyn ReplConsole>,
        settings: Arc<AppSettings>,
        host: Arc<dyn ProcessHost>,
    ) -> Self {
        Self {
            console,
            settings,
            host,
        }
    }
}
