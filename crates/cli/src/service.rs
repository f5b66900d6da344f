//! Shell loop: prompt, read, tokenize, dispatch.

use crate::console_service::{
    CommandDispatch, CommandDispatcher, CommandLine, CommandLoader, SourceCatalog,
};
use anyhow::{Context, Result};
use repl_extensions::{AppSettings, CancellationToken, CommandContext, ReplConsole};
use std::sync::Arc;
use tracing::{debug, error};

/// Name of the command dispatched when input ends.
pub const EXIT_COMMAND: &str = "exit";

/// Interactive read-eval-print loop over a [`CommandDispatch`].
///
/// Lines are handled strictly one after another: each dispatch is awaited to
/// completion before the next prompt is written.
pub struct ReplService {
    console: Arc<dyn ReplConsole>,
    settings: Arc<AppSettings>,
    dispatcher: Arc<dyn CommandDispatch>,
}

impl ReplService {
    pub fn new(
        console: Arc<dyn ReplConsole>,
        settings: Arc<AppSettings>,
        dispatcher: Arc<dyn CommandDispatch>,
    ) -> Self {
        Self {
            console,
            settings,
            dispatcher,
        }
    }

    /// Loads the built-in commands and every configured source from
    /// `catalog`, then wires a [`CommandDispatcher`] over the result.
    pub fn from_context(context: CommandContext, catalog: impl SourceCatalog + 'static) -> Self {
        let mut loader = CommandLoader::with_catalog(context.clone(), catalog);
        loader.register_all();
        let table = loader.into_table();
        debug!(commands = table.len(), "command table built");

        let dispatcher = CommandDispatcher::new(
            Arc::clone(&context.console),
            table,
            context.settings.app_name(),
        );
        Self::new(context.console, context.settings, Arc::new(dispatcher))
    }

    /// Runs until the token is cancelled or input ends.
    ///
    /// Only a failure to read input is returned as an error; failing commands
    /// are reported on the console and the loop carries on.
    pub async fn run(&self, token: CancellationToken) -> Result<()> {
        debug!("ReplService started");
        self.console.write_line(&format!(
            "{} Version {}\n",
            self.settings.app_name(),
            self.settings.app_version()
        ));

        let result = self.run_loop(&token).await;

        debug!("ReplService stopping");
        if let Err(err) = &result {
            error!(error = %format!("{err:#}"), "shell loop terminated");
        }
        debug!("ReplService stopped");
        result
    }

    async fn run_loop(&self, token: &CancellationToken) -> Result<()> {
        while !token.is_cancelled() {
            self.console.write(&self.settings.prompt());

            let line = tokio::select! {
                _ = token.cancelled() => break,
                line = self.console.read_line() => line.context("failed to read command line")?,
            };

            let Some(line) = line else {
                self.console.write_line("");
                self.dispatch(EXIT_COMMAND, &[], token).await;
                break;
            };

            let Some(command_line) = CommandLine::parse(&line) else {
                continue;
            };

            self.dispatch(&command_line.command, &command_line.args, token)
                .await;
        }
        Ok(())
    }

    async fn dispatch(&self, command: &str, args: &[String], token: &CancellationToken) {
        if let Err(err) = self.dispatcher.invoke(command, args, token.clone()).await {
            let message = format!("{err:#}");
            error!(command, error = %message, "command failed");
            self.console.write_error(&message);
        }
    }
}
