//! Command source marker tests.
//!
//! Sources submitted with `repl_commands!` must be discoverable by module
//! name from the link-time registry.

use async_trait::async_trait;
use repl_extensions::testing::{RecordingConsole, RecordingHost};
use repl_extensions::{
    repl_commands, AppSettings, CancellationToken, CommandContext, CommandHandler, CommandResult,
    CommandSource,
};
use std::sync::Arc;

struct PingCommand {
    description: String,
}

#[async_trait]
impl CommandHandler for PingCommand {
    fn name(&self) -> &str {
        "ping"
    }

    fn description(&self) -> &str {
        &self.description
    }

    async fn handle(&self, _args: &[String], _token: CancellationToken) -> CommandResult {
        Ok(())
    }
}

fn ping_commands(ctx: &CommandContext) -> anyhow::Result<Vec<Arc<dyn CommandHandler>>> {
    let ping: Arc<dyn CommandHandler> = Arc::new(PingCommand {
        description: format!("Pings {}.", ctx.settings.app_name()),
    });
    Ok(vec![ping])
}

fn broken_commands(_ctx: &CommandContext) -> anyhow::Result<Vec<Arc<dyn CommandHandler>>> {
    anyhow::bail!("plugin settings are missing")
}

repl_commands!("plugin-tests-ping", ping_commands);
repl_commands!("plugin-tests-broken", broken_commands);

fn context() -> CommandContext {
    CommandContext::new(
        Arc::new(RecordingConsole::new()),
        Arc::new(AppSettings::new("TestApp")),
        Arc::new(RecordingHost::new()),
    )
}

#[test]
fn marked_source_is_found_by_module_name() {
    let source = CommandSource::find("plugin-tests-ping").expect("source should be linked");
    assert_eq!(source.module(), "plugin-tests-ping");

    let commands = source.build(&context()).unwrap();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].name(), "ping");
    assert_eq!(commands[0].description(), "Pings TestApp.");
}

#[test]
fn lookup_is_exact_and_case_sensitive() {
    assert!(CommandSource::find("Plugin-Tests-Ping").is_none());
    assert!(CommandSource::find("plugin-tests").is_none());
    assert!(CommandSource::find("").is_none());
}

#[test]
fn failing_factory_reports_its_error() {
    let source = CommandSource::find("plugin-tests-broken").unwrap();
    let err = source.build(&context()).unwrap_err();
    assert!(err.to_string().contains("plugin settings are missing"));
}

#[test]
fn all_marked_sources_are_listed() {
    let modules: Vec<&str> = CommandSource::linked().map(CommandSource::module).collect();
    assert!(modules.contains(&"plugin-tests-ping"));
    assert!(modules.contains(&"plugin-tests-broken"));
}
