use anyhow::{Context, Result};
use clap::Parser;
use repl_console::{
    CliArgs, ConsoleConfig, LinkedSources, ReplService, SystemHost, TerminalConsole, VERSION,
};
use repl_extensions::{CommandContext, ProcessHost, ReplConsole};
use std::io::{self, IsTerminal};
use std::sync::Arc;
use tracing::{debug, warn};
use tracing_subscriber::{fmt, EnvFilter};

#[tokio::main]
async fn main() -> Result<()> {
    let args = CliArgs::parse();
    init_tracing(&args, !args.no_color && io::stderr().is_terminal());
    debug!("Starting ReplConsole");

    let mut config = ConsoleConfig::load(args.config.as_deref(), &args.environment)
        .context("failed to load configuration")?;
    config.apply_args(&args);
    let settings = Arc::new(config.into_settings(&args.environment, VERSION));
    debug!(
        app = settings.app_name(),
        version = settings.app_version(),
        environment = settings.environment(),
        sources = ?settings.command_sources(),
        "settings resolved"
    );

    let interactive = io::stdout().is_terminal();
    let console: Arc<dyn ReplConsole> = Arc::new(
        TerminalConsole::new(interactive && !args.no_color)
            .context("failed to start console input reader")?,
    );
    if interactive {
        if let Err(err) = console.set_title(&settings.console_title()) {
            warn!(error = %err, "failed to set console title");
        }
    }

    let host = Arc::new(SystemHost::new());
    host.listen_for_ctrl_c();
    let token = host.cancellation_token();

    let context = CommandContext::new(console, settings, host);
    ReplService::from_context(context, LinkedSources)
        .run(token)
        .await
}

fn init_tracing(args: &CliArgs, ansi: bool) {
    let default_level = tracing::Level::from(args.log_level);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level.to_string().to_lowercase()));
    let _ = fmt()
        .with_env_filter(env_filter)
        .with_writer(io::stderr)
        .with_ansi(ansi)
        .try_init();
}
