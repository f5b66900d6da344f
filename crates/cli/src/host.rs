//! Process host backed by the operating system.

use repl_extensions::{CancellationToken, ProcessHost};
use tokio::signal;
use tracing::{error, info};

/// Host whose token is cancelled on Ctrl+C and whose `exit` ends the process.
#[derive(Debug, Default)]
pub struct SystemHost {
    token: CancellationToken,
}

impl SystemHost {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels the host token when Ctrl+C is received.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn listen_for_ctrl_c(&self) {
        let token = self.token.clone();
        tokio::spawn(async move {
            tokio::select! {
                result = signal::ctrl_c() => match result {
                    Ok(()) => {
                        info!("shutdown signal received (Ctrl+C)");
                        token.cancel();
                    }
                    Err(err) => error!(error = %err, "failed to listen for Ctrl+C"),
                },
                _ = token.cancelled() => {}
            }
        });
    }
}

impl ProcessHost for SystemHost {
    fn cancellation_token(&self) -> CancellationToken {
        self.token.clone()
    }

    fn exit(&self, code: i32) {
        info!(code, "process exit requested");
        self.token.cancel();
        std::process::exit(code);
    }
}
