//! Process host collaborator.

use tokio_util::sync::CancellationToken;

/// Lifetime services of the hosting process.
pub trait ProcessHost: Send + Sync {
    /// Token cancelled when the process is shutting down.
    fn cancellation_token(&self) -> CancellationToken;

    /// Terminates the process with the given exit code.
    ///
    /// The production host never returns from this call.
    fn exit(&self, code: i32);
}
