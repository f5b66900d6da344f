//! Error types for command source discovery

use thiserror::Error;

/// Failures raised while resolving or loading an external command source.
///
/// These are recoverable: the loader logs them and moves on to the next
/// configured source.
#[derive(Error, Debug)]
pub enum SourceError {
    /// No linked crate carries the command source marker for this module.
    #[error("Command source '{module}' not found (is the crate linked into this executable?)")]
    NotFound { module: String },

    /// The source was found but its factory failed to build its commands.
    #[error("Command source '{module}' failed to load: {source:#}")]
    Load {
        module: String,
        #[source]
        source: anyhow::Error,
    },

    /// Source identifiers must be non-empty.
    #[error("Command source name must not be empty")]
    EmptyName,
}

impl SourceError {
    /// Helper for creating a not-found error.
    pub fn not_found(module: impl Into<String>) -> Self {
        Self::NotFound {
            module: module.into(),
        }
    }

    /// Helper for wrapping a factory failure.
    pub fn load(module: impl Into<String>, source: anyhow::Error) -> Self {
        Self::Load {
            module: module.into(),
            source,
        }
    }

    /// Name of the module the error refers to, if any.
    pub fn module(&self) -> Option<&str> {
        match self {
            Self::NotFound { module } | Self::Load { module, .. } => Some(module.as_str()),
            Self::EmptyName => None,
        }
    }
}
