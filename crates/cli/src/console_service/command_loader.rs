//! Discovers command handlers and builds the [`CommandTable`].
//!
//! Two kinds of sources exist: the built-in commands compiled into this
//! crate, and external sources that opted in with `repl_commands!`. External
//! sources are only consulted when named in configuration. A source that
//! cannot be found or fails to build is logged and skipped so the shell
//! still starts with everything else.

use super::command_table::CommandTable;
use crate::commands;
use repl_extensions::{CommandContext, CommandFactory, CommandHandler, CommandSource, SourceError};
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, error, info};

/// Where commands are discovered from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    /// Commands compiled into the console itself.
    InProcess,
    /// A linked crate carrying the command source marker, by module name.
    External(String),
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::InProcess => write!(f, "<in-process>"),
            Source::External(module) => write!(f, "{module}"),
        }
    }
}

/// Resolves external module names to command factories.
pub trait SourceCatalog: Send + Sync {
    fn resolve(&self, module: &str) -> Result<CommandFactory, SourceError>;
}

/// Catalog backed by the sources linked into this executable.
#[derive(Debug, Default, Clone, Copy)]
pub struct LinkedSources;

impl SourceCatalog for LinkedSources {
    fn resolve(&self, module: &str) -> Result<CommandFactory, SourceError> {
        if module.is_empty() {
            return Err(SourceError::EmptyName);
        }
        CommandSource::find(module)
            .map(CommandSource::factory)
            .ok_or_else(|| SourceError::not_found(module))
    }
}

/// Catalog over an explicit set of factories.
#[derive(Default, Clone)]
pub struct StaticSources {
    factories: HashMap<String, CommandFactory>,
}

impl StaticSources {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, module: impl Into<String>, factory: CommandFactory) -> Self {
        self.factories.insert(module.into(), factory);
        self
    }
}

impl SourceCatalog for StaticSources {
    fn resolve(&self, module: &str) -> Result<CommandFactory, SourceError> {
        if module.is_empty() {
            return Err(SourceError::EmptyName);
        }
        self.factories
            .get(module)
            .copied()
            .ok_or_else(|| SourceError::not_found(module))
    }
}

/// Builds a command table from one or more sources.
pub struct CommandLoader {
    context: CommandContext,
    catalog: Box<dyn SourceCatalog>,
    table: CommandTable,
}

impl CommandLoader {
    pub fn with_catalog(context: CommandContext, catalog: impl SourceCatalog + 'static) -> Self {
        Self {
            context,
            catalog: Box::new(catalog),
            table: CommandTable::new(),
        }
    }

    /// Registers the in-process source, then the configured external sources in order.
    pub fn register_all(&mut self) {
        self.register(&Source::InProcess);
        let modules = self.context.settings.command_sources().to_vec();
        for module in modules {
            self.register(&Source::External(module));
        }
    }

    /// Registers a source; failures are logged and the source is skipped.
    pub fn register(&mut self, source: &Source) {
        match self.try_register(source) {
            Ok(count) => {
                info!(source = %source, count, "command source loaded");
            }
            Err(err) => {
                error!(
                    source = %source,
                    error = %err,
                    "Failed to load command source '{}'",
                    source
                );
            }
        }
    }

    /// Registers a source, returning how many handlers it contributed.
    pub fn try_register(&mut self, source: &Source) -> Result<usize, SourceError> {
        let handlers = match source {
            Source::InProcess => commands::builtin_commands(&self.context),
            Source::External(module) => {
                let factory = self.catalog.resolve(module)?;
                factory(&self.context).map_err(|err| SourceError::load(module.clone(), err))?
            }
        };

        let count = handlers.len();
        for handler in handlers {
            self.register_handler(handler);
        }
        Ok(count)
    }

    /// Registers a single handler directly.
    pub fn register_handler(&mut self, handler: Arc<dyn CommandHandler>) {
        debug!(command = handler.name(), "Add '{}' to command table", handler.name());
        self.table.insert(handler);
    }

    pub fn table(&self) -> &CommandTable {
        &self.table
    }

    pub fn into_table(self) -> CommandTable {
        self.table
    }
}
