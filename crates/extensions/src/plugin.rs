//! Plugin marker for external command sources.
//!
//! A crate opts into command discovery by invoking [`repl_commands!`] once.
//! The macro submits a [`CommandSource`] to a link-time registry; the shell
//! only ever looks up sources by the module names it was configured with, so
//! linking a plugin crate does not by itself register its commands.

use crate::command::{CommandContext, CommandHandler};
use std::fmt;
use std::sync::Arc;

/// Builds the commands of one source from the shell's collaborators.
pub type CommandFactory = fn(&CommandContext) -> anyhow::Result<Vec<Arc<dyn CommandHandler>>>;

/// A named collection of commands contributed by a linked crate.
pub struct CommandSource {
    module: &'static str,
    factory: CommandFactory,
}

impl CommandSource {
    pub const fn new(module: &'static str, factory: CommandFactory) -> Self {
        Self { module, factory }
    }

    /// Module name used in configuration to select this source.
    pub fn module(&self) -> &'static str {
        self.module
    }

    pub fn factory(&self) -> CommandFactory {
        self.factory
    }

    /// Runs the factory.
    pub fn build(&self, context: &CommandContext) -> anyhow::Result<Vec<Arc<dyn CommandHandler>>> {
        (self.factory)(context)
    }

    /// Sources linked into the running executable, in no particular order.
    pub fn linked() -> impl Iterator<Item = &'static CommandSource> {
        inventory::iter::<CommandSource>.into_iter()
    }

    /// Finds a linked source by exact module name.
    pub fn find(module: &str) -> Option<&'static CommandSource> {
        Self::linked().find(|source| source.module == module)
    }
}

impl fmt::Debug for CommandSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CommandSource")
            .field("module", &self.module)
            .finish()
    }
}

inventory::collect!(CommandSource);

/// Marks the calling crate as a command source.
///
/// ```ignore
/// fn commands(ctx: &CommandContext) -> anyhow::Result<Vec<Arc<dyn CommandHandler>>> {
///     Ok(vec![Arc::new(MyCommand::new(ctx))])
/// }
///
/// repl_extensions::repl_commands!("my-commands", commands);
/// ```
#[macro_export]
macro_rules! repl_commands {
    ($module:expr, $factory:path) => {
        $crate::inventory::submit! {
            $crate::plugin::CommandSource::new($module, $factory)
        }
    };
}
