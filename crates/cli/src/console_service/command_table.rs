//! Name-to-handler lookup built by the loader.

use indexmap::map::Entry;
use indexmap::IndexMap;
use repl_extensions::CommandHandler;
use std::sync::Arc;
use tracing::{debug, warn};

/// Registered commands keyed by exact name, in registration order.
///
/// Registering a name twice keeps the later handler (last registration
/// wins) at the position of the first registration.
#[derive(Debug, Default)]
pub struct CommandTable {
    commands: IndexMap<String, Arc<dyn CommandHandler>>,
}

impl CommandTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a handler, returning the one it replaced, if any.
    pub fn insert(&mut self, handler: Arc<dyn CommandHandler>) -> Option<Arc<dyn CommandHandler>> {
        let name = handler.name().to_string();
        match self.commands.entry(name) {
            Entry::Occupied(mut entry) => {
                warn!(
                    command = %entry.key(),
                    "command '{}' registered more than once; the last registration wins",
                    entry.key()
                );
                Some(entry.insert(handler))
            }
            Entry::Vacant(entry) => {
                debug!(command = %entry.key(), "Handler for Command '{}' registered", entry.key());
                entry.insert(handler);
                None
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&Arc<dyn CommandHandler>> {
        self.commands.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Handlers in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &Arc<dyn CommandHandler>> {
        self.commands.values()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.commands.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use async_trait::async_trait;
    use repl_extensions::{CancellationToken, CommandResult};

    /// Handler with a fixed name and description that does nothing.
    pub(crate) struct StaticCommand {
        pub name: &'static str,
        pub description: &'static str,
    }

    #[async_trait]
    impl CommandHandler for StaticCommand {
        fn name(&self) -> &str {
            self.name
        }

        fn description(&self) -> &str {
            self.description
        }

        async fn handle(&self, _args: &[String], _token: CancellationToken) -> CommandResult {
            Ok(())
        }
    }

    pub(crate) fn command(
        name: &'static str,
        description: &'static str,
    ) -> Arc<dyn CommandHandler> {
        Arc::new(StaticCommand { name, description })
    }

    #[test]
    fn keeps_registration_order() {
        let mut table = CommandTable::new();
        table.insert(command("zeta", "z"));
        table.insert(command("alpha", "a"));
        table.insert(command("mid", "m"));

        assert_eq!(table.names().collect::<Vec<_>>(), vec!["zeta", "alpha", "mid"]);
        assert_eq!(table.len(), 3);
    }

    #[test]
    fn last_registration_wins() {
        let mut table = CommandTable::new();
        assert!(table.insert(command("dup", "first")).is_none());
        table.insert(command("other", "o"));

        let replaced = table.insert(command("dup", "second")).unwrap();

        assert_eq!(replaced.description(), "first");
        assert_eq!(table.get("dup").unwrap().description(), "second");
        assert_eq!(table.len(), 2);
        assert_eq!(table.names().collect::<Vec<_>>(), vec!["dup", "other"]);
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let mut table = CommandTable::new();
        table.insert(command("hello", "h"));

        assert!(table.contains("hello"));
        assert!(!table.contains("Hello"));
        assert!(table.get("HELLO").is_none());
    }
}
