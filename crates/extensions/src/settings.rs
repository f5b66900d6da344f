//! Runtime application settings shared between the shell and its commands.

use parking_lot::RwLock;

/// Default application name.
pub const DEFAULT_APP_NAME: &str = "ReplConsole";

/// Default prompt.
pub const DEFAULT_PROMPT: &str = "> ";

/// Default hosting environment name.
pub const DEFAULT_ENVIRONMENT: &str = "Production";

/// Settings resolved once at startup.
///
/// Everything is immutable except the prompt, which commands may replace at
/// runtime; it sits behind a lock so commands only need `&AppSettings`.
#[derive(Debug)]
pub struct AppSettings {
    environment: String,
    app_name: String,
    app_version: String,
    console_title: Option<String>,
    prompt: RwLock<String>,
    command_sources: Vec<String>,
}

impl AppSettings {
    /// Creates settings for the named application with default values.
    pub fn new(app_name: impl Into<String>) -> Self {
        Self {
            environment: DEFAULT_ENVIRONMENT.to_string(),
            app_name: app_name.into(),
            app_version: "<unknown>".to_string(),
            console_title: None,
            prompt: RwLock::new(DEFAULT_PROMPT.to_string()),
            command_sources: Vec::new(),
        }
    }

    pub fn with_environment(mut self, environment: impl Into<String>) -> Self {
        self.environment = environment.into();
        self
    }

    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.app_version = version.into();
        self
    }

    pub fn with_console_title(mut self, title: impl Into<String>) -> Self {
        self.console_title = Some(title.into());
        self
    }

    pub fn with_prompt(self, prompt: impl Into<String>) -> Self {
        *self.prompt.write() = prompt.into();
        self
    }

    pub fn with_command_sources<I, S>(mut self, sources: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.command_sources = sources.into_iter().map(Into::into).collect();
        self
    }

    pub fn environment(&self) -> &str {
        &self.environment
    }

    pub fn app_name(&self) -> &str {
        &self.app_name
    }

    pub fn app_version(&self) -> &str {
        &self.app_version
    }

    /// Window title; falls back to `"{app} {version}"`.
    pub fn console_title(&self) -> String {
        self.console_title
            .clone()
            .unwrap_or_else(|| format!("{} {}", self.app_name, self.app_version))
    }

    /// Current prompt text.
    pub fn prompt(&self) -> String {
        self.prompt.read().clone()
    }

    /// Replaces the prompt shown before the next read.
    pub fn set_prompt(&self, prompt: impl Into<String>) {
        *self.prompt.write() = prompt.into();
    }

    /// External command sources the loader should try, in order.
    pub fn command_sources(&self) -> &[String] {
        &self.command_sources
    }
}

impl Default for AppSettings {
    fn default() -> Self {
        Self::new(DEFAULT_APP_NAME)
    }
}
