//! Configuration files for the REPL console.
//!
//! Settings live in a `[ReplConsole]` section of `appsettings.toml` (or
//! `appsettings.json`). An optional `appsettings.{environment}.{ext}` next to
//! the base file overlays it key by key. Command-line flags and `REPLCLI_*`
//! variables are applied last.

use crate::args::CliArgs;
use anyhow::{bail, Context, Result};
use repl_extensions::AppSettings;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

/// Base configuration file stem looked up when none is given.
pub const DEFAULT_CONFIG_STEM: &str = "appsettings";

/// File formats, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    pub fn from_path(path: &Path) -> Result<Self> {
        match path.extension().and_then(|ext| ext.to_str()) {
            Some(ext) if ext.eq_ignore_ascii_case("toml") => Ok(Self::Toml),
            Some(ext) if ext.eq_ignore_ascii_case("json") => Ok(Self::Json),
            _ => bail!(
                "unsupported configuration file '{}' (expected .toml or .json)",
                path.display()
            ),
        }
    }

    fn extension(self) -> &'static str {
        match self {
            Self::Toml => "toml",
            Self::Json => "json",
        }
    }
}

/// The `ReplConsole` section. Absent keys keep lower-precedence values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct ConsoleSection {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_version: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub console_title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub prompt: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub command_sources: Option<Vec<String>>,
}

impl ConsoleSection {
    /// Overlays every key present in `other`.
    pub fn merge(&mut self, other: ConsoleSection) {
        if other.app_name.is_some() {
            self.app_name = other.app_name;
        }
        if other.app_version.is_some() {
            self.app_version = other.app_version;
        }
        if other.console_title.is_some() {
            self.console_title = other.console_title;
        }
        if other.prompt.is_some() {
            self.prompt = other.prompt;
        }
        if other.command_sources.is_some() {
            self.command_sources = other.command_sources;
        }
    }
}

/// Root of a configuration file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    #[serde(rename = "ReplConsole", default)]
    pub repl_console: ConsoleSection,
}

impl ConsoleConfig {
    pub fn parse(content: &str, format: ConfigFormat) -> Result<Self> {
        match format {
            ConfigFormat::Toml => toml::from_str(content).context("invalid TOML configuration"),
            ConfigFormat::Json => {
                serde_json::from_str(content).context("invalid JSON configuration")
            }
        }
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let format = ConfigFormat::from_path(path)?;
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read configuration file '{}'", path.display()))?;
        Self::parse(&content, format)
            .with_context(|| format!("failed to parse configuration file '{}'", path.display()))
    }

    /// Loads the base file and its environment overlay relative to the
    /// current directory.
    pub fn load(explicit: Option<&Path>, environment: &str) -> Result<Self> {
        Self::load_in(Path::new("."), explicit, environment)
    }

    /// Loads the base file and its environment overlay.
    ///
    /// An explicit base file must exist. Without one, `appsettings.toml`
    /// then `appsettings.json` are tried in `dir` and defaults are used when
    /// neither exists. The overlay is always optional.
    pub fn load_in(dir: &Path, explicit: Option<&Path>, environment: &str) -> Result<Self> {
        let base = match explicit {
            Some(path) => {
                let path = dir.join(path);
                if !path.is_file() {
                    bail!("configuration file '{}' not found", path.display());
                }
                Some(path)
            }
            None => [ConfigFormat::Toml, ConfigFormat::Json]
                .into_iter()
                .map(|format| dir.join(format!("{DEFAULT_CONFIG_STEM}.{}", format.extension())))
                .find(|path| path.is_file()),
        };

        let Some(base) = base else {
            debug!("no configuration file found; using defaults");
            return Ok(Self::default());
        };

        debug!(path = %base.display(), "loading configuration");
        let mut config = Self::from_file(&base)?;

        if let Some(overlay) = environment_overlay(&base, environment) {
            if overlay.is_file() {
                debug!(
                    path = %overlay.display(),
                    environment,
                    "applying environment configuration"
                );
                config.repl_console.merge(Self::from_file(&overlay)?.repl_console);
            }
        }

        Ok(config)
    }

    /// Applies command-line and environment-variable overrides.
    pub fn apply_args(&mut self, args: &CliArgs) {
        let section = &mut self.repl_console;
        if let Some(app_name) = &args.app_name {
            section.app_name = Some(app_name.clone());
        }
        if let Some(prompt) = &args.prompt {
            section.prompt = Some(prompt.clone());
        }
        if !args.command_sources.is_empty() {
            section.command_sources = Some(args.command_sources.clone());
        }
    }

    /// Resolves runtime settings, filling gaps with defaults.
    pub fn into_settings(self, environment: &str, default_version: &str) -> AppSettings {
        let section = self.repl_console;
        let mut settings = match section.app_name {
            Some(name) => AppSettings::new(name),
            None => AppSettings::default(),
        }
        .with_environment(environment)
        .with_version(section.app_version.as_deref().unwrap_or(default_version));

        if let Some(title) = section.console_title {
            settings = settings.with_console_title(title);
        }
        if let Some(prompt) = section.prompt {
            settings = settings.with_prompt(prompt);
        }
        if let Some(sources) = section.command_sources {
            settings = settings.with_command_sources(sources);
        }
        settings
    }
}

/// `dir/name.ext` becomes `dir/name.{environment}.ext`.
fn environment_overlay(base: &Path, environment: &str) -> Option<PathBuf> {
    if environment.is_empty() {
        return None;
    }
    let stem = base.file_stem()?.to_str()?;
    let ext = base.extension()?.to_str()?;
    Some(base.with_file_name(format!("{stem}.{environment}.{ext}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use tempfile::TempDir;

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn parses_toml_section() {
        let config = ConsoleConfig::parse(
            r#"
            [ReplConsole]
            AppName = "Shell"
            Prompt = "$ "
            CommandSources = ["repl-custom-commands"]
            "#,
            ConfigFormat::Toml,
        )
        .unwrap();

        assert_eq!(config.repl_console.app_name.as_deref(), Some("Shell"));
        assert_eq!(config.repl_console.prompt.as_deref(), Some("$ "));
        assert_eq!(
            config.repl_console.command_sources,
            Some(vec!["repl-custom-commands".to_string()])
        );
        assert_eq!(config.repl_console.app_version, None);
    }

    #[test]
    fn parses_json_section() {
        let config = ConsoleConfig::parse(
            r#"{ "ReplConsole": { "AppVersion": "2.0", "ConsoleTitle": "My Shell" } }"#,
            ConfigFormat::Json,
        )
        .unwrap();

        assert_eq!(config.repl_console.app_version.as_deref(), Some("2.0"));
        assert_eq!(config.repl_console.console_title.as_deref(), Some("My Shell"));
    }

    #[test]
    fn missing_section_yields_defaults() {
        let config = ConsoleConfig::parse("", ConfigFormat::Toml).unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn unknown_extension_is_rejected() {
        assert!(ConfigFormat::from_path(Path::new("settings.yaml")).is_err());
        assert_eq!(
            ConfigFormat::from_path(Path::new("settings.JSON")).unwrap(),
            ConfigFormat::Json
        );
    }

    #[test]
    fn no_files_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let config = ConsoleConfig::load_in(dir.path(), None, "Production").unwrap();
        assert_eq!(config, ConsoleConfig::default());
    }

    #[test]
    fn explicit_file_must_exist() {
        let dir = TempDir::new().unwrap();
        let err = ConsoleConfig::load_in(dir.path(), Some(Path::new("missing.toml")), "Production")
            .unwrap_err();
        assert!(err.to_string().contains("not found"));
    }

    #[test]
    fn environment_file_overlays_base() {
        let dir = TempDir::new().unwrap();
        write(
            &dir,
            "appsettings.toml",
            "[ReplConsole]\nAppName = \"Base\"\nPrompt = \"base> \"\n",
        );
        write(
            &dir,
            "appsettings.Development.toml",
            "[ReplConsole]\nPrompt = \"dev> \"\n",
        );

        let dev = ConsoleConfig::load_in(dir.path(), None, "Development").unwrap();
        assert_eq!(dev.repl_console.app_name.as_deref(), Some("Base"));
        assert_eq!(dev.repl_console.prompt.as_deref(), Some("dev> "));

        let prod = ConsoleConfig::load_in(dir.path(), None, "Production").unwrap();
        assert_eq!(prod.repl_console.prompt.as_deref(), Some("base> "));
    }

    #[test]
    fn json_base_is_found_when_toml_is_absent() {
        let dir = TempDir::new().unwrap();
        write(&dir, "appsettings.json", r#"{ "ReplConsole": { "AppName": "Json" } }"#);

        let config = ConsoleConfig::load_in(dir.path(), None, "Production").unwrap();
        assert_eq!(config.repl_console.app_name.as_deref(), Some("Json"));
    }

    #[test]
    fn invalid_file_reports_path() {
        let dir = TempDir::new().unwrap();
        write(&dir, "appsettings.toml", "[ReplConsole\n");

        let err = ConsoleConfig::load_in(dir.path(), None, "Production").unwrap_err();
        assert!(format!("{err:#}").contains("appsettings.toml"));
    }

    #[test]
    fn command_line_overrides_files() {
        let mut config = ConsoleConfig::parse(
            "[ReplConsole]\nAppName = \"File\"\nPrompt = \"file> \"\nCommandSources = [\"a\"]\n",
            ConfigFormat::Toml,
        )
        .unwrap();
        let args = CliArgs::parse_from([
            "repl-console",
            "--prompt",
            "cli> ",
            "--command-source",
            "b",
        ]);

        config.apply_args(&args);

        assert_eq!(config.repl_console.app_name.as_deref(), Some("File"));
        assert_eq!(config.repl_console.prompt.as_deref(), Some("cli> "));
        assert_eq!(config.repl_console.command_sources, Some(vec!["b".to_string()]));
    }

    #[test]
    fn settings_fall_back_to_defaults() {
        let settings = ConsoleConfig::default().into_settings("Production", "0.4.0");

        assert_eq!(settings.app_name(), "ReplConsole");
        assert_eq!(settings.app_version(), "0.4.0");
        assert_eq!(settings.console_title(), "ReplConsole 0.4.0");
        assert_eq!(settings.prompt(), "> ");
        assert!(settings.command_sources().is_empty());
    }

    #[test]
    fn settings_use_configured_values() {
        let config = ConsoleConfig {
            repl_console: ConsoleSection {
                app_name: Some("Shell".into()),
                app_version: Some("9.9".into()),
                console_title: Some("Title".into()),
                prompt: Some(">> ".into()),
                command_sources: Some(vec!["repl-custom-commands".into()]),
            },
        };

        let settings = config.into_settings("Staging", "0.4.0");

        assert_eq!(settings.environment(), "Staging");
        assert_eq!(settings.app_name(), "Shell");
        assert_eq!(settings.app_version(), "9.9");
        assert_eq!(settings.console_title(), "Title");
        assert_eq!(settings.prompt(), ">> ");
        assert_eq!(settings.command_sources(), ["repl-custom-commands".to_string()]);
    }

    #[test]
    fn overlay_path_keeps_extension() {
        assert_eq!(
            environment_overlay(Path::new("/etc/shell.json"), "Development"),
            Some(PathBuf::from("/etc/shell.Development.json"))
        );
        assert_eq!(environment_overlay(Path::new("appsettings.toml"), ""), None);
    }
}
