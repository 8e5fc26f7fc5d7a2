use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use anyhow::{anyhow, Context};
use serde::Deserialize;

const DEFAULT_ENV: &str = "local";
const ENV_VAR_NAME: &str = "LIBRARY_ENV";
const CONFIG_DIR_ENV: &str = "LIBRARY_CONFIG_DIR";
const ENV_PREFIX: &str = "LIBRARY";

/// Deployment environment the application is running in.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Local,
    Staging,
    Production,
}

impl FromStr for Environment {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "local" => Ok(Self::Local),
            "staging" => Ok(Self::Staging),
            "production" => Ok(Self::Production),
            other => Err(anyhow!(
                "unsupported environment '{}'; expected local/staging/production",
                other
            )),
        }
    }
}

/// Top-level configuration structure loaded from layered sources.
#[derive(Debug, Clone, Deserialize, Default)]
pub struct Settings {
    #[serde(default)]
    pub environment: Environment,
    #[serde(default)]
    pub telemetry: TelemetrySettings,
    #[serde(default)]
    pub menu: MenuSettings,
}

impl Settings {
    /// Load configuration by layering `.env`, base file, and environment overlay.
    ///
    /// An explicit `config_dir` wins; otherwise `LIBRARY_CONFIG_DIR`, falling
    /// back to `./config`.
    pub fn load_from(config_dir: Option<&Path>) -> anyhow::Result<Self> {
        // Allow missing `.env` files without failing.
        let _ = dotenvy::dotenv();

        let environment = std::env::var(ENV_VAR_NAME).unwrap_or_else(|_| DEFAULT_ENV.to_string());
        let config_dir = match config_dir {
            Some(dir) => dir.to_path_buf(),
            None => default_config_dir()?,
        };

        let base_path = config_dir.join("base.toml");
        let environment_path = config_dir.join(format!("{}.toml", environment));

        let builder = config::Config::builder()
            .add_source(config::File::from(base_path).required(false))
            .add_source(config::File::from(environment_path).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            );

        let cfg = builder
            .build()
            .with_context(|| "failed to build configuration")?;

        let mut settings: Settings = cfg
            .try_deserialize()
            .with_context(|| "failed to deserialize configuration")?;

        settings.environment = environment.parse()?;
        settings.menu.validate()?;

        tracing::debug!(
            env = ?settings.environment,
            config_dir = %config_dir.display(),
            "settings loaded"
        );

        Ok(settings)
    }
}

fn default_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(dir) = std::env::var(CONFIG_DIR_ENV) {
        return Ok(PathBuf::from(dir));
    }
    let cwd = std::env::current_dir().with_context(|| "unable to resolve current directory")?;
    Ok(cwd.join("config"))
}

#[derive(Debug, Clone, Deserialize)]
pub struct TelemetrySettings {
    #[serde(default)]
    pub log_format: LogFormat,
    #[serde(default = "TelemetrySettings::default_filter")]
    pub filter: String,
}

impl TelemetrySettings {
    fn default_filter() -> String {
        // Keep the interactive screen free of routine events.
        "warn".to_string()
    }
}

impl Default for TelemetrySettings {
    fn default() -> Self {
        Self {
            log_format: LogFormat::Pretty,
            filter: Self::default_filter(),
        }
    }
}

#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl FromStr for LogFormat {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" => Ok(Self::Pretty),
            "json" => Ok(Self::Json),
            other => Err(anyhow!("unsupported log format '{}'; expected pretty/json", other)),
        }
    }
}

impl fmt::Display for LogFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pretty => f.write_str("pretty"),
            Self::Json => f.write_str("json"),
        }
    }
}

/// Interactive menu behaviour.
#[derive(Debug, Clone, Deserialize)]
pub struct MenuSettings {
    /// Input that aborts the current prompt sequence.
    #[serde(default = "MenuSettings::default_abort_sentinel")]
    pub abort_sentinel: String,
    /// Input that closes the session from the main menu.
    #[serde(default = "MenuSettings::default_exit_command")]
    pub exit_command: String,
    /// Width of the menu frame in columns.
    #[serde(default = "MenuSettings::default_width")]
    pub width: usize,
}

impl MenuSettings {
    fn default_abort_sentinel() -> String {
        "m".to_string()
    }

    fn default_exit_command() -> String {
        "q".to_string()
    }

    fn default_width() -> usize {
        40
    }

    fn validate(&self) -> anyhow::Result<()> {
        if self.abort_sentinel.trim().is_empty() {
            return Err(anyhow!("menu.abort_sentinel must not be empty"));
        }
        if self.exit_command.trim().is_empty() {
            return Err(anyhow!("menu.exit_command must not be empty"));
        }
        Ok(())
    }
}

impl Default for MenuSettings {
    fn default() -> Self {
        Self {
            abort_sentinel: Self::default_abort_sentinel(),
            exit_command: Self::default_exit_command(),
            width: Self::default_width(),
        }
    }
}
