//! Global eventdesk configuration.

use std::path::{Path, PathBuf};

use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

use crate::calendar::WeekStart;
use crate::error::{EventDeskError, EventDeskResult};

static DEFAULT_DATA_FILE: &str = "~/.eventdesk/data.json";
static DEFAULT_MODEL: &str = "gemini-2.5-flash";
static DEFAULT_BASE_URL: &str = "https://generativelanguage.googleapis.com";
static DEFAULT_API_KEY_ENV: &str = "API_KEY";

fn default_data_file() -> PathBuf {
    PathBuf::from(DEFAULT_DATA_FILE)
}

fn default_model() -> String {
    DEFAULT_MODEL.to_string()
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_api_key_env() -> String {
    DEFAULT_API_KEY_ENV.to_string()
}

/// Configuration at ~/.config/eventdesk/config.toml
///
/// Any key can be overridden from the environment with an `EVENTDESK_`
/// prefix, e.g. `EVENTDESK_WEEK_START=monday`. Nested keys use `__`, e.g.
/// `EVENTDESK_IDEAS__MODEL=gemini-pro`.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct EventDeskConfig {
    #[serde(default = "default_data_file")]
    pub data_file: PathBuf,

    #[serde(default)]
    pub week_start: WeekStart,

    #[serde(default)]
    pub ideas: IdeasConfig,
}

/// Settings for the generative-text idea service.
#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct IdeasConfig {
    #[serde(default = "default_model")]
    pub model: String,

    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Name of the environment variable holding the service credential
    #[serde(default = "default_api_key_env")]
    pub api_key_env: String,
}

impl Default for IdeasConfig {
    fn default() -> Self {
        IdeasConfig {
            model: default_model(),
            base_url: default_base_url(),
            api_key_env: default_api_key_env(),
        }
    }
}

impl Default for EventDeskConfig {
    fn default() -> Self {
        EventDeskConfig {
            data_file: default_data_file(),
            week_start: WeekStart::default(),
            ideas: IdeasConfig::default(),
        }
    }
}

impl IdeasConfig {
    /// The credential, if set and non-blank.
    pub fn api_key(&self) -> Option<String> {
        std::env::var(&self.api_key_env)
            .ok()
            .map(|key| key.trim().to_string())
            .filter(|key| !key.is_empty())
    }
}

impl EventDeskConfig {
    pub fn config_path() -> EventDeskResult<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| EventDeskError::Config("Could not determine config directory".into()))?
            .join("eventdesk");

        Ok(config_dir.join("config.toml"))
    }

    /// Load from the default path, creating a commented-out file if missing.
    pub fn load() -> EventDeskResult<Self> {
        let config_path = Self::config_path()?;

        if !config_path.exists() {
            Self::create_default_config(&config_path)?;
        }

        Self::load_from(&config_path)
    }

    pub fn load_from(path: &Path) -> EventDeskResult<Self> {
        Self::load_with_env(path, Self::environment())
    }

    fn environment() -> Environment {
        Environment::with_prefix("EVENTDESK")
            .prefix_separator("_")
            .separator("__")
    }

    fn load_with_env(path: &Path, env: Environment) -> EventDeskResult<Self> {
        Config::builder()
            .add_source(File::from(path).required(false))
            .add_source(env)
            .build()
            .map_err(|e| EventDeskError::Config(e.to_string()))?
            .try_deserialize()
            .map_err(|e| EventDeskError::Config(e.to_string()))
    }

    /// `data_file` with `~` expanded.
    pub fn data_path(&self) -> PathBuf {
        PathBuf::from(shellexpand::tilde(&self.data_file.to_string_lossy()).into_owned())
    }

    /// Create a default config file with all options commented out.
    pub fn create_default_config(path: &Path) -> EventDeskResult<()> {
        let contents = format!(
            "\
# eventdesk configuration

# Where bookings and registrations are stored:
# data_file = \"{DEFAULT_DATA_FILE}\"

# First column of the calendar (\"sunday\" or \"monday\"):
# week_start = \"sunday\"

# [ideas]
# model = \"{DEFAULT_MODEL}\"
# base_url = \"{DEFAULT_BASE_URL}\"
# Environment variable holding the API key:
# api_key_env = \"{DEFAULT_API_KEY_ENV}\"
"
        );

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent).map_err(|e| {
                EventDeskError::Config(format!("Could not create config directory: {e}"))
            })?;
        }

        std::fs::write(path, contents)
            .map_err(|e| EventDeskError::Config(format!("Could not write config file: {e}")))?;

        Ok(())
    }

    /// Render the effective configuration as TOML.
    pub fn to_toml(&self) -> EventDeskResult<String> {
        toml::to_string_pretty(self).map_err(|e| EventDeskError::Config(e.to_string()))
    }
}
