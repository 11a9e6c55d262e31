//! Profile configuration for taskboard tools.
//!
//! A TOML file of named profiles (API base, remembered user), layered
//! with `TASKBOARD_` environment variables, and translated into
//! `taskboard_core::ClientConfig`.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use taskboard_core::{ClientConfig, UserId};

/// Environment variable that overrides the config file location.
pub const CONFIG_PATH_ENV: &str = "TASKBOARD_CONFIG";

pub const DEFAULT_PROFILE: &str = "default";
pub const DEFAULT_API_BASE: &str = "http://localhost:3000";

// ── Error ───────────────────────────────────────────────────────────

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid {field}: {reason}")]
    Validation { field: String, reason: String },

    #[error("profile '{name}' not found")]
    UnknownProfile { name: String },

    #[error("failed to serialize config: {0}")]
    Serialization(#[from] toml::ser::Error),

    #[error("config loading failed: {0}")]
    Figment(Box<figment::Error>),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<figment::Error> for ConfigError {
    fn from(err: figment::Error) -> Self {
        Self::Figment(Box::new(err))
    }
}

// ── TOML config structs ─────────────────────────────────────────────

/// Top-level configuration file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Config {
    pub default_profile: Option<String>,

    #[serde(default)]
    pub defaults: Defaults,

    #[serde(default)]
    pub profiles: BTreeMap<String, Profile>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            default_profile: Some(DEFAULT_PROFILE.into()),
            defaults: Defaults::default(),
            profiles: BTreeMap::new(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Defaults {
    #[serde(default = "default_output")]
    pub output: String,

    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout: u64,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            output: default_output(),
            timeout: default_timeout(),
        }
    }
}

fn default_output() -> String {
    "table".into()
}
fn default_timeout() -> u64 {
    30
}

/// A named API endpoint plus the user last used against it.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Profile {
    /// API base URL, e.g. "http://localhost:3000".
    #[serde(default = "default_api_base")]
    pub api_base: String,

    /// Override `defaults.timeout`.
    pub timeout: Option<u64>,

    pub user_id: Option<u64>,

    pub user_name: Option<String>,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            api_base: default_api_base(),
            timeout: None,
            user_id: None,
            user_name: None,
        }
    }
}

fn default_api_base() -> String {
    DEFAULT_API_BASE.into()
}

impl Profile {
    /// Remembered user, if both id and name are present.
    pub fn user(&self) -> Option<(UserId, &str)> {
        Some((UserId(self.user_id?), self.user_name.as_deref()?))
    }

    /// Build the runtime client config. Fails on an unparseable URL.
    pub fn to_client_config(&self, defaults: &Defaults) -> Result<ClientConfig, ConfigError> {
        let url: url::Url = self
            .api_base
            .parse()
            .map_err(|e| ConfigError::Validation {
                field: "api_base".into(),
                reason: format!("invalid URL '{}': {e}", self.api_base),
            })?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(ConfigError::Validation {
                field: "api_base".into(),
                reason: format!("unsupported scheme '{}'", url.scheme()),
            });
        }

        let timeout = Duration::from_secs(self.timeout.unwrap_or(defaults.timeout));
        Ok(ClientConfig::new(url).with_timeout(timeout))
    }
}

impl Config {
    /// Resolve which profile name to use: explicit, then the configured
    /// default, then `"default"`.
    pub fn profile_name<'a>(&'a self, explicit: Option<&'a str>) -> &'a str {
        explicit
            .or(self.default_profile.as_deref())
            .unwrap_or(DEFAULT_PROFILE)
    }

    /// Look up a profile. The implicit default profile always resolves,
    /// even when absent from the file.
    pub fn profile(&self, name: &str) -> Result<Profile, ConfigError> {
        match self.profiles.get(name) {
            Some(profile) => Ok(profile.clone()),
            None if name == DEFAULT_PROFILE => Ok(Profile::default()),
            None => Err(ConfigError::UnknownProfile { name: name.into() }),
        }
    }

    /// Record the current user on a profile, creating it if needed.
    pub fn remember_user(&mut self, profile: &str, user_id: UserId, user_name: &str) {
        let entry = self.profiles.entry(profile.to_owned()).or_default();
        entry.user_id = Some(user_id.get());
        entry.user_name = Some(user_name.to_owned());
    }
}

// ── Config file path ────────────────────────────────────────────────

/// Resolve the config file path: `$TASKBOARD_CONFIG`, else the platform
/// config directory.
pub fn config_path() -> PathBuf {
    if let Some(path) = std::env::var_os(CONFIG_PATH_ENV) {
        return PathBuf::from(path);
    }
    ProjectDirs::from("dev", "taskboard", "taskboard").map_or_else(
        || {
            let mut p = dirs_fallback();
            p.push("config.toml");
            p
        },
        |dirs| dirs.config_dir().join("config.toml"),
    )
}

fn dirs_fallback() -> PathBuf {
    let mut p = PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".into()));
    p.push(".config");
    p.push("taskboard");
    p
}

// ── Config loading ──────────────────────────────────────────────────

/// Load from the canonical path plus environment.
pub fn load_config() -> Result<Config, ConfigError> {
    load_config_from(&config_path())
}

/// Load from `path` plus environment. A missing file is not an error.
///
/// Environment keys use `__` for nesting:
/// `TASKBOARD_DEFAULTS__TIMEOUT=5`, `TASKBOARD_DEFAULT_PROFILE=work`.
pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    let figment = Figment::new()
        .merge(Serialized::defaults(Config::default()))
        .merge(Toml::file(path))
        .merge(Env::prefixed("TASKBOARD_").split("__").ignore(&["config"]));

    Ok(figment.extract()?)
}

/// Load config, falling back to defaults on any error.
pub fn load_config_or_default() -> Config {
    load_config().unwrap_or_default()
}

// ── Config saving ───────────────────────────────────────────────────

pub fn save_config(cfg: &Config) -> Result<PathBuf, ConfigError> {
    let path = config_path();
    save_config_to(&path, cfg)?;
    Ok(path)
}

pub fn save_config_to(path: &Path, cfg: &Config) -> Result<(), ConfigError> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let toml_str = toml::to_string_pretty(cfg)?;
    std::fs::write(path, toml_str)?;
    Ok(())
}
