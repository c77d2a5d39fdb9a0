use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crate::fs::atomic_write;
use crate::paths;

/// Default time-to-live for cached responses: 7 days.
pub const DEFAULT_CACHE_TTL: i64 = 604_800;

/// Default number of lines kept in the line editor history.
pub const DEFAULT_CMD_HISTORY_LIMIT: i64 = 100;

/// Names accepted by [`Config::set`], in display order.
pub const SETTING_NAMES: &[&str] = &["api_key", "cache_ttl", "cmd_history_limit"];

/// Settings stored in `config.toml`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// PONS API secret sent with every dictionary lookup.
    pub api_key: String,
    /// Cache time-to-live in seconds. Zero or negative disables the cache.
    pub cache_ttl: i64,
    /// Maximum number of entries kept in the command history file.
    /// Values below one keep a single entry.
    pub cmd_history_limit: i64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_key: String::new(),
            cache_ttl: DEFAULT_CACHE_TTL,
            cmd_history_limit: DEFAULT_CMD_HISTORY_LIMIT,
        }
    }
}

impl Config {
    /// Cache TTL as a duration, clamped at zero.
    pub fn cache_ttl(&self) -> Duration {
        Duration::from_secs(u64::try_from(self.cache_ttl).unwrap_or(0))
    }

    /// Command history capacity, at least one entry.
    pub fn cmd_history_limit(&self) -> usize {
        usize::try_from(self.cmd_history_limit).unwrap_or(0).max(1)
    }

    /// Updates one setting from its textual value.
    pub fn set(&mut self, name: &str, value: &str) -> Result<()> {
        match name {
            "api_key" => self.api_key = value.to_string(),
            "cache_ttl" => {
                self.cache_ttl = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid value for cache_ttl: {value}"))?;
            }
            "cmd_history_limit" => {
                self.cmd_history_limit = value
                    .parse()
                    .map_err(|_| anyhow::anyhow!("invalid value for cmd_history_limit: {value}"))?;
            }
            _ => bail!("unknown variable: {name}"),
        }
        Ok(())
    }

    /// Returns the textual value of a setting, as shown by `.set`.
    pub fn get(&self, name: &str) -> Option<String> {
        match name {
            "api_key" => Some(self.api_key.clone()),
            "cache_ttl" => Some(self.cache_ttl.to_string()),
            "cmd_history_limit" => Some(self.cmd_history_limit.to_string()),
            _ => None,
        }
    }
}

/// On-disk shape of `config.toml`; every key may be absent.
#[derive(Debug, Default, Deserialize)]
struct ConfigFile {
    api_key: Option<String>,
    cache_ttl: Option<i64>,
    cmd_history_limit: Option<i64>,
}

impl ConfigFile {
    /// Fills absent keys with defaults. The flag is `true` when any key was absent.
    fn resolve(self) -> (Config, bool) {
        let defaults = Config::default();
        let incomplete =
            self.api_key.is_none() || self.cache_ttl.is_none() || self.cmd_history_limit.is_none();

        let config = Config {
            api_key: self.api_key.unwrap_or(defaults.api_key),
            cache_ttl: self.cache_ttl.unwrap_or(defaults.cache_ttl),
            cmd_history_limit: self
                .cmd_history_limit
                .unwrap_or(defaults.cmd_history_limit),
        };

        (config, incomplete)
    }
}

/// Manages loading and saving the configuration file.
pub struct ConfigManager {
    config_path: PathBuf,
}

impl ConfigManager {
    /// Creates a new config manager.
    ///
    /// Configuration is stored at `$XDG_CONFIG_HOME/pons-cli/config.toml`
    /// or `~/.config/pons-cli/config.toml` if `XDG_CONFIG_HOME` is not set.
    pub fn new() -> Result<Self> {
        Ok(Self {
            config_path: paths::config_dir()?.join("config.toml"),
        })
    }

    /// Creates a config manager for an explicit file path.
    pub const fn with_path(config_path: PathBuf) -> Self {
        Self { config_path }
    }

    pub const fn config_path(&self) -> &PathBuf {
        &self.config_path
    }

    /// Loads the configuration, creating or completing the file when needed.
    ///
    /// A missing file is created with defaults. Missing keys are filled with
    /// defaults and written back. An unreadable or malformed file is an error.
    pub fn load_or_init(&self) -> Result<Config> {
        let file = match fs::read_to_string(&self.config_path) {
            Ok(contents) => toml::from_str::<ConfigFile>(&contents).with_context(|| {
                format!(
                    "Failed to parse config file: {}",
                    self.config_path.display()
                )
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => ConfigFile::default(),
            Err(e) => {
                return Err(e).with_context(|| {
                    format!("Failed to read config file: {}", self.config_path.display())
                });
            }
        };

        let (config, incomplete) = file.resolve();
        if incomplete {
            self.save(&config)?;
        }

        Ok(config)
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        if let Some(parent) = self.config_path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let contents = toml::to_string_pretty(config).context("Failed to serialize config")?;

        atomic_write(&self.config_path, contents.as_bytes()).with_context(|| {
            format!(
                "Failed to write config file: {}",
                self.config_path.display()
            )
        })
    }
}
