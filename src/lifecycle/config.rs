//! Runtime settings: timer delay, channel sizes and an optional orders seed file.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;
use thiserror::Error;

/// Environment variable naming a TOML file that replaces the embedded default.
pub const CONFIG_ENV: &str = "PARTNER_OPS_CONFIG";

/// Default configuration embedded in the binary.
const DEFAULT_CONFIG: &str = r#"
[board]
auto_advance_secs = 5
channel_buffer = 32

[resources]
channel_buffer = 32

[seed]
"#;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("Failed to parse config: {0}")]
    Parse(#[from] toml::de::Error),
    /// Parsed, but a value is out of range.
    #[error("Invalid config: {0} must be greater than zero")]
    Invalid(&'static str),
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub board: BoardConfig,
    pub resources: ResourceConfig,
    pub seed: SeedConfig,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Delay between pickup and automatic delivery.
    pub auto_advance_secs: u64,
    pub channel_buffer: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            auto_advance_secs: 5,
            channel_buffer: 32,
        }
    }
}

impl BoardConfig {
    pub fn auto_advance(&self) -> Duration {
        Duration::from_secs(self.auto_advance_secs)
    }
}

/// Settings shared by the review, inventory and category actors.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ResourceConfig {
    pub channel_buffer: usize,
}

impl Default for ResourceConfig {
    fn default() -> Self {
        Self { channel_buffer: 32 }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct SeedConfig {
    /// JSON array of orders. Built-in fixtures are used when unset.
    pub orders_path: Option<PathBuf>,
}

impl DashboardConfig {
    /// Parses and validates.
    pub fn from_toml(contents: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(contents)?;
        config.validate()?;
        Ok(config)
    }

    /// Channels need room for at least one request, and a zero delay would deliver
    /// orders the moment they are picked up.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.board.channel_buffer == 0 {
            return Err(ConfigError::Invalid("board.channel_buffer"));
        }
        if self.board.auto_advance_secs == 0 {
            return Err(ConfigError::Invalid("board.auto_advance_secs"));
        }
        if self.resources.channel_buffer == 0 {
            return Err(ConfigError::Invalid("resources.channel_buffer"));
        }
        Ok(())
    }

    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&contents)
    }
}

/// Loads the file named by `PARTNER_OPS_CONFIG`, or the embedded default when unset.
pub fn load_config() -> Result<DashboardConfig, ConfigError> {
    match std::env::var_os(CONFIG_ENV) {
        Some(path) => {
            let path = PathBuf::from(path);
            tracing::info!("Loading config from: {}", path.display());
            DashboardConfig::from_file(&path)
        }
        None => {
            tracing::info!("Using default embedded configuration");
            DashboardConfig::from_toml(DEFAULT_CONFIG)
        }
    }
}
