use serde::Deserialize;
use std::{error::Error, fs, time::Duration};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct CommonConfig {
    pub project_name: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct BackendConfig {
    pub server_address: String,
    pub log_level: String,
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            server_address: "127.0.0.1:8000".to_string(),
            log_level: "info".to_string(),
        }
    }
}

/// Settings for the ephemeral receipt store.
#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// How long a submitted receipt stays retrievable.
    #[serde(default = "default_receipt_ttl_secs")]
    pub receipt_ttl_secs: u64,
    /// Period of the background sweep that drops expired entries.
    #[serde(default = "default_cleanup_interval_secs")]
    pub cleanup_interval_secs: u64,
}

fn default_receipt_ttl_secs() -> u64 {
    60
}

fn default_cleanup_interval_secs() -> u64 {
    600
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            receipt_ttl_secs: default_receipt_ttl_secs(),
            cleanup_interval_secs: default_cleanup_interval_secs(),
        }
    }
}

impl StoreConfig {
    pub fn receipt_ttl(&self) -> Duration {
        Duration::from_secs(self.receipt_ttl_secs)
    }

    pub fn cleanup_interval(&self) -> Duration {
        Duration::from_secs(self.cleanup_interval_secs)
    }
}

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    pub common: CommonConfig,
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub store: StoreConfig,
}

impl Config {
    pub fn load(config_path: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let contents = fs::read_to_string(config_path)?;
        Self::from_yaml(&contents)
    }

    pub fn from_yaml(contents: &str) -> Result<Self, Box<dyn Error + Send + Sync>> {
        let config = serde_yml::from_str(contents)?;

        Ok(config)
    }
}
