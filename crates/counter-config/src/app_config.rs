//! Application configuration
//!
//! Configuration loaded from .counter-tca.toml file.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Application configuration loaded from .counter-tca.toml
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Base URL of the numbers fact service; the count is appended as a path segment
    #[serde(default = "default_fact_base_url")]
    pub fact_base_url: String,

    /// Simulated latency before a fact is fetched, in milliseconds
    #[serde(default = "default_fact_delay_ms")]
    pub fact_delay_ms: u64,
}

fn default_fact_base_url() -> String {
    "http://numbersapi.com".to_string()
}

fn default_fact_delay_ms() -> u64 {
    1000
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            fact_base_url: default_fact_base_url(),
            fact_delay_ms: default_fact_delay_ms(),
        }
    }
}

impl AppConfig {
    /// Load config from CWD first, then home directory, or use defaults
    pub fn load() -> Self {
        match crate::load_config_file() {
            Some((path, content)) => {
                log::info!("Reading app config from {}", path.display());
                Self::from_content(&content)
            }
            None => {
                log::debug!("Using default app config");
                Self::default()
            }
        }
    }

    /// Parse config file content, falling back to defaults when it is malformed
    pub fn from_content(content: &str) -> Self {
        match toml::from_str(content) {
            Ok(config) => {
                log::debug!("Parsed app config: {:?}", config);
                config
            }
            Err(e) => {
                log::warn!("Failed to parse config file: {}", e);
                Self::default()
            }
        }
    }

    pub fn fact_delay(&self) -> Duration {
        Duration::from_millis(self.fact_delay_ms)
    }
}
