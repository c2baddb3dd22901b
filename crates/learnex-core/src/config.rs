//! Application configuration management.
//!
//! Configuration is read from `~/.config/learnex/config.json` (or the
//! platform equivalent) when present. It is never written back; Learnex keeps
//! no state between runs.

use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Application name used for config/cache directory paths
pub const APP_NAME: &str = "learnex";

/// Config file name
const CONFIG_FILE: &str = "config.json";

/// Environment variable that prefills the sign-in email
pub const EMAIL_ENV_VAR: &str = "LEARNEX_EMAIL";

/// Simulated identity provider latency, in milliseconds
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Latency {
    pub login_ms: u64,
    pub federated_ms: u64,
    pub register_ms: u64,
    pub logout_ms: u64,
}

impl Default for Latency {
    fn default() -> Self {
        Self {
            login_ms: 1000,
            federated_ms: 1500,
            register_ms: 1200,
            logout_ms: 500,
        }
    }
}

impl Latency {
    /// No artificial delay at all
    pub fn none() -> Self {
        Self {
            login_ms: 0,
            federated_ms: 0,
            register_ms: 0,
            logout_ms: 0,
        }
    }

    pub fn login(&self) -> Duration {
        Duration::from_millis(self.login_ms)
    }

    pub fn federated(&self) -> Duration {
        Duration::from_millis(self.federated_ms)
    }

    pub fn register(&self) -> Duration {
        Duration::from_millis(self.register_ms)
    }

    pub fn logout(&self) -> Duration {
        Duration::from_millis(self.logout_ms)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub latency: Latency,
    /// Screen shown right after onboarding, e.g. "progress"
    pub default_screen: Option<String>,
    /// Email prefilled on the sign-in form
    pub email: Option<String>,
}

impl Config {
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        let mut config = if path.exists() {
            Self::from_file(&path)?
        } else {
            Self::default()
        };
        config.apply_env();
        Ok(config)
    }

    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;
        Self::from_json(&contents)
    }

    pub fn from_json(contents: &str) -> Result<Self> {
        serde_json::from_str(contents).context("Failed to parse config file")
    }

    /// Environment overrides win over the file
    fn apply_env(&mut self) {
        if let Ok(email) = std::env::var(EMAIL_ENV_VAR) {
            if !email.trim().is_empty() {
                self.email = Some(email.trim().to_string());
            }
        }
    }

    fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find config directory"))?;
        Ok(config_dir.join(APP_NAME).join(CONFIG_FILE))
    }

    /// Directory for the log file
    pub fn cache_dir() -> Result<PathBuf> {
        let cache_dir = dirs::cache_dir()
            .ok_or_else(|| anyhow::anyhow!("Could not find cache directory"))?;
        Ok(cache_dir.join(APP_NAME))
    }
}
