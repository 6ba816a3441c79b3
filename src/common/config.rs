//! Configuration file handling

use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::time::Duration;

use super::paths::config_path;
use super::Result;

/// Main configuration structure
#[derive(Debug, Deserialize, Default, Clone)]
pub struct Config {
    /// Pet-store API settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Scenario runner settings
    #[serde(default)]
    pub runner: RunnerConfig,
}

/// Where the pet-store API lives and how to talk to it
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base endpoint, without a trailing slash
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Resource path for pet entities
    #[serde(default = "default_pet_endpoint")]
    pub pet_endpoint: String,

    /// Headers sent with every request
    #[serde(default = "default_headers")]
    pub headers: BTreeMap<String, String>,

    /// Transport-level timeout for a single HTTP request
    #[serde(default = "default_request_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            pet_endpoint: default_pet_endpoint(),
            headers: default_headers(),
            request_timeout_secs: default_request_timeout(),
        }
    }
}

impl ApiConfig {
    /// Default settings pointed at another base URL
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            ..Self::default()
        }
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

fn default_base_url() -> String {
    "https://petstore.swagger.io/v2".to_string()
}

fn default_pet_endpoint() -> String {
    "/pet".to_string()
}

fn default_headers() -> BTreeMap<String, String> {
    BTreeMap::from([
        ("Accept".to_string(), "application/json".to_string()),
        ("Content-Type".to_string(), "application/json".to_string()),
    ])
}

fn default_request_timeout() -> u64 {
    10
}

/// Scenario runner settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct RunnerConfig {
    /// Upper bound on a single step, including all of its requests
    #[serde(default = "default_step_timeout")]
    pub step_timeout_secs: u64,
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self {
            step_timeout_secs: default_step_timeout(),
        }
    }
}

impl RunnerConfig {
    pub fn step_timeout(&self) -> Duration {
        Duration::from_secs(self.step_timeout_secs)
    }
}

fn default_step_timeout() -> u64 {
    30
}

impl Config {
    /// Load configuration from the default config file
    ///
    /// Returns default configuration if file doesn't exist
    pub fn load() -> Result<Self> {
        if let Some(path) = config_path() {
            if path.exists() {
                return Self::load_from(&path);
            }
        }
        Ok(Self::default())
    }

    /// Load configuration from an explicit file, which must exist
    pub fn load_from(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| super::Error::FileRead {
            path: path.display().to_string(),
            error: e.to_string(),
        })?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(content).map_err(|e| super::Error::ConfigParse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides, then validate the result again
    pub fn with_overrides(
        mut self,
        base_url: Option<String>,
        step_timeout_secs: Option<u64>,
    ) -> Result<Self> {
        if let Some(base_url) = base_url {
            self.api.base_url = base_url;
        }
        if let Some(secs) = step_timeout_secs {
            self.runner.step_timeout_secs = secs;
        }
        self.validate()?;
        Ok(self)
    }

    fn validate(&self) -> Result<()> {
        if self.api.base_url.trim().is_empty() {
            return Err(super::Error::Config("api.base_url must not be empty".to_string()));
        }
        if !self.api.pet_endpoint.starts_with('/') {
            return Err(super::Error::Config(format!(
                "api.pet_endpoint must start with '/', got '{}'",
                self.api.pet_endpoint
            )));
        }
        if self.api.request_timeout_secs == 0 {
            return Err(super::Error::Config(
                "api.request_timeout_secs must be greater than zero".to_string(),
            ));
        }
        if self.runner.step_timeout_secs == 0 {
            return Err(super::Error::Config(
                "runner.step_timeout_secs must be greater than zero".to_string(),
            ));
        }
        Ok(())
    }
}
