/*
[INPUT]:  Optional YAML configuration file and MINITASKS_* environment variables
[OUTPUT]: Parsed synchronizer configuration
[POS]:    Configuration layer - remote service location and timeouts
[UPDATE]: When adding new configuration options
*/

use anyhow::{Context, Result};
use minitasks_adapter::{ClientConfig, DEFAULT_BASE_URL};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Prefix of environment variables that override file settings
pub const ENV_PREFIX: &str = "MINITASKS";

/// Top-level configuration for the task synchronizer
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SyncConfig {
    /// Base URL of the task service, including any path prefix
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    /// Connection establishment timeout in seconds
    #[serde(default = "default_connect_timeout_secs")]
    pub connect_timeout_secs: u64,
}

impl Default for SyncConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
            connect_timeout_secs: default_connect_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_connect_timeout_secs() -> u64 {
    10
}

impl SyncConfig {
    /// Load configuration.
    ///
    /// An explicit `path` must exist. Without one, the per-user file
    /// (`<config dir>/minitasks/config.yaml`) is read if present. Environment
    /// variables such as `MINITASKS_BASE_URL` override either.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        Self::load_with_env(path, None)
    }

    fn load_with_env(
        path: Option<&Path>,
        env: Option<::config::Map<String, String>>,
    ) -> Result<Self> {
        let mut builder = ::config::Config::builder();

        match path {
            Some(path) => {
                builder = builder.add_source(::config::File::from(path).required(true));
            }
            None => {
                if let Some(user_path) = user_config_path() {
                    builder = builder.add_source(::config::File::from(user_path).required(false));
                }
            }
        }

        let environment = ::config::Environment::with_prefix(ENV_PREFIX)
            .try_parsing(true)
            .source(env);
        builder = builder.add_source(environment);

        let settings = builder.build().context("read configuration sources")?;
        settings
            .try_deserialize()
            .context("deserialize configuration")
    }

    /// HTTP client settings derived from this configuration
    pub fn client_config(&self) -> ClientConfig {
        ClientConfig {
            timeout: Duration::from_secs(self.timeout_secs),
            connect_timeout: Duration::from_secs(self.connect_timeout_secs),
        }
    }
}

fn user_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("minitasks").join("config.yaml"))
}
