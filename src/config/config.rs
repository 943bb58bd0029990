use std::path::{Path, PathBuf};
use std::time::Duration;

use anyhow::{Context as _, Result};
use serde::{Deserialize, Serialize};
use url::Url;

use super::defaults::*;

/// Everything the update dialog needs from its host
///
/// The dialog never reads ambient state; a `Config` is handed to it on construction.
#[derive(Debug, Clone, Deserialize, Serialize, PartialEq)]
pub struct Config {
    /// Version of the running application, as `MAJOR.MINOR`
    #[serde(default = "default_current_version")]
    pub current_version: String,

    /// Endpoint serving the latest release as json
    #[serde(default = "default_release_url")]
    pub release_url: Url,

    /// How long to wait after the dialog opens before checking
    #[serde(default = "default_check_delay_ms")]
    pub check_delay_ms: u64,

    /// Optional request timeout, the transport default applies if unset
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request_timeout_secs: Option<u64>,

    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Where the rolling log file is written
    #[serde(default = "default_log_dir")]
    pub log_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            current_version: default_current_version(),
            release_url: default_release_url(),
            check_delay_ms: default_check_delay_ms(),
            request_timeout_secs: None,
            user_agent: default_user_agent(),
            log_dir: default_log_dir(),
        }
    }
}

impl Config {
    /// Loads the configuration from `path`
    ///
    /// A missing file yields the defaults, a file that does not parse is an error.
    pub async fn load(path: impl AsRef<Path>) -> Result<Config> {
        let path = path.as_ref();

        let file = match tokio::fs::read(path).await {
            Ok(file) => file,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => {
                tracing::debug!(path = %path.display(), "No config file found, using defaults");
                return Ok(Config::default());
            }
            Err(err) => {
                return Err(err)
                    .with_context(|| format!("Could not read config at {}", path.display()))
            }
        };

        Self::parse(std::str::from_utf8(&file)?)
    }

    pub fn parse(toml: &str) -> Result<Config> {
        toml::from_str(toml).context("Failed to parse configuration")
    }

    pub fn check_delay(&self) -> Duration {
        Duration::from_millis(self.check_delay_ms)
    }
}
