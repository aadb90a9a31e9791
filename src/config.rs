use std::path::{Path, PathBuf};
use std::time::Duration;

use directories::ProjectDirs;
use serde::Deserialize;
use url::Url;

use crate::error::{LinearError, Result};
use crate::output::OutputFormat;

pub const DEFAULT_ENDPOINT: &str = "https://api.linear.app/graphql";
pub const DEFAULT_UPLOAD_HOST: &str = "https://uploads.linear.app/";
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;
pub const DEFAULT_PAGE_SIZE: u32 = 50;

const TOKEN_ENV: &str = "LINEAR_ACCESS_TOKEN";

#[derive(Deserialize, Debug, Clone)]
#[serde(default)]
pub struct Config {
    pub endpoint: String,
    pub timeout_secs: u64,
    pub page_size: u32,
    pub upload_host: String,
    pub format: OutputFormat,
    pub access_token: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            page_size: DEFAULT_PAGE_SIZE,
            upload_host: DEFAULT_UPLOAD_HOST.to_string(),
            format: OutputFormat::default(),
            access_token: None,
        }
    }
}

impl Config {
    /// Load from the default location, falling back to defaults when no file exists.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_path()?)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Config::default());
        }

        let contents = std::fs::read_to_string(path).map_err(|e| LinearError::ConfigRead {
            path: path.to_path_buf(),
            source: e,
        })?;

        toml::from_str(&contents).map_err(|e| LinearError::ConfigParse {
            path: path.to_path_buf(),
            source: e,
        })
    }

    pub fn config_path() -> Result<PathBuf> {
        ProjectDirs::from("", "", "linear-issues")
            .map(|dirs| dirs.config_dir().join("config.toml"))
            .ok_or(LinearError::NoConfigDir)
    }

    /// Get access token with env var taking precedence over config file
    pub fn access_token(&self) -> Result<String> {
        if let Ok(token) = std::env::var(TOKEN_ENV) {
            if !token.is_empty() {
                return Ok(token);
            }
        }

        self.access_token
            .clone()
            .filter(|t| !t.is_empty())
            .ok_or(LinearError::MissingAccessToken)
    }

    pub fn endpoint_url(&self) -> Result<Url> {
        Url::parse(&self.endpoint).map_err(|_| LinearError::InvalidUrl(self.endpoint.clone()))
    }

    pub fn upload_host_url(&self) -> Result<Url> {
        Url::parse(&self.upload_host).map_err(|_| LinearError::InvalidUrl(self.upload_host.clone()))
    }

    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}
