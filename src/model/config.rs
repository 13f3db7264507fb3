use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, bail};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum TlsBackend {
    Rustls,
    NativeTls,
}

impl Default for TlsBackend {
    fn default() -> Self {
        Self::Rustls
    }
}

/// Verification target and HTTP settings
///
/// Every field has a default. Without `--config` the defaults are used as is:
/// team `Geeks` of organization `RealGeeks` on api.github.com.
/// The access token is never part of this file.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Config {
    /// Organization login the team must belong to
    #[serde(default = "default_organization")]
    pub organization: String,

    /// Team display name
    #[serde(default = "default_team")]
    pub team: String,

    /// GitHub REST API base URL (without trailing slash)
    #[serde(default = "default_api_base_url")]
    pub api_base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    #[serde(default = "default_tls_backend")]
    pub tls_backend: TlsBackend,

    /// HTTP proxy URL (optional)
    /// Supported formats: http://host:port, https://host:port, socks5://host:port
    #[serde(default)]
    pub proxy_url: Option<String>,

    /// Proxy authentication username (optional)
    #[serde(default)]
    pub proxy_username: Option<String>,

    /// Proxy authentication password (optional)
    #[serde(default)]
    pub proxy_password: Option<String>,

    /// Config file path (runtime metadata, not read from JSON)
    #[serde(skip)]
    pub(crate) config_path: Option<PathBuf>,
}

fn default_organization() -> String {
    "RealGeeks".to_string()
}

fn default_team() -> String {
    "Geeks".to_string()
}

fn default_api_base_url() -> String {
    "https://api.github.com".to_string()
}

fn default_timeout_secs() -> u64 {
    30
}

fn default_tls_backend() -> TlsBackend {
    TlsBackend::Rustls
}

impl Default for Config {
    fn default() -> Self {
        Self {
            organization: default_organization(),
            team: default_team(),
            api_base_url: default_api_base_url(),
            timeout_secs: default_timeout_secs(),
            tls_backend: default_tls_backend(),
            proxy_url: None,
            proxy_username: None,
            proxy_password: None,
            config_path: None,
        }
    }
}

impl Config {
    /// Load configuration from an explicitly given file
    ///
    /// The file must exist and hold a JSON object; missing keys take their
    /// defaults.
    pub fn load<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        let value: serde_json::Value = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        if !value.is_object() {
            bail!(
                "Failed to parse config file: {}: expected a JSON object",
                path.display()
            );
        }

        let mut config: Config = serde_json::from_value(value)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;
        config
            .validate()
            .with_context(|| format!("Invalid config file: {}", path.display()))?;
        config.config_path = Some(path.to_path_buf());
        Ok(config)
    }

    /// Check values that serde cannot
    fn validate(&self) -> anyhow::Result<()> {
        let url = reqwest::Url::parse(&self.api_base_url)
            .with_context(|| format!("apiBaseUrl is not a URL: {}", self.api_base_url))?;
        if !matches!(url.scheme(), "http" | "https") {
            bail!("apiBaseUrl must use http or https: {}", self.api_base_url);
        }
        Ok(())
    }

    /// Get config file path (if available)
    pub fn config_path(&self) -> Option<&Path> {
        self.config_path.as_deref()
    }

    /// Team list endpoint of the authenticated user
    pub fn user_teams_url(&self) -> String {
        format!("{}/user/teams", self.api_base_url.trim_end_matches('/'))
    }
}
