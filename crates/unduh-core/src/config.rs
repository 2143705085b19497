use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Browser-like user agent; tikwm rejects requests without one.
pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/104.0.0.0 Safari/537.36";

/// HTTP client settings (`[http]` in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    pub user_agent: String,
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request.
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout_secs: 15,
            timeout_secs: 30,
        }
    }
}

/// TikTok upstream (`[tiktok]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TikTokConfig {
    /// Endpoint receiving the form POST.
    pub api_url: String,
    /// Origin prepended to host-relative `play`/`music` paths.
    pub origin: String,
}

impl Default for TikTokConfig {
    fn default() -> Self {
        Self {
            api_url: "https://www.tikwm.com/api/".to_string(),
            origin: "https://www.tikwm.com".to_string(),
        }
    }
}

/// Facebook upstream (`[facebook]`).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FacebookConfig {
    pub process_url: String,
    /// Value of the `locale` form field.
    pub locale: String,
}

impl Default for FacebookConfig {
    fn default() -> Self {
        Self {
            process_url: "https://getmyfb.com/process".to_string(),
            locale: "id".to_string(),
        }
    }
}

/// Global configuration loaded from `~/.config/unduh/config.toml`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct UnduhConfig {
    pub http: HttpConfig,
    pub tiktok: TikTokConfig,
    pub facebook: FacebookConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("unduh")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UnduhConfig> {
    let path = config_path()?;
    if !path.exists() {
        let default_cfg = UnduhConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    load_from(&path)
}

/// Load configuration from an explicit path. Missing keys take their defaults.
pub fn load_from(path: &Path) -> Result<UnduhConfig> {
    let data = fs::read_to_string(path)
        .with_context(|| format!("read config: {}", path.display()))?;
    let cfg: UnduhConfig =
        toml::from_str(&data).with_context(|| format!("parse config: {}", path.display()))?;
    Ok(cfg)
}
