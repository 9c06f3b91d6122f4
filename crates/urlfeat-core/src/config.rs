use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::features::LivenessMode;

/// Page fetch parameters (`[fetch]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FetchConfig {
    /// Seconds allowed for the TCP/TLS connect phase.
    pub connect_timeout_secs: u64,
    /// Seconds allowed for the whole request, body included.
    pub timeout_secs: u64,
    /// Maximum redirects followed before giving up.
    pub max_redirections: u32,
    /// User-Agent header sent with the GET.
    pub user_agent: String,
    /// Abort the transfer once the body grows past this many bytes.
    pub max_body_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            connect_timeout_secs: 10,
            timeout_secs: 30,
            max_redirections: 10,
            user_agent: format!("urlfeat/{}", env!("CARGO_PKG_VERSION")),
            max_body_bytes: 8 * 1024 * 1024,
        }
    }
}

/// WHOIS lookup parameters (`[whois]` section in config.toml).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WhoisConfig {
    /// Root server queried first; referrals are followed from there.
    pub server: String,
    /// How many referral hops to follow (IANA -> registry -> registrar).
    pub follow: u16,
    /// Per-query timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for WhoisConfig {
    fn default() -> Self {
        Self {
            server: "whois.iana.org".to_string(),
            follow: 2,
            timeout_secs: 15,
        }
    }
}

/// Global configuration loaded from `~/.config/urlfeat/config.toml`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct UrlfeatConfig {
    /// How `urlIsLive` is derived. "legacy" (default) reproduces the
    /// always-false reference behavior; "status2xx" checks the status code.
    #[serde(default)]
    pub liveness: LivenessMode,
    #[serde(default)]
    pub fetch: FetchConfig,
    #[serde(default)]
    pub whois: WhoisConfig,
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("urlfeat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<UrlfeatConfig> {
    load_or_init_at(&config_path()?)
}

/// Same as `load_or_init` for an explicit path.
pub fn load_or_init_at(path: &Path) -> Result<UrlfeatConfig> {
    if !path.exists() {
        let default_cfg = UrlfeatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml).with_context(|| format!("write {}", path.display()))?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path).with_context(|| format!("read {}", path.display()))?;
    let cfg: UrlfeatConfig =
        toml::from_str(&data).with_context(|| format!("parse {}", path.display()))?;
    Ok(cfg)
}
