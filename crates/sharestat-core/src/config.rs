use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::count_api;

/// Global configuration loaded from `~/.config/sharestat/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SharestatConfig {
    /// Base URL of the remote counting endpoint.
    pub endpoint_base: String,
}

impl Default for SharestatConfig {
    fn default() -> Self {
        Self {
            endpoint_base: count_api::DEFAULT_BASE.to_string(),
        }
    }
}

pub fn config_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("sharestat")?;
    Ok(xdg_dirs.place_config_file("config.toml")?)
}

/// Load configuration from disk, creating a default file if none exists.
pub fn load_or_init() -> Result<SharestatConfig> {
    load_or_init_at(&config_path()?)
}

/// Like `load_or_init` but reads/creates the file at a specific path.
/// Intended for tests so the config can live in a temp directory.
pub fn load_or_init_at(path: &Path) -> Result<SharestatConfig> {
    if !path.exists() {
        let default_cfg = SharestatConfig::default();
        let toml = toml::to_string_pretty(&default_cfg)?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, toml)?;
        tracing::info!("created default config at {}", path.display());
        return Ok(default_cfg);
    }

    let data = fs::read_to_string(path)?;
    let cfg: SharestatConfig = toml::from_str(&data)?;
    Ok(cfg)
}
