use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// Optional settings file. Every section may be omitted.
#[derive(Debug, Default, Serialize, Deserialize)]
pub struct ShopConfig {
    #[serde(default)]
    pub store: StoreSection,
    #[serde(default)]
    pub suggestions: SuggestionsSection,
    #[serde(default)]
    pub logging: LoggingSection,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct StoreSection {
    pub path: Option<String>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct SuggestionsSection {
    pub limit: Option<usize>,
}

#[derive(Debug, Default, Serialize, Deserialize)]
pub struct LoggingSection {
    pub level: Option<String>,
}

pub fn default_config_path() -> anyhow::Result<PathBuf> {
    Ok(xdg_config_dir()?.join("config.toml"))
}

pub fn default_store_dir() -> anyhow::Result<PathBuf> {
    xdg_data_dir()
}

/// Config path, honoring SHOPSMART_CONFIG first.
pub fn resolve_config_path() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("SHOPSMART_CONFIG") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value));
        }
    }
    default_config_path()
}

/// Read the config at `path`; a missing file yields defaults.
pub fn load_config(path: &Path) -> anyhow::Result<ShopConfig> {
    if !path.exists() {
        return Ok(ShopConfig::default());
    }
    read_config(path)
}

pub fn read_config(path: &Path) -> anyhow::Result<ShopConfig> {
    let contents = std::fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read config {}: {}", path.display(), e))?;
    toml::from_str(&contents)
        .map_err(|e| anyhow::anyhow!("Failed to parse config {}: {}", path.display(), e))
}

pub fn xdg_config_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_CONFIG_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shopsmart"));
        }
    }
    Ok(home_dir()?.join(".config").join("shopsmart"))
}

pub fn xdg_data_dir() -> anyhow::Result<PathBuf> {
    if let Ok(value) = std::env::var("XDG_DATA_HOME") {
        if !value.trim().is_empty() {
            return Ok(PathBuf::from(value).join("shopsmart"));
        }
    }
    Ok(home_dir()?.join(".local").join("share").join("shopsmart"))
}

fn home_dir() -> anyhow::Result<PathBuf> {
    let home = std::env::var("HOME")
        .map_err(|_| anyhow::anyhow!("HOME is not set; cannot resolve default paths"))?;
    Ok(PathBuf::from(home))
}
