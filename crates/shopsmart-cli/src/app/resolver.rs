//! Store directory resolution.

use std::path::PathBuf;

use crate::config::{default_store_dir, ShopConfig};

/// Where the list lives: `--store`/SHOPSMART_STORE, then config, then XDG data dir.
pub fn resolve_store_dir(flag: Option<&str>, config: &ShopConfig) -> anyhow::Result<PathBuf> {
    if let Some(path) = flag.filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    if let Some(path) = config.store.path.as_deref().filter(|p| !p.trim().is_empty()) {
        return Ok(PathBuf::from(path));
    }
    default_store_dir()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StoreSection;

    #[test]
    fn test_flag_wins_over_config() {
        let config = ShopConfig {
            store: StoreSection {
                path: Some("/from/config".to_string()),
            },
            ..ShopConfig::default()
        };
        let dir = resolve_store_dir(Some("/from/flag"), &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/flag"));
    }

    #[test]
    fn test_config_used_without_flag() {
        let config = ShopConfig {
            store: StoreSection {
                path: Some("/from/config".to_string()),
            },
            ..ShopConfig::default()
        };
        let dir = resolve_store_dir(None, &config).unwrap();
        assert_eq!(dir, PathBuf::from("/from/config"));
    }
}
