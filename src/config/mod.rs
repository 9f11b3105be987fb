use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use serde::{Deserialize, Serialize};

use crate::{
    errors::Result,
    utils::{ensure_dir, PathResolver},
};

/// User-adjustable settings for the CLI surfaces.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Page the share link points at; the encoded list rides its query string.
    pub share_base_url: String,
    pub currency_symbol: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            share_base_url: "https://124915.xyz/grocery".into(),
            currency_symbol: "$".into(),
        }
    }
}

pub struct ConfigManager {
    path: PathBuf,
}

impl ConfigManager {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        Ok(Self {
            path: PathResolver::config_file_in(&base),
        })
    }

    /// Loads the saved configuration, falling back to defaults when the
    /// file is absent or unreadable.
    pub fn load(&self) -> Config {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(_) => return Config::default(),
        };
        match serde_json::from_str(&data) {
            Ok(config) => config,
            Err(err) => {
                tracing::warn!(path = %self.path.display(), %err, "config unreadable, using defaults");
                Config::default()
            }
        }
    }

    pub fn save(&self, config: &Config) -> Result<()> {
        let json = serde_json::to_string_pretty(config)?;
        let tmp = self.path.with_extension("json.tmp");
        if let Some(parent) = self.path.parent() {
            ensure_dir(parent)?;
        }
        let mut file = File::create(&tmp)?;
        file.write_all(json.as_bytes())?;
        file.flush()?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn load_defaults_when_missing_and_round_trips() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::new(Some(temp.path().to_path_buf())).unwrap();
        let config = manager.load();
        assert_eq!(config.currency_symbol, "$");

        let mut updated = config.clone();
        updated.currency_symbol = "€".into();
        manager.save(&updated).unwrap();
        assert_eq!(manager.load().currency_symbol, "€");
    }

    #[test]
    fn corrupt_config_falls_back_to_defaults() {
        let temp = TempDir::new().unwrap();
        let manager = ConfigManager::new(Some(temp.path().to_path_buf())).unwrap();
        fs::write(manager.path(), "broken").unwrap();
        assert_eq!(manager.load().currency_symbol, "$");
    }
}
