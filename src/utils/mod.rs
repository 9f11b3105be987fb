use std::{
    env, fs,
    path::{Path, PathBuf},
    sync::Once,
};

use crate::errors::Result;

/// Environment variable that overrides the application data directory.
pub const HOME_ENV: &str = "GROCERY_CORE_HOME";

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, EnvFilter};

        let filter =
            EnvFilter::from_default_env().add_directive("grocery_core=info".parse().unwrap());

        fmt().with_env_filter(filter).init();
    });
}

pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        fs::create_dir_all(path)?;
    }
    Ok(())
}

/// Resolves the on-disk locations used by storage and configuration.
pub struct PathResolver;

impl PathResolver {
    pub fn resolve_base(root: Option<PathBuf>) -> PathBuf {
        if let Some(root) = root {
            return root;
        }
        if let Some(dir) = env::var_os(HOME_ENV) {
            return PathBuf::from(dir);
        }
        dirs::data_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("grocery_core")
    }

    pub fn list_file_in(base: &Path) -> PathBuf {
        base.join(format!("{}.json", crate::storage::STORAGE_KEY))
    }

    pub fn config_file_in(base: &Path) -> PathBuf {
        base.join("config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_root_wins_over_environment() {
        let base = PathResolver::resolve_base(Some(PathBuf::from("/tmp/grocery-test")));
        assert_eq!(base, PathBuf::from("/tmp/grocery-test"));
    }

    #[test]
    fn list_file_uses_storage_key() {
        let path = PathResolver::list_file_in(Path::new("/data"));
        assert_eq!(path, PathBuf::from("/data/smartGroceryList.json"));
    }
}
