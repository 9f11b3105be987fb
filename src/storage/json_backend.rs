use std::{
    fs::{self, File},
    io::Write,
    path::{Path, PathBuf},
};

use crate::{
    errors::Result,
    list::GroceryList,
    utils::{ensure_dir, PathResolver},
};

use super::StorageBackend;

const TMP_SUFFIX: &str = "tmp";

/// File-backed JSON persistence for the grocery list.
#[derive(Clone)]
pub struct JsonStorage {
    list_file: PathBuf,
}

impl JsonStorage {
    pub fn new(root: Option<PathBuf>) -> Result<Self> {
        let base = PathResolver::resolve_base(root);
        ensure_dir(&base)?;
        Ok(Self {
            list_file: PathResolver::list_file_in(&base),
        })
    }

    pub fn new_default() -> Result<Self> {
        Self::new(None)
    }

    pub fn list_path(&self) -> &Path {
        &self.list_file
    }
}

impl StorageBackend for JsonStorage {
    fn save(&self, list: &GroceryList) -> Result<()> {
        let json = serde_json::to_string_pretty(list)?;
        let tmp = tmp_path(&self.list_file);
        write_atomic(&tmp, &json)?;
        fs::rename(&tmp, &self.list_file)?;
        tracing::debug!(path = %self.list_file.display(), "list saved");
        Ok(())
    }

    fn load(&self) -> GroceryList {
        let data = match fs::read_to_string(&self.list_file) {
            Ok(data) => data,
            Err(_) => return GroceryList::default(),
        };
        match serde_json::from_str(&data) {
            Ok(list) => list,
            Err(err) => {
                tracing::warn!(
                    path = %self.list_file.display(),
                    %err,
                    "saved list is corrupt, starting empty"
                );
                GroceryList::default()
            }
        }
    }
}

fn tmp_path(path: &Path) -> PathBuf {
    let mut tmp = path.to_path_buf();
    let ext = match path.extension().and_then(|ext| ext.to_str()) {
        Some(existing) => format!("{}.{}", existing, TMP_SUFFIX),
        None => TMP_SUFFIX.to_string(),
    };
    tmp.set_extension(ext);
    tmp
}

fn write_atomic(path: &Path, data: &str) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let mut file = File::create(path)?;
    file.write_all(data.as_bytes())?;
    file.flush()?;
    Ok(())
}
