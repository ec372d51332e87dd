use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use directories::ProjectDirs;
use thiserror::Error;
use tracing::warn;

const SETTINGS_FILE: &str = "settings.json";
const WALLPAPER_KEY: &str = "selectedWallpaper";

#[derive(Error, Debug)]
pub enum StorageError {
    #[error("no home directory")]
    NoHome,

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Encode(#[from] serde_json::Error),
}

/// Durable key-value settings, one JSON document on disk. Values are kept
/// as strings, the selected wallpaper being a stringified integer index.
/// Reads swallow corruption (a missing or garbled file behaves as empty);
/// writes are synchronous and report their errors.
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn open_default() -> Result<Self, StorageError> {
        let dirs = ProjectDirs::from("", "", "nexus-portal").ok_or(StorageError::NoHome)?;
        let dir = dirs.data_local_dir();
        std::fs::create_dir_all(dir)?;
        Ok(Self::at(dir.join(SETTINGS_FILE)))
    }

    pub fn at(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn selected_wallpaper(&self) -> Option<usize> {
        self.read().get(WALLPAPER_KEY)?.parse().ok()
    }

    pub fn set_selected_wallpaper(&self, index: usize) -> Result<(), StorageError> {
        let mut entries = self.read();
        entries.insert(WALLPAPER_KEY.to_string(), index.to_string());
        let body = serde_json::to_string_pretty(&entries)?;
        std::fs::write(&self.path, body)?;
        Ok(())
    }

    fn read(&self) -> BTreeMap<String, String> {
        let body = match std::fs::read_to_string(&self.path) {
            Ok(body) => body,
            Err(_) => return BTreeMap::new(),
        };
        match serde_json::from_str(&body) {
            Ok(entries) => entries,
            Err(e) => {
                warn!(path = %self.path.display(), "unreadable settings file: {e}");
                BTreeMap::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store_in(dir: &tempfile::TempDir) -> SettingsStore {
        SettingsStore::at(dir.path().join("settings.json"))
    }

    #[test]
    fn missing_file_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(store_in(&dir).selected_wallpaper(), None);
    }

    #[test]
    fn round_trips_the_selected_index() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_selected_wallpaper(3).unwrap();
        assert_eq!(store.selected_wallpaper(), Some(3));

        // A fresh handle over the same file sees the persisted value.
        assert_eq!(store_in(&dir).selected_wallpaper(), Some(3));
    }

    #[test]
    fn value_is_a_stringified_integer() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        store.set_selected_wallpaper(2).unwrap();

        let body = std::fs::read_to_string(store.path()).unwrap();
        let doc: serde_json::Value = serde_json::from_str(&body).unwrap();
        assert_eq!(doc["selectedWallpaper"], serde_json::json!("2"));
    }

    #[test]
    fn garbage_reads_as_unset() {
        let dir = tempfile::tempdir().unwrap();
        let store = store_in(&dir);
        std::fs::write(store.path(), "not json").unwrap();
        assert_eq!(store.selected_wallpaper(), None);
    }
}
