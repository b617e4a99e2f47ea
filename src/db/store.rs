//! Flat key-value storage backing the whole application.
//!
//! All persisted state lives in a single JSON file holding a string-to-string
//! map. Values are themselves encoded: the task list is a JSON array under
//! one key, the active board is a JSON string, and the UI flags are literal
//! strings (`"true"`/`"false"`, `"enabled"`/`"disabled"`). Every write
//! replaces the whole file; there is no diffing and no partial update.

use crate::libs::data_storage::DataStorage;
use crate::msg_debug;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

pub const STORAGE_FILE_NAME: &str = "storage.json";

/// Serialized task list (JSON array of task records).
pub const KEY_TASKS: &str = "tasks";
/// JSON-serialized name of the currently selected board.
pub const KEY_ACTIVE_BOARD: &str = "activeBoard";
/// Whether the board sidebar is rendered, `"true"` / `"false"`.
pub const KEY_SHOW_SIDEBAR: &str = "showSideBar";
/// Legacy edit-form flag. Written at init for storage compatibility,
/// never read.
pub const KEY_EDIT_TASK_FORM: &str = "editTaskForm";
/// Light theme flag, `"enabled"` / `"disabled"`.
pub const KEY_LIGHT_THEME: &str = "light-theme";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage file is corrupted: {0}")]
    Corrupted(#[from] serde_json::Error),
}

pub struct Store {
    path: PathBuf,
}

impl Store {
    pub fn new() -> Result<Self, StoreError> {
        let path = DataStorage::new()
            .get_path(STORAGE_FILE_NAME)
            .map_err(|e| StoreError::Io(std::io::Error::new(std::io::ErrorKind::Other, e.to_string())))?;
        Ok(Store { path })
    }

    /// Whether the storage file exists on disk at all.
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    pub fn get(&self, key: &str) -> Result<Option<String>, StoreError> {
        Ok(self.read_map()?.get(key).cloned())
    }

    pub fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        map.insert(key.to_string(), value.to_string());
        msg_debug!("storage write: key '{}', {} bytes", key, value.len());
        self.write_map(&map)
    }

    pub fn remove(&mut self, key: &str) -> Result<(), StoreError> {
        let mut map = self.read_map()?;
        if map.remove(key).is_some() {
            self.write_map(&map)?;
        }
        Ok(())
    }

    /// Sidebar visibility flag; defaults to shown when never set.
    pub fn show_sidebar(&self) -> Result<bool, StoreError> {
        Ok(self.get(KEY_SHOW_SIDEBAR)?.map_or(true, |v| v == "true"))
    }

    pub fn set_show_sidebar(&mut self, show: bool) -> Result<(), StoreError> {
        self.set(KEY_SHOW_SIDEBAR, if show { "true" } else { "false" })
    }

    /// Light theme flag; defaults to disabled when never set.
    pub fn light_theme(&self) -> Result<bool, StoreError> {
        Ok(self.get(KEY_LIGHT_THEME)?.map_or(false, |v| v == "enabled"))
    }

    pub fn set_light_theme(&mut self, enabled: bool) -> Result<(), StoreError> {
        self.set(KEY_LIGHT_THEME, if enabled { "enabled" } else { "disabled" })
    }

    fn read_map(&self) -> Result<BTreeMap<String, String>, StoreError> {
        if !self.path.exists() {
            return Ok(BTreeMap::new());
        }
        let contents = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&contents)?)
    }

    fn write_map(&self, map: &BTreeMap<String, String>) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(map)?;
        fs::write(&self.path, contents)?;
        Ok(())
    }
}
