//! File-backed token storage.
//!
//! The file holds a flat JSON object of string keys to string values, the same
//! shape `localStorage` has in the browser. Every write rewrites the file.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use timeline::{StorageError, TokenStorage};

const APP_DIR: &str = "timeline";
const FILE_NAME: &str = "storage.json";

/// Default location: `<config dir>/timeline/storage.json`.
pub fn default_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(APP_DIR).join(FILE_NAME))
}

#[derive(Clone, Debug)]
pub struct FileStorage {
    path: PathBuf,
    items: BTreeMap<String, String>,
}

impl FileStorage {
    /// Load `path`. A missing file is an empty store; an unreadable or
    /// corrupt one is treated the same way and replaced on the next write.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let items = match fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw).unwrap_or_else(|error| {
                tracing::warn!(path = %path.display(), %error, "ignoring corrupt storage file");
                BTreeMap::new()
            }),
            Err(error) if error.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(error) => {
                tracing::warn!(path = %path.display(), %error, "failed to read storage file");
                BTreeMap::new()
            }
        };
        Self { path, items }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StorageError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(io_error)?;
        }
        let rendered = serde_json::to_string_pretty(&self.items).map_err(|e| StorageError::Io(e.to_string()))?;
        fs::write(&self.path, rendered).map_err(io_error)
    }
}

fn io_error(error: io::Error) -> StorageError {
    StorageError::Io(error.to_string())
}

impl TokenStorage for FileStorage {
    fn get_item(&self, key: &str) -> Option<String> {
        self.items.get(key).cloned()
    }

    /// The in-memory map only keeps the value once it is on disk.
    fn set_item(&mut self, key: &str, value: &str) -> Result<(), StorageError> {
        let previous = self.items.insert(key.to_owned(), value.to_owned());
        if let Err(error) = self.flush() {
            match previous {
                Some(previous) => self.items.insert(key.to_owned(), previous),
                None => self.items.remove(key),
            };
            return Err(error);
        }
        Ok(())
    }

    fn remove_item(&mut self, key: &str) {
        if self.items.remove(key).is_none() {
            return;
        }
        if let Err(error) = self.flush() {
            tracing::warn!(path = %self.path.display(), %error, "failed to rewrite storage file");
        }
    }
}
