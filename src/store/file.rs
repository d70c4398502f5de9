//! JSON file-backed settings store.

use std::collections::BTreeMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::SettingsStore;

/// Error type for file store operations.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// The store file exists but could not be read.
    #[error("failed to read settings store \"{}\": {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The store file is not a flat JSON object of strings.
    #[error("settings store \"{}\" is not a flat object of strings: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    /// The store could not be written back.
    #[error("failed to write settings store \"{}\": {source}", .path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

/// A settings store persisted as one flat JSON object.
///
/// The whole file is loaded on [`open`](Self::open) and only written back by
/// [`save`](Self::save); reads and writes in between touch memory only.
/// Entries that are not style settings are carried through untouched, so the
/// file can be shared with other configuration.
///
/// ```json
/// {
///   "fcrm-link-color": "rgba(0,0,255,0.5)",
///   "fcrm-primary-color": "#ff0000"
/// }
/// ```
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl JsonFileStore {
    /// Opens the store at `path`.
    ///
    /// A missing or blank file is an empty store; it is created on the first
    /// [`save`](Self::save).
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(content) if content.trim().is_empty() => BTreeMap::new(),
            Ok(content) => serde_json::from_str(&content).map_err(|source| StoreError::Parse {
                path: path.clone(),
                source,
            })?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                log::debug!("settings store {} does not exist yet", path.display());
                BTreeMap::new()
            }
            Err(source) => return Err(StoreError::Read { path, source }),
        };
        Ok(Self { path, entries })
    }

    /// Returns the file this store reads from and saves to.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Writes every entry back to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<(), StoreError> {
        let write_err = |source: io::Error| StoreError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let json = serde_json::to_string_pretty(&self.entries)
            .map_err(|e| write_err(io::Error::new(io::ErrorKind::InvalidData, e)))?;
        fs::write(&self.path, json + "\n").map_err(write_err)?;
        log::debug!(
            "saved {} entries to {}",
            self.entries.len(),
            self.path.display()
        );
        Ok(())
    }
}

impl SettingsStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: String) {
        self.entries.insert(key.to_string(), value);
    }

    fn delete(&mut self, key: &str) {
        self.entries.remove(key);
    }
}
