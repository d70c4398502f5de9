//! Settings store collaborators.
//!
//! The core never owns persistent state. Every operation takes a handle to
//! something implementing [`SettingsStore`], supplied by the host for the
//! lifetime of one request.
//!
//! - [`MemoryStore`]: In-memory map, for tests and embedding hosts
//! - [`JsonFileStore`]: Flat JSON object on disk
//! - [`StoreError`]: Errors from loading or saving a file store

mod file;
mod memory;

pub use file::{JsonFileStore, StoreError};
pub use memory::MemoryStore;

/// A flat key-value store of string settings.
///
/// Keys are stable strings; values are strings or absent. Writes are
/// last-write-wins per key, with no ordering guarantees across keys.
pub trait SettingsStore {
    /// Returns the current value for `key`, or `None` if unset.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: String);

    /// Removes `key`. Removing an absent key is a no-op.
    fn delete(&mut self, key: &str);
}

impl<S: SettingsStore + ?Sized> SettingsStore for &mut S {
    fn get(&self, key: &str) -> Option<String> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: String) {
        (**self).set(key, value)
    }

    fn delete(&mut self, key: &str) {
        (**self).delete(key)
    }
}
