//! Keyed string storage: the backend seam and the fail-open accessor over it.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex},
};

use serde::{de::DeserializeOwned, Serialize};
use tracing::warn;

use crate::CoreError;

/// Well-known slot names in the persisted keyspace. These match the layout
/// written by earlier releases and must not change.
pub mod keys {
    pub const ACCOUNTS: &str = "accounts";
    pub const TRANSACTIONS: &str = "transactions";
    pub const BUDGETS: &str = "budgets";
    pub const GOALS: &str = "goals";
    pub const USER_NAME: &str = "userName";
    pub const THEME: &str = "theme";
    pub const BOOT_STATE: &str = "pitaka-boot-state";
}

/// Abstraction over keyed string storage backends.
///
/// Values are raw strings; JSON framing is applied by [`OfflineStore`] only
/// for the slots that hold structured data.
pub trait KeyValueStore: Send + Sync {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError>;
    fn write(&self, key: &str, value: &str) -> Result<(), CoreError>;
    fn remove(&self, key: &str) -> Result<(), CoreError>;
}

/// Accessor that layers the fail-open decode and swallowed-write policy over
/// a backend. Reads never error: a missing or unreadable slot resolves to the
/// caller's default, and a value that fails to parse is discarded so the next
/// read starts clean. Writes are synchronous and best-effort.
#[derive(Clone)]
pub struct OfflineStore {
    backend: Arc<dyn KeyValueStore>,
}

impl OfflineStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self { backend }
    }

    /// Store backed by process memory, for tests and embedding hosts.
    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    /// Reads and JSON-decodes the slot, falling back to `default` when the
    /// slot is absent, unreadable, or corrupted.
    pub fn get<T: DeserializeOwned>(&self, key: &str, default: T) -> T {
        let raw = match self.backend.read(key) {
            Ok(Some(raw)) => raw,
            Ok(None) => return default,
            Err(err) => {
                warn!(key, %err, "failed to read stored value");
                return default;
            }
        };
        match serde_json::from_str(&raw) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "discarding stored value that failed to parse");
                if let Err(err) = self.backend.remove(key) {
                    warn!(key, %err, "failed to discard corrupted value");
                }
                default
            }
        }
    }

    /// JSON-encodes and writes the slot synchronously. Failures are logged
    /// and swallowed; there is no retry.
    pub fn set<T: Serialize>(&self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(encoded) => self.set_raw(key, &encoded),
            Err(err) => warn!(key, %err, "failed to encode value for storage"),
        }
    }

    /// Reads a slot stored as a plain string, without JSON framing.
    pub fn get_raw(&self, key: &str) -> Option<String> {
        match self.backend.read(key) {
            Ok(value) => value,
            Err(err) => {
                warn!(key, %err, "failed to read stored value");
                None
            }
        }
    }

    /// Writes a slot as a plain string, without JSON framing.
    pub fn set_raw(&self, key: &str, value: &str) {
        if let Err(err) = self.backend.write(key, value) {
            warn!(key, %err, "storage write failed; value dropped");
        }
    }

    pub fn remove(&self, key: &str) {
        if let Err(err) = self.backend.remove(key) {
            warn!(key, %err, "failed to remove stored value");
        }
    }
}

/// Stages encoded writes so a multi-key mutation commits through one call.
///
/// The backend still applies the writes one at a time with no rollback;
/// last write wins. The batch only makes the grouping explicit.
#[derive(Default)]
pub struct WriteBatch {
    staged: Vec<(String, String)>,
}

impl WriteBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn stage<T: Serialize>(&mut self, key: &str, value: &T) {
        match serde_json::to_string(value) {
            Ok(encoded) => self.staged.push((key.to_string(), encoded)),
            Err(err) => warn!(key, %err, "failed to encode staged value"),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.staged.is_empty()
    }

    pub fn len(&self) -> usize {
        self.staged.len()
    }

    /// Applies the staged writes in staging order.
    pub fn commit(self, store: &OfflineStore) {
        for (key, value) in self.staged {
            store.set_raw(&key, &value);
        }
    }
}

/// Backend keeping the keyspace in process memory.
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn read(&self, key: &str) -> Result<Option<String>, CoreError> {
        let entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store mutex poisoned".into()))?;
        Ok(entries.get(key).cloned())
    }

    fn write(&self, key: &str, value: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store mutex poisoned".into()))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), CoreError> {
        let mut entries = self
            .entries
            .lock()
            .map_err(|_| CoreError::Storage("memory store mutex poisoned".into()))?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn get_returns_default_for_missing_slot() {
        let store = OfflineStore::in_memory();
        let value: Vec<String> = store.get("accounts", Vec::new());
        assert!(value.is_empty());
    }

    #[test]
    fn set_then_get_round_trips() {
        let store = OfflineStore::in_memory();
        store.set(keys::BUDGETS, &vec![1i64, 2, 3]);
        let value: Vec<i64> = store.get(keys::BUDGETS, Vec::new());
        assert_eq!(value, vec![1, 2, 3]);
    }

    #[test]
    fn corrupted_slot_is_discarded_and_defaults() {
        let store = OfflineStore::in_memory();
        store.set_raw(keys::GOALS, "not valid json {{{");
        let value: Vec<i64> = store.get(keys::GOALS, Vec::new());
        assert!(value.is_empty());
        // The corrupted bytes are gone, not just skipped.
        assert!(store.get_raw(keys::GOALS).is_none());
    }

    #[test]
    fn raw_slots_bypass_json_framing() {
        let store = OfflineStore::in_memory();
        store.set_raw(keys::USER_NAME, "Ana");
        assert_eq!(store.get_raw(keys::USER_NAME).as_deref(), Some("Ana"));
    }

    #[test]
    fn batch_commit_applies_writes_in_order() {
        let store = OfflineStore::in_memory();
        let mut batch = WriteBatch::new();
        batch.stage("first", &10i64);
        batch.stage("second", &20i64);
        batch.stage("first", &30i64);
        assert_eq!(batch.len(), 3);
        batch.commit(&store);
        assert_eq!(store.get("first", 0i64), 30);
        assert_eq!(store.get("second", 0i64), 20);
    }
}
