//! Secondary cache for the critical boot blob, with a fallback write path.

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::store::{keys, KeyValueStore};

/// Minimal state needed to bring the shell up before the full keyspace loads.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct BootState {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub theme: Option<String>,
    pub last_saved: i64,
    pub version: String,
}

/// Best-effort cache over a primary backend with a fallback.
///
/// Writes go to the primary; when that fails the same payload is written to
/// the fallback instead. Every failure on either path is logged and
/// swallowed; boot state is never load-bearing.
pub struct BootCache {
    primary: Arc<dyn KeyValueStore>,
    fallback: Arc<dyn KeyValueStore>,
}

impl BootCache {
    pub fn new(primary: Arc<dyn KeyValueStore>, fallback: Arc<dyn KeyValueStore>) -> Self {
        Self { primary, fallback }
    }

    pub fn save(&self, state: &BootState) {
        let encoded = match serde_json::to_string(state) {
            Ok(encoded) => encoded,
            Err(err) => {
                warn!(%err, "failed to encode boot state");
                return;
            }
        };
        if let Err(err) = self.primary.write(keys::BOOT_STATE, &encoded) {
            warn!(%err, "primary boot cache write failed, using fallback");
            if let Err(err) = self.fallback.write(keys::BOOT_STATE, &encoded) {
                warn!(%err, "fallback boot cache write failed");
            }
        }
    }

    pub fn load(&self) -> Option<BootState> {
        let raw = match self.primary.read(keys::BOOT_STATE) {
            Ok(value) => value,
            Err(err) => {
                warn!(%err, "primary boot cache read failed, using fallback");
                match self.fallback.read(keys::BOOT_STATE) {
                    Ok(value) => value,
                    Err(err) => {
                        warn!(%err, "fallback boot cache read failed");
                        None
                    }
                }
            }
        }?;
        match serde_json::from_str(&raw) {
            Ok(state) => Some(state),
            Err(err) => {
                warn!(%err, "ignoring boot state that failed to parse");
                None
            }
        }
    }

    pub fn clear(&self) {
        if let Err(err) = self.primary.remove(keys::BOOT_STATE) {
            warn!(%err, "primary boot cache clear failed, using fallback");
            if let Err(err) = self.fallback.remove(keys::BOOT_STATE) {
                warn!(%err, "fallback boot cache clear failed");
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{CoreError, MemoryStore};

    /// Backend that refuses every operation, standing in for an unavailable
    /// primary cache.
    struct UnavailableStore;

    impl KeyValueStore for UnavailableStore {
        fn read(&self, _key: &str) -> Result<Option<String>, CoreError> {
            Err(CoreError::Storage("unavailable".into()))
        }

        fn write(&self, _key: &str, _value: &str) -> Result<(), CoreError> {
            Err(CoreError::Storage("unavailable".into()))
        }

        fn remove(&self, _key: &str) -> Result<(), CoreError> {
            Err(CoreError::Storage("unavailable".into()))
        }
    }

    fn state() -> BootState {
        BootState {
            user_name: Some("Ana".into()),
            theme: Some("dark".into()),
            last_saved: 1_700_000_000_000,
            version: "1".into(),
        }
    }

    #[test]
    fn save_and_load_round_trip_through_primary() {
        let cache = BootCache::new(Arc::new(MemoryStore::new()), Arc::new(MemoryStore::new()));
        cache.save(&state());
        assert_eq!(cache.load(), Some(state()));
        cache.clear();
        assert_eq!(cache.load(), None);
    }

    #[test]
    fn failing_primary_falls_back_on_save_and_load() {
        let fallback = Arc::new(MemoryStore::new());
        let cache = BootCache::new(Arc::new(UnavailableStore), fallback.clone());
        cache.save(&state());
        assert_eq!(cache.load(), Some(state()));

        // The payload really lives in the fallback backend.
        assert!(fallback.read(keys::BOOT_STATE).expect("read fallback").is_some());
    }

    #[test]
    fn corrupted_boot_state_is_ignored() {
        let primary = Arc::new(MemoryStore::new());
        primary
            .write(keys::BOOT_STATE, "{ definitely not json")
            .expect("seed corrupt state");
        let cache = BootCache::new(primary, Arc::new(MemoryStore::new()));
        assert_eq!(cache.load(), None);
    }
}
