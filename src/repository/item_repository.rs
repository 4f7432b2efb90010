use std::sync::Arc;

use parking_lot::Mutex;
use tracing::debug;

use crate::domain::item::Item;
use crate::repository::key_value::KeyValueStore;
use crate::services::error_handling::WarungError;

/// Persists the whole item collection as one JSON blob under a fixed key.
/// Every save is a full overwrite; there are no partial writes.
#[derive(Clone)]
pub struct ItemRepository {
    store: Arc<Mutex<dyn KeyValueStore>>,
    key: String,
}

impl ItemRepository {
    pub fn new(store: Arc<Mutex<dyn KeyValueStore>>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    /// Loads the full collection. An absent key means no data has ever
    /// been saved and yields an empty collection; a present but malformed
    /// blob is reported as `CorruptPersistedState` so callers can tell the
    /// two apart.
    pub fn load(&self) -> Result<Vec<Item>, WarungError> {
        let blob = self.store.lock().get(&self.key)?;
        match blob {
            None => Ok(Vec::new()),
            Some(raw) => {
                let items: Vec<Item> = serde_json::from_str(&raw).map_err(|source| {
                    WarungError::CorruptPersistedState {
                        key: self.key.clone(),
                        source,
                    }
                })?;
                debug!(count = items.len(), key = %self.key, "loaded item collection");
                Ok(items)
            }
        }
    }

    /// Serializes and overwrites the stored blob with the given collection.
    pub fn save(&self, items: &[Item]) -> Result<(), WarungError> {
        let blob = serde_json::to_string(items).map_err(|source| WarungError::Storage {
            operation: format!("serialize item collection for key '{}'", self.key),
            source: std::io::Error::other(source),
        })?;
        self.store.lock().set(&self.key, &blob)?;
        debug!(count = items.len(), key = %self.key, "saved item collection");
        Ok(())
    }
}
