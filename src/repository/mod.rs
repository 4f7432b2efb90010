pub mod item_repository;
pub mod key_value;
pub mod session_repository;

use std::sync::Arc;

use parking_lot::Mutex;

use crate::config::AppConfig;
use crate::repository::key_value::{FileStore, KeyValueStore, MemoryStore};
use crate::services::error_handling::WarungError;

/// Bundles the persistence gateway's views over one shared key-value store.
#[derive(Clone)]
pub struct Repository {
    pub items: item_repository::ItemRepository,
    pub session: session_repository::SessionRepository,
}

impl Repository {
    pub fn new(store: Arc<Mutex<dyn KeyValueStore>>, config: &AppConfig) -> Self {
        Self {
            items: item_repository::ItemRepository::new(store.clone(), &config.items_key),
            session: session_repository::SessionRepository::new(store, &config.session_key),
        }
    }

    /// Open the durable file-backed store described by the config.
    pub fn open(config: &AppConfig) -> Result<Self, WarungError> {
        let store = FileStore::open(&config.data_dir)?;
        Ok(Self::new(Arc::new(Mutex::new(store)), config))
    }

    /// In-memory repository for tests and ephemeral runs.
    pub fn new_memory(config: &AppConfig) -> Self {
        Self::new(Arc::new(Mutex::new(MemoryStore::new())), config)
    }
}
