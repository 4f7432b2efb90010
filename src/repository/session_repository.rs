use std::sync::Arc;

use parking_lot::Mutex;

use crate::repository::key_value::KeyValueStore;
use crate::services::error_handling::WarungError;

/// The literal truthy string the original app stored for a live session.
const SESSION_MARKER: &str = "true";

/// Durable half of the session flag: a single marker entry in the
/// key-value store, set on login and removed on logout.
#[derive(Clone)]
pub struct SessionRepository {
    store: Arc<Mutex<dyn KeyValueStore>>,
    key: String,
}

impl SessionRepository {
    pub fn new(store: Arc<Mutex<dyn KeyValueStore>>, key: impl Into<String>) -> Self {
        Self {
            store,
            key: key.into(),
        }
    }

    pub fn mark(&self) -> Result<(), WarungError> {
        self.store.lock().set(&self.key, SESSION_MARKER)
    }

    pub fn clear(&self) -> Result<(), WarungError> {
        self.store.lock().remove(&self.key)
    }

    /// True only when the marker is present with the exact truthy value.
    pub fn is_marked(&self) -> Result<bool, WarungError> {
        Ok(self.store.lock().get(&self.key)?.as_deref() == Some(SESSION_MARKER))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repository::key_value::MemoryStore;

    fn repository() -> SessionRepository {
        SessionRepository::new(Arc::new(Mutex::new(MemoryStore::new())), "isLoggedIn")
    }

    #[test]
    fn test_mark_and_clear() {
        let repo = repository();
        assert!(!repo.is_marked().unwrap());

        repo.mark().unwrap();
        assert!(repo.is_marked().unwrap());

        repo.clear().unwrap();
        assert!(!repo.is_marked().unwrap());
    }

    #[test]
    fn test_clear_is_unconditional() {
        let repo = repository();
        repo.clear().unwrap();
        assert!(!repo.is_marked().unwrap());
    }

    #[test]
    fn test_foreign_value_is_not_a_session() {
        let store = MemoryStore::with_entries([("isLoggedIn".to_string(), "yes".to_string())]);
        let repo = SessionRepository::new(Arc::new(Mutex::new(store)), "isLoggedIn");
        assert!(!repo.is_marked().unwrap());
    }
}
