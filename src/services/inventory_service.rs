use std::sync::Arc;

use chrono::{DateTime, Utc};
use tracing::{info, warn};

use crate::domain::item::{Item, ItemDraft};
use crate::repository::Repository;
use crate::services::error_handling::WarungError;

/// The item store: the single in-memory copy of the collection, with every
/// successful mutation written through to the repository in full before
/// the operation completes.
pub struct InventoryService {
    repository: Arc<Repository>,
    items: Vec<Item>,
}

impl InventoryService {
    pub fn new(repository: Arc<Repository>) -> Self {
        Self {
            repository,
            items: Vec::new(),
        }
    }

    /// Loads the collection from the repository, replacing the in-memory
    /// copy. A corrupt blob is logged and treated as no data, matching the
    /// observable behavior of the source app; callers needing to tell the
    /// difference use `ItemRepository::load` directly.
    pub fn load(&mut self) -> Result<&[Item], WarungError> {
        self.items = match self.repository.items.load() {
            Ok(items) => items,
            Err(WarungError::CorruptPersistedState { key, source }) => {
                warn!(%key, %source, "persisted items are corrupt; starting empty");
                Vec::new()
            }
            Err(other) => return Err(other),
        };
        Ok(&self.items)
    }

    /// Current collection in insertion order.
    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn get(&self, id: i64) -> Option<&Item> {
        self.items.iter().find(|item| item.id == id)
    }

    /// Validates the draft, assigns a fresh id, appends, writes through.
    pub fn create(&mut self, draft: ItemDraft) -> Result<Item, WarungError> {
        let validated = draft.validate()?;
        let now = Utc::now();
        let item = validated.into_item(allocate_id(&self.items, now), now);

        let mut next = self.items.clone();
        next.push(item.clone());
        self.repository.items.save(&next)?;
        self.items = next;

        info!(id = item.id, name = %item.name, "item created");
        Ok(item)
    }

    /// Replaces all mutable fields of the record in place and refreshes
    /// its timestamp. The collection is untouched when validation fails or
    /// the id is absent.
    pub fn update(&mut self, id: i64, draft: ItemDraft) -> Result<Item, WarungError> {
        let validated = draft.validate()?;

        let mut next = self.items.clone();
        let item = next
            .iter_mut()
            .find(|item| item.id == id)
            .ok_or(WarungError::ItemNotFound { id })?;
        validated.apply_to(item, Utc::now());
        let updated = item.clone();

        self.repository.items.save(&next)?;
        self.items = next;

        info!(id, name = %updated.name, "item updated");
        Ok(updated)
    }

    /// Removes exactly one record. Irreversible; the caller is expected to
    /// have confirmed with the user first.
    pub fn delete(&mut self, id: i64) -> Result<(), WarungError> {
        let mut next = self.items.clone();
        let before = next.len();
        next.retain(|item| item.id != id);
        if next.len() == before {
            return Err(WarungError::ItemNotFound { id });
        }

        self.repository.items.save(&next)?;
        self.items = next;

        info!(id, "item deleted");
        Ok(())
    }
}

/// Ids are the creation instant in epoch milliseconds, as in the source
/// app, bumped past the current maximum so two creations in the same
/// millisecond still get distinct, monotonically increasing ids.
fn allocate_id(items: &[Item], now: DateTime<Utc>) -> i64 {
    let candidate = now.timestamp_millis();
    match items.iter().map(|item| item.id).max() {
        Some(max) if candidate <= max => max + 1,
        _ => candidate,
    }
}
