use std::sync::Arc;

use crate::config::AppConfig;
use crate::domain::filters::{CategoryFilter, ItemFilters};
use crate::domain::item::{Item, ItemDraft};
use crate::domain::route::Route;
use crate::repository::Repository;
use crate::services::error_handling::WarungError;
use crate::services::export_service::{self, ExportFormat};
use crate::services::{AuthService, InventoryService};

/// The explicit application state: session gate, item store and the
/// current filter selection, wired together over one repository instead
/// of ambient globals. Mirrors the actions the views expose.
pub struct WarungApp {
    auth: AuthService,
    inventory: InventoryService,
    filters: ItemFilters,
}

impl WarungApp {
    pub fn new(auth: AuthService, inventory: InventoryService) -> Self {
        Self {
            auth,
            inventory,
            filters: ItemFilters::default(),
        }
    }

    /// Open the durable store described by the config and wire the
    /// services over it.
    pub fn open(config: &AppConfig) -> Result<Self, WarungError> {
        let repository = Arc::new(Repository::open(config)?);
        Ok(Self::new(
            AuthService::new(repository.clone(), config),
            InventoryService::new(repository),
        ))
    }

    /// In-memory app, for tests and ephemeral runs.
    pub fn in_memory(config: &AppConfig) -> Self {
        let repository = Arc::new(Repository::new_memory(config));
        Self::new(
            AuthService::new(repository.clone(), config),
            InventoryService::new(repository),
        )
    }

    // --- session gate ---

    pub fn login(&mut self, email: &str, password: &str) -> Result<(), WarungError> {
        self.auth.attempt_login(email, password)
    }

    pub fn logout(&mut self) -> Result<(), WarungError> {
        self.auth.logout()
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth.is_authenticated()
    }

    pub fn guard(&self, requested: Route) -> Option<Route> {
        self.auth.guard(requested)
    }

    // --- item store, gated on the session ---

    /// Loads the collection for the dashboard. Runs only with a live
    /// session; the route guard is the primary check and this is the
    /// matching check at the data boundary.
    pub fn load_items(&mut self) -> Result<&[Item], WarungError> {
        self.require_session()?;
        self.inventory.load()
    }

    pub fn add_item(&mut self, draft: ItemDraft) -> Result<Item, WarungError> {
        self.require_session()?;
        self.inventory.create(draft)
    }

    pub fn edit_item(&mut self, id: i64, draft: ItemDraft) -> Result<Item, WarungError> {
        self.require_session()?;
        self.inventory.update(id, draft)
    }

    /// Irreversible; the confirmation dialog is the caller's job.
    pub fn remove_item(&mut self, id: i64) -> Result<(), WarungError> {
        self.require_session()?;
        self.inventory.delete(id)
    }

    /// Full collection in insertion order, regardless of filters.
    pub fn items(&self) -> &[Item] {
        self.inventory.items()
    }

    // --- filter engine ---

    pub fn set_search(&mut self, text: impl Into<String>) {
        self.filters.search = text.into();
    }

    pub fn set_category(&mut self, category: CategoryFilter) {
        self.filters.category = category;
    }

    pub fn filters(&self) -> &ItemFilters {
        &self.filters
    }

    /// The visible list: the filter engine recomputed over the current
    /// collection.
    pub fn visible_items(&self) -> Vec<Item> {
        self.filters.apply(self.inventory.items())
    }

    // --- export ---

    /// CSV of the full unfiltered collection, ready to be offered as
    /// `data-warung.csv`.
    pub fn export_csv(&self) -> Result<String, WarungError> {
        export_service::export_to_csv(self.inventory.items())
    }

    pub fn export_json(&self) -> Result<String, WarungError> {
        export_service::export_to_json(self.inventory.items())
    }

    pub fn export_to_file(
        &self,
        format: ExportFormat,
        path: impl AsRef<std::path::Path>,
    ) -> Result<(), WarungError> {
        export_service::export_to_file(self.inventory.items(), format, path)
    }

    fn require_session(&self) -> Result<(), WarungError> {
        if self.auth.is_authenticated() {
            Ok(())
        } else {
            Err(WarungError::NotAuthenticated)
        }
    }
}
