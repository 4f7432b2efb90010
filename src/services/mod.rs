mod auth_service;
mod inventory_service;

pub mod error_handling;
pub mod export_service;

pub use auth_service::AuthService;
pub use inventory_service::InventoryService;
