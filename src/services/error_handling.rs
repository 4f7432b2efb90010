use thiserror::Error;

/// Error taxonomy of the inventory core. Nothing here is fatal: every
/// variant is recoverable at the point of the user action that raised it.
#[derive(Error, Debug)]
pub enum WarungError {
    #[error("Missing or invalid value for field: {field}")]
    MissingField { field: &'static str },

    #[error("Item not found: {id}")]
    ItemNotFound { id: i64 },

    #[error("Invalid email or password")]
    InvalidCredentials,

    #[error("Persisted data under key '{key}' is corrupt")]
    CorruptPersistedState {
        key: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("Storage operation failed: {operation}")]
    Storage {
        operation: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Export failed: {message}")]
    Export { message: String },

    #[error("Not authenticated")]
    NotAuthenticated,
}

impl WarungError {
    /// True for the errors a form can surface inline and let the user
    /// correct, as opposed to storage-level failures.
    pub fn is_user_error(&self) -> bool {
        matches!(
            self,
            WarungError::MissingField { .. }
                | WarungError::ItemNotFound { .. }
                | WarungError::InvalidCredentials
        )
    }
}
