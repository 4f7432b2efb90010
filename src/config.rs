use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Static configuration of the inventory core. There is no file or
/// environment surface; callers construct one (usually `Default`) and hand
/// it to `Repository` / `WarungApp`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AppConfig {
    /// Directory backing the file store.
    pub data_dir: PathBuf,

    /// Key the serialized item collection lives under.
    pub items_key: String,

    /// Key the session marker lives under.
    pub session_key: String,

    /// The fixed credential pair the login check compares against. An
    /// intentional simplification carried over from the source app, not
    /// real authentication.
    pub admin_email: String,
    pub admin_password: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from("./warung-data"),
            items_key: "warung-items".to_string(),
            session_key: "isLoggedIn".to_string(),
            admin_email: "admin@warung.com".to_string(),
            admin_password: "123456".to_string(),
        }
    }
}
