use serde::{Deserialize, Serialize};

/// The two views of the application. `Dashboard` is the protected main
/// view; `Login` is the unauthenticated entry point.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub enum Route {
    Login,
    Dashboard,
}

impl Route {
    pub fn is_protected(&self) -> bool {
        matches!(self, Route::Dashboard)
    }
}
