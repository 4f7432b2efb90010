use std::sync::Arc;

use tracing::{info, warn};

use crate::config::AppConfig;
use crate::domain::route::Route;
use crate::repository::Repository;
use crate::services::error_handling::WarungError;

/// The session gate: a fixed-credential login check guarding the two
/// views. The authenticated flag lives in two places, a transient
/// in-process bool and a durable marker in the store, so a fresh process
/// resumes a session the way the original app did.
pub struct AuthService {
    repository: Arc<Repository>,
    admin_email: String,
    admin_password: String,
    session_active: bool,
}

impl AuthService {
    pub fn new(repository: Arc<Repository>, config: &AppConfig) -> Self {
        Self {
            repository,
            admin_email: config.admin_email.clone(),
            admin_password: config.admin_password.clone(),
            session_active: false,
        }
    }

    /// Succeeds only on an exact match of both literals. Success sets the
    /// durable marker and the transient flag; failure changes nothing and
    /// is surfaced inline. No lockout, no attempt counting.
    pub fn attempt_login(&mut self, email: &str, password: &str) -> Result<(), WarungError> {
        if email == self.admin_email && password == self.admin_password {
            self.repository.session.mark()?;
            self.session_active = true;
            info!(email, "login succeeded");
            Ok(())
        } else {
            warn!(email, "login rejected");
            Err(WarungError::InvalidCredentials)
        }
    }

    /// Clears both session flags unconditionally.
    pub fn logout(&mut self) -> Result<(), WarungError> {
        self.session_active = false;
        self.repository.session.clear()?;
        info!("logged out");
        Ok(())
    }

    /// The transient flag wins; otherwise the durable marker decides, so a
    /// restarted process with a saved marker is still authenticated. A
    /// storage failure while reading the marker counts as no session.
    pub fn is_authenticated(&self) -> bool {
        self.session_active || self.repository.session.is_marked().unwrap_or(false)
    }

    /// Route guard, run before any protected data loads. Returns the view
    /// to redirect to, or `None` when the requested view may render.
    pub fn guard(&self, requested: Route) -> Option<Route> {
        match (self.is_authenticated(), requested) {
            (false, Route::Dashboard) => Some(Route::Login),
            (true, Route::Login) => Some(Route::Dashboard),
            _ => None,
        }
    }
}
