use dioxus::prelude::*;

use crate::domain::models::{SessionView, User};
use crate::domain::services::{session_view, SessionProvider};
use crate::shared::constants::AUTH_STORAGE_KEY;
use crate::shared::errors::{AppError, Result};
use crate::shared::services::storage_service;

/// Session provider shared through the Dioxus context
#[derive(Clone, Copy, PartialEq)]
pub struct AuthContext {
    user: Signal<Option<User>>,
}

impl AuthContext {
    /// Fresh projection for the current render
    pub fn session_view(&self) -> SessionView {
        session_view(self)
    }

    /// Sign in as `username` and persist the session
    pub fn login(&mut self, username: &str) -> Result<()> {
        let user = User {
            username: normalize_username(username)?,
        };
        let raw = serde_json::to_string(&user)?;
        if let Err(e) = storage_service::write_item(AUTH_STORAGE_KEY, &raw) {
            tracing::warn!(error = %e, "Failed to persist session, keeping it in memory only");
        }

        tracing::info!(username = %user.username, "Session started");
        self.user.set(Some(user));
        Ok(())
    }
}

impl SessionProvider for AuthContext {
    fn is_authenticated(&self) -> bool {
        self.user.read().is_some()
    }

    fn current_user(&self) -> Option<User> {
        self.user.cloned()
    }

    fn end_session(&mut self) {
        self.user.set(None);
        if let Err(e) = storage_service::remove_item(AUTH_STORAGE_KEY) {
            tracing::warn!(error = %e, "Failed to clear persisted session");
        }
    }
}

/// Install the session provider. Call once, above every `use_auth` consumer.
pub fn use_auth_provider() -> AuthContext {
    let mut user = use_signal(|| None::<User>);

    // Restore a persisted session on mount
    use_effect(move || {
        if let Some(restored) = load_user() {
            user.set(Some(restored));
        }
    });

    use_context_provider(|| AuthContext { user })
}

/// Session provider installed by `use_auth_provider`
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
}

fn load_user() -> Option<User> {
    let raw = storage_service::read_item(AUTH_STORAGE_KEY)?;
    match serde_json::from_str::<User>(&raw) {
        Ok(user) => Some(user),
        Err(e) => {
            tracing::warn!(error = %e, "Ignoring malformed persisted session");
            None
        }
    }
}

fn normalize_username(raw: &str) -> Result<String> {
    let username = raw.trim();
    if username.is_empty() || username.chars().any(char::is_control) {
        return Err(AppError::InvalidUsername(raw.to_string()));
    }
    Ok(username.to_string())
}
