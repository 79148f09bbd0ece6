use serde::{Deserialize, Serialize};

/// Signed-in user as exposed by the session provider
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub username: String,
}

/// Read-only projection of the session provider, rebuilt on every render
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionView {
    pub is_authenticated: bool,
    pub username: Option<String>,
}

impl SessionView {
    pub fn guest() -> Self {
        Self::default()
    }

    pub fn authenticated(username: impl Into<String>) -> Self {
        Self {
            is_authenticated: true,
            username: Some(username.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_guest_and_authenticated_views() {
        assert!(!SessionView::guest().is_authenticated);
        assert_eq!(SessionView::guest().username, None);

        let view = SessionView::authenticated("bob");
        assert!(view.is_authenticated);
        assert_eq!(view.username.as_deref(), Some("bob"));
    }

    #[test]
    fn test_user_round_trips_through_storage_json() {
        let user: User = serde_json::from_str(r#"{"username":"bob"}"#).unwrap();
        assert_eq!(user.username, "bob");
    }
}
