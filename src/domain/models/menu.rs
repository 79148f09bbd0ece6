use serde::{Deserialize, Serialize};

use super::session::SessionView;
use crate::shared::errors::{AppError, Result};

/// Icons a menu entry may carry next to its label
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MenuIcon {
    Home,
    Store,
    Cart,
    Orders,
    Profile,
    Login,
    Register,
}

impl MenuIcon {
    pub fn glyph(&self) -> &'static str {
        match self {
            MenuIcon::Home => "🏠",
            MenuIcon::Store => "🛍️",
            MenuIcon::Cart => "🛒",
            MenuIcon::Orders => "📦",
            MenuIcon::Profile => "👤",
            MenuIcon::Login => "🔑",
            MenuIcon::Register => "📝",
        }
    }
}

/// One navigable destination. Its identity is its position in the catalog list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuEntry {
    pub label: String,
    pub target: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<MenuIcon>,
}

impl MenuEntry {
    pub fn new(label: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            target: target.into(),
            icon: None,
        }
    }

    pub fn with_icon(mut self, icon: MenuIcon) -> Self {
        self.icon = Some(icon);
        self
    }

    fn validate(&self, list: &'static str, index: usize) -> Result<()> {
        if self.label.trim().is_empty() {
            return Err(AppError::InvalidMenuEntry {
                list,
                index,
                reason: "label is empty".to_string(),
            });
        }
        if !self.target.starts_with('/') {
            return Err(AppError::InvalidMenuEntry {
                list,
                index,
                reason: format!("target '{}' is not an internal route", self.target),
            });
        }
        Ok(())
    }
}

/// Menu entries partitioned by session status.
///
/// Exactly one of the two lists is active for a given session; they are
/// never merged or filtered.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MenuCatalog {
    pub authenticated: Vec<MenuEntry>,
    pub guest: Vec<MenuEntry>,
}

impl MenuCatalog {
    /// Pick the list matching the session. Re-evaluated on every render.
    pub fn select(&self, session: &SessionView) -> &[MenuEntry] {
        if session.is_authenticated {
            &self.authenticated
        } else {
            &self.guest
        }
    }

    pub fn validate(&self) -> Result<()> {
        for (index, entry) in self.authenticated.iter().enumerate() {
            entry.validate("authenticated", index)?;
        }
        for (index, entry) in self.guest.iter().enumerate() {
            entry.validate("guest", index)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> MenuCatalog {
        MenuCatalog {
            authenticated: vec![
                MenuEntry::new("Home", "/").with_icon(MenuIcon::Home),
                MenuEntry::new("Cart", "/cart").with_icon(MenuIcon::Cart),
            ],
            guest: vec![
                MenuEntry::new("Home", "/"),
                MenuEntry::new("Login", "/login"),
                MenuEntry::new("Register", "/register"),
            ],
        }
    }

    #[test]
    fn test_select_guest_list() {
        let catalog = catalog();
        let selected = catalog.select(&SessionView::guest());

        assert_eq!(selected, catalog.guest.as_slice());
    }

    #[test]
    fn test_select_authenticated_list_in_order() {
        let catalog = catalog();
        let selected = catalog.select(&SessionView::authenticated("alice"));

        let labels: Vec<_> = selected.iter().map(|e| e.label.as_str()).collect();
        assert_eq!(labels, vec!["Home", "Cart"]);
    }

    #[test]
    fn test_validate_rejects_empty_label() {
        let mut catalog = catalog();
        catalog.guest[1].label = "  ".to_string();

        let err = catalog.validate().unwrap_err();
        assert!(matches!(
            err,
            AppError::InvalidMenuEntry { list: "guest", index: 1, .. }
        ));
    }

    #[test]
    fn test_validate_rejects_external_target() {
        let mut catalog = catalog();
        catalog.authenticated[0].target = "https://example.com".to_string();

        assert!(catalog.validate().is_err());
    }

    #[test]
    fn test_icon_deserializes_kebab_case() {
        let entry: MenuEntry =
            serde_json::from_str(r#"{"label":"Orders","target":"/orders","icon":"orders"}"#)
                .unwrap();
        assert_eq!(entry.icon, Some(MenuIcon::Orders));

        let bare: MenuEntry = serde_json::from_str(r#"{"label":"Home","target":"/"}"#).unwrap();
        assert_eq!(bare.icon, None);
    }
}
