//! Navbar configuration
//!
//! The menu catalog and the navbar tunables ship embedded in the binary
//! (`navbar.json`) and are parsed once per process.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::domain::models::MenuCatalog;
use crate::shared::constants::{
    DEFAULT_BRAND, DEFAULT_DESKTOP_BREAKPOINT_PX, DEFAULT_LOGIN_ROUTE, DEFAULT_SCROLL_THRESHOLD_PX,
};
use crate::shared::errors::{AppError, Result};
use crate::shared::logging;

const EMBEDDED_CONFIG: &str = include_str!("navbar.json");

static NAV_CONFIG: Lazy<NavConfig> = Lazy::new(|| match NavConfig::from_json(EMBEDDED_CONFIG) {
    Ok(config) => {
        logging::log_catalog_loaded(config.menu.authenticated.len(), config.menu.guest.len());
        config
    }
    Err(e) => {
        logging::log_catalog_error(&e.to_string());
        NavConfig::default()
    }
});

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    pub brand: String,
    /// Scroll offset past which the top bar is raised
    pub scroll_threshold_px: f64,
    pub desktop_breakpoint_px: u32,
    /// Unauthenticated entry screen, target of the post-logout redirect
    pub login_route: String,
    pub menu: MenuCatalog,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self {
            brand: DEFAULT_BRAND.to_string(),
            scroll_threshold_px: DEFAULT_SCROLL_THRESHOLD_PX,
            desktop_breakpoint_px: DEFAULT_DESKTOP_BREAKPOINT_PX,
            login_route: DEFAULT_LOGIN_ROUTE.to_string(),
            menu: MenuCatalog::default(),
        }
    }
}

impl NavConfig {
    pub fn from_json(raw: &str) -> Result<Self> {
        let config: NavConfig = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        if !self.login_route.starts_with('/') {
            return Err(AppError::InvalidConfig(format!(
                "login_route '{}' is not an internal route",
                self.login_route
            )));
        }
        if !self.scroll_threshold_px.is_finite() || self.scroll_threshold_px < 0.0 {
            return Err(AppError::InvalidConfig(format!(
                "scroll_threshold_px must be a non-negative number, got {}",
                self.scroll_threshold_px
            )));
        }
        if self.desktop_breakpoint_px == 0 {
            return Err(AppError::InvalidConfig(
                "desktop_breakpoint_px must be positive".to_string(),
            ));
        }
        self.menu.validate()
    }
}

/// Process-wide navbar configuration
pub fn nav_config() -> &'static NavConfig {
    &NAV_CONFIG
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::MenuIcon;

    #[test]
    fn test_embedded_config_is_valid() {
        let config = NavConfig::from_json(EMBEDDED_CONFIG).unwrap();

        assert_eq!(config.scroll_threshold_px, 50.0);
        assert_eq!(config.login_route, "/login");
        assert!(!config.menu.authenticated.is_empty());
        assert!(!config.menu.guest.is_empty());
        assert_eq!(config.menu.guest[0].icon, Some(MenuIcon::Home));
    }

    #[test]
    fn test_nav_config_uses_embedded_file() {
        assert_eq!(nav_config(), &NavConfig::from_json(EMBEDDED_CONFIG).unwrap());
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let config = NavConfig::from_json(r#"{ "brand": "Shop" }"#).unwrap();

        assert_eq!(config.brand, "Shop");
        assert_eq!(config.desktop_breakpoint_px, DEFAULT_DESKTOP_BREAKPOINT_PX);
        assert_eq!(config.login_route, DEFAULT_LOGIN_ROUTE);
        assert!(config.menu.guest.is_empty());
    }

    #[test]
    fn test_rejects_external_login_route() {
        let err = NavConfig::from_json(r#"{ "login_route": "https://auth.example.com" }"#)
            .unwrap_err();

        assert!(matches!(err, AppError::InvalidConfig(_)));
    }

    #[test]
    fn test_rejects_invalid_menu_entry() {
        let raw = r#"{ "menu": { "authenticated": [], "guest": [{ "label": "", "target": "/" }] } }"#;

        assert!(matches!(
            NavConfig::from_json(raw),
            Err(AppError::InvalidMenuEntry { list: "guest", index: 0, .. })
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        assert!(matches!(
            NavConfig::from_json("{ not json"),
            Err(AppError::Serialization(_))
        ));
    }
}
