//! Structured logging module for the storefront navbar
//!
//! Provides consistent, contextual logging across the navbar.
//! Uses structured fields so drawer and session transitions can be traced
//! from the browser console or a native subscriber alike.

/// Operations that emit navbar logs
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    DrawerTransition,
    SessionEnd,
    ThemeToggle,
    CatalogLoad,
    LayoutSwitch,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::DrawerTransition => "drawer_transition",
            LogOperation::SessionEnd => "session_end",
            LogOperation::ThemeToggle => "theme_toggle",
            LogOperation::CatalogLoad => "catalog_load",
            LogOperation::LayoutSwitch => "layout_switch",
        }
    }
}

/// Log a drawer state change
pub fn log_drawer_transition(event: &str, from: &str, to: &str) {
    tracing::debug!(
        operation = LogOperation::DrawerTransition.as_str(),
        event = event,
        from = from,
        to = to,
        "Drawer state changed"
    );
}

/// Log an event that was dropped without a transition
pub fn log_ignored_event(event: &str, reason: &str) {
    tracing::debug!(
        operation = LogOperation::DrawerTransition.as_str(),
        event = event,
        reason = reason,
        "Navigation event ignored"
    );
}

/// Log a session termination and where it was triggered from
pub fn log_session_end(origin: &str, redirect: &str) {
    tracing::info!(
        operation = LogOperation::SessionEnd.as_str(),
        origin = origin,
        redirect = redirect,
        "Session ended"
    );
}

/// Log a theme toggle
pub fn log_theme_toggle(mode: &str) {
    tracing::debug!(
        operation = LogOperation::ThemeToggle.as_str(),
        mode = mode,
        "Theme mode toggled"
    );
}

/// Log a theme persistence failure (never fatal)
pub fn log_theme_storage_error(error: &str) {
    tracing::warn!(
        operation = LogOperation::ThemeToggle.as_str(),
        error = error,
        "Failed to persist theme mode"
    );
}

/// Log a successfully loaded menu catalog
pub fn log_catalog_loaded(authenticated: usize, guest: usize) {
    tracing::info!(
        operation = LogOperation::CatalogLoad.as_str(),
        authenticated_entries = authenticated,
        guest_entries = guest,
        "Menu catalog loaded"
    );
}

/// Log a rejected configuration; the fallback config is used instead
pub fn log_catalog_error(error: &str) {
    tracing::error!(
        operation = LogOperation::CatalogLoad.as_str(),
        error = error,
        "Invalid navbar configuration, falling back to empty menus"
    );
}

/// Log a viewport crossing the desktop breakpoint
pub fn log_layout_switch(layout: &str, breakpoint_px: u32) {
    tracing::debug!(
        operation = LogOperation::LayoutSwitch.as_str(),
        layout = layout,
        breakpoint_px = breakpoint_px,
        "Layout mode switched"
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::DrawerTransition.as_str(), "drawer_transition");
        assert_eq!(LogOperation::SessionEnd.as_str(), "session_end");
        assert_eq!(LogOperation::ThemeToggle.as_str(), "theme_toggle");
        assert_eq!(LogOperation::CatalogLoad.as_str(), "catalog_load");
        assert_eq!(LogOperation::LayoutSwitch.as_str(), "layout_switch");
    }
}
