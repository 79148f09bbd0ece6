use dioxus::prelude::*;

use crate::domain::models::ThemeMode;
use crate::domain::services::ThemeProvider;
use crate::shared::constants::THEME_STORAGE_KEY;
use crate::shared::logging;
use crate::shared::services::storage_service;

/// Theme provider handle shared through the Dioxus context
#[derive(Clone, Copy, PartialEq)]
pub struct ThemeHandle {
    mode: Signal<ThemeMode>,
}

impl ThemeProvider for ThemeHandle {
    fn mode(&self) -> ThemeMode {
        *self.mode.read()
    }

    fn toggle(&mut self) {
        let next = self.mode.peek().toggled();
        self.mode.set(next);
        apply_theme_class(next);
        save_theme(next);
    }
}

/// Install the theme provider. Call once, above every `use_theme` consumer.
pub fn use_theme_provider() -> ThemeHandle {
    let mut mode = use_signal(ThemeMode::default);

    // Initialize from localStorage, then from the system preference
    use_effect(move || {
        let initial = load_theme()
            .unwrap_or_else(|| ThemeMode::system_default(storage_service::prefers_dark_scheme()));
        apply_theme_class(initial);
        mode.set(initial);
    });

    use_context_provider(|| ThemeHandle { mode })
}

/// Theme provider installed by `use_theme_provider`
pub fn use_theme() -> ThemeHandle {
    use_context::<ThemeHandle>()
}

fn load_theme() -> Option<ThemeMode> {
    storage_service::read_item(THEME_STORAGE_KEY)?.parse().ok()
}

fn save_theme(mode: ThemeMode) {
    if let Err(e) = storage_service::write_item(THEME_STORAGE_KEY, mode.as_str()) {
        logging::log_theme_storage_error(&e.to_string());
    }
}

/// Apply the theme CSS class to the document element
#[cfg(target_arch = "wasm32")]
fn apply_theme_class(mode: ThemeMode) {
    use crate::shared::constants::THEME_CLASSES;

    let Some(root) = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.document_element())
    else {
        return;
    };

    let classes = root.class_list();
    for class in THEME_CLASSES {
        if let Err(e) = classes.remove_1(class) {
            tracing::warn!(class, "Failed to clear theme class: {:?}", e);
        }
    }
    if let Err(e) = classes.add_1(mode.as_str()) {
        tracing::warn!(theme = mode.as_str(), "Failed to apply theme class: {:?}", e);
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn apply_theme_class(_mode: ThemeMode) {
    // No document outside the browser
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = include_str!("use_theme.rs");

    #[test]
    fn test_theme_class_failures_are_logged() {
        assert!(!SOURCE.contains(concat!("let _ = classes", ".")));
        assert!(SOURCE.contains("Failed to clear theme class"));
        assert!(SOURCE.contains("Failed to apply theme class"));
    }
}
