use dioxus::prelude::*;

use crate::app::components::{
    Button, ButtonVariant, LogoutButton, NavButton, ThemeToggle, UserSectionView,
};
use crate::domain::models::{MenuEntry, ThemeMode};
use crate::domain::services::{NavEvent, SurfaceKind, UserSection, UserSectionPlacement};

/// Right-anchored slide-in panel for the mobile layout.
///
/// Rendered by the navbar only while the drawer is open. Backdrop clicks and
/// Escape count as explicit close activations.
#[component]
pub fn NavDrawer(
    surface: SurfaceKind,
    entries: Vec<MenuEntry>,
    user: Option<UserSection>,
    logout_control: bool,
    mode: ThemeMode,
    on_event: EventHandler<NavEvent>,
) -> Element {
    let handle_keydown = move |evt: Event<KeyboardData>| {
        if evt.key() == Key::Escape {
            evt.prevent_default();
            on_event.call(NavEvent::CloseDrawer);
        }
    };

    rsx! {
        // Backdrop
        div {
            class: "c-drawer__backdrop",
            onclick: move |_| on_event.call(NavEvent::CloseDrawer),
        }

        aside {
            class: "c-drawer",
            role: "dialog",
            aria_modal: "true",
            aria_label: "Navigation menu",
            "data-surface": "{surface.as_str()}",
            tabindex: "-1",
            onkeydown: handle_keydown,
            onmounted: move |evt: MountedEvent| async move {
                if let Err(e) = evt.set_focus(true).await {
                    tracing::warn!("Failed to focus drawer: {:?}", e);
                }
            },

            // Header
            div { class: "c-drawer__header",
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Close menu",
                    onclick: move |_| on_event.call(NavEvent::CloseDrawer),
                    "✕"
                }
            }

            // User info, logout lives lower in the body
            if let Some(section) = user {
                UserSectionView {
                    section,
                    placement: UserSectionPlacement::DrawerHeader,
                    on_logout: move |_| on_event.call(NavEvent::EndSession { origin: surface }),
                }
            }

            nav { class: "c-drawer__menu",
                for (index, entry) in entries.into_iter().enumerate() {
                    NavButton {
                        key: "{index}",
                        entry,
                        on_activate: move |_| on_event.call(NavEvent::ActivateEntry { index }),
                    }
                }

                if logout_control {
                    LogoutButton {
                        on_logout: move |_| on_event.call(NavEvent::EndSession { origin: surface }),
                    }
                }
            }

            // Utility buttons
            div { class: "c-drawer__utilities",
                ThemeToggle {
                    mode,
                    compact: true,
                    on_toggle: move |_| on_event.call(NavEvent::ToggleTheme),
                }
                Button {
                    variant: ButtonVariant::Ghost,
                    aria_label: "Close menu",
                    onclick: move |_| on_event.call(NavEvent::CloseDrawer),
                    "✕"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    const SOURCE: &str = include_str!("drawer.rs");

    #[test]
    fn test_focus_failure_is_logged() {
        assert!(!SOURCE.contains(concat!("let _ = evt", ".set_focus")));
        assert!(SOURCE.contains("Failed to focus drawer"));
    }
}
