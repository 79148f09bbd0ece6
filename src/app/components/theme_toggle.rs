use dioxus::prelude::*;

use crate::domain::models::ThemeMode;

/// Icon button switching between light and dark mode.
/// The click is reported to the navbar, which owns the toggle delegation.
#[component]
pub fn ThemeToggle(mode: ThemeMode, on_toggle: EventHandler<()>, compact: Option<bool>) -> Element {
    let compact = compact.unwrap_or(false);

    // Tooltip shows target state (what will happen on click)
    let tooltip = format!("Switch to {} mode", mode.toggled().as_str());

    let toggle_class = if compact {
        "c-theme-toggle c-theme-toggle--round"
    } else {
        "c-theme-toggle"
    };

    rsx! {
        button {
            class: "{toggle_class}",
            r#type: "button",
            "data-tooltip": "{tooltip}",
            aria_label: "{tooltip}",
            onclick: move |_| on_toggle.call(()),
            span { class: "c-theme-toggle__icon", "{mode.toggle_icon()}" }
        }
    }
}
