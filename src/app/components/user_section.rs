use dioxus::prelude::*;

use super::button::{Button, ButtonVariant};
use crate::domain::services::{UserSection, UserSectionPlacement};

/// Identity indicator, plus the logout control where the placement allows it.
/// Only rendered by callers for authenticated sessions.
#[component]
pub fn UserSectionView(
    section: UserSection,
    placement: UserSectionPlacement,
    on_logout: EventHandler<()>,
) -> Element {
    let modifier = placement.modifier();

    rsx! {
        div { class: "c-user-section c-user-section--{modifier}",
            span { class: "c-user-section__avatar", aria_hidden: "true", "👤" }
            span { class: "c-user-section__name", "{section.display_name()}" }
            if placement.shows_logout() {
                LogoutButton { on_logout }
            }
        }
    }
}

#[component]
pub fn LogoutButton(on_logout: EventHandler<()>) -> Element {
    rsx! {
        Button {
            variant: ButtonVariant::Danger,
            onclick: move |_| on_logout.call(()),
            span { class: "c-button__icon", "↪" }
            "Log out"
        }
    }
}
