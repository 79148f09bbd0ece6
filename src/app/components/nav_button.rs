use dioxus::prelude::*;

use crate::domain::models::MenuEntry;

/// One menu entry. The link navigates by itself; `on_activate` lets the
/// owning surface react (the drawer closes).
#[component]
pub fn NavButton(entry: MenuEntry, on_activate: EventHandler<()>) -> Element {
    rsx! {
        Link {
            to: entry.target.clone(),
            class: "c-nav-button",
            active_class: "c-nav-button--active",
            onclick: move |_| on_activate.call(()),
            if let Some(icon) = entry.icon {
                span { class: "c-nav-button__icon", "{icon.glyph()}" }
            }
            span { class: "c-nav-button__label", "{entry.label}" }
        }
    }
}
