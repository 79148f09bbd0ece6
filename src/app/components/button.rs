use dioxus::prelude::*;

#[derive(Clone, PartialEq)]
pub enum ButtonVariant {
    Primary,
    Ghost,
    /// Session termination
    Danger,
}

#[component]
pub fn Button(
    variant: Option<ButtonVariant>,
    submit: Option<bool>,
    aria_label: Option<String>,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let variant = variant.unwrap_or(ButtonVariant::Primary);
    let button_type = if submit.unwrap_or(false) { "submit" } else { "button" };

    let variant_class = match variant {
        ButtonVariant::Primary => "c-button--primary",
        ButtonVariant::Ghost => "c-button--ghost",
        ButtonVariant::Danger => "c-button--danger",
    };

    rsx! {
        button {
            class: "c-button {variant_class}",
            r#type: "{button_type}",
            aria_label: aria_label,
            onclick: move |evt| {
                if let Some(handler) = &onclick {
                    handler.call(evt);
                }
            },
            {children}
        }
    }
}
