use dioxus::prelude::*;

use crate::domain::services::LayoutMode;

/// Current layout branch, following the `(min-width: breakpoint)` media query.
///
/// The first value is read synchronously so the first paint already shows the
/// right branch. This signal is the only switch point: no stylesheet rule hides
/// either branch. Outside the browser the desktop branch is reported.
pub fn use_layout_mode(breakpoint_px: u32) -> Signal<LayoutMode> {
    let layout = use_signal(|| initial_layout(breakpoint_px));

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        listen_breakpoint(layout, breakpoint_px);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (layout, breakpoint_px);
    });

    layout
}

#[cfg(target_arch = "wasm32")]
fn desktop_media(breakpoint_px: u32) -> Option<web_sys::MediaQueryList> {
    use crate::domain::services::desktop_media_query;

    let query = desktop_media_query(breakpoint_px);
    match web_sys::window().map(|window| window.match_media(&query)) {
        Some(Ok(Some(media))) => Some(media),
        _ => {
            tracing::warn!(query = %query, "matchMedia unavailable, keeping desktop layout");
            None
        }
    }
}

#[cfg(target_arch = "wasm32")]
fn initial_layout(breakpoint_px: u32) -> LayoutMode {
    desktop_media(breakpoint_px)
        .map(|media| LayoutMode::from_desktop_match(media.matches()))
        .unwrap_or_default()
}

#[cfg(not(target_arch = "wasm32"))]
fn initial_layout(_breakpoint_px: u32) -> LayoutMode {
    LayoutMode::default()
}

#[cfg(target_arch = "wasm32")]
fn listen_breakpoint(mut layout: Signal<LayoutMode>, breakpoint_px: u32) {
    use crate::shared::logging;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(media) = desktop_media(breakpoint_px) else {
        return;
    };

    let watched = media.clone();
    let mut update = move || {
        let next = LayoutMode::from_desktop_match(watched.matches());
        if *layout.peek() != next {
            logging::log_layout_switch(next.as_str(), breakpoint_px);
            layout.set(next);
        }
    };
    update();

    let on_change = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    if let Err(e) =
        media.add_event_listener_with_callback("change", on_change.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to observe breakpoint: {:?}", e);
    }
    on_change.forget();
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAVBAR_CSS: &str = include_str!("../../../assets/css/navbar.css");

    #[test]
    fn test_navbar_css_does_not_gate_layout_branches() {
        // A width rule here would disagree with a configured breakpoint
        assert!(!NAVBAR_CSS.contains("@media"));
        assert!(!NAVBAR_CSS.contains("display: none"));
    }

    #[test]
    fn test_initial_layout_outside_browser_is_desktop() {
        assert_eq!(initial_layout(900), LayoutMode::Desktop);
        assert_eq!(initial_layout(1200), LayoutMode::Desktop);
    }
}
