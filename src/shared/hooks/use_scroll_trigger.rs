use dioxus::prelude::*;

/// `true` while the window is scrolled past `threshold_px`.
/// Recomputed on every scroll event, no debounce.
pub fn use_scroll_trigger(threshold_px: f64) -> Signal<bool> {
    let scrolled = use_signal(|| false);

    use_effect(move || {
        #[cfg(target_arch = "wasm32")]
        listen_scroll(scrolled, threshold_px);

        #[cfg(not(target_arch = "wasm32"))]
        let _ = (scrolled, threshold_px);
    });

    scrolled
}

#[cfg(target_arch = "wasm32")]
fn listen_scroll(mut scrolled: Signal<bool>, threshold_px: f64) {
    use crate::domain::services::is_past_threshold;
    use wasm_bindgen::{closure::Closure, JsCast};

    let Some(window) = web_sys::window() else {
        return;
    };

    let mut update = move || {
        let offset = web_sys::window()
            .and_then(|window| window.scroll_y().ok())
            .unwrap_or(0.0);
        let next = is_past_threshold(offset, threshold_px);
        if *scrolled.peek() != next {
            scrolled.set(next);
        }
    };
    update();

    let on_scroll = Closure::wrap(Box::new(update) as Box<dyn FnMut()>);
    if let Err(e) =
        window.add_event_listener_with_callback("scroll", on_scroll.as_ref().unchecked_ref())
    {
        tracing::warn!("Failed to observe window scroll: {:?}", e);
    }
    // Lives as long as the page
    on_scroll.forget();
}
