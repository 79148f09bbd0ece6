use dioxus::prelude::*;

use super::drawer::NavDrawer;
use crate::app::components::{NavButton, ThemeToggle, UserSectionView};
use crate::app::pages::routes::Route;
use crate::config::nav_config;
use crate::domain::services::{
    Elevation, NavContext, NavEvent, NavModel, NavigationState, RouteNavigator, ThemeProvider,
    UserSectionPlacement,
};
use crate::shared::hooks::{use_auth, use_layout_mode, use_scroll_trigger, use_theme};

/// Router-backed redirect target for the session-termination flow
struct RouterNavigator(dioxus::router::Navigator);

impl RouteNavigator for RouterNavigator {
    fn navigate(&mut self, target: &str) {
        if let Some(failure) = self.0.push(target) {
            tracing::warn!(route = target, "Redirect failed: {:?}", failure);
        }
    }
}

/// Fixed top bar with the desktop inline menu or the mobile drawer trigger.
#[component]
pub fn Navbar() -> Element {
    let config = nav_config();
    let auth = use_auth();
    let theme = use_theme();
    let router = navigator();
    let layout = use_layout_mode(config.desktop_breakpoint_px);
    let scrolled = use_scroll_trigger(config.scroll_threshold_px);
    let mut nav_state = use_signal(NavigationState::new);

    // Single entry point for every interaction on both surfaces
    let dispatch = use_callback(move |event: NavEvent| {
        let mut session = auth;
        let mut theme = theme;
        let mut navigator = RouterNavigator(router);
        let mut ctx = NavContext {
            session: &mut session,
            theme: &mut theme,
            navigator: &mut navigator,
            layout: *layout.peek(),
            login_route: &config.login_route,
        };
        nav_state.write().dispatch(event, &mut ctx);
    });

    // Derived fresh on every render, shared by both surfaces
    let session = auth.session_view();
    let model = NavModel::derive(&config.menu, &session);
    let top_bar = model.top_bar();
    let drawer = model.drawer();
    let top_bar_kind = top_bar.kind;

    let layout_mode = layout();
    let drawer_open = nav_state.read().is_drawer_open();
    let mode = theme.mode();
    let elevation = Elevation::for_scroll(scrolled());
    let shadow = elevation.box_shadow();

    rsx! {
        header {
            class: "c-navbar {elevation.class()}",
            style: "box-shadow: {shadow};",
            "data-elevation": "{elevation.level()}",
            "data-surface": "{top_bar_kind.as_str()}",
            div { class: "c-navbar__toolbar",
                // Left: Logo
                Link {
                    to: Route::Home {},
                    class: "c-navbar__logo",
                    span { class: "c-navbar__logo-icon", "🛍️" }
                    "{config.brand}"
                }

                if layout_mode.is_desktop() {
                    nav { class: "c-navbar__menu",
                        for (index, entry) in top_bar.entries.iter().enumerate() {
                            NavButton {
                                key: "{index}",
                                entry: entry.clone(),
                                on_activate: move |_| dispatch.call(NavEvent::ActivateEntry { index }),
                            }
                        }
                        ThemeToggle {
                            mode,
                            on_toggle: move |_| dispatch.call(NavEvent::ToggleTheme),
                        }
                        if let Some(section) = top_bar.user.clone() {
                            UserSectionView {
                                section,
                                placement: UserSectionPlacement::TopBar,
                                on_logout: move |_| dispatch.call(NavEvent::EndSession { origin: top_bar_kind }),
                            }
                        }
                    }
                } else {
                    button {
                        class: "c-navbar__trigger",
                        r#type: "button",
                        aria_label: "Open menu",
                        aria_expanded: "{drawer_open}",
                        onclick: move |_| dispatch.call(NavEvent::OpenDrawer),
                        "☰"
                    }
                }
            }
        }

        if drawer_open {
            NavDrawer {
                surface: drawer.kind,
                entries: drawer.entries.to_vec(),
                user: drawer.user.clone(),
                logout_control: drawer.logout_control,
                mode,
                on_event: dispatch,
            }
        }
    }
}
