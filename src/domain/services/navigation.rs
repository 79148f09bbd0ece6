//! Drawer state machine and navbar event dispatch
//!
//! The navbar owns exactly one piece of state, the drawer. Every user
//! interaction is turned into a `NavEvent` and dispatched here; delegations to
//! the session, theme and routing collaborators happen through traits so the
//! whole flow is testable without a renderer.

use super::layout::LayoutMode;
use super::view_model::SurfaceKind;
use crate::domain::models::{SessionView, ThemeMode, User};
use crate::shared::logging;

/// Session provider seam
pub trait SessionProvider {
    fn is_authenticated(&self) -> bool;
    fn current_user(&self) -> Option<User>;
    /// Afterwards the session is unauthenticated
    fn end_session(&mut self);
}

/// Fresh projection of a session provider for one render
pub fn session_view(provider: &dyn SessionProvider) -> SessionView {
    if !provider.is_authenticated() {
        return SessionView::guest();
    }
    SessionView {
        is_authenticated: true,
        username: provider.current_user().map(|user| user.username),
    }
}

/// Theme provider seam
pub trait ThemeProvider {
    fn mode(&self) -> ThemeMode;
    fn toggle(&mut self);
}

/// Routing seam, only used for the post-logout redirect
pub trait RouteNavigator {
    fn navigate(&mut self, target: &str);
}

/// Mobile drawer visibility
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum DrawerState {
    #[default]
    Closed,
    Open,
}

impl DrawerState {
    pub fn is_open(&self) -> bool {
        matches!(self, DrawerState::Open)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            DrawerState::Closed => "closed",
            DrawerState::Open => "open",
        }
    }
}

/// Discrete user interactions handled by the navbar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    /// Mobile menu trigger
    OpenDrawer,
    /// Close button, backdrop or Escape
    CloseDrawer,
    /// A rendered menu entry, by position in the active list
    ActivateEntry { index: usize },
    ToggleTheme,
    EndSession { origin: SurfaceKind },
}

impl NavEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            NavEvent::OpenDrawer => "open_drawer",
            NavEvent::CloseDrawer => "close_drawer",
            NavEvent::ActivateEntry { .. } => "activate_entry",
            NavEvent::ToggleTheme => "toggle_theme",
            NavEvent::EndSession { .. } => "end_session",
        }
    }
}

/// Collaborators and environment a dispatch runs against
pub struct NavContext<'a> {
    pub session: &'a mut dyn SessionProvider,
    pub theme: &'a mut dyn ThemeProvider,
    pub navigator: &'a mut dyn RouteNavigator,
    pub layout: LayoutMode,
    pub login_route: &'a str,
}

/// State owner for the navbar
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NavigationState {
    drawer: DrawerState,
}

impl NavigationState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drawer(&self) -> DrawerState {
        self.drawer
    }

    pub fn is_drawer_open(&self) -> bool {
        self.drawer.is_open()
    }

    /// Handle one event to completion.
    ///
    /// Delegations run first, in order; the drawer state is committed last.
    pub fn dispatch(&mut self, event: NavEvent, ctx: &mut NavContext<'_>) {
        let next = match event {
            NavEvent::OpenDrawer => {
                if ctx.layout.is_desktop() {
                    logging::log_ignored_event(event.as_str(), "no drawer in desktop layout");
                    return;
                }
                DrawerState::Open
            }
            NavEvent::CloseDrawer | NavEvent::ActivateEntry { .. } => DrawerState::Closed,
            NavEvent::ToggleTheme => {
                ctx.theme.toggle();
                logging::log_theme_toggle(ctx.theme.mode().as_str());
                self.drawer
            }
            NavEvent::EndSession { origin } => {
                ctx.session.end_session();
                ctx.navigator.navigate(ctx.login_route);
                logging::log_session_end(origin.as_str(), ctx.login_route);
                DrawerState::Closed
            }
        };

        self.commit(event, next);
    }

    fn commit(&mut self, event: NavEvent, next: DrawerState) {
        if self.drawer != next {
            logging::log_drawer_transition(event.as_str(), self.drawer.as_str(), next.as_str());
        }
        self.drawer = next;
    }
}
