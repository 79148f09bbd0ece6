// Navbar behaviour: state machine, shared derivation, viewport helpers
pub mod layout;
pub mod navigation;
pub mod view_model;

pub use layout::{desktop_media_query, is_past_threshold, Elevation, LayoutMode};
pub use navigation::{
    session_view, DrawerState, NavContext, NavEvent, NavigationState, RouteNavigator,
    SessionProvider, ThemeProvider,
};
pub use view_model::{NavModel, SurfaceKind, SurfaceModel, UserSection, UserSectionPlacement};
