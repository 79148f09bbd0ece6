//! Shared derivation behind the top bar and the drawer
//!
//! Both surfaces are projections of one `NavModel`, so their menu entries and
//! user section can never drift apart.

use crate::domain::models::{MenuCatalog, MenuEntry, SessionView};

/// The two rendered surfaces
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
    TopBar,
    Drawer,
}

impl SurfaceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SurfaceKind::TopBar => "top_bar",
            SurfaceKind::Drawer => "drawer",
        }
    }
}

/// Where a user section is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserSectionPlacement {
    /// Inline in the desktop top bar, logout next to the name
    TopBar,
    /// Drawer header, logout is rendered lower in the drawer body instead
    DrawerHeader,
}

impl UserSectionPlacement {
    pub fn shows_logout(&self) -> bool {
        matches!(self, UserSectionPlacement::TopBar)
    }

    pub fn modifier(&self) -> &'static str {
        match self {
            UserSectionPlacement::TopBar => "row",
            UserSectionPlacement::DrawerHeader => "column",
        }
    }
}

/// Identity indicator content. Only exists for authenticated sessions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UserSection {
    pub username: Option<String>,
}

impl UserSection {
    pub fn display_name(&self) -> &str {
        self.username.as_deref().unwrap_or_default()
    }
}

/// What one surface renders
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurfaceModel<'a> {
    pub kind: SurfaceKind,
    pub entries: &'a [MenuEntry],
    pub user: Option<UserSection>,
    /// Session-termination control available somewhere on this surface
    pub logout_control: bool,
}

/// Single derivation from catalog + session, recomputed on each render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavModel<'a> {
    pub entries: &'a [MenuEntry],
    pub user: Option<UserSection>,
}

impl<'a> NavModel<'a> {
    pub fn derive(catalog: &'a MenuCatalog, session: &SessionView) -> Self {
        let user = session.is_authenticated.then(|| UserSection {
            username: session.username.clone(),
        });

        Self {
            entries: catalog.select(session),
            user,
        }
    }

    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn top_bar(&self) -> SurfaceModel<'a> {
        self.project(SurfaceKind::TopBar)
    }

    pub fn drawer(&self) -> SurfaceModel<'a> {
        self.project(SurfaceKind::Drawer)
    }

    fn project(&self, kind: SurfaceKind) -> SurfaceModel<'a> {
        SurfaceModel {
            kind,
            entries: self.entries,
            user: self.user.clone(),
            logout_control: self.is_authenticated(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{MenuEntry, MenuIcon};

    fn catalog() -> MenuCatalog {
        MenuCatalog {
            authenticated: vec![
                MenuEntry::new("Home", "/").with_icon(MenuIcon::Home),
                MenuEntry::new("Products", "/products").with_icon(MenuIcon::Store),
                MenuEntry::new("Orders", "/orders").with_icon(MenuIcon::Orders),
            ],
            guest: vec![
                MenuEntry::new("Home", "/").with_icon(MenuIcon::Home),
                MenuEntry::new("Login", "/login").with_icon(MenuIcon::Login),
            ],
        }
    }

    fn labels(surface: &SurfaceModel<'_>) -> Vec<String> {
        surface.entries.iter().map(|e| e.label.clone()).collect()
    }

    #[test]
    fn test_guest_surfaces_have_no_identity_or_logout() {
        let catalog = catalog();
        let model = NavModel::derive(&catalog, &SessionView::guest());

        assert_eq!(model.top_bar().kind, SurfaceKind::TopBar);
        assert_eq!(model.drawer().kind, SurfaceKind::Drawer);
        for surface in [model.top_bar(), model.drawer()] {
            assert!(surface.user.is_none());
            assert!(!surface.logout_control);
        }
    }

    #[test]
    fn test_authenticated_identity_on_both_surfaces() {
        let catalog = catalog();
        let model = NavModel::derive(&catalog, &SessionView::authenticated("alice"));

        assert_eq!(model.top_bar().user.unwrap().display_name(), "alice");
        assert_eq!(model.drawer().user.unwrap().display_name(), "alice");
        assert!(model.top_bar().logout_control);
        assert!(model.drawer().logout_control);
    }

    #[test]
    fn test_surfaces_share_entries_in_order() {
        let catalog = catalog();
        for session in [SessionView::guest(), SessionView::authenticated("carol")] {
            let model = NavModel::derive(&catalog, &session);
            let top = model.top_bar();
            let drawer = model.drawer();

            assert_eq!(labels(&top), labels(&drawer));
            assert_eq!(top.entries, drawer.entries);
            assert_eq!(top.user, drawer.user);
        }
    }

    #[test]
    fn test_authenticated_without_username_still_shows_indicator() {
        let catalog = catalog();
        let session = SessionView {
            is_authenticated: true,
            username: None,
        };
        let model = NavModel::derive(&catalog, &session);

        let user = model.top_bar().user.unwrap();
        assert_eq!(user.display_name(), "");
        assert_eq!(labels(&model.top_bar()), vec!["Home", "Products", "Orders"]);
    }

    #[test]
    fn test_placement_logout_visibility() {
        assert!(UserSectionPlacement::TopBar.shows_logout());
        assert!(!UserSectionPlacement::DrawerHeader.shows_logout());
    }
}
