//! Viewport-derived presentation state: layout branch and top bar elevation

use crate::shared::constants::{BASE_ELEVATION, RAISED_ELEVATION, RAISED_SHADOW};

/// Which of the two mutually exclusive navbar branches is rendered
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LayoutMode {
    /// Inline menu in the top bar, no drawer trigger
    #[default]
    Desktop,
    /// Trigger button in the top bar, menu lives in the drawer
    Mobile,
}

impl LayoutMode {
    pub fn from_desktop_match(matches_desktop: bool) -> LayoutMode {
        if matches_desktop {
            LayoutMode::Desktop
        } else {
            LayoutMode::Mobile
        }
    }

    pub fn is_desktop(&self) -> bool {
        matches!(self, LayoutMode::Desktop)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            LayoutMode::Desktop => "desktop",
            LayoutMode::Mobile => "mobile",
        }
    }
}

/// Media query matching the desktop branch, for `window.matchMedia`
pub fn desktop_media_query(breakpoint_px: u32) -> String {
    format!("(min-width: {}px)", breakpoint_px)
}

/// Scroll offset comparison used by the scroll observer
pub fn is_past_threshold(scroll_y: f64, threshold_px: f64) -> bool {
    scroll_y > threshold_px
}

/// Shadow state of the fixed top bar. Cosmetic only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Elevation {
    #[default]
    Base,
    Raised,
}

impl Elevation {
    pub fn for_scroll(scrolled: bool) -> Elevation {
        if scrolled {
            Elevation::Raised
        } else {
            Elevation::Base
        }
    }

    pub fn level(&self) -> u8 {
        match self {
            Elevation::Base => BASE_ELEVATION,
            Elevation::Raised => RAISED_ELEVATION,
        }
    }

    pub fn box_shadow(&self) -> &'static str {
        match self {
            Elevation::Base => "none",
            Elevation::Raised => RAISED_SHADOW,
        }
    }

    pub fn class(&self) -> &'static str {
        match self {
            Elevation::Base => "c-navbar--base",
            Elevation::Raised => "c-navbar--raised",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_follows_desktop_media_match() {
        assert_eq!(LayoutMode::from_desktop_match(false), LayoutMode::Mobile);
        assert_eq!(LayoutMode::from_desktop_match(true), LayoutMode::Desktop);
        assert!(LayoutMode::default().is_desktop());
    }

    #[test]
    fn test_desktop_media_query() {
        assert_eq!(desktop_media_query(1200), "(min-width: 1200px)");
    }

    #[test]
    fn test_scroll_threshold_is_exclusive() {
        assert!(!is_past_threshold(0.0, 50.0));
        assert!(!is_past_threshold(50.0, 50.0));
        assert!(is_past_threshold(50.5, 50.0));
    }

    #[test]
    fn test_elevation_follows_scroll_signal() {
        let base = Elevation::for_scroll(false);
        assert_eq!(base.level(), 2);
        assert_eq!(base.box_shadow(), "none");

        let raised = Elevation::for_scroll(true);
        assert_eq!(raised.level(), 6);
        assert_eq!(raised.box_shadow(), "0 4px 20px rgba(0,0,0,0.3)");
        assert_ne!(base.class(), raised.class());
    }
}
