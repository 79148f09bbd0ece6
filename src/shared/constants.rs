// Navbar defaults (overridable through src/config/navbar.json)
pub const DEFAULT_BRAND: &str = "Storefront";
pub const DEFAULT_SCROLL_THRESHOLD_PX: f64 = 50.0;
/// Desktop layout starts at this viewport width (inclusive).
pub const DEFAULT_DESKTOP_BREAKPOINT_PX: u32 = 1200;
pub const DEFAULT_LOGIN_ROUTE: &str = "/login";

// Top bar elevation levels
pub const BASE_ELEVATION: u8 = 2;
pub const RAISED_ELEVATION: u8 = 6;
pub const RAISED_SHADOW: &str = "0 4px 20px rgba(0,0,0,0.3)";

// localStorage keys
pub const THEME_STORAGE_KEY: &str = "theme_mode";
pub const AUTH_STORAGE_KEY: &str = "auth_user";

// CSS classes toggled on <html> by the theme provider
pub const THEME_CLASSES: [&str; 2] = ["light", "dark"];
