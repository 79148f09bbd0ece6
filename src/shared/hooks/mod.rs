// Custom Dioxus hooks binding browser state to signals
pub mod use_auth;
pub mod use_layout_mode;
pub mod use_scroll_trigger;
pub mod use_theme;

pub use use_auth::{use_auth, use_auth_provider, AuthContext};
pub use use_layout_mode::use_layout_mode;
pub use use_scroll_trigger::use_scroll_trigger;
pub use use_theme::{use_theme, use_theme_provider, ThemeHandle};
