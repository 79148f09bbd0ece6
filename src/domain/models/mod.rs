// Domain models (navbar entities)
// Pure Rust, no framework dependencies

pub mod menu;
pub mod session;
pub mod theme;

pub use menu::{MenuCatalog, MenuEntry, MenuIcon};
pub use session::{SessionView, User};
pub use theme::ThemeMode;
