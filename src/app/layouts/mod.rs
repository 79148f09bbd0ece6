pub mod drawer;
pub mod navbar;

pub use drawer::NavDrawer;
pub use navbar::Navbar;
