pub mod button;
pub mod nav_button;
pub mod theme_toggle;
pub mod user_section;

pub use button::{Button, ButtonVariant};
pub use nav_button::NavButton;
pub use theme_toggle::ThemeToggle;
pub use user_section::{LogoutButton, UserSectionView};
