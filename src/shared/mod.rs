pub mod constants;
pub mod errors;
pub mod logging;
pub mod services;

// Dioxus hooks (browser collaborators of the navbar)
pub mod hooks;
