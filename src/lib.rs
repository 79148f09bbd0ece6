// Public API exports
pub mod config;
pub mod domain;
pub mod shared;

// Dioxus app: router, layouts, components
pub mod app;
