// Domain layer: pure Rust, no Dioxus dependency
pub mod models;
pub mod services;
