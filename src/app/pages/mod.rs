pub mod login;
pub mod routes;
pub mod shop;

pub use routes::{App, Route};
