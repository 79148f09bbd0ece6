use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("Invalid menu entry #{index} in {list} menu: {reason}")]
    InvalidMenuEntry {
        list: &'static str,
        index: usize,
        reason: String,
    },

    #[error("Invalid navbar configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown theme mode: {0}")]
    InvalidTheme(String),

    #[error("Invalid username: {0:?}")]
    InvalidUsername(String),

    #[error("Storage error: {0}")]
    Storage(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, AppError>;
