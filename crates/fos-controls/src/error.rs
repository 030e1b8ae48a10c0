//! Controls errors
//!
//! Only configuration can fail. Host-side rejections are logged and dropped.

/// Controls error
#[derive(Debug, thiserror::Error)]
pub enum ControlsError {
    #[error("Config parse error: {0}")]
    Config(#[from] serde_json::Error),

    #[error("Invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, ControlsError>;
