//! Error type shared by every exporter entry point.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    /// A filter was supplied but cannot be turned into a node predicate,
    /// or a proxy group refers to a filter name that does not exist.
    #[error("invalid filter: {0}")]
    InvalidFilter(String),

    #[error("invalid remote config: {0}")]
    RemoteConfig(String),

    #[error("settings error: {0}")]
    Settings(String),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ConvertError {
    pub fn is_invalid_filter(&self) -> bool {
        matches!(self, ConvertError::InvalidFilter(_))
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
