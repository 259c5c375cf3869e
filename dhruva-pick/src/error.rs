//! Error types for DhruvaPick

use thiserror::Error;
use vastu_pick::PickError;

/// DhruvaPick error type
#[derive(Error, Debug)]
pub enum DhruvaPickError {
    #[error("Planning failed: {0}")]
    Pick(#[from] PickError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Selection error: {0}")]
    Selection(String),
}

impl From<toml::de::Error> for DhruvaPickError {
    fn from(e: toml::de::Error) -> Self {
        DhruvaPickError::Config(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, DhruvaPickError>;
