//! Error types for Treenav
//!
//! Uses `thiserror` for library errors. Structural build failures abort a
//! render; URL-resolution misses and storage policy issues never show up
//! here - they degrade to fallbacks or warning strings on the result.

use std::path::PathBuf;

use thiserror::Error;

use crate::domain::services::TreeBuildError;

/// Result type alias for Treenav operations
pub type MenuResult<T> = Result<T, MenuError>;

/// Main error type for Treenav operations
#[derive(Error, Debug)]
pub enum MenuError {
    /// Structural failure while assembling a menu tree
    #[error(transparent)]
    Build(#[from] TreeBuildError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Invalid TOML in a config or menus file
    #[error("invalid TOML in {file}: {message}")]
    InvalidToml { file: PathBuf, message: String },

    /// The retrieval collaborator failed
    #[error("menu source failed: {0}")]
    Source(anyhow::Error),
}

impl From<anyhow::Error> for MenuError {
    fn from(err: anyhow::Error) -> Self {
        MenuError::Source(err)
    }
}
