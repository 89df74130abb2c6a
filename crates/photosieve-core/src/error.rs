//! Error types for photosieve

use thiserror::Error;

#[derive(Debug, Error)]
pub enum PhotosieveError {
    // Query errors
    #[error("Invalid query: {reason}")]
    InvalidQuery { reason: String },

    // Collaborator errors
    #[error("Catalog unavailable: {reason}")]
    CatalogUnavailable { reason: String },

    #[error("Gazetteer unavailable: {reason}")]
    GazetteerUnavailable { reason: String },

    // Configuration errors
    #[error("Invalid configuration value for {key}: {reason}")]
    ConfigInvalid { key: String, reason: String },

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, PhotosieveError>;
