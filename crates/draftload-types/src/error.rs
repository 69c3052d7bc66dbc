//! Error types for draftload

use thiserror::Error;

/// Configuration-related errors
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Configuration directory not found")]
    NotFound,

    #[error("Failed to parse configuration: {0}")]
    ParseError(String),

    #[error("Failed to save configuration: {0}")]
    SaveError(String),

    #[error("No ZIP directory configured. Pass --zips or run: draftload config --set-zip-directory <CSV>")]
    ZipDirectoryNotSet,
}

#[derive(Debug, Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("File not found: {0}")]
    FileNotFound(String),

    #[error("Invalid ZIP code: {0:?} (expected 5 digits)")]
    InvalidZipCode(String),

    #[error("Geocoding failed: {0}")]
    Geocoding(String),
}

pub type Result<T> = std::result::Result<T, Error>;
