//! Error types for the tutor.

use econ_content::ContentError;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum TutorError {
    #[error("Failed to read config {path}: {source}")]
    Config {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Content(#[from] ContentError),
}

pub type Result<T> = std::result::Result<T, TutorError>;
