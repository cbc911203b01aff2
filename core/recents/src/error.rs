//! FILENAME: core/recents/src/error.rs

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RecentsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Config root is not a JSON object")]
    NotAnObject,

    #[error("Could not determine the home directory")]
    NoHomeDir,
}
