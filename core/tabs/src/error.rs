//! FILENAME: core/tabs/src/error.rs

use thiserror::Error;

/// Failure reported by the host toolkit's web view.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("{0}")]
pub struct SurfaceError(pub String);

impl SurfaceError {
    pub fn new(message: impl Into<String>) -> Self {
        SurfaceError(message.into())
    }
}

#[derive(Error, Debug)]
pub enum TabsError {
    #[error("Web surface error: {0}")]
    Surface(#[from] SurfaceError),

    #[error("Tab index {0} out of range")]
    IndexOutOfRange(usize),
}
