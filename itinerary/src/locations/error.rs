//! Location table error types.

/// Errors that can occur when loading a location table.
#[derive(Debug, thiserror::Error)]
pub enum LocationError {
    /// Reading the table failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the table JSON
    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),
}
