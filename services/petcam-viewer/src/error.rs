//! Error types for the PetCam viewer

/// Errors that can occur while talking to the capture service
#[derive(Debug, thiserror::Error)]
pub enum ViewerError {
    #[error("Request failed: {0}")]
    RequestFailed(u16),

    #[error("HTTP request failed: {0}")]
    Http(String),

    #[error("JSON parse error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Load failed: {0}")]
    Load(String),

    #[error("Capture failed: {0}")]
    Capture(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for viewer operations
pub type Result<T> = std::result::Result<T, ViewerError>;
