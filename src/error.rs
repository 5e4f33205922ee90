use thiserror::Error;

/// Main error type for the rankings dashboard
#[derive(Error, Debug)]
pub enum CourtsideError {
    // Configuration errors
    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    // Network errors
    #[error("HTTP request error: {0}")]
    Http(#[from] reqwest::Error),

    /// Non-success response from the rankings backend. No retry is
    /// attempted; callers surface this as a terminal load error.
    #[error("Rankings fetch failed: status {status} - {message}")]
    Fetch { status: u16, message: String },

    // Serialization errors
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),

    // Persisted preference errors (recovered by falling back to defaults)
    #[error("Preference parse error: {0}")]
    PrefsParse(String),

    // IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // Generic errors
    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for CourtsideError
pub type Result<T> = std::result::Result<T, CourtsideError>;
