use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum FinderError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Fetch error: {0}")]
    FetchError(String),

    #[error("Parse error: {0}")]
    ParseError(String),
}

impl From<reqwest::Error> for FinderError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            FinderError::FetchError("Request timeout".to_string())
        } else if err.is_connect() {
            FinderError::FetchError("Failed to connect to search endpoint".to_string())
        } else if let Some(status) = err.status() {
            FinderError::FetchError(format!("HTTP {}: {}", status, err))
        } else {
            FinderError::FetchError(err.to_string())
        }
    }
}

impl From<serde_json::Error> for FinderError {
    fn from(err: serde_json::Error) -> Self {
        FinderError::ParseError(err.to_string())
    }
}

// Result type alias for convenience
pub type FinderResult<T> = Result<T, FinderError>;
