//! Error types for the frame worker
//!
//! Uses thiserror for ergonomic error definitions.
//! Most failures are recovered where they happen (zero market caps, clamped
//! pages, default config); whatever reaches the router becomes a plain 500.

use thiserror::Error;

/// Custom Result type using our Error
pub type Result<T> = std::result::Result<T, FrameError>;

/// Frame worker errors
#[derive(Error, Debug)]
pub enum FrameError {
    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// HTTP request errors
    #[error("HTTP error: {0}")]
    Http(String),

    /// Market data API errors (bad status, missing fields)
    #[error("Market data error: {0}")]
    MarketData(String),

    /// JSON parsing errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Frame protocol allows at most four buttons
    #[error("Too many frame buttons: {0} (max {max})", max = crate::frame::MAX_BUTTONS)]
    TooManyButtons(usize),
}

impl From<reqwest::Error> for FrameError {
    fn from(err: reqwest::Error) -> Self {
        FrameError::Http(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = FrameError::TooManyButtons(5);
        assert_eq!(err.to_string(), "Too many frame buttons: 5 (max 4)");

        let err = FrameError::MarketData("HTTP 503 for 0xabc".into());
        assert_eq!(err.to_string(), "Market data error: HTTP 503 for 0xabc");
    }

    #[test]
    fn test_error_conversion() {
        let json_err = serde_json::from_str::<i32>("invalid").unwrap_err();
        let err: FrameError = json_err.into();
        assert!(matches!(err, FrameError::Json(_)));
    }
}
