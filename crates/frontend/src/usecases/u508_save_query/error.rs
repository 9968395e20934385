use thiserror::Error;

/// Failure of the "create saved query" call
///
/// Every variant ends up in the same user-facing error notification.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SaveQueryError {
    #[error("Failed to encode request: {0}")]
    Encode(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP error: {status} {status_text}")]
    Status { status: u16, status_text: String },

    #[error("Failed to parse response: {0}")]
    Decode(String),
}

impl From<serde_qs::Error> for SaveQueryError {
    fn from(e: serde_qs::Error) -> Self {
        SaveQueryError::Encode(e.to_string())
    }
}
