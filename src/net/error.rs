//! Error type shared by the transport and the typed API client.

/// Everything that can go wrong between a state action and the backend.
///
/// State actions never surface these to the UI; they log them and keep their
/// prior state.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ApiError {
    #[error("network error: {0}")]
    Network(String),
    #[error("http status {0}")]
    Status(u16),
    #[error("unexpected response body: {0}")]
    Decode(String),
    #[error("csrf token is not available")]
    MissingCsrfToken,
    #[error("http transport not available outside the browser")]
    Unavailable,
}

impl From<serde_json::Error> for ApiError {
    fn from(err: serde_json::Error) -> Self {
        Self::Decode(err.to_string())
    }
}
