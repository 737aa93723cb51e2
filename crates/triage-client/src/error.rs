//! Error types for triage-client

use thiserror::Error;

/// Fixed message surfaced to users for every failed analysis.
///
/// The variants below are distinguished for logs and tests only; the UI
/// collapses all of them to this one line.
pub const USER_MESSAGE: &str = "Failed to connect to the server. Is the backend running?";

/// Client error type
#[derive(Debug, Error)]
pub enum Error {
    /// Network error
    #[error("network error: {0}")]
    Network(String),

    /// API error
    #[error("api error: {0}")]
    Api(String),

    /// Timeout
    #[error("timeout after {0}ms")]
    Timeout(u64),

    /// Invalid response
    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

impl Error {
    /// The user-facing message for this error.
    #[must_use]
    pub fn user_message(&self) -> &'static str {
        USER_MESSAGE
    }
}

/// Result type alias
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_variant_collapses_to_the_fixed_message() {
        let errors = [
            Error::Network("connection refused".to_string()),
            Error::Api("backend returned 500 Internal Server Error".to_string()),
            Error::Timeout(60_000),
            Error::InvalidResponse("expected value at line 1".to_string()),
        ];

        for error in errors {
            assert_eq!(
                error.user_message(),
                "Failed to connect to the server. Is the backend running?"
            );
        }
    }

    #[test]
    fn display_keeps_the_transport_detail() {
        let error = Error::Timeout(5000);
        assert_eq!(error.to_string(), "timeout after 5000ms");
    }
}
