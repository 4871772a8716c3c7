//! Error types for the smoke-test harness
//!
//! Transport failures and non-2xx answers are not errors here: the request
//! dispatcher folds them into an `ApiResponse`. What remains are start-up
//! problems, programmer errors and response shapes the scenario cannot use.

use thiserror::Error;

/// Result type alias using our Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Main error type for the harness
#[derive(Error, Debug)]
pub enum Error {
    // === Dispatcher Errors ===
    #[error("Unsupported HTTP method: {0}")]
    UnsupportedMethod(String),

    #[error("Invalid base URL '{url}': {reason}")]
    InvalidBaseUrl { url: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    HttpClient(#[source] reqwest::Error),

    // === Scenario Errors ===
    #[error("Unexpected response from {endpoint}: {reason}")]
    UnexpectedResponse { endpoint: String, reason: String },

    // === Configuration Errors ===
    #[error("Invalid configuration file: {0}")]
    ConfigParse(String),

    #[error("Failed to read file '{path}': {error}")]
    FileRead { path: String, error: String },
}

impl Error {
    /// Create an invalid base URL error
    pub fn invalid_base_url(url: &str, reason: impl ToString) -> Self {
        Self::InvalidBaseUrl {
            url: url.to_string(),
            reason: reason.to_string(),
        }
    }

    /// Create an unexpected response error for an endpoint
    pub fn unexpected_response(endpoint: &str, reason: &str) -> Self {
        Self::UnexpectedResponse {
            endpoint: endpoint.to_string(),
            reason: reason.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages_name_the_culprit() {
        let err = Error::UnsupportedMethod("PATCH".to_string());
        assert_eq!(err.to_string(), "Unsupported HTTP method: PATCH");

        let err = Error::unexpected_response("/instructor/courses", "missing 'data'");
        assert_eq!(
            err.to_string(),
            "Unexpected response from /instructor/courses: missing 'data'"
        );

        let err = Error::invalid_base_url("nope", "relative URL without a base");
        assert!(err.to_string().contains("'nope'"));
    }
}
