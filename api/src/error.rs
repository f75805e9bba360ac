//! Failure modes of a weather lookup.

use thiserror::Error;

/// The only message a user ever sees for a failed lookup.
pub const FETCH_FAILURE_MESSAGE: &str = "City not found. Please try again.";

/// Why a weather lookup failed.
///
/// The variants exist for logging. Every variant maps to the same
/// [`FETCH_FAILURE_MESSAGE`] through [`FetchError::user_message`].
#[derive(Error, Debug)]
pub enum FetchError {
    /// No API key was configured, so no request was sent.
    #[error("no OpenWeatherMap API key configured")]
    MissingApiKey,

    /// The HTTP client could not be constructed.
    #[error("failed to build HTTP client: {0}")]
    Client(#[source] reqwest::Error),

    /// The request never produced a response (DNS, TLS, connection, timeout).
    #[error("request failed: {0}")]
    Network(#[source] reqwest::Error),

    /// The provider answered with a non-2xx status.
    #[error("weather service responded with status {0}")]
    Status(u16),

    /// The body was not JSON or did not match the expected schema.
    #[error("unexpected response body: {0}")]
    Malformed(String),
}

impl FetchError {
    pub fn user_message(&self) -> &'static str {
        FETCH_FAILURE_MESSAGE
    }
}

// The request URL carries the API key, so it is stripped before the error can
// reach a log line.
impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        Self::Network(err.without_url())
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(err: serde_json::Error) -> Self {
        Self::Malformed(err.to_string())
    }
}
