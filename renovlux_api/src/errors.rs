//! Error types for the API client.

/// Errors that can occur when making API requests.
///
/// Every variant carries an HTTP-equivalent [`status`](Error::status) and a
/// [`code`](Error::code), so callers can handle all failures through one shape.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The request did not complete within the client timeout.
    #[error("Request timeout")]
    Timeout,
    /// No HTTP response was obtained (connection refused, DNS, body read).
    #[error("{0}")]
    Network(String),
    /// A success response whose body was not JSON or did not fit the expected payload.
    #[error("{0}")]
    Parse(String),
    /// The backend answered with a non-success status.
    #[error("{message}")]
    HttpStatus {
        status: u16,
        message: String,
        code: Option<String>,
    },
}

impl Error {
    /// HTTP-equivalent status: 408 for timeouts, 0 when no response was usable.
    pub fn status(&self) -> u16 {
        match self {
            Error::Timeout => 408,
            Error::Network(_) | Error::Parse(_) => 0,
            Error::HttpStatus { status, .. } => *status,
        }
    }

    /// Short machine-readable code. Backend errors only carry one when the
    /// error body supplied it.
    pub fn code(&self) -> Option<&str> {
        match self {
            Error::Timeout => Some("TIMEOUT"),
            Error::Network(_) => Some("NETWORK_ERROR"),
            Error::Parse(_) => Some("PARSE_ERROR"),
            Error::HttpStatus { code, .. } => code.as_deref(),
        }
    }
}
