use thiserror::Error;

/// Errors surfaced by [`DnsClient`](crate::DnsClient).
#[derive(Debug, Error)]
pub enum Error {
    /// Transport-level failure: connection, TLS, timeout.
    #[error("HTTP transport error: {0}")]
    Http(#[from] reqwest::Error),

    /// The base URL could not be parsed.
    #[error("invalid API URL: {0}")]
    Url(#[from] url::ParseError),

    /// The token could not be turned into a request header.
    #[error("authentication setup failed: {message}")]
    Authentication { message: String },

    /// The API rejected the bearer token.
    #[error("API token was rejected (401 Unauthorized)")]
    InvalidToken,

    /// Non-success response from the API.
    #[error("API request failed with status {status}: {message}")]
    Api { status: u16, message: String },

    /// A success response whose body did not decode into the expected shape.
    #[error("failed to decode API response: {message}")]
    Deserialization { message: String, body: String },
}
