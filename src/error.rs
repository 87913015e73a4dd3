//! Error types for Instabox API calls.
//!
//! Every failure is surfaced to the immediate caller; the library performs
//! no retries and no local recovery. HTTP failures keep the raw response
//! body so callers can distinguish validation errors from auth errors by
//! inspecting status and body themselves.

use http::{HeaderMap, StatusCode};

/// The main error type for Instabox API calls.
///
/// # Examples
///
/// ```no_run
/// use instabox::{Client, Error};
///
/// # async fn example() -> Result<(), Error> {
/// let client = Client::builder().key("key").secret("secret").build()?;
///
/// match client.order("ord_123").await {
///     Ok(order) => println!("status: {}", order.status),
///     Err(Error::Status { status, body, .. }) => {
///         eprintln!("API rejected the request ({status}): {body}");
///     }
///     Err(e) => eprintln!("other error: {e}"),
/// }
/// # Ok(())
/// # }
/// ```
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A network-level error occurred before a response was received
    /// (connection failed, DNS lookup failed, etc.).
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// The call was aborted by its cancellation token.
    #[error("Request cancelled")]
    Cancelled,

    /// The server answered with a status code outside `[200, 399]`.
    ///
    /// The body is the raw response text, never parsed: the API's error
    /// payloads are not part of this library's contract.
    #[error("HTTP error {status}: {body}")]
    Status {
        /// The HTTP status code.
        status: StatusCode,
        /// The response headers.
        headers: HeaderMap,
        /// The raw response body.
        body: String,
    },

    /// A response body was not valid JSON where JSON was expected, or a
    /// request payload failed to serialize.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid client configuration (missing credentials, malformed
    /// base URL or header value).
    #[error("Configuration error: {0}")]
    Configuration(String),
}

impl Error {
    /// Returns the HTTP status code if this error carries one.
    pub fn status(&self) -> Option<StatusCode> {
        match self {
            Error::Status { status, .. } => Some(*status),
            Error::Network(e) => e.status(),
            _ => None,
        }
    }

    /// Returns the raw response body for HTTP failures, `None` otherwise.
    pub fn response_body(&self) -> Option<&str> {
        match self {
            Error::Status { body, .. } => Some(body),
            _ => None,
        }
    }

    /// Returns `true` if the call failed because its cancellation token
    /// fired.
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Error::Cancelled)
    }
}

/// A specialized `Result` type for Instabox API calls.
pub type Result<T> = std::result::Result<T, Error>;
