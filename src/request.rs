//! Request descriptor passed to the authenticated request layer.

use http::{header, HeaderMap, HeaderName, HeaderValue, Method};
use serde::Serialize;

/// Description of a single API request.
///
/// Holds everything [`Client::send`](crate::Client::send) needs: the HTTP
/// method, a path relative to the selected base URL, extra headers, and an
/// optional body already serialized to a JSON string.
#[derive(Debug, Clone)]
pub struct Request {
    /// The HTTP method (GET, POST, PUT or DELETE).
    pub method: Method,

    /// The request path, relative to the base URL, without a leading slash.
    pub path: String,

    /// Additional headers for this request.
    ///
    /// Applied on top of the client's authorization header; on a name
    /// collision the value given here wins.
    pub headers: HeaderMap,

    /// The request body, pre-serialized to a JSON string.
    pub body: Option<String>,
}

impl Request {
    /// Creates a new `Request` with the given method and path.
    pub fn new(method: Method, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            headers: HeaderMap::new(),
            body: None,
        }
    }

    /// Creates a GET request for the given path.
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(Method::GET, path)
    }

    /// Creates a POST request for the given path.
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(Method::POST, path)
    }

    /// Creates a PUT request for the given path.
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(Method::PUT, path)
    }

    /// Creates a DELETE request for the given path.
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(Method::DELETE, path)
    }

    /// Adds a header to the request.
    ///
    /// # Errors
    ///
    /// Returns an error if the header name or value is invalid.
    pub fn header(
        mut self,
        name: impl AsRef<str>,
        value: impl AsRef<str>,
    ) -> Result<Self, crate::Error> {
        let name = HeaderName::try_from(name.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header name: {e}")))?;
        let value = HeaderValue::try_from(value.as_ref())
            .map_err(|e| crate::Error::Configuration(format!("Invalid header value: {e}")))?;
        self.headers.insert(name, value);
        Ok(self)
    }

    /// Sets the `Content-Type` header to a fixed vendor media type.
    ///
    /// Each endpoint carries its own version-specific media type; the exact
    /// string is part of the server contract for that operation.
    pub fn content_type(mut self, media_type: &'static str) -> Self {
        self.headers
            .insert(header::CONTENT_TYPE, HeaderValue::from_static(media_type));
        self
    }

    /// Serializes `body` to JSON and attaches it as the request body.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn json<T: Serialize + ?Sized>(mut self, body: &T) -> Result<Self, crate::Error> {
        self.body = Some(serde_json::to_string(body)?);
        Ok(self)
    }
}
