//! Authenticated request layer.
//!
//! The [`Client`] type owns the credential token, the environment flag and
//! the underlying HTTP connection pool. Endpoint methods (defined in the
//! `api` modules) all funnel through [`Client::send`].

use crate::{Error, Request, Result};
use base64::{engine::general_purpose::STANDARD as BASE64, Engine};
use http::{header, HeaderMap, HeaderValue, StatusCode};
use serde::de::DeserializeOwned;
use std::sync::Arc;
use std::time::Instant;
use tokio_util::sync::CancellationToken;
use url::Url;

/// Production API host.
const PRODUCTION_URL: &str = "https://api.instabox.io";

/// Staging API host, selected by `ClientBuilder::test(true)`.
const STAGING_URL: &str = "https://staging.api.instabox.io";

/// An authenticated client for the Instabox API.
///
/// The client is constructed once with an API key and secret and is then
/// reused statelessly across arbitrarily many calls. It holds no per-call
/// mutable state; cloning is cheap and clones share the connection pool.
///
/// # Examples
///
/// ```no_run
/// use instabox::Client;
///
/// # async fn example() -> Result<(), instabox::Error> {
/// let client = Client::builder()
///     .key("my-api-key")
///     .secret("my-api-secret")
///     .test(true) // staging environment
///     .build()?;
///
/// let lockers = client.lockers(None).await?;
/// for locker in lockers {
///     println!("{}: {} {}", locker.id, locker.name, locker.city);
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    inner: Arc<ClientInner>,
    cancel: Option<CancellationToken>,
}

struct ClientInner {
    http_client: reqwest::Client,
    auth_header: HeaderValue,
    test: bool,
    base_url: Option<Url>,
}

impl Client {
    /// Creates a new `ClientBuilder` for configuring a client.
    pub fn builder() -> ClientBuilder {
        ClientBuilder::new()
    }

    /// Returns a handle whose calls are aborted when `token` fires.
    ///
    /// The handle shares the connection pool and credentials with `self`;
    /// only the calls made through it race the token. Triggering the token
    /// fails the in-flight call with [`Error::Cancelled`] and leaves every
    /// other concurrent call untouched.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use instabox::{Client, CancellationToken};
    ///
    /// # async fn example(client: Client) -> Result<(), instabox::Error> {
    /// let token = CancellationToken::new();
    /// let scoped = client.with_cancellation(token.clone());
    ///
    /// tokio::spawn(async move { token.cancel() });
    /// match scoped.warehouses().await {
    ///     Err(e) if e.is_cancelled() => println!("aborted"),
    ///     other => println!("{other:?}"),
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn with_cancellation(&self, token: CancellationToken) -> Client {
        Client {
            inner: Arc::clone(&self.inner),
            cancel: Some(token),
        }
    }

    /// Sends a request against the selected environment.
    ///
    /// The final header set starts from the client's `Authorization` header;
    /// headers carried by `request` are applied on top and win on a name
    /// collision. That includes `Authorization` itself: callers are not
    /// expected to override it, but the merge order does not prevent it.
    ///
    /// A response is successful only if its status code is in the inclusive
    /// range `[200, 399]`; any other status fails with [`Error::Status`]
    /// carrying the raw, unparsed response body. The body of a successful
    /// response is left untouched for the caller.
    pub async fn send(&self, request: Request) -> Result<reqwest::Response> {
        let url = self.request_url(&request.path);

        tracing::debug!(method = %request.method, url = %url, "sending request");

        let mut headers = HeaderMap::new();
        headers.insert(header::AUTHORIZATION, self.inner.auth_header.clone());
        for (name, value) in &request.headers {
            headers.insert(name, value.clone());
        }

        let mut builder = self
            .inner
            .http_client
            .request(request.method.clone(), url)
            .headers(headers);

        if let Some(body) = request.body {
            builder = builder.body(body);
        }

        let started = Instant::now();
        let response = match &self.cancel {
            Some(token) => tokio::select! {
                () = token.cancelled() => {
                    tracing::debug!(method = %request.method, path = %request.path, "request cancelled");
                    return Err(Error::Cancelled);
                }
                result = builder.send() => result?,
            },
            None => builder.send().await?,
        };

        let status = response.status();
        if status_is_success(status) {
            tracing::debug!(
                status = status.as_u16(),
                latency_ms = started.elapsed().as_millis() as u64,
                "received response"
            );
            Ok(response)
        } else {
            let headers = response.headers().clone();
            let body = response.text().await.unwrap_or_default();
            tracing::warn!(status = status.as_u16(), path = %request.path, "request failed");
            Err(Error::Status {
                status,
                headers,
                body,
            })
        }
    }

    /// Makes a GET request to the given path.
    pub async fn get(&self, path: impl Into<String>) -> Result<reqwest::Response> {
        self.send(Request::get(path)).await
    }

    /// Makes a POST request to the given path with an optional
    /// pre-serialized JSON body.
    pub async fn post(
        &self,
        path: impl Into<String>,
        body: Option<String>,
    ) -> Result<reqwest::Response> {
        let mut request = Request::post(path);
        request.body = body;
        self.send(request).await
    }

    /// Makes a PUT request to the given path with an optional
    /// pre-serialized JSON body.
    pub async fn put(
        &self,
        path: impl Into<String>,
        body: Option<String>,
    ) -> Result<reqwest::Response> {
        let mut request = Request::put(path);
        request.body = body;
        self.send(request).await
    }

    /// Makes a DELETE request to the given path.
    pub async fn delete(&self, path: impl Into<String>) -> Result<reqwest::Response> {
        self.send(Request::delete(path)).await
    }

    /// Sends a request and parses the response body as JSON.
    pub(crate) async fn send_json<T: DeserializeOwned>(&self, request: Request) -> Result<T> {
        let response = self.send(request).await?;
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Builds the absolute URL for a request path.
    ///
    /// The environment flag is read on every call, so one client targets
    /// one environment consistently for its whole lifetime. Base URL and
    /// path are joined with exactly one separating slash.
    fn request_url(&self, path: &str) -> String {
        let base = match &self.inner.base_url {
            Some(url) => url.as_str(),
            None if self.inner.test => STAGING_URL,
            None => PRODUCTION_URL,
        };
        format!(
            "{}/{}",
            base.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }
}

impl std::fmt::Debug for Client {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Client")
            .field("test", &self.inner.test)
            .finish_non_exhaustive()
    }
}

/// Success means any status in the inclusive range `[200, 399]`.
fn status_is_success(status: StatusCode) -> bool {
    (200..=399).contains(&status.as_u16())
}

/// Builder for configuring and creating a [`Client`].
///
/// The configuration surface is the API key, the API secret and the
/// environment flag. The credential token is derived once at [`build`]
/// and never recomputed; to change credentials, build a new client.
///
/// [`build`]: ClientBuilder::build
///
/// # Examples
///
/// ```no_run
/// use instabox::ClientBuilder;
///
/// # fn example() -> Result<(), instabox::Error> {
/// let client = ClientBuilder::new()
///     .key("my-api-key")
///     .secret("my-api-secret")
///     .build()?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Default)]
pub struct ClientBuilder {
    key: Option<String>,
    secret: Option<String>,
    test: bool,
    base_url: Option<Url>,
}

impl ClientBuilder {
    /// Creates a new `ClientBuilder` with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the API key.
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Sets the API secret.
    pub fn secret(mut self, secret: impl Into<String>) -> Self {
        self.secret = Some(secret.into());
        self
    }

    /// Targets the staging environment instead of production.
    pub fn test(mut self, test: bool) -> Self {
        self.test = test;
        self
    }

    /// Overrides host selection with an explicit base URL.
    ///
    /// Primarily a test seam for pointing the client at a local mock
    /// server; production callers pick their environment with [`test`]
    /// instead.
    ///
    /// [`test`]: ClientBuilder::test
    ///
    /// # Errors
    ///
    /// Returns an error if the URL is invalid.
    pub fn base_url(mut self, url: impl AsRef<str>) -> Result<Self> {
        let url = Url::parse(url.as_ref())
            .map_err(|e| Error::Configuration(format!("Invalid base URL: {e}")))?;
        self.base_url = Some(url);
        Ok(self)
    }

    /// Builds the configured `Client`.
    ///
    /// Derives the `Basic` authorization token from `key:secret` exactly
    /// once; every request made by the client reuses it.
    ///
    /// # Errors
    ///
    /// Returns an error if the key or secret is missing, or if the HTTP
    /// client fails to build.
    pub fn build(self) -> Result<Client> {
        let key = self
            .key
            .ok_or_else(|| Error::Configuration("API key is required".to_string()))?;
        let secret = self
            .secret
            .ok_or_else(|| Error::Configuration("API secret is required".to_string()))?;

        let token = BASE64.encode(format!("{key}:{secret}"));
        let mut auth_header = HeaderValue::from_str(&format!("Basic {token}"))
            .map_err(|e| Error::Configuration(format!("Invalid credentials: {e}")))?;
        auth_header.set_sensitive(true);

        let http_client = reqwest::Client::builder()
            .build()
            .map_err(|e| Error::Configuration(format!("Failed to build HTTP client: {e}")))?;

        Ok(Client {
            inner: Arc::new(ClientInner {
                http_client,
                auth_header,
                test: self.test,
                base_url: self.base_url,
            }),
            cancel: None,
        })
    }
}
