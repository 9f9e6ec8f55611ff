//! Generic JSON request builder.

use std::collections::HashMap;
use std::time::Duration;

use reqwest::header::CONTENT_TYPE;
use reqwest::{Client, Method};
use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::Error;
use crate::response::RawResponse;

/// Single-use builder for one JSON-over-HTTP request.
///
/// Accumulates verb, URL, headers and an optional JSON payload, then
/// executes exactly one round trip. Setters take and return the builder by
/// value, so each call chain is a fresh request with no state shared across
/// calls; execution consumes it. At-most-once delivery, no internal
/// retries.
///
/// Dropping the future returned by [`send`](Self::send) or
/// [`send_json`](Self::send_json) cancels the round trip.
#[derive(Debug)]
pub struct JsonRequestBuilder {
    client: Client,
    method: Option<Method>,
    url: Option<String>,
    headers: HashMap<String, String>,
    body: Option<Vec<u8>>,
    timeout: Option<Duration>,
    // Builder-time failure, surfaced by the execute step so call sites stay
    // fluent.
    deferred_err: Option<Error>,
}

impl JsonRequestBuilder {
    /// New builder executing on the given transport.
    pub fn new(client: Client) -> Self {
        Self {
            client,
            method: None,
            url: None,
            headers: HashMap::new(),
            body: None,
            timeout: None,
            deferred_err: None,
        }
    }

    /// Merge headers into the current set.
    ///
    /// Input keys override identically-named existing keys; everything else
    /// is kept.
    pub fn headers<I, K, V>(mut self, headers: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in headers {
            self.headers.insert(key.into(), value.into());
        }
        self
    }

    /// Set one header, overriding any existing value for the key.
    pub fn header(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.headers.insert(key.into(), value.into());
        self
    }

    /// HTTP verb; required before execute.
    pub fn method(mut self, method: Method) -> Self {
        self.method = Some(method);
        self
    }

    /// Fully-qualified target URL, path and query already joined; required
    /// before execute.
    pub fn url(mut self, url: impl AsRef<str>) -> Self {
        self.url = Some(url.as_ref().to_string());
        self
    }

    /// JSON request body.
    ///
    /// Serialized eagerly; the JSON content-type header is set at execute
    /// time. A serialization failure is surfaced by the execute step as
    /// [`Error::Encode`]. Omit entirely for calls with no body.
    pub fn payload<T: Serialize + ?Sized>(mut self, payload: &T) -> Self {
        match serde_json::to_vec(payload) {
            Ok(body) => self.body = Some(body),
            Err(err) => self.deferred_err = Some(Error::Encode(err)),
        }
        self
    }

    /// Per-request deadline, honored by the transport.
    ///
    /// Expiry surfaces as [`Error::Transport`].
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Effective headers accumulated so far.
    pub fn header_map(&self) -> &HashMap<String, String> {
        &self.headers
    }

    /// Execute the request and validate the status, returning the raw
    /// response.
    ///
    /// A non-2xx status becomes [`Error::Status`] with the body preserved
    /// as opaque bytes, never parsed as a result shape.
    pub async fn send(self) -> Result<RawResponse, Error> {
        if let Some(err) = self.deferred_err {
            return Err(err);
        }
        let method = self.method.ok_or(Error::IncompleteRequest("method"))?;
        let url = self.url.ok_or(Error::IncompleteRequest("url"))?;

        let mut request = self.client.request(method, &url);
        for (key, value) in &self.headers {
            request = request.header(key.as_str(), value.as_str());
        }
        if let Some(body) = self.body {
            request = request.header(CONTENT_TYPE, "application/json").body(body);
        }
        if let Some(timeout) = self.timeout {
            request = request.timeout(timeout);
        }

        let response = request.send().await.map_err(Error::Transport)?;
        let response = RawResponse::read(response).await?;
        if !response.is_success() {
            return Err(Error::Status { response });
        }
        Ok(response)
    }

    /// Execute the request and decode the 2xx body as JSON into `R`.
    ///
    /// Decode failures keep the raw response attached, so callers needing
    /// low-level access to the body are not cut off by a bad one.
    pub async fn send_json<R: DeserializeOwned>(self) -> Result<R, Error> {
        let response = self.send().await?;
        match response.json() {
            Ok(decoded) => Ok(decoded),
            Err(source) => {
                tracing::warn!(
                    status = response.status(),
                    "response body did not decode: {}",
                    source
                );
                Err(Error::Decode { source, response })
            }
        }
    }
}
