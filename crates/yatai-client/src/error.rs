//! Client error types

use thiserror::Error;

use crate::endpoint_url;
use crate::response::RawResponse;

/// Errors surfaced by client calls.
///
/// The client performs no recovery and no retries: every failure is handed
/// back as-is and the caller decides whether to retry, log or abort. A call
/// either fully succeeds or fails with one of these; there is no
/// partially-populated result.
#[derive(Debug, Error)]
pub enum Error {
    /// Network-level failure: DNS, connect, TLS, timeout or cancellation
    #[error("transport error: {0}")]
    Transport(#[source] reqwest::Error),
    /// The server answered with a non-2xx status
    #[error("unexpected HTTP status {}: {}", .response.status(), .response.text_lossy())]
    Status {
        /// The full response, body preserved as opaque bytes
        response: RawResponse,
    },
    /// A 2xx body that is not valid JSON or does not match the target shape
    #[error("response decode error: {source}")]
    Decode {
        /// The underlying JSON error
        #[source]
        source: serde_json::Error,
        /// The response the decode was attempted on
        response: RawResponse,
    },
    /// The request payload could not be serialized to JSON
    #[error("request encode error: {0}")]
    Encode(#[source] serde_json::Error),
    /// The endpoint and path could not be joined into a URL
    #[error(transparent)]
    Endpoint(#[from] endpoint_url::Error),
    /// The builder was executed without a required field
    #[error("incomplete request: missing {0}")]
    IncompleteRequest(&'static str),
}

impl Error {
    /// The raw response attached to this error, when one exists.
    pub fn response(&self) -> Option<&RawResponse> {
        match self {
            Error::Status { response } | Error::Decode { response, .. } => Some(response),
            _ => None,
        }
    }

    /// The HTTP status code attached to this error, when one exists.
    pub fn status(&self) -> Option<u16> {
        self.response().map(RawResponse::status)
    }
}

impl From<reqwest::Error> for Error {
    fn from(err: reqwest::Error) -> Self {
        Error::Transport(err)
    }
}
