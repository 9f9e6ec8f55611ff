//! Typed HTTP client for the Yatai deployment control plane.
//!
//! Every API operation composes the same pieces: an [`EndpointUrl`] joins
//! the path, [`YataiClient::request`] hands out a [`JsonRequestBuilder`]
//! pre-loaded with the auth headers, and the builder executes one JSON
//! round trip. Failures surface as the [`Error`] taxonomy with the raw
//! response attached; the client never retries on its own.
//!
//! # Example
//!
//! ```no_run
//! use std::str::FromStr;
//!
//! use yatai_client::{AuthHeaders, EndpointUrl, Error, YataiClient};
//!
//! async fn example() -> Result<(), Error> {
//!     let endpoint = EndpointUrl::from_str("https://yatai.example.com")
//!         .map_err(Error::from)?;
//!     let mut client = YataiClient::new(endpoint, "api-token");
//!     client.set_auth(AuthHeaders {
//!         org_id: "org-1".to_string(),
//!         user_id: "user-1".to_string(),
//!     });
//!
//!     let version = client.get_version().await?;
//!     println!("control plane {}", version.version);
//!     Ok(())
//! }
//! ```

pub mod client;
pub mod endpoint_url;
pub mod error;
pub mod headers;
pub mod request;
pub mod response;

pub use client::{AuthHeaders, YataiClient};
pub use endpoint_url::EndpointUrl;
pub use error::Error;
pub use request::JsonRequestBuilder;
pub use response::RawResponse;
/// HTTP verb type used with [`JsonRequestBuilder::method`].
pub use reqwest::Method;
/// Schema types exchanged with the control plane.
pub use yatai_types as types;
