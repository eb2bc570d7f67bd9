//! Transport layer for cluster communication.
//!
//! This module provides the wire-level layer the operation modules sit on.
//! Operations describe what to send as a [`TransportRequest`]; a
//! [`Transport`] implementation dispatches it and hands back a
//! [`TransportResponse`] carrying the status code and parsed JSON body.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`Transport`]: The dispatch trait operations are generic over
//! - [`HttpTransport`]: The default reqwest-backed implementation
//! - [`TransportRequest`]: A request to be sent to the cluster
//! - [`TransportResponse`]: A completed response, whatever its status
//! - [`HttpMethod`]: Supported HTTP methods (GET, PUT, POST, DELETE, HEAD)
//! - [`Body`]: Request body, JSON or newline delimited JSON
//!
//! # Status Handling
//!
//! A completed request always produces an `Ok` response, including `4xx`
//! and `5xx` statuses. The existence checks depend on this: they issue a
//! `HEAD` request and read the status off the response. Transport errors
//! are reserved for requests that never completed or exhausted their retry
//! budget.
//!
//! # Retry Behavior
//!
//! The default transport retries transient failures when a retry budget is
//! requested:
//!
//! - **429 (Too Many Requests)**: Retries using the `Retry-After` header
//!   value, or 1 second when not present
//! - **500 (Server Error)**: Retries with a fixed 1-second delay
//! - **Other statuses**: Returned immediately without retry
//!
//! The default `tries` is 1, meaning no automatic retries. Configure via
//! [`TransportRequest::tries`] to enable them.

mod errors;
mod http;
mod request;
mod response;

pub use errors::{MaxRetriesExceededError, TransportError};
pub use http::{HttpTransport, LIB_VERSION, RETRY_WAIT_TIME};
pub use request::{Body, HttpMethod, TransportRequest};
pub use response::TransportResponse;

/// Dispatches requests to a cluster.
///
/// The [`crate::Client`] is generic over this trait, so tests can swap the
/// default [`HttpTransport`] for an in-memory fake. Implementations must
/// return a response for every completed request, reserving errors for
/// requests that never produced one.
#[allow(async_fn_in_trait)]
pub trait Transport: Send + Sync {
    /// Sends a request and returns the completed response.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] when the request could not be completed.
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError>;
}
