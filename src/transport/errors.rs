//! Transport-specific error types.
//!
//! The transport distinguishes only two failure modes: the request never
//! completed (network error), or it kept failing with a retryable status
//! until the retry budget ran out. HTTP error statuses from a completed
//! request are not transport errors; they come back as a normal
//! [`TransportResponse`](crate::transport::TransportResponse) so operations
//! and callers can act on the status themselves.

use thiserror::Error;

/// Error returned when maximum retry attempts have been exhausted.
///
/// Raised when a request continues to fail with a `429` or `500` response
/// after all requested attempts have been made.
///
/// # Example
///
/// ```rust
/// use elasticsearch_api::transport::MaxRetriesExceededError;
///
/// let error = MaxRetriesExceededError { status: 429, tries: 3 };
///
/// assert_eq!(
///     error.to_string(),
///     "Exceeded maximum retry count of 3. Last status: 429"
/// );
/// ```
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Exceeded maximum retry count of {tries}. Last status: {status}")]
pub struct MaxRetriesExceededError {
    /// The HTTP status code of the last response.
    pub status: u16,
    /// The number of tries that were attempted.
    pub tries: u32,
}

/// Unified error type for transport failures.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network or connection error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Maximum retry attempts exhausted.
    #[error(transparent)]
    MaxRetries(#[from] MaxRetriesExceededError),
}
