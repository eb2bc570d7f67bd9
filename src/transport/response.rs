//! HTTP response representation.

use serde_json::Value;

/// Status and parsed body of a completed request.
///
/// The transport returns a response for every reply it receives, including
/// error statuses, so operations can implement status-driven behavior such
/// as existence checks. Bodies that are not valid JSON are wrapped by the
/// transport rather than dropped.
#[derive(Debug, Clone, PartialEq)]
pub struct TransportResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response body parsed as JSON.
    pub body: Value,
}

impl TransportResponse {
    /// Creates a response from a status code and parsed body.
    #[must_use]
    pub const fn new(status: u16, body: Value) -> Self {
        Self { status, body }
    }

    /// Returns `true` when the status is in the 2xx range.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        matches!(self.status, 200..=299)
    }
}
