//! Error types for the Elasticsearch API library.
//!
//! This module contains the error type returned by every operation. Errors
//! split into two families: validation errors produced before any request is
//! dispatched, and transport errors produced while talking to the cluster.
//!
//! # Error Handling
//!
//! All operations return `Result<T, Error>` and fail fast: a request with a
//! missing required option never reaches the wire. HTTP error statuses from
//! the cluster are not errors at this level; the response is returned with
//! its status so callers can inspect the body Elasticsearch sent back.
//!
//! # Example
//!
//! ```rust
//! use elasticsearch_api::Error;
//!
//! let error = Error::MissingOption { key: "_index" };
//! assert_eq!(error.to_string(), "_index is required");
//! ```

use thiserror::Error;

use crate::transport::TransportError;

/// Errors that can occur when performing an API operation.
#[derive(Debug, Error)]
pub enum Error {
    /// A key the operation requires was absent from options and config.
    #[error("{key} is required")]
    MissingOption {
        /// The missing key, in the API's spelling (`_index`, `_type`, ...).
        key: &'static str,
    },

    /// An update was requested without a script or partial document.
    #[error("script or doc is required for update operation")]
    ScriptOrDocRequired,

    /// A multi get document resolved to no index.
    #[error("at least 1 or more docs supplied is missing index")]
    DocMissingIndex,

    /// A multi get document resolved to no type.
    #[error("at least 1 or more docs supplied is missing type")]
    DocMissingType,

    /// The request failed at the transport layer.
    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_option_names_the_key() {
        let error = Error::MissingOption { key: "_index" };
        assert_eq!(error.to_string(), "_index is required");

        let error = Error::MissingOption { key: "alias" };
        assert_eq!(error.to_string(), "alias is required");
    }

    #[test]
    fn test_update_error_message() {
        let error = Error::ScriptOrDocRequired;
        assert_eq!(
            error.to_string(),
            "script or doc is required for update operation"
        );
    }

    #[test]
    fn test_multi_get_error_messages() {
        assert_eq!(
            Error::DocMissingIndex.to_string(),
            "at least 1 or more docs supplied is missing index"
        );
        assert_eq!(
            Error::DocMissingType.to_string(),
            "at least 1 or more docs supplied is missing type"
        );
    }

    #[test]
    fn test_transport_error_converts() {
        let transport = TransportError::from(crate::transport::MaxRetriesExceededError {
            status: 429,
            tries: 3,
        });
        let error = Error::from(transport);

        assert!(matches!(error, Error::Transport(_)));
    }

    #[test]
    fn test_error_implements_std_error() {
        let error = Error::MissingOption { key: "_id" };
        let _: &dyn std::error::Error = &error;
    }
}
