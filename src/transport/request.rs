//! HTTP request description.
//!
//! Operations build a [`TransportRequest`] and hand it to a
//! [`Transport`](crate::transport::Transport). The request is a plain value:
//! method, path relative to the configured base URL, an optional body, and a
//! retry budget. Keeping it inert makes operations easy to test without a
//! network.

use std::fmt;

use serde_json::Value;

/// HTTP methods used by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HttpMethod {
    /// HTTP GET.
    Get,
    /// HTTP PUT.
    Put,
    /// HTTP POST.
    Post,
    /// HTTP DELETE.
    Delete,
    /// HTTP HEAD.
    Head,
}

impl fmt::Display for HttpMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let method = match self {
            Self::Get => "get",
            Self::Put => "put",
            Self::Post => "post",
            Self::Delete => "delete",
            Self::Head => "head",
        };
        write!(f, "{method}")
    }
}

/// A request body together with its content type.
///
/// Most endpoints take a JSON document. The bulk and multi search endpoints
/// take newline delimited JSON instead, where each line is a complete JSON
/// value and the payload ends with a newline.
#[derive(Debug, Clone, PartialEq)]
pub enum Body {
    /// A single JSON document, sent as `application/json`.
    Json(Value),
    /// Newline delimited JSON, sent as `application/x-ndjson`.
    Ndjson(String),
}

impl Body {
    /// Returns the `Content-Type` header value for this body.
    #[must_use]
    pub const fn as_content_type(&self) -> &'static str {
        match self {
            Self::Json(_) => "application/json",
            Self::Ndjson(_) => "application/x-ndjson",
        }
    }

    /// Renders the body into the bytes sent over the wire.
    #[must_use]
    pub fn to_payload(&self) -> String {
        match self {
            Self::Json(value) => value.to_string(),
            Self::Ndjson(payload) => payload.clone(),
        }
    }
}

/// A request ready for dispatch by a transport.
///
/// # Example
///
/// ```rust
/// use elasticsearch_api::{Body, HttpMethod, TransportRequest};
/// use serde_json::json;
///
/// let request = TransportRequest::post("/kitteh/_search")
///     .json(json!({"query": {"match_all": {}}}));
///
/// assert_eq!(request.method, HttpMethod::Post);
/// assert_eq!(request.path, "/kitteh/_search");
/// assert!(matches!(request.body, Some(Body::Json(_))));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct TransportRequest {
    /// HTTP method for the request.
    pub method: HttpMethod,
    /// Path and query string relative to the base URL.
    pub path: String,
    /// Optional request body.
    pub body: Option<Body>,
    /// Maximum attempts before the transport gives up on a retryable status.
    pub tries: u32,
}

impl TransportRequest {
    /// Creates a request with the given method and path.
    #[must_use]
    pub fn new(method: HttpMethod, path: impl Into<String>) -> Self {
        Self {
            method,
            path: path.into(),
            body: None,
            tries: 1,
        }
    }

    /// Creates a GET request.
    #[must_use]
    pub fn get(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Get, path)
    }

    /// Creates a PUT request.
    #[must_use]
    pub fn put(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Put, path)
    }

    /// Creates a POST request.
    #[must_use]
    pub fn post(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Post, path)
    }

    /// Creates a DELETE request.
    #[must_use]
    pub fn delete(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Delete, path)
    }

    /// Creates a HEAD request.
    #[must_use]
    pub fn head(path: impl Into<String>) -> Self {
        Self::new(HttpMethod::Head, path)
    }

    /// Attaches a JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(Body::Json(body));
        self
    }

    /// Attaches a newline delimited JSON body.
    #[must_use]
    pub fn ndjson(mut self, payload: impl Into<String>) -> Self {
        self.body = Some(Body::Ndjson(payload.into()));
        self
    }

    /// Sets the maximum number of attempts for retryable statuses.
    #[must_use]
    pub const fn tries(mut self, tries: u32) -> Self {
        self.tries = tries;
        self
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn test_method_display_is_lowercase() {
        assert_eq!(HttpMethod::Get.to_string(), "get");
        assert_eq!(HttpMethod::Put.to_string(), "put");
        assert_eq!(HttpMethod::Post.to_string(), "post");
        assert_eq!(HttpMethod::Delete.to_string(), "delete");
        assert_eq!(HttpMethod::Head.to_string(), "head");
    }

    #[test]
    fn test_body_content_types() {
        assert_eq!(
            Body::Json(json!({})).as_content_type(),
            "application/json"
        );
        assert_eq!(
            Body::Ndjson(String::new()).as_content_type(),
            "application/x-ndjson"
        );
    }

    #[test]
    fn test_body_payload_rendering() {
        let body = Body::Json(json!({"field": 1}));
        assert_eq!(body.to_payload(), r#"{"field":1}"#);

        let body = Body::Ndjson("{\"index\":{}}\n{\"field\":1}\n".to_string());
        assert_eq!(body.to_payload(), "{\"index\":{}}\n{\"field\":1}\n");
    }

    #[test]
    fn test_request_defaults() {
        let request = TransportRequest::get("/kitteh");

        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/kitteh");
        assert!(request.body.is_none());
        assert_eq!(request.tries, 1);
    }

    #[test]
    fn test_request_builder_chains() {
        let request = TransportRequest::post("/_bulk")
            .ndjson("{\"index\":{}}\n")
            .tries(3);

        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.body, Some(Body::Ndjson("{\"index\":{}}\n".to_string())));
        assert_eq!(request.tries, 3);
    }

    #[test]
    fn test_verb_constructors() {
        assert_eq!(TransportRequest::put("/a").method, HttpMethod::Put);
        assert_eq!(TransportRequest::delete("/a").method, HttpMethod::Delete);
        assert_eq!(TransportRequest::head("/a").method, HttpMethod::Head);
    }
}
