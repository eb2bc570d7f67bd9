//! Default HTTP transport backed by reqwest.
//!
//! This module provides the [`HttpTransport`] type that dispatches
//! [`TransportRequest`]s to the configured cluster with automatic retry
//! handling for `429` and `500` responses.

use std::collections::HashMap;
use std::time::Duration;

use serde_json::Value;

use crate::config::ElasticsearchConfig;
use crate::transport::errors::{MaxRetriesExceededError, TransportError};
use crate::transport::request::{HttpMethod, TransportRequest};
use crate::transport::response::TransportResponse;
use crate::transport::Transport;

/// Fixed retry wait time in seconds.
pub const RETRY_WAIT_TIME: u64 = 1;

/// Library version from Cargo.toml.
pub const LIB_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP transport for talking to an Elasticsearch cluster.
///
/// The transport handles:
/// - URL construction from the configured base URL
/// - Default headers including User-Agent and Accept
/// - Basic auth credentials from the configuration
/// - Automatic retry logic for `429` and `500` responses
///
/// Every completed request produces a [`TransportResponse`], whatever its
/// status. Operations that care about error statuses (existence checks in
/// particular) read them off the response.
///
/// # Thread Safety
///
/// `HttpTransport` is `Send + Sync`, making it safe to share across async
/// tasks.
#[derive(Debug)]
pub struct HttpTransport {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// Base URL without a trailing slash (e.g. `http://localhost:9200`).
    base_url: String,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
    /// Basic auth credentials applied to every request.
    basic_auth: Option<(String, String)>,
}

// Verify HttpTransport is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpTransport>();
};

impl HttpTransport {
    /// Creates a transport for the given configuration.
    ///
    /// # Panics
    ///
    /// Panics if the underlying reqwest client cannot be created. This should
    /// only happen in extremely unusual circumstances (e.g., TLS
    /// initialization failure).
    ///
    /// # Example
    ///
    /// ```rust
    /// use elasticsearch_api::{ElasticsearchConfig, HttpTransport};
    ///
    /// let config = ElasticsearchConfig::builder()
    ///     .base_url("http://localhost:9200")
    ///     .build();
    /// let transport = HttpTransport::new(&config);
    /// ```
    #[must_use]
    pub fn new(config: &ElasticsearchConfig) -> Self {
        let base_url = config.base_url().trim_end_matches('/').to_string();

        // Build User-Agent header
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent = format!(
            "{user_agent_prefix}Elasticsearch API Library v{LIB_VERSION} | Rust {rust_version}"
        );

        // Build default headers
        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());

        let basic_auth = config
            .basic_auth()
            .map(|(username, password)| (username.to_string(), password.to_string()));

        // Create reqwest client
        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().expect("Failed to create HTTP client");

        Self {
            client,
            base_url,
            default_headers,
            basic_auth,
        }
    }

    /// Returns the base URL for this transport.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default headers for this transport.
    #[must_use]
    pub const fn default_headers(&self) -> &HashMap<String, String> {
        &self.default_headers
    }

    /// Parses the `Retry-After` header, rejecting non-finite and negative
    /// values.
    fn parse_retry_after(headers: &reqwest::header::HeaderMap) -> Option<f64> {
        headers
            .get("Retry-After")
            .and_then(|value| value.to_str().ok())
            .and_then(|value| value.parse::<f64>().ok())
            .filter(|seconds| seconds.is_finite() && *seconds >= 0.0)
    }

    /// Calculates the retry delay based on status code and `Retry-After`.
    fn calculate_retry_delay(status: u16, retry_after: Option<f64>) -> Duration {
        // For 429: use Retry-After if present, otherwise fixed delay
        // For 500: always use fixed delay (ignore Retry-After)
        if status == 429 {
            if let Some(seconds) = retry_after {
                return Duration::from_secs_f64(seconds);
            }
        }
        Duration::from_secs(RETRY_WAIT_TIME)
    }

    /// Parses a response body as JSON with fallbacks for empty and invalid
    /// payloads.
    fn parse_body(status: u16, body_text: &str) -> Value {
        if body_text.is_empty() {
            serde_json::json!({})
        } else {
            serde_json::from_str(body_text).unwrap_or_else(|_| {
                // For 5xx errors, keep the raw body for debugging
                if status >= 500 {
                    serde_json::json!({ "raw_body": body_text })
                } else {
                    serde_json::json!({})
                }
            })
        }
    }

    const fn reqwest_method(method: HttpMethod) -> reqwest::Method {
        match method {
            HttpMethod::Get => reqwest::Method::GET,
            HttpMethod::Put => reqwest::Method::PUT,
            HttpMethod::Post => reqwest::Method::POST,
            HttpMethod::Delete => reqwest::Method::DELETE,
            HttpMethod::Head => reqwest::Method::HEAD,
        }
    }
}

impl Transport for HttpTransport {
    /// Sends a request to the cluster.
    ///
    /// The response comes back for every status code. Requests with a retry
    /// budget above one are retried on `429` and `500`, honoring the
    /// `Retry-After` header for `429`.
    ///
    /// # Errors
    ///
    /// Returns [`TransportError`] if:
    /// - A network error occurs (`Network`)
    /// - The retry budget is exhausted (`MaxRetries`)
    async fn send(&self, request: TransportRequest) -> Result<TransportResponse, TransportError> {
        let url = format!("{}{}", self.base_url, request.path);

        // Merge headers
        let mut headers = self.default_headers.clone();
        if let Some(body) = &request.body {
            headers.insert(
                "Content-Type".to_string(),
                body.as_content_type().to_string(),
            );
        }

        // Retry loop
        let mut tries: u32 = 0;
        loop {
            tries += 1;

            let mut req_builder = self
                .client
                .request(Self::reqwest_method(request.method), &url);

            for (key, value) in &headers {
                req_builder = req_builder.header(key, value);
            }

            if let Some((username, password)) = &self.basic_auth {
                req_builder = req_builder.basic_auth(username, Some(password));
            }

            if let Some(body) = &request.body {
                req_builder = req_builder.body(body.to_payload());
            }

            tracing::debug!("Dispatching {} {}", request.method, url);

            let res = req_builder.send().await?;

            let status = res.status().as_u16();
            let retry_after = Self::parse_retry_after(res.headers());
            let body_text = res.text().await.unwrap_or_default();
            let response = TransportResponse::new(status, Self::parse_body(status, &body_text));

            tracing::debug!("Received {} for {} {}", status, request.method, url);

            // Retries apply only when a budget was requested
            let should_retry = (status == 429 || status == 500) && request.tries > 1;
            if !should_retry {
                return Ok(response);
            }

            if tries >= request.tries {
                return Err(TransportError::MaxRetries(MaxRetriesExceededError {
                    status,
                    tries: request.tries,
                }));
            }

            let delay = Self::calculate_retry_delay(status, retry_after);
            tracing::warn!(
                "Received {} from {}, retrying in {:?} ({} of {} tries used)",
                status,
                url,
                delay,
                tries,
                request.tries
            );
            tokio::time::sleep(delay).await;
        }
    }
}
