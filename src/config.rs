//! Client configuration.
//!
//! [`ElasticsearchConfig`] holds everything shared across requests: the
//! cluster's base URL, optional default index, type, and node values that
//! per-call options fall back to, and transport settings such as basic auth
//! credentials and the request timeout.
//!
//! Configuration is immutable once built. Construct it through the builder:
//!
//! ```rust
//! use std::time::Duration;
//!
//! use elasticsearch_api::ElasticsearchConfig;
//!
//! let config = ElasticsearchConfig::builder()
//!     .base_url("http://search.example.com:9200")
//!     .index("kitteh")
//!     .doc_type("cat")
//!     .basic_auth("elastic", "changeme")
//!     .timeout(Duration::from_secs(30))
//!     .build();
//!
//! assert_eq!(config.base_url(), "http://search.example.com:9200");
//! assert_eq!(config.index(), Some("kitteh"));
//! ```

use std::time::Duration;

/// Base URL used when none is configured.
pub const DEFAULT_BASE_URL: &str = "http://localhost:9200";

/// Immutable configuration for a [`crate::Client`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElasticsearchConfig {
    base_url: String,
    index: Option<String>,
    indices: Option<Vec<String>>,
    doc_type: Option<String>,
    doc_types: Option<Vec<String>>,
    node: Option<String>,
    nodes: Option<Vec<String>>,
    basic_auth: Option<(String, String)>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ElasticsearchConfig {
    /// Returns a builder for constructing a configuration.
    #[must_use]
    pub fn builder() -> ElasticsearchConfigBuilder {
        ElasticsearchConfigBuilder::new()
    }

    /// Returns the base URL of the cluster.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the default index, if configured.
    #[must_use]
    pub fn index(&self) -> Option<&str> {
        self.index.as_deref()
    }

    /// Returns the default indices, if configured.
    #[must_use]
    pub fn indices(&self) -> Option<&[String]> {
        self.indices.as_deref()
    }

    /// Returns the default document type, if configured.
    #[must_use]
    pub fn doc_type(&self) -> Option<&str> {
        self.doc_type.as_deref()
    }

    /// Returns the default document types, if configured.
    #[must_use]
    pub fn doc_types(&self) -> Option<&[String]> {
        self.doc_types.as_deref()
    }

    /// Returns the default node, if configured.
    #[must_use]
    pub fn node(&self) -> Option<&str> {
        self.node.as_deref()
    }

    /// Returns the default nodes, if configured.
    #[must_use]
    pub fn nodes(&self) -> Option<&[String]> {
        self.nodes.as_deref()
    }

    /// Returns the basic auth credentials as `(username, password)`, if
    /// configured.
    #[must_use]
    pub fn basic_auth(&self) -> Option<(&str, &str)> {
        self.basic_auth
            .as_ref()
            .map(|(username, password)| (username.as_str(), password.as_str()))
    }

    /// Returns the request timeout, if configured.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }
}

impl Default for ElasticsearchConfig {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// Builder for [`ElasticsearchConfig`].
#[derive(Debug, Clone, Default)]
pub struct ElasticsearchConfigBuilder {
    base_url: Option<String>,
    index: Option<String>,
    indices: Option<Vec<String>>,
    doc_type: Option<String>,
    doc_types: Option<Vec<String>>,
    node: Option<String>,
    nodes: Option<Vec<String>>,
    basic_auth: Option<(String, String)>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl ElasticsearchConfigBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL of the cluster.
    ///
    /// Defaults to [`DEFAULT_BASE_URL`] when not set. A trailing slash is
    /// tolerated; the transport normalizes it away.
    #[must_use]
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    /// Sets the default index for operations that omit one.
    #[must_use]
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Sets the default indices for operations that omit them.
    #[must_use]
    pub fn indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices = Some(indices.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the default document type for operations that omit one.
    #[must_use]
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Sets the default document types for operations that omit them.
    #[must_use]
    pub fn doc_types<I, S>(mut self, doc_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc_types = Some(doc_types.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the default node for node-scoped operations.
    #[must_use]
    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Sets the default nodes for node-scoped operations.
    #[must_use]
    pub fn nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes = Some(nodes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets basic auth credentials sent with every request.
    #[must_use]
    pub fn basic_auth(mut self, username: impl Into<String>, password: impl Into<String>) -> Self {
        self.basic_auth = Some((username.into(), password.into()));
        self
    }

    /// Sets the request timeout applied by the transport.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets a prefix prepended to the transport's user agent string.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the configuration, filling unset values with defaults.
    #[must_use]
    pub fn build(self) -> ElasticsearchConfig {
        ElasticsearchConfig {
            base_url: self
                .base_url
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            index: self.index,
            indices: self.indices,
            doc_type: self.doc_type,
            doc_types: self.doc_types,
            node: self.node,
            nodes: self.nodes,
            basic_auth: self.basic_auth,
            timeout: self.timeout,
            user_agent_prefix: self.user_agent_prefix,
        }
    }
}

// Compile-time check that the config stays shareable across tasks.
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ElasticsearchConfig>();
};
