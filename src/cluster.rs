//! Cluster and node introspection operations.
//!
//! [`ClusterClient`] covers the `_cluster` and `_nodes` endpoints. Like
//! [`IndicesClient`](crate::indices::IndicesClient) it borrows the parent
//! [`Client`]; obtain one through [`Client::cluster`].
//!
//! Node-targeted operations resolve node syntax the same way document
//! operations resolve index syntax: `nodes` wins over `node`, options win
//! over config, and the result is a comma separated path segment.
//!
//! # Example
//!
//! ```rust,ignore
//! use elasticsearch_api::{Client, ElasticsearchConfig, RequestOptions};
//!
//! let client = Client::new(ElasticsearchConfig::default());
//! let cluster = client.cluster();
//!
//! let health = cluster
//!     .health(&RequestOptions::new().param("wait_for_status", "yellow"))
//!     .await?;
//! println!("{}", health.body);
//! ```

use crate::client::Client;
use crate::config::ElasticsearchConfig;
use crate::error::Error;
use crate::options::RequestOptions;
use crate::syntax;
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Client for cluster and node introspection endpoints.
#[derive(Debug, Clone, Copy)]
pub struct ClusterClient<'a, T = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> ClusterClient<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn config(&self) -> &ElasticsearchConfig {
        self.client.config()
    }

    /// Retrieves cluster health, narrowed to an index when one is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn health(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(
            syntax::join_path(&["_cluster", "health", &index]),
            options,
        );

        self.client.send(TransportRequest::get(path)).await
    }

    /// Retrieves the cluster state.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn state(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let path = syntax::request_path(syntax::join_path(&["_cluster", "state"]), options);

        self.client.send(TransportRequest::get(path)).await
    }

    /// Retrieves node information, for all nodes or the resolved node set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn nodes_info(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let nodes = syntax::node_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&["_nodes", &nodes]), options);

        self.client.send(TransportRequest::get(path)).await
    }

    /// Retrieves node statistics, for all nodes or the resolved node set.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn nodes_stats(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let nodes = syntax::node_syntax(options, Some(self.config()));

        let path = syntax::request_path(
            syntax::join_path(&["_nodes", &nodes, "stats"]),
            options,
        );

        self.client.send(TransportRequest::get(path)).await
    }
}
