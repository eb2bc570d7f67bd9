//! # Elasticsearch API Rust Library
//!
//! A Rust client library for the Elasticsearch REST API, providing typed
//! configuration, per-call request options, and an async transport with
//! opt-in retry handling.
//!
//! ## Overview
//!
//! This library provides:
//! - Type-safe configuration via [`ElasticsearchConfig`] and
//!   [`ElasticsearchConfigBuilder`], with per-call overrides through
//!   [`RequestOptions`]
//! - Document operations: index, get, multi get, delete, update, exists
//! - Search operations: search, count, explain, validate, more like this,
//!   multi search, percolation
//! - Batch indexing over newline delimited JSON via [`Client::bulk`]
//! - Index administration via [`IndicesClient`]: aliases, mappings,
//!   templates, warmers, settings, and index lifecycle
//! - Cluster introspection via [`ClusterClient`]: health, state, node info
//!   and statistics
//! - Async HTTP transport with retry logic for throttled and failed
//!   requests, replaceable through the [`Transport`] trait
//!
//! ## Quick Start
//!
//! ```rust
//! use elasticsearch_api::{Client, ElasticsearchConfig};
//!
//! // Create configuration using the builder pattern
//! let config = ElasticsearchConfig::builder()
//!     .index("kitteh")
//!     .doc_type("cat")
//!     .build();
//!
//! let client = Client::new(config);
//! assert_eq!(client.config().index(), Some("kitteh"));
//! ```
//!
//! ## Indexing and Retrieving Documents
//!
//! Operations take the document body (where the endpoint has one) and a
//! [`RequestOptions`] value. Options fall back to the configured defaults
//! for index, type, and node, so a client built with defaults only needs
//! the per-call pieces:
//!
//! ```rust,ignore
//! use elasticsearch_api::{Client, ElasticsearchConfig, RequestOptions};
//! use serde_json::json;
//!
//! let config = ElasticsearchConfig::builder()
//!     .index("kitteh")
//!     .doc_type("cat")
//!     .build();
//! let client = Client::new(config);
//!
//! // PUT /kitteh/cat/1
//! let doc = json!({"name": "hamish", "breed": "manx"});
//! client.index(&doc, &RequestOptions::new().id("1")).await?;
//!
//! // GET /kitteh/cat/1
//! let response = client.get(&RequestOptions::new().id("1")).await?;
//! println!("{}", response.body["_source"]);
//!
//! // HEAD /kitteh/cat/1
//! let result = client.exists(&RequestOptions::new().id("1")).await?;
//! assert!(result.exists);
//! ```
//!
//! ## Searching
//!
//! Pass-through query parameters ride on [`RequestOptions::param`]:
//!
//! ```rust,ignore
//! use elasticsearch_api::RequestOptions;
//! use serde_json::json;
//!
//! let query = json!({"query": {"match": {"breed": "manx"}}});
//! let options = RequestOptions::new()
//!     .index("kitteh")
//!     .param("size", 25)
//!     .param("from", 50);
//!
//! // POST /kitteh/_search?from=50&size=25
//! let response = client.search(&query, &options).await?;
//! println!("{} hits", response.body["hits"]["total"]);
//! ```
//!
//! ## Bulk Indexing
//!
//! Bulk commands are serialized as newline delimited JSON, action lines
//! interleaved with source lines:
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let commands = vec![
//!     json!({"index": {"_index": "kitteh", "_type": "cat", "_id": "1"}}),
//!     json!({"name": "hamish", "breed": "manx"}),
//!     json!({"index": {"_index": "kitteh", "_type": "cat", "_id": "2"}}),
//!     json!({"name": "dugald", "breed": "siamese"}),
//! ];
//!
//! client.bulk(&commands, &RequestOptions::new()).await?;
//! ```
//!
//! ## Index Administration
//!
//! ```rust,ignore
//! use serde_json::json;
//!
//! let indices = client.indices();
//! let options = RequestOptions::new().index("kitteh");
//!
//! let settings = json!({"settings": {"number_of_shards": 1}});
//! indices.create_index(Some(&settings), &options).await?;
//!
//! let mapping = json!({"cat": {"properties": {"breed": {"type": "string"}}}});
//! indices.put_mapping(&mapping, &options.clone().doc_type("cat")).await?;
//!
//! indices.refresh(&options).await?;
//! ```
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Immutable inputs**: Options and config are never mutated by an
//!   operation; every call derives its request from scratch
//! - **Status passthrough**: Completed HTTP responses are returned as values
//!   whatever their status; errors are reserved for validation failures,
//!   network failures, and retry exhaustion
//! - **Thread-safe**: All types are `Send + Sync`
//! - **Async-first**: Designed for use with Tokio async runtime
//! - **Replaceable transport**: Operations are generic over the [`Transport`]
//!   trait

pub mod client;
pub mod cluster;
pub mod config;
pub mod error;
pub mod indices;
pub mod options;
pub mod syntax;
pub mod transport;

// Re-export public types at crate root for convenience
pub use client::Client;
pub use cluster::ClusterClient;
pub use config::{ElasticsearchConfig, ElasticsearchConfigBuilder, DEFAULT_BASE_URL};
pub use error::Error;
pub use indices::IndicesClient;
pub use options::{DocumentRef, ExistsResult, RequestOptions};

// Re-export transport types
pub use transport::{
    Body, HttpMethod, HttpTransport, MaxRetriesExceededError, Transport, TransportError,
    TransportRequest, TransportResponse,
};
