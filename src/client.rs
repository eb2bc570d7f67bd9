//! Client for Elasticsearch document and search operations.
//!
//! This module provides the [`Client`] type, the entry point of the library.
//! Document-level operations (index, get, delete, search, bulk, and friends)
//! live directly on the client; index administration is reached through
//! [`Client::indices`] and cluster introspection through [`Client::cluster`].
//!
//! Every operation follows the same template: validate required keys from a
//! [`RequestOptions`] value against the configured defaults, resolve index
//! and type syntax, build the request path plus query string, and dispatch
//! through the transport. Options are never modified; each call derives a
//! fresh request from its inputs.
//!
//! # Example
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
//! let doc = json!({"name": "hamish", "breed": "manx"});
//! client.index(&doc, &RequestOptions::new().id("1")).await?;
//!
//! let query = json!({"query": {"match": {"breed": "manx"}}});
//! let response = client.search(&query, &RequestOptions::new()).await?;
//! println!("{}", response.body);
//! ```

use serde_json::Value;

use crate::cluster::ClusterClient;
use crate::config::ElasticsearchConfig;
use crate::error::Error;
use crate::indices::IndicesClient;
use crate::options::{DocumentRef, ExistsResult, RequestOptions};
use crate::syntax::{self, RequiredKey};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Serializes a batch as newline delimited JSON, one record per line with a
/// trailing newline.
fn ndjson_body(items: &[Value]) -> String {
    let mut payload = String::new();
    for item in items {
        payload.push_str(&item.to_string());
        payload.push('\n');
    }
    payload
}

/// First candidate that is present and non-empty, mirroring the fallback
/// order of multi get document resolution.
fn first_non_empty<'a>(candidates: [Option<&'a str>; 3]) -> Option<&'a str> {
    candidates
        .into_iter()
        .flatten()
        .find(|value| !value.is_empty())
}

/// Elasticsearch API client.
///
/// Generic over the [`Transport`] so tests can substitute an in-memory
/// implementation; production code uses the default [`HttpTransport`].
///
/// # Thread Safety
///
/// `Client` is `Send + Sync` and can be shared across async tasks behind a
/// reference or an `Arc`.
#[derive(Debug)]
pub struct Client<T = HttpTransport> {
    pub(crate) transport: T,
    config: ElasticsearchConfig,
}

// Verify Client is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Client>();
};

impl Client<HttpTransport> {
    /// Creates a client backed by the default HTTP transport.
    ///
    /// # Panics
    ///
    /// Panics if the underlying HTTP client cannot be created, see
    /// [`HttpTransport::new`].
    #[must_use]
    pub fn new(config: ElasticsearchConfig) -> Self {
        let transport = HttpTransport::new(&config);
        Self { transport, config }
    }
}

impl<T: Transport> Client<T> {
    /// Creates a client with a custom transport.
    #[must_use]
    pub const fn with_transport(transport: T, config: ElasticsearchConfig) -> Self {
        Self { transport, config }
    }

    /// Returns the configuration this client was built with.
    #[must_use]
    pub const fn config(&self) -> &ElasticsearchConfig {
        &self.config
    }

    /// Returns the index administration client.
    #[must_use]
    pub const fn indices(&self) -> IndicesClient<'_, T> {
        IndicesClient::new(self)
    }

    /// Returns the cluster introspection client.
    #[must_use]
    pub const fn cluster(&self) -> ClusterClient<'_, T> {
        ClusterClient::new(self)
    }

    pub(crate) async fn send(&self, request: TransportRequest) -> Result<TransportResponse, Error> {
        Ok(self.transport.send(request).await?)
    }

    /// Executes a batch of bulk commands.
    ///
    /// Commands are serialized as newline delimited JSON in the order given,
    /// action lines interleaved with source lines per the `_bulk` protocol.
    /// Configured default index and type are deliberately ignored here; the
    /// target is taken from options or from the action lines themselves.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    ///
    /// let commands = vec![
    ///     json!({"index": {"_index": "kitteh", "_type": "cat", "_id": "1"}}),
    ///     json!({"name": "hamish", "breed": "manx"}),
    /// ];
    /// client.bulk(&commands, &RequestOptions::new()).await?;
    /// ```
    pub async fn bulk(
        &self,
        commands: &[Value],
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, None);
        let doc_type = syntax::type_syntax(options, None);

        let type_segment = if index.is_empty() { "" } else { doc_type.as_str() };
        let path = syntax::join_path(&[&index, type_segment, "_bulk"]);

        let request = TransportRequest::post(syntax::request_path(path, options))
            .ndjson(ndjson_body(commands));

        self.send(request).await
    }

    /// Counts documents, optionally constrained by a query.
    ///
    /// With a query the request is a `POST` carrying it; without one a plain
    /// `GET` against `_count`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn count(
        &self,
        query: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));

        let type_segment = if index.is_empty() { "" } else { doc_type.as_str() };
        let path = syntax::request_path(
            syntax::join_path(&[&index, type_segment, "_count"]),
            options,
        );

        let request = match query {
            Some(query) => TransportRequest::post(path).json(query.clone()),
            None => TransportRequest::get(path),
        };

        self.send(request).await
    }

    /// Deletes a document, a type, or a whole index depending on how much of
    /// the address is supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, &self.config, &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");

        let path = syntax::request_path(syntax::join_path(&[&index, &doc_type, id]), options);

        self.send(TransportRequest::delete(path)).await
    }

    /// Deletes every document matching a query.
    ///
    /// The query rides in the body of a `DELETE` request, which the wrapped
    /// `_query` endpoint requires.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete_by_query(
        &self,
        query: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, &self.config, &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, "_query"]),
            options,
        );

        self.send(TransportRequest::delete(path).json(query.clone()))
            .await
    }

    /// Checks whether an index, type, or document exists.
    ///
    /// Issues a `HEAD` request and derives the flag from the status code:
    /// `200` means the target exists, anything else means it does not.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// let result = client
    ///     .exists(&RequestOptions::new().index("kitteh").id("1"))
    ///     .await?;
    /// if result.exists {
    ///     println!("still there");
    /// }
    /// ```
    pub async fn exists(&self, options: &RequestOptions) -> Result<ExistsResult, Error> {
        syntax::require_keys(options, &self.config, &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");

        let path = syntax::request_path(syntax::join_path(&[&index, &doc_type, id]), options);

        let response = self.send(TransportRequest::head(path)).await?;
        Ok(ExistsResult::from_status(response.status))
    }

    /// Explains how a document scores against a query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index, type, or id is absent,
    /// or [`Error::Transport`] when the request fails.
    pub async fn explain(
        &self,
        query: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Type, RequiredKey::Id],
        )?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, id, "_explain"]),
            options,
        );

        self.send(TransportRequest::post(path).json(query.clone()))
            .await
    }

    /// Retrieves a document by id.
    ///
    /// When `ids` is set, the call turns into a [`Client::multi_get`] for
    /// those ids, resolving index and type per document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index, type, or id is absent,
    /// or [`Error::Transport`] when the request fails.
    pub async fn get(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Type, RequiredKey::Id],
        )?;

        if let Some(ids) = &options.ids {
            let docs: Vec<DocumentRef> = ids
                .iter()
                .map(|id| DocumentRef::new(id.as_str()))
                .collect();
            return self.multi_get(&docs, options).await;
        }

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");

        let path = syntax::request_path(syntax::join_path(&[&index, &doc_type, id]), options);

        self.send(TransportRequest::get(path)).await
    }

    /// Indexes a document.
    ///
    /// With an id the document is stored under it via `PUT`; without one
    /// Elasticsearch assigns an id and the request is a `POST`. Setting
    /// [`RequestOptions::create`] routes through the `_create` endpoint,
    /// failing when the document already exists.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or type is absent, or
    /// [`Error::Transport`] when the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    ///
    /// let doc = json!({"name": "hamish", "breed": "manx"});
    /// let options = RequestOptions::new()
    ///     .index("kitteh")
    ///     .doc_type("cat")
    ///     .id("1");
    /// client.index(&doc, &options).await?;
    /// ```
    pub async fn index(
        &self,
        document: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Type],
        )?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");
        let create_segment = if options.create { "_create" } else { "" };

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, id, create_segment]),
            options,
        );

        let request = if id.is_empty() {
            TransportRequest::post(path)
        } else {
            TransportRequest::put(path)
        };

        self.send(request.json(document.clone())).await
    }

    /// Finds documents similar to the referenced one.
    ///
    /// Field options are folded into the `mlt_fields` parameter the `_mlt`
    /// endpoint expects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index, type, or id is absent,
    /// or [`Error::Transport`] when the request fails.
    pub async fn more_like_this(
        &self,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Type, RequiredKey::Id],
        )?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");
        let fields = syntax::field_syntax(options);

        let mut params = options.params.clone();
        if !fields.is_empty() {
            params.insert("mlt_fields".to_string(), fields);
        }

        let path = syntax::append_query(
            syntax::join_path(&[&index, &doc_type, id, "_mlt"]),
            &syntax::to_query_string(&params, &[]),
        );

        self.send(TransportRequest::get(path)).await
    }

    /// Retrieves several documents in one round trip.
    ///
    /// Each document reference may omit index and type; absent values are
    /// filled from options first, then from the configured defaults. A
    /// reference that still resolves to no index or no type fails the whole
    /// call before anything is sent. The input slice is left untouched; the
    /// resolved references are serialized into the `docs` envelope the
    /// `_mget` endpoint expects.
    ///
    /// # Errors
    ///
    /// Returns [`Error::DocMissingIndex`] or [`Error::DocMissingType`] for
    /// the first unresolvable reference, or [`Error::Transport`] when the
    /// request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use elasticsearch_api::DocumentRef;
    ///
    /// let docs = vec![
    ///     DocumentRef::new("1"),
    ///     DocumentRef::new("9").index("dievka"),
    /// ];
    /// let options = RequestOptions::new().index("kitteh").doc_type("cat");
    /// let response = client.multi_get(&docs, &options).await?;
    /// ```
    pub async fn multi_get(
        &self,
        docs: &[DocumentRef],
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let mut resolved = Vec::with_capacity(docs.len());

        for doc in docs {
            let index = first_non_empty([
                doc.index.as_deref(),
                options.index.as_deref(),
                self.config.index(),
            ])
            .ok_or(Error::DocMissingIndex)?;

            let doc_type = first_non_empty([
                doc.doc_type.as_deref(),
                options.doc_type.as_deref(),
                self.config.doc_type(),
            ])
            .ok_or(Error::DocMissingType)?;

            resolved.push(DocumentRef {
                index: Some(index.to_string()),
                doc_type: Some(doc_type.to_string()),
                id: doc.id.clone(),
            });
        }

        let path = syntax::request_path(syntax::join_path(&["_mget"]), options);
        let body = serde_json::json!({ "docs": resolved });

        self.send(TransportRequest::post(path).json(body)).await
    }

    /// Executes several searches in one round trip.
    ///
    /// Queries are serialized as newline delimited JSON, header lines
    /// interleaved with query lines per the `_msearch` protocol. Configured
    /// default index and type are deliberately ignored, matching
    /// [`Client::bulk`].
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn multi_search(
        &self,
        queries: &[Value],
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, None);
        let doc_type = syntax::type_syntax(options, None);

        let type_segment = if index.is_empty() { "" } else { doc_type.as_str() };
        let path = syntax::join_path(&[&index, type_segment, "_msearch"]);

        let request = TransportRequest::post(syntax::request_path(path, options))
            .ndjson(ndjson_body(queries));

        self.send(request).await
    }

    /// Matches a document against the registered percolator queries.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or type is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn percolate(
        &self,
        document: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Type],
        )?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, "_percolate"]),
            options,
        );

        self.send(TransportRequest::post(path).json(document.clone()))
            .await
    }

    /// Registers a percolator query under a name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or name is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn register_percolator(
        &self,
        query: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Name],
        )?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let name = options.name.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&["_percolator", &index, name]),
            options,
        );

        self.send(TransportRequest::put(path).json(query.clone()))
            .await
    }

    /// Searches an index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use serde_json::json;
    ///
    /// let query = json!({"query": {"match": {"breed": "manx"}}});
    /// let options = RequestOptions::new().index("kitteh");
    /// let response = client.search(&query, &options).await?;
    /// println!("{}", response.body["hits"]["total"]);
    /// ```
    pub async fn search(
        &self,
        query: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, &self.config, &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, "_search"]),
            options,
        );

        self.send(TransportRequest::post(path).json(query.clone()))
            .await
    }

    /// Removes a registered percolator query.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or name is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn unregister_percolator(
        &self,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Name],
        )?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let name = options.name.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&["_percolator", &index, name]),
            options,
        );

        self.send(TransportRequest::delete(path)).await
    }

    /// Applies a partial update or update script to a document.
    ///
    /// The update body must carry a `script` or a `doc` member; anything
    /// else is rejected before dispatch.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index, type, or id is absent,
    /// [`Error::ScriptOrDocRequired`] when the body carries neither member,
    /// or [`Error::Transport`] when the request fails.
    pub async fn update(
        &self,
        update_doc: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            &self.config,
            &[RequiredKey::Index, RequiredKey::Type, RequiredKey::Id],
        )?;

        let has_member = |key: &str| update_doc.get(key).is_some_and(|value| !value.is_null());
        if !has_member("script") && !has_member("doc") {
            return Err(Error::ScriptOrDocRequired);
        }

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));
        let id = options.id.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, id, "_update"]),
            options,
        );

        self.send(TransportRequest::post(path).json(update_doc.clone()))
            .await
    }

    /// Validates a query without executing it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn validate(
        &self,
        query: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, &self.config, &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(&self.config));
        let doc_type = syntax::type_syntax(options, Some(&self.config));

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, "_validate/query"]),
            options,
        );

        self.send(TransportRequest::post(path).json(query.clone()))
            .await
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;
    use crate::transport::testing::MockTransport;
    use crate::transport::{Body, HttpMethod};

    fn test_client() -> Client<MockTransport> {
        Client::with_transport(MockTransport::new(), ElasticsearchConfig::default())
    }

    fn configured_client(config: ElasticsearchConfig) -> Client<MockTransport> {
        Client::with_transport(MockTransport::new(), config)
    }

    fn transport(client: &Client<MockTransport>) -> &MockTransport {
        &client.transport
    }

    // === Search ===

    #[tokio::test]
    async fn test_search_posts_to_search_path() {
        let client = test_client();
        let query = json!({"query": {"match": {"breed": "manx"}}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.search(&query, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat/_search");
        assert_eq!(request.body, Some(Body::Json(query)));
    }

    #[tokio::test]
    async fn test_search_omits_absent_type() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh");

        client.search(&json!({}), &options).await.unwrap();

        assert_eq!(transport(&client).last_request().path, "/kitteh/_search");
    }

    #[tokio::test]
    async fn test_search_uses_config_defaults() {
        let config = ElasticsearchConfig::builder()
            .index("kitteh")
            .doc_type("cat")
            .build();
        let client = configured_client(config);

        client.search(&json!({}), &RequestOptions::new()).await.unwrap();

        assert_eq!(transport(&client).last_request().path, "/kitteh/cat/_search");
    }

    #[tokio::test]
    async fn test_search_requires_index() {
        let client = test_client();

        let err = client
            .search(&json!({}), &RequestOptions::new())
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "_index is required");
        assert!(transport(&client).requests().is_empty());
    }

    #[tokio::test]
    async fn test_search_joins_indices() {
        let client = test_client();
        let options = RequestOptions::new().indices(["kitteh", "dievka"]);

        client.search(&json!({}), &options).await.unwrap();

        assert_eq!(
            transport(&client).last_request().path,
            "/kitteh,dievka/_search"
        );
    }

    #[tokio::test]
    async fn test_search_appends_params() {
        let client = test_client();
        let options = RequestOptions::new()
            .index("kitteh")
            .param("from", 10)
            .param("size", 30);

        client.search(&json!({}), &options).await.unwrap();

        assert_eq!(
            transport(&client).last_request().path,
            "/kitteh/_search?from=10&size=30"
        );
    }

    // === Bulk ===

    #[tokio::test]
    async fn test_bulk_serializes_commands_as_ndjson() {
        let client = test_client();
        let commands = vec![json!({"index": {}}), json!({"field": 1})];

        client.bulk(&commands, &RequestOptions::new()).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/_bulk");
        assert_eq!(
            request.body,
            Some(Body::Ndjson("{\"index\":{}}\n{\"field\":1}\n".to_string()))
        );
    }

    #[tokio::test]
    async fn test_bulk_ignores_config_defaults() {
        let config = ElasticsearchConfig::builder()
            .index("kitteh")
            .doc_type("cat")
            .build();
        let client = configured_client(config);

        client.bulk(&[], &RequestOptions::new()).await.unwrap();

        assert_eq!(transport(&client).last_request().path, "/_bulk");
    }

    #[tokio::test]
    async fn test_bulk_includes_type_only_with_index() {
        let client = test_client();

        let options = RequestOptions::new().index("kitteh").doc_type("cat");
        client.bulk(&[], &options).await.unwrap();
        assert_eq!(transport(&client).last_request().path, "/kitteh/cat/_bulk");

        let options = RequestOptions::new().doc_type("cat");
        client.bulk(&[], &options).await.unwrap();
        assert_eq!(transport(&client).last_request().path, "/_bulk");
    }

    // === Count ===

    #[tokio::test]
    async fn test_count_without_query_is_get() {
        let client = test_client();

        client.count(None, &RequestOptions::new()).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/_count");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_count_with_query_is_post() {
        let client = test_client();
        let query = json!({"query": {"term": {"breed": "manx"}}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.count(Some(&query), &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat/_count");
        assert_eq!(request.body, Some(Body::Json(query)));
    }

    // === Delete ===

    #[tokio::test]
    async fn test_delete_builds_document_path() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.delete(&options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/kitteh/cat/1");
    }

    #[tokio::test]
    async fn test_delete_without_id_targets_type() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.delete(&options).await.unwrap();

        assert_eq!(transport(&client).last_request().path, "/kitteh/cat");
    }

    #[tokio::test]
    async fn test_delete_requires_index() {
        let client = test_client();

        let err = client.delete(&RequestOptions::new()).await.unwrap_err();

        assert_eq!(err.to_string(), "_index is required");
    }

    // === Delete by query ===

    #[tokio::test]
    async fn test_delete_by_query_sends_body_with_delete() {
        let client = test_client();
        let query = json!({"term": {"breed": "manx"}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.delete_by_query(&query, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/kitteh/cat/_query");
        assert_eq!(request.body, Some(Body::Json(query)));
    }

    // === Exists ===

    #[tokio::test]
    async fn test_exists_maps_200_to_true() {
        let client = Client::with_transport(
            MockTransport::with_response(200, json!({})),
            ElasticsearchConfig::default(),
        );
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        let result = client.exists(&options).await.unwrap();

        assert!(result.exists);
        assert_eq!(result.status, 200);

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Head);
        assert_eq!(request.path, "/kitteh/cat/1");
    }

    #[tokio::test]
    async fn test_exists_maps_404_to_false() {
        let client = Client::with_transport(
            MockTransport::with_response(404, json!({})),
            ElasticsearchConfig::default(),
        );
        let options = RequestOptions::new().index("kitteh");

        let result = client.exists(&options).await.unwrap();

        assert!(!result.exists);
        assert_eq!(result.status, 404);
    }

    // === Explain ===

    #[tokio::test]
    async fn test_explain_posts_query() {
        let client = test_client();
        let query = json!({"query": {"match_all": {}}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.explain(&query, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat/1/_explain");
        assert_eq!(request.body, Some(Body::Json(query)));
    }

    #[tokio::test]
    async fn test_explain_requires_id() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        let err = client.explain(&json!({}), &options).await.unwrap_err();

        assert_eq!(err.to_string(), "_id is required");
    }

    // === Get ===

    #[tokio::test]
    async fn test_get_builds_document_path() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.get(&options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/kitteh/cat/1");
        assert!(request.body.is_none());
    }

    #[tokio::test]
    async fn test_get_with_ids_delegates_to_multi_get() {
        let client = test_client();
        let options = RequestOptions::new()
            .index("kitteh")
            .doc_type("cat")
            .ids(["1", "2"]);

        client.get(&options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/_mget");
        assert_eq!(
            request.body,
            Some(Body::Json(json!({"docs": [
                {"_index": "kitteh", "_type": "cat", "_id": "1"},
                {"_index": "kitteh", "_type": "cat", "_id": "2"},
            ]})))
        );
    }

    // === Index ===

    #[tokio::test]
    async fn test_index_with_id_is_put() {
        let client = test_client();
        let doc = json!({"name": "hamish"});
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.index(&doc, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/kitteh/cat/1");
        assert_eq!(request.body, Some(Body::Json(doc)));
    }

    #[tokio::test]
    async fn test_index_without_id_is_post() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.index(&json!({"name": "hamish"}), &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat");
    }

    #[tokio::test]
    async fn test_index_appends_create_segment() {
        let client = test_client();
        let options = RequestOptions::new()
            .index("kitteh")
            .doc_type("cat")
            .id("1")
            .create(true);

        client.index(&json!({}), &options).await.unwrap();

        assert_eq!(
            transport(&client).last_request().path,
            "/kitteh/cat/1/_create"
        );
    }

    #[tokio::test]
    async fn test_index_requires_type() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh");

        let err = client.index(&json!({}), &options).await.unwrap_err();

        assert_eq!(err.to_string(), "_type is required");
    }

    // === More like this ===

    #[tokio::test]
    async fn test_more_like_this_adds_mlt_fields_param() {
        let client = test_client();
        let options = RequestOptions::new()
            .index("kitteh")
            .doc_type("cat")
            .id("1")
            .fields(["breed", "name"]);

        client.more_like_this(&options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Get);
        assert_eq!(request.path, "/kitteh/cat/1/_mlt?mlt_fields=breed,name");
    }

    #[tokio::test]
    async fn test_more_like_this_without_fields() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.more_like_this(&options).await.unwrap();

        assert_eq!(transport(&client).last_request().path, "/kitteh/cat/1/_mlt");
    }

    // === Multi get ===

    #[tokio::test]
    async fn test_multi_get_doc_values_win_over_fallbacks() {
        let config = ElasticsearchConfig::builder()
            .index("config-index")
            .doc_type("config-type")
            .build();
        let client = configured_client(config);
        let docs = vec![
            DocumentRef::new("1").index("dievka").doc_type("dog"),
            DocumentRef::new("2"),
        ];
        let options = RequestOptions::new().index("kitteh");

        client.multi_get(&docs, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.path, "/_mget");
        assert_eq!(
            request.body,
            Some(Body::Json(json!({"docs": [
                {"_index": "dievka", "_type": "dog", "_id": "1"},
                {"_index": "kitteh", "_type": "config-type", "_id": "2"},
            ]})))
        );
    }

    #[tokio::test]
    async fn test_multi_get_missing_index_error() {
        let client = test_client();
        let docs = vec![DocumentRef::new("1")];

        let err = client
            .multi_get(&docs, &RequestOptions::new())
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "at least 1 or more docs supplied is missing index"
        );
        assert!(transport(&client).requests().is_empty());
    }

    #[tokio::test]
    async fn test_multi_get_missing_type_error() {
        let client = test_client();
        let docs = vec![DocumentRef::new("1")];
        let options = RequestOptions::new().index("kitteh");

        let err = client.multi_get(&docs, &options).await.unwrap_err();

        assert_eq!(
            err.to_string(),
            "at least 1 or more docs supplied is missing type"
        );
    }

    #[tokio::test]
    async fn test_multi_get_reports_missing_index_before_type() {
        let client = test_client();
        let docs = vec![DocumentRef::new("1")];

        let err = client
            .multi_get(&docs, &RequestOptions::new())
            .await
            .unwrap_err();

        assert!(matches!(err, Error::DocMissingIndex));
    }

    #[tokio::test]
    async fn test_multi_get_leaves_input_untouched() {
        let client = test_client();
        let docs = vec![DocumentRef::new("1")];
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.multi_get(&docs, &options).await.unwrap();

        assert!(docs[0].index.is_none());
        assert!(docs[0].doc_type.is_none());
    }

    // === Multi search ===

    #[tokio::test]
    async fn test_multi_search_serializes_queries_as_ndjson() {
        let client = test_client();
        let queries = vec![
            json!({"index": "kitteh"}),
            json!({"query": {"match_all": {}}}),
        ];

        client
            .multi_search(&queries, &RequestOptions::new())
            .await
            .unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/_msearch");
        assert_eq!(
            request.body,
            Some(Body::Ndjson(
                "{\"index\":\"kitteh\"}\n{\"query\":{\"match_all\":{}}}\n".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn test_multi_search_scopes_to_index() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh");

        client.multi_search(&[], &options).await.unwrap();

        assert_eq!(transport(&client).last_request().path, "/kitteh/_msearch");
    }

    // === Percolate ===

    #[tokio::test]
    async fn test_percolate_posts_document() {
        let client = test_client();
        let doc = json!({"doc": {"name": "hamish"}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.percolate(&doc, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat/_percolate");
        assert_eq!(request.body, Some(Body::Json(doc)));
    }

    #[tokio::test]
    async fn test_register_percolator_puts_query() {
        let client = test_client();
        let query = json!({"query": {"term": {"breed": "manx"}}});
        let options = RequestOptions::new().index("kitteh").name("manx-watch");

        client.register_percolator(&query, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Put);
        assert_eq!(request.path, "/_percolator/kitteh/manx-watch");
        assert_eq!(request.body, Some(Body::Json(query)));
    }

    #[tokio::test]
    async fn test_register_percolator_requires_name() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh");

        let err = client
            .register_percolator(&json!({}), &options)
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "name is required");
    }

    #[tokio::test]
    async fn test_unregister_percolator_deletes() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").name("manx-watch");

        client.unregister_percolator(&options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Delete);
        assert_eq!(request.path, "/_percolator/kitteh/manx-watch");
    }

    // === Update ===

    #[tokio::test]
    async fn test_update_posts_to_update_path() {
        let client = test_client();
        let update = json!({"doc": {"breed": "manx"}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.update(&update, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat/1/_update");
        assert_eq!(request.body, Some(Body::Json(update)));
    }

    #[tokio::test]
    async fn test_update_accepts_script() {
        let client = test_client();
        let update = json!({"script": "ctx._source.visits += 1"});
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        client.update(&update, &options).await.unwrap();

        assert_eq!(
            transport(&client).last_request().path,
            "/kitteh/cat/1/_update"
        );
    }

    #[tokio::test]
    async fn test_update_rejects_body_without_script_or_doc() {
        let client = test_client();
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("1");

        let err = client
            .update(&json!({"upsert": {}}), &options)
            .await
            .unwrap_err();

        assert_eq!(
            err.to_string(),
            "script or doc is required for update operation"
        );
        assert!(transport(&client).requests().is_empty());
    }

    // === Validate ===

    #[tokio::test]
    async fn test_validate_posts_to_validate_path() {
        let client = test_client();
        let query = json!({"query": {"match_all": {}}});
        let options = RequestOptions::new().index("kitteh").doc_type("cat");

        client.validate(&query, &options).await.unwrap();

        let request = transport(&client).last_request();
        assert_eq!(request.method, HttpMethod::Post);
        assert_eq!(request.path, "/kitteh/cat/_validate/query");
        assert_eq!(request.body, Some(Body::Json(query)));
    }

    // === Plumbing ===

    #[tokio::test]
    async fn test_response_passes_through_unchanged() {
        let client = Client::with_transport(
            MockTransport::with_response(404, json!({"found": false})),
            ElasticsearchConfig::default(),
        );
        let options = RequestOptions::new().index("kitteh").doc_type("cat").id("9");

        let response = client.get(&options).await.unwrap();

        assert_eq!(response.status, 404);
        assert_eq!(response.body, json!({"found": false}));
    }

    #[test]
    fn test_ndjson_body_empty_batch() {
        assert_eq!(ndjson_body(&[]), "");
    }

    #[test]
    fn test_first_non_empty_skips_blank_values() {
        assert_eq!(
            first_non_empty([Some(""), None, Some("kitteh")]),
            Some("kitteh")
        );
        assert_eq!(first_non_empty([None, Some(""), None]), None);
    }
}
