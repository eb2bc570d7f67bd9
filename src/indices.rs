//! Index administration operations.
//!
//! [`IndicesClient`] covers the `_aliases`, `_template`, `_warmer`, mapping,
//! settings, and index lifecycle endpoints. It borrows the parent
//! [`Client`] and shares its configuration and transport; obtain one through
//! [`Client::indices`].
//!
//! # Example
//!
//! ```rust,ignore
//! use elasticsearch_api::{Client, ElasticsearchConfig, RequestOptions};
//! use serde_json::json;
//!
//! let client = Client::new(ElasticsearchConfig::default());
//! let indices = client.indices();
//!
//! let options = RequestOptions::new().index("kitteh");
//! indices.create_index(None, &options).await?;
//! indices.refresh(&options).await?;
//! ```

use serde_json::Value;

use crate::client::Client;
use crate::config::ElasticsearchConfig;
use crate::error::Error;
use crate::options::{ExistsResult, RequestOptions};
use crate::syntax::{self, RequiredKey};
use crate::transport::{HttpTransport, Transport, TransportRequest, TransportResponse};

/// Client for index administration endpoints.
#[derive(Debug, Clone, Copy)]
pub struct IndicesClient<'a, T = HttpTransport> {
    client: &'a Client<T>,
}

impl<'a, T: Transport> IndicesClient<'a, T> {
    pub(crate) const fn new(client: &'a Client<T>) -> Self {
        Self { client }
    }

    fn config(&self) -> &ElasticsearchConfig {
        self.client.config()
    }

    /// Creates or updates an alias.
    ///
    /// With both an alias name and an index the request is a `PUT` against
    /// that pairing; otherwise the body is posted to `_aliases`, which takes
    /// a full actions document.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn alias(
        &self,
        data: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));
        let alias = options.alias.as_deref().unwrap_or("");

        let addressed = !alias.is_empty() && !index.is_empty();
        let path = if addressed {
            syntax::join_path(&[&index, "_alias", alias])
        } else {
            syntax::join_path(&["_aliases"])
        };

        let request = if addressed {
            TransportRequest::put(syntax::request_path(path, options))
        } else {
            TransportRequest::post(syntax::request_path(path, options))
        };

        self.client.send(request.json(data.clone())).await
    }

    /// Retrieves the indices an alias points at.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no alias is given, or
    /// [`Error::Transport`] when the request fails.
    pub async fn aliases(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Alias])?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let alias = options.alias.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_alias", alias]),
            options,
        );

        self.client.send(TransportRequest::get(path)).await
    }

    /// Runs text through an analyzer.
    ///
    /// The text rides in the body of a `GET` request, which is what the
    /// `_analyze` endpoint documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn analyze(
        &self,
        data: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_analyze"]),
            options,
        );

        let mut request = TransportRequest::get(path);
        if let Some(data) = data {
            request = request.json(data.clone());
        }

        self.client.send(request).await
    }

    /// Clears index caches.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn clear_cache(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_cache/clear"]),
            options,
        );

        self.client.send(TransportRequest::post(path)).await
    }

    /// Closes an index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn close_index(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_close"]), options);

        self.client.send(TransportRequest::post(path)).await
    }

    /// Creates an index, optionally with settings and mappings.
    ///
    /// A body carrying a `mappings` member is sent via `POST`, a plain
    /// settings body (or none) via `PUT`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn create_index(
        &self,
        data: Option<&Value>,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let path = syntax::request_path(syntax::join_path(&[&index]), options);

        let has_mappings = data
            .and_then(|data| data.get("mappings"))
            .is_some_and(|mappings| !mappings.is_null());

        let mut request = if has_mappings {
            TransportRequest::post(path)
        } else {
            TransportRequest::put(path)
        };
        if let Some(data) = data {
            request = request.json(data.clone());
        }

        self.client.send(request).await
    }

    /// Stores an index template under a name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no name is given, or
    /// [`Error::Transport`] when the request fails.
    pub async fn create_template(
        &self,
        template: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Name])?;

        let name = options.name.as_deref().unwrap_or("");
        let path = syntax::request_path(syntax::join_path(&["_template", name]), options);

        self.client
            .send(TransportRequest::put(path).json(template.clone()))
            .await
    }

    /// Removes an alias from an index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or alias is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete_alias(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            self.config(),
            &[RequiredKey::Index, RequiredKey::Alias],
        )?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let alias = options.alias.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_alias", alias]),
            options,
        );

        self.client.send(TransportRequest::delete(path)).await
    }

    /// Deletes an index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete_index(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let path = syntax::request_path(syntax::join_path(&[&index]), options);

        self.client.send(TransportRequest::delete(path)).await
    }

    /// Deletes a type mapping along with its documents.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or type is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete_mapping(
        &self,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            self.config(),
            &[RequiredKey::Index, RequiredKey::Type],
        )?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let doc_type = syntax::type_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, &doc_type]), options);

        self.client.send(TransportRequest::delete(path)).await
    }

    /// Deletes an index template.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no name is given, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete_template(
        &self,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Name])?;

        let name = options.name.as_deref().unwrap_or("");
        let path = syntax::request_path(syntax::join_path(&["_template", name]), options);

        self.client.send(TransportRequest::delete(path)).await
    }

    /// Deletes an index warmer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or name is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn delete_warmer(
        &self,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            self.config(),
            &[RequiredKey::Index, RequiredKey::Name],
        )?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let name = options.name.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_warmer", name]),
            options,
        );

        self.client.send(TransportRequest::delete(path)).await
    }

    /// Checks whether an index (or a type within it) exists.
    ///
    /// Issues a `HEAD` request and derives the flag from the status code,
    /// like [`Client::exists`] but without a document id.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn exists(&self, options: &RequestOptions) -> Result<ExistsResult, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let doc_type = syntax::type_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, &doc_type]), options);

        let response = self.client.send(TransportRequest::head(path)).await?;
        Ok(ExistsResult::from_status(response.status))
    }

    /// Flushes index data to storage and clears the transaction log.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn flush(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_flush"]), options);

        self.client.send(TransportRequest::post(path)).await
    }

    /// Retrieves mappings, scoped by index and type when given.
    ///
    /// The type segment participates only when an index is present, since
    /// `/{type}/_mapping` alone is not addressable.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn mappings(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));
        let doc_type = syntax::type_syntax(options, Some(self.config()));

        let type_segment = if index.is_empty() { "" } else { doc_type.as_str() };
        let path = syntax::request_path(
            syntax::join_path(&[&index, type_segment, "_mapping"]),
            options,
        );

        self.client.send(TransportRequest::get(path)).await
    }

    /// Opens a closed index.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn open_index(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_open"]), options);

        self.client.send(TransportRequest::post(path)).await
    }

    /// Optimizes an index by merging segments.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn optimize(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_optimize"]), options);

        self.client.send(TransportRequest::post(path)).await
    }

    /// Registers a type mapping.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when index or type is absent, or
    /// [`Error::Transport`] when the request fails.
    pub async fn put_mapping(
        &self,
        mapping: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(
            options,
            self.config(),
            &[RequiredKey::Index, RequiredKey::Type],
        )?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let doc_type = syntax::type_syntax(options, Some(self.config()));

        let type_segment = if index.is_empty() { "" } else { doc_type.as_str() };
        let path = syntax::request_path(
            syntax::join_path(&[&index, type_segment, "_mapping"]),
            options,
        );

        self.client
            .send(TransportRequest::put(path).json(mapping.clone()))
            .await
    }

    /// Registers an index warmer under a name.
    ///
    /// Only the name is required; index and type scope the warmer when
    /// supplied.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no name is given, or
    /// [`Error::Transport`] when the request fails.
    pub async fn put_warmer(
        &self,
        warmer: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Name])?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let doc_type = syntax::type_syntax(options, Some(self.config()));
        let name = options.name.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, &doc_type, "_warmer", name]),
            options,
        );

        self.client
            .send(TransportRequest::put(path).json(warmer.clone()))
            .await
    }

    /// Refreshes an index, making recent writes visible to search.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn refresh(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_refresh"]), options);

        self.client.send(TransportRequest::post(path)).await
    }

    /// Retrieves low level segment information.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn segments(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_segments"]), options);

        self.client.send(TransportRequest::get(path)).await
    }

    /// Retrieves index settings.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn settings(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_settings"]), options);

        self.client.send(TransportRequest::get(path)).await
    }

    /// Triggers a gateway snapshot.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn snapshot(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_gateway/snapshot"]),
            options,
        );

        self.client.send(TransportRequest::post(path)).await
    }

    /// Retrieves index statistics.
    ///
    /// A type narrows the statistics and trails the `_stats` segment, per
    /// the endpoint's addressing scheme.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn stats(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));
        let doc_type = syntax::type_syntax(options, Some(self.config()));

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_stats", &doc_type]),
            options,
        );

        self.client.send(TransportRequest::get(path)).await
    }

    /// Retrieves index status.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn status(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_status"]), options);

        self.client.send(TransportRequest::get(path)).await
    }

    /// Retrieves an index template by name.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no name is given, or
    /// [`Error::Transport`] when the request fails.
    pub async fn templates(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Name])?;

        let name = options.name.as_deref().unwrap_or("");
        let path = syntax::request_path(syntax::join_path(&["_template", name]), options);

        self.client.send(TransportRequest::get(path)).await
    }

    /// Updates index settings, cluster wide when no index is given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Transport`] when the request fails.
    pub async fn update_settings(
        &self,
        settings: &Value,
        options: &RequestOptions,
    ) -> Result<TransportResponse, Error> {
        let index = syntax::index_syntax(options, Some(self.config()));

        let path = syntax::request_path(syntax::join_path(&[&index, "_settings"]), options);

        self.client
            .send(TransportRequest::put(path).json(settings.clone()))
            .await
    }

    /// Retrieves index warmers, narrowed by name when given.
    ///
    /// # Errors
    ///
    /// Returns [`Error::MissingOption`] when no index is available, or
    /// [`Error::Transport`] when the request fails.
    pub async fn warmers(&self, options: &RequestOptions) -> Result<TransportResponse, Error> {
        syntax::require_keys(options, self.config(), &[RequiredKey::Index])?;

        let index = syntax::index_syntax(options, Some(self.config()));
        let name = options.name.as_deref().unwrap_or("");

        let path = syntax::request_path(
            syntax::join_path(&[&index, "_warmer", name]),
            options,
        );

        self.client.send(TransportRequest::get(path)).await
    }
}
