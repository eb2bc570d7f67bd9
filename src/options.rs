//! Per-request options and small response wrappers.
//!
//! Every operation accepts a single [`RequestOptions`] value carrying the
//! addressing fields (index, type, id, and their plural forms), operation
//! modifiers, and free-form query parameters. Options are plain data: the
//! operation modules read them, derive a request, and leave them untouched,
//! so one options value can be reused across calls.
//!
//! # Example
//!
//! ```rust
//! use elasticsearch_api::RequestOptions;
//!
//! let options = RequestOptions::new()
//!     .index("kitteh")
//!     .doc_type("cat")
//!     .id("robocop")
//!     .param("refresh", true);
//!
//! assert_eq!(options.index.as_deref(), Some("kitteh"));
//! assert_eq!(options.params.get("refresh").map(String::as_str), Some("true"));
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Options for a single API operation.
///
/// All fields are public and optional. Builder-style setters are provided
/// for ergonomic chaining, but direct field access works just as well.
/// Plural fields take precedence over their singular counterparts during
/// resolution (see [`crate::syntax`]).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestOptions {
    /// Target index.
    pub index: Option<String>,
    /// Target indices, preferred over `index` when set.
    pub indices: Option<Vec<String>>,
    /// Target document type.
    pub doc_type: Option<String>,
    /// Target document types, preferred over `doc_type` when set.
    pub doc_types: Option<Vec<String>>,
    /// Target document id.
    pub id: Option<String>,
    /// Target document ids, preferred over `id` when set.
    pub ids: Option<Vec<String>>,
    /// Field to operate on.
    pub field: Option<String>,
    /// Fields to operate on, preferred over `field` when set.
    pub fields: Option<Vec<String>>,
    /// Stored field, overriding `field` and `fields` when set.
    pub stored_field: Option<String>,
    /// Stored fields, overriding every other field option when set.
    pub stored_fields: Option<Vec<String>>,
    /// Target node.
    pub node: Option<String>,
    /// Target nodes, preferred over `node` when set.
    pub nodes: Option<Vec<String>>,
    /// Name of a template, warmer, or percolator.
    pub name: Option<String>,
    /// Alias name for the alias operations.
    pub alias: Option<String>,
    /// Use create semantics when indexing, failing if the document exists.
    pub create: bool,
    /// Pass-through query parameters appended to the request path.
    pub params: BTreeMap<String, String>,
}

impl RequestOptions {
    /// Creates an empty set of options.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the target index.
    #[must_use]
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Sets the target indices.
    #[must_use]
    pub fn indices<I, S>(mut self, indices: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.indices = Some(indices.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the target document type.
    #[must_use]
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }

    /// Sets the target document types.
    #[must_use]
    pub fn doc_types<I, S>(mut self, doc_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.doc_types = Some(doc_types.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the target document id.
    #[must_use]
    pub fn id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Sets the target document ids.
    #[must_use]
    pub fn ids<I, S>(mut self, ids: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.ids = Some(ids.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the field to operate on.
    #[must_use]
    pub fn field(mut self, field: impl Into<String>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Sets the fields to operate on.
    #[must_use]
    pub fn fields<I, S>(mut self, fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.fields = Some(fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the stored field, overriding `field` and `fields`.
    #[must_use]
    pub fn stored_field(mut self, stored_field: impl Into<String>) -> Self {
        self.stored_field = Some(stored_field.into());
        self
    }

    /// Sets the stored fields, overriding every other field option.
    #[must_use]
    pub fn stored_fields<I, S>(mut self, stored_fields: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.stored_fields = Some(stored_fields.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the target node.
    #[must_use]
    pub fn node(mut self, node: impl Into<String>) -> Self {
        self.node = Some(node.into());
        self
    }

    /// Sets the target nodes.
    #[must_use]
    pub fn nodes<I, S>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.nodes = Some(nodes.into_iter().map(Into::into).collect());
        self
    }

    /// Sets the template, warmer, or percolator name.
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Sets the alias name.
    #[must_use]
    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }

    /// Requests create semantics for the index operation.
    #[must_use]
    pub const fn create(mut self, create: bool) -> Self {
        self.create = create;
        self
    }

    /// Adds a pass-through query parameter.
    ///
    /// The value is rendered with its `ToString` implementation, so numbers
    /// and booleans can be passed directly.
    #[must_use]
    pub fn param(mut self, key: impl Into<String>, value: impl ToString) -> Self {
        self.params.insert(key.into(), value.to_string());
        self
    }
}

/// A document reference for the multi get operation.
///
/// Serializes with the underscore-prefixed field names the `_mget` endpoint
/// expects. Index and type may be omitted per document; the operation fills
/// them from options or config before dispatch.
///
/// # Example
///
/// ```rust
/// use elasticsearch_api::DocumentRef;
///
/// let doc = DocumentRef::new("1").index("kitteh").doc_type("cat");
///
/// let json = serde_json::to_value(&doc).unwrap();
/// assert_eq!(
///     json,
///     serde_json::json!({"_index": "kitteh", "_type": "cat", "_id": "1"})
/// );
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DocumentRef {
    /// Index holding the document.
    #[serde(rename = "_index", skip_serializing_if = "Option::is_none")]
    pub index: Option<String>,
    /// Type of the document.
    #[serde(rename = "_type", skip_serializing_if = "Option::is_none")]
    pub doc_type: Option<String>,
    /// Id of the document.
    #[serde(rename = "_id")]
    pub id: String,
}

impl DocumentRef {
    /// Creates a reference to the document with the given id.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            index: None,
            doc_type: None,
            id: id.into(),
        }
    }

    /// Sets the index holding the document.
    #[must_use]
    pub fn index(mut self, index: impl Into<String>) -> Self {
        self.index = Some(index.into());
        self
    }

    /// Sets the type of the document.
    #[must_use]
    pub fn doc_type(mut self, doc_type: impl Into<String>) -> Self {
        self.doc_type = Some(doc_type.into());
        self
    }
}

/// Outcome of an existence check.
///
/// The exists operations issue a `HEAD` request and map the status code
/// explicitly: `200` means the target exists, anything else (`404` in
/// practice) means it does not. The raw status is kept alongside the flag
/// so callers can distinguish a missing target from an unexpected reply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExistsResult {
    /// Whether the target exists.
    pub exists: bool,
    /// Status code the check returned.
    pub status: u16,
}

impl ExistsResult {
    /// Derives the result from a response status code.
    #[must_use]
    pub const fn from_status(status: u16) -> Self {
        Self {
            exists: status == 200,
            status,
        }
    }
}
