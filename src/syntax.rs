//! Request derivation functions shared by every operation module.
//!
//! Elasticsearch addresses most endpoints by index and type, both of which
//! may be supplied per call (singular or plural), fall back to configured
//! defaults, or be omitted entirely. This module holds the pure functions
//! that resolve those inputs into normalized "syntax" strings, validate
//! required keys, join path segments, and serialize pass-through query
//! parameters.
//!
//! # Syntax Resolution
//!
//! Plural values win over singular values, and per-call options win over
//! configured defaults. A plural value is comma-joined per Elasticsearch's
//! multi-index conventions:
//!
//! ```rust
//! use elasticsearch_api::syntax::index_syntax;
//! use elasticsearch_api::{ElasticsearchConfig, RequestOptions};
//!
//! let config = ElasticsearchConfig::builder().index("dieren").build();
//! let options = RequestOptions::new().indices(["kitteh", "dievka"]);
//!
//! assert_eq!(index_syntax(&options, Some(&config)), "kitteh,dievka");
//! assert_eq!(index_syntax(&RequestOptions::new(), Some(&config)), "dieren");
//! ```
//!
//! # Path Joining
//!
//! Empty segments are dropped and the result carries exactly one leading
//! slash, so callers can pass optional segments without branching:
//!
//! ```rust
//! use elasticsearch_api::syntax::join_path;
//!
//! assert_eq!(join_path(&["kitteh", "", "_search"]), "/kitteh/_search");
//! assert_eq!(join_path(&[]), "");
//! ```

use std::collections::BTreeMap;

use crate::config::ElasticsearchConfig;
use crate::error::Error;
use crate::options::RequestOptions;

/// Resolves the index syntax for a request.
///
/// Precedence: options plural, options singular, config plural, config
/// singular, then the empty string. A plural value short-circuits even when
/// it joins to an empty string. Operations that must ignore configured
/// defaults (bulk, multi-search) pass `None` for `config`.
#[must_use]
pub fn index_syntax(options: &RequestOptions, config: Option<&ElasticsearchConfig>) -> String {
    resolve_syntax(
        options.indices.as_deref(),
        options.index.as_deref(),
        config.and_then(ElasticsearchConfig::indices),
        config.and_then(ElasticsearchConfig::index),
    )
}

/// Resolves the type syntax for a request.
///
/// Same precedence rules as [`index_syntax`], reading the type fields.
#[must_use]
pub fn type_syntax(options: &RequestOptions, config: Option<&ElasticsearchConfig>) -> String {
    resolve_syntax(
        options.doc_types.as_deref(),
        options.doc_type.as_deref(),
        config.and_then(ElasticsearchConfig::doc_types),
        config.and_then(ElasticsearchConfig::doc_type),
    )
}

/// Resolves the field syntax for a request.
///
/// Reads options only: `fields` wins over `field`. When `stored_fields` or
/// `stored_field` is also present, that value overwrites the result. The
/// overwrite ordering is a documented behavior of this library, relied on by
/// callers that supply both spellings.
#[must_use]
pub fn field_syntax(options: &RequestOptions) -> String {
    let mut syntax = resolve_syntax(
        options.fields.as_deref(),
        options.field.as_deref(),
        None,
        None,
    );

    if let Some(stored) = options.stored_fields.as_deref() {
        syntax = stored.join(",");
    } else if let Some(stored) = options.stored_field.as_deref().filter(|s| !s.is_empty()) {
        syntax = stored.to_string();
    }

    syntax
}

/// Resolves the node syntax for a request.
///
/// Same precedence rules as [`index_syntax`], reading the node fields. Used
/// by the cluster operations that target specific nodes.
#[must_use]
pub fn node_syntax(options: &RequestOptions, config: Option<&ElasticsearchConfig>) -> String {
    resolve_syntax(
        options.nodes.as_deref(),
        options.node.as_deref(),
        config.and_then(ElasticsearchConfig::nodes),
        config.and_then(ElasticsearchConfig::node),
    )
}

// A present plural stops the fallback chain even when empty; a singular only
// counts when non-empty.
fn resolve_syntax(
    plural: Option<&[String]>,
    singular: Option<&str>,
    config_plural: Option<&[String]>,
    config_singular: Option<&str>,
) -> String {
    if let Some(values) = plural {
        values.join(",")
    } else if let Some(value) = singular.filter(|value| !value.is_empty()) {
        value.to_string()
    } else if let Some(values) = config_plural {
        values.join(",")
    } else if let Some(value) = config_singular.filter(|value| !value.is_empty()) {
        value.to_string()
    } else {
        String::new()
    }
}

/// Keys an operation can require before dispatching a request.
///
/// Each key maps to the option it checks and to the spelling used in the
/// resulting error message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequiredKey {
    /// An index, satisfied by a singular or plural value in options or config.
    Index,
    /// A document type, satisfied by a singular or plural value in options or config.
    Type,
    /// A document id, satisfied by a single id or a list of ids in options.
    Id,
    /// A name (template, warmer, or percolator), satisfied by options only.
    Name,
    /// An alias name, satisfied by options only.
    Alias,
}

impl RequiredKey {
    /// Returns the key's spelling in the wrapped API's vocabulary.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Index => "_index",
            Self::Type => "_type",
            Self::Id => "_id",
            Self::Name => "name",
            Self::Alias => "alias",
        }
    }

    // Presence, not truthiness: an empty string still satisfies a key.
    fn is_satisfied(&self, options: &RequestOptions, config: &ElasticsearchConfig) -> bool {
        match self {
            Self::Index => {
                options.index.is_some()
                    || options.indices.is_some()
                    || config.index().is_some()
                    || config.indices().is_some()
            }
            Self::Type => {
                options.doc_type.is_some()
                    || options.doc_types.is_some()
                    || config.doc_type().is_some()
                    || config.doc_types().is_some()
            }
            Self::Id => options.id.is_some() || options.ids.is_some(),
            Self::Name => options.name.is_some(),
            Self::Alias => options.alias.is_some(),
        }
    }
}

/// Validates that every required key is present in options or config.
///
/// Keys are evaluated in list order and the first missing key short-circuits
/// into an error, so callers see one defect at a time.
///
/// # Errors
///
/// Returns [`Error::MissingOption`] naming the first absent key.
///
/// # Example
///
/// ```rust
/// use elasticsearch_api::syntax::{require_keys, RequiredKey};
/// use elasticsearch_api::{ElasticsearchConfig, RequestOptions};
///
/// let config = ElasticsearchConfig::default();
/// let options = RequestOptions::new().indices(["kitteh"]);
///
/// // A plural value satisfies the singular requirement.
/// assert!(require_keys(&options, &config, &[RequiredKey::Index]).is_ok());
///
/// let err = require_keys(&options, &config, &[RequiredKey::Id]).unwrap_err();
/// assert_eq!(err.to_string(), "_id is required");
/// ```
pub fn require_keys(
    options: &RequestOptions,
    config: &ElasticsearchConfig,
    keys: &[RequiredKey],
) -> Result<(), Error> {
    for key in keys {
        if !key.is_satisfied(options, config) {
            return Err(Error::MissingOption { key: key.as_str() });
        }
    }

    Ok(())
}

/// Joins path segments into a URL path.
///
/// Empty segments are skipped, surrounding slashes are normalized away
/// (interior slashes such as `_cache/clear` survive), and the result carries
/// exactly one leading slash. Returns the empty string when no segment
/// survives.
///
/// # Example
///
/// ```rust
/// use elasticsearch_api::syntax::join_path;
///
/// assert_eq!(join_path(&["a", "", "b"]), "/a/b");
/// assert_eq!(join_path(&["0"]), "/0");
/// assert_eq!(join_path(&[]), "");
/// ```
#[must_use]
pub fn join_path(segments: &[&str]) -> String {
    let parts: Vec<&str> = segments
        .iter()
        .map(|segment| segment.trim_matches('/'))
        .filter(|segment| !segment.is_empty())
        .collect();

    if parts.is_empty() {
        String::new()
    } else {
        format!("/{}", parts.join("/"))
    }
}

/// Serializes pass-through parameters into a query string.
///
/// Entries are emitted as `key=value` pairs joined with `&`, in the map's
/// iteration order, skipping any key in `excludes`. The input map is never
/// modified. No percent-encoding is performed at this layer; callers must
/// pre-encode values containing reserved URL characters.
///
/// # Example
///
/// ```rust
/// use std::collections::BTreeMap;
///
/// use elasticsearch_api::syntax::to_query_string;
///
/// let mut params = BTreeMap::new();
/// params.insert("refresh".to_string(), "true".to_string());
/// params.insert("routing".to_string(), "kimchy".to_string());
///
/// assert_eq!(to_query_string(&params, &[]), "refresh=true&routing=kimchy");
/// assert_eq!(to_query_string(&params, &["routing"]), "refresh=true");
/// ```
#[must_use]
pub fn to_query_string(params: &BTreeMap<String, String>, excludes: &[&str]) -> String {
    params
        .iter()
        .filter(|(key, _)| !excludes.contains(&key.as_str()))
        .map(|(key, value)| format!("{key}={value}"))
        .collect::<Vec<_>>()
        .join("&")
}

/// Appends a query string to a path when the query string is non-empty.
#[must_use]
pub fn append_query(path: String, query: &str) -> String {
    if query.is_empty() {
        path
    } else {
        format!("{path}?{query}")
    }
}

// Path plus the options' serialized pass-through parameters, the composition
// every operation performs.
pub(crate) fn request_path(path: String, options: &RequestOptions) -> String {
    append_query(path, &to_query_string(&options.params, &[]))
}
