//! Endpoint candidate types

use crate::types::JsonValue;
use reqwest::Method;

/// One concrete path + payload-shape hypothesis to try during probing.
#[derive(Debug, Clone)]
pub struct EndpointCandidate {
    /// Stable shape name, used in logs and probe diagnostics
    pub name: &'static str,
    /// HTTP method for this candidate
    pub method: Method,
    /// Path relative to the configured base URL, query string included
    pub path: String,
    /// JSON request body, if the route takes one
    pub body: Option<JsonValue>,
}

impl EndpointCandidate {
    pub fn post(name: &'static str, path: impl Into<String>, body: JsonValue) -> Self {
        Self {
            name,
            method: Method::POST,
            path: path.into(),
            body: Some(body),
        }
    }

    pub fn get(name: &'static str, path: impl Into<String>) -> Self {
        Self {
            name,
            method: Method::GET,
            path: path.into(),
            body: None,
        }
    }
}

/// One natural text field of an entity that a search can filter on.
///
/// Entities with more than one text field fan out into one field-scoped
/// probe per field; results are merged with first-seen-wins dedup, so the
/// primary field's matches rank first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchField {
    /// Upstream property name, dotted for reference fields
    pub property: &'static str,
    /// Primary fields also probe routes that cannot scope to a field
    pub primary: bool,
}
