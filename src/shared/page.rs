//! Resolved Page Payload
//!
//! The page object of the Inertia protocol. It is produced once per render
//! attempt and serialized either as the JSON response body, as the `data-page`
//! attribute of the HTML bootstrap document, or as the request body sent to
//! the SSR sidecar.
//!
//! # JSON Shape
//!
//! ```json
//! {
//!   "component": "Users/Index",
//!   "url": "/users?page=2",
//!   "props": { "users": [] },
//!   "version": "6b8e1d",
//!   "encryptHistory": false,
//!   "clearHistory": false,
//!   "deferredProps": { "default": ["stats"] }
//! }
//! ```
//!
//! `props` is a `serde_json::Map`, which keeps keys sorted, so two renders of
//! the same page serialize to identical bytes.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Page payload sent to the client
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResolvedPage {
    /// Name of the frontend page component
    pub component: String,
    /// Path and query of the request that produced this page
    pub url: String,
    /// Props evaluated during this render pass
    pub props: Map<String, Value>,
    /// Current asset manifest version
    pub version: String,
    /// Whether the client should encrypt this history entry
    pub encrypt_history: bool,
    /// Whether the client should roll its history encryption key
    pub clear_history: bool,
    /// Deferred prop names per group that the client still has to request
    #[serde(default, skip_serializing_if = "BTreeMap::is_empty")]
    pub deferred_props: BTreeMap<String, Vec<String>>,
}

impl ResolvedPage {
    /// Names of every deferred prop, across all groups
    pub fn deferred_names(&self) -> impl Iterator<Item = &str> {
        self.deferred_props.values().flatten().map(String::as_str)
    }
}
