//! Inertia Protocol Headers
//!
//! Header names and the per-request view of the negotiation headers.
//!
//! | Header | Direction | Meaning |
//! |---|---|---|
//! | `X-Inertia` | req/resp | in-app fetch vs. browser navigation |
//! | `X-Inertia-Version` | req | client's cached manifest version |
//! | `X-Inertia-Location` | resp | target URL on version conflict |
//! | `X-Inertia-Partial-Component` | req | component a partial reload targets |
//! | `X-Inertia-Partial-Data` | req | comma-separated names to include |
//! | `X-Inertia-Partial-Except` | req | comma-separated names to exclude |
//! | `X-Inertia-Error-Bag` | req | named error bag |

use axum::http::{header, HeaderMap, HeaderName, Method, Uri};

pub const X_INERTIA: HeaderName = HeaderName::from_static("x-inertia");
pub const X_INERTIA_VERSION: HeaderName = HeaderName::from_static("x-inertia-version");
pub const X_INERTIA_LOCATION: HeaderName = HeaderName::from_static("x-inertia-location");
pub const X_INERTIA_PARTIAL_COMPONENT: HeaderName = HeaderName::from_static("x-inertia-partial-component");
pub const X_INERTIA_PARTIAL_DATA: HeaderName = HeaderName::from_static("x-inertia-partial-data");
pub const X_INERTIA_PARTIAL_EXCEPT: HeaderName = HeaderName::from_static("x-inertia-partial-except");
pub const X_INERTIA_ERROR_BAG: HeaderName = HeaderName::from_static("x-inertia-error-bag");

/// Negotiation-relevant view of one request
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RequestInfo {
    method: Method,
    url: String,
    is_inertia: bool,
    client_version: Option<String>,
    partial_component: Option<String>,
    only: Vec<String>,
    except: Vec<String>,
    error_bag: Option<String>,
    referer: Option<String>,
}

impl RequestInfo {
    /// Read the protocol headers of a request
    pub fn from_parts(method: &Method, uri: &Uri, headers: &HeaderMap) -> Self {
        let url = uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| "/".to_string());

        Self {
            method: method.clone(),
            url,
            is_inertia: header_str(headers, &X_INERTIA) == Some("true"),
            client_version: header_str(headers, &X_INERTIA_VERSION).map(str::to_string),
            partial_component: header_str(headers, &X_INERTIA_PARTIAL_COMPONENT)
                .filter(|c| !c.is_empty())
                .map(str::to_string),
            only: split_list(header_str(headers, &X_INERTIA_PARTIAL_DATA)),
            except: split_list(header_str(headers, &X_INERTIA_PARTIAL_EXCEPT)),
            error_bag: header_str(headers, &X_INERTIA_ERROR_BAG)
                .filter(|b| !b.is_empty())
                .map(str::to_string),
            referer: header_str(headers, &header::REFERER).map(str::to_string),
        }
    }

    /// Whether the request was made by the client-side router
    pub fn is_inertia(&self) -> bool {
        self.is_inertia
    }

    /// Whether this is a partial reload of `component`
    pub fn is_partial_for(&self, component: &str) -> bool {
        self.partial_component.as_deref() == Some(component)
    }

    /// Whether the client's asset version is stale
    ///
    /// Only GET navigations are redirected; a missing version header counts
    /// as a mismatch.
    pub fn is_version_conflict(&self, manifest_version: &str) -> bool {
        self.is_inertia
            && self.method == Method::GET
            && self.client_version.as_deref().unwrap_or_default() != manifest_version
    }

    pub fn only_props(&self) -> &[String] {
        &self.only
    }

    pub fn except_props(&self) -> &[String] {
        &self.except
    }

    pub fn client_version(&self) -> Option<&str> {
        self.client_version.as_deref()
    }

    pub fn partial_component(&self) -> Option<&str> {
        self.partial_component.as_deref()
    }

    pub fn method(&self) -> &Method {
        &self.method
    }

    /// Path and query of the request
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn error_bag(&self) -> Option<&str> {
        self.error_bag.as_deref()
    }

    pub fn referer(&self) -> Option<&str> {
        self.referer.as_deref()
    }
}

fn header_str<'a>(headers: &'a HeaderMap, name: &HeaderName) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

fn split_list(raw: Option<&str>) -> Vec<String> {
    raw.map(|raw| {
        raw.split(',')
            .map(str::trim)
            .filter(|item| !item.is_empty())
            .map(str::to_string)
            .collect()
    })
    .unwrap_or_default()
}
