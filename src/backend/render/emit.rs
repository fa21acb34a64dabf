//! Response Emitters
//!
//! Turns a resolved page into one of the protocol's response shapes.

use crate::backend::error::RenderError;
use crate::backend::protocol::{X_INERTIA, X_INERTIA_LOCATION};
use crate::shared::ResolvedPage;
use axum::{
    body::Body,
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// JSON page response for the client-side router
pub(crate) fn json(status: StatusCode, page: &ResolvedPage) -> Result<Response, RenderError> {
    let body = serde_json::to_vec(page)?;
    let mut response = (status, Body::from(body)).into_response();
    let headers = response.headers_mut();
    headers.insert(header::CONTENT_TYPE, HeaderValue::from_static("application/json"));
    headers.insert(header::VARY, HeaderValue::from_static("X-Inertia"));
    headers.insert(X_INERTIA, HeaderValue::from_static("true"));
    Ok(response)
}

/// Full HTML document response
pub(crate) fn html(status: StatusCode, document: String) -> Response {
    let mut response = (status, Body::from(document)).into_response();
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, HeaderValue::from_static("text/html; charset=utf-8"));
    response
}

/// 409 telling the client to reload `url` with a full page visit
pub(crate) fn location(url: &str) -> Response {
    let mut response = StatusCode::CONFLICT.into_response();
    match HeaderValue::from_str(url) {
        Ok(value) => {
            response.headers_mut().insert(X_INERTIA_LOCATION, value);
        }
        Err(_) => tracing::warn!(url = %url, "Location is not a valid header value"),
    }
    response
}

/// Root element carrying the page for client-side boot
pub(crate) fn bootstrap_root(page: &ResolvedPage) -> Result<String, RenderError> {
    let json = serde_json::to_string(page)?;
    Ok(format!("<div id=\"app\" data-page='{}'></div>", escape_html(&json)))
}

/// Escape text for use inside a quoted HTML attribute
pub(crate) fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len() + input.len() / 8);
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&#34;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
