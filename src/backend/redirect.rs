//! Redirect Helpers
//!
//! Redirects a handler can return instead of a page.
//!
//! - `redirect` - 303 See Other, so the client follows with a GET even after
//!   a PUT, PATCH or DELETE form submission
//! - `location` - 409 with `X-Inertia-Location`, which makes the client do a
//!   full browser visit (external URLs, non-Inertia pages)
//! - `back` - 303 to the page the request came from

use super::protocol::RequestInfo;
use super::render::emit;
use axum::{
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
};

/// 303 See Other to `url`
pub fn redirect(url: &str) -> Response {
    let mut response = StatusCode::SEE_OTHER.into_response();
    match HeaderValue::from_str(url) {
        Ok(value) => {
            response.headers_mut().insert(header::LOCATION, value);
        }
        Err(_) => tracing::warn!(url = %url, "Redirect target is not a valid header value"),
    }
    response
}

/// Full browser visit to `url`
pub fn location(url: &str) -> Response {
    emit::location(url)
}

/// 303 See Other to the referring page, `/` when there is none
pub fn back(info: &RequestInfo) -> Response {
    redirect(info.referer().unwrap_or("/"))
}
