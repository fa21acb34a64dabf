//! Renderer and request fixtures
//!
//! Builders for renderers, render contexts and raw requests, plus helpers
//! that read response bodies.

use axum::body::Body;
use axum::http::{HeaderMap, HeaderName, HeaderValue, Method, Request};
use axum::response::Response;
use inertia_render::backend::protocol::{RequestInfo, X_INERTIA, X_INERTIA_VERSION};
use inertia_render::backend::render::{RenderContext, Renderer};
use inertia_render::shared::InertiaConfig;
use serde_json::Value;
use std::time::Duration;

/// Manifest version every fixture renderer uses
pub const VERSION: &str = "v1";

/// Renderer without SSR
pub fn renderer() -> Renderer {
    let config = InertiaConfig::builder()
        .manifest_version(VERSION)
        .build()
        .expect("valid config");
    Renderer::new(config).expect("renderer")
}

/// Renderer pointing at an SSR sidecar
pub fn ssr_renderer(url: &str, timeout: Duration) -> Renderer {
    let config = InertiaConfig::builder()
        .manifest_version(VERSION)
        .ssr(url, timeout)
        .build()
        .expect("valid config");
    Renderer::new(config).expect("renderer")
}

/// Header list for a client-side navigation with current assets
pub fn inertia_headers() -> Vec<(HeaderName, &'static str)> {
    vec![(X_INERTIA, "true"), (X_INERTIA_VERSION, VERSION)]
}

/// Render context for a request with the given headers
pub fn context(renderer: &Renderer, method: Method, uri: &str, headers: &[(HeaderName, &str)]) -> RenderContext {
    let mut map = HeaderMap::new();
    for (name, value) in headers {
        map.insert(name.clone(), HeaderValue::from_str(value).expect("header value"));
    }
    let uri = uri.parse().expect("uri");
    renderer.new_context(RequestInfo::from_parts(&method, &uri, &map))
}

/// Raw request for router round trips
pub fn request(method: Method, uri: &str, headers: &[(HeaderName, &str)]) -> Request<Body> {
    let mut builder = Request::builder().method(method).uri(uri);
    for (name, value) in headers {
        builder = builder.header(name.clone(), *value);
    }
    builder.body(Body::empty()).expect("request")
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body")
        .to_vec()
}

pub async fn body_text(response: Response) -> String {
    String::from_utf8(body_bytes(response).await).expect("utf-8 body")
}

pub async fn body_json(response: Response) -> Value {
    serde_json::from_slice(&body_bytes(response).await).expect("json body")
}
