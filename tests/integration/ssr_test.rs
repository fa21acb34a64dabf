//! SSR bridge integration tests
//!
//! Runs the renderer against a `wiremock` sidecar.

use crate::common::{
    body_bytes, body_text, context, inertia_headers, renderer, slow_ssr_sidecar, ssr_renderer, ssr_sidecar,
    ssr_sidecar_with,
};
use axum::http::{Method, StatusCode};
use inertia_render::props::Props;
use serde_json::json;
use std::time::Duration;
use wiremock::matchers::{body_partial_json, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

const TIMEOUT: Duration = Duration::from_secs(2);

fn page_props() -> Props {
    Props::new().with("title", "Welcome").with("count", json!(3))
}

/// Bootstrap document rendered without SSR, for byte comparison
async fn client_side_document() -> Vec<u8> {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/", &[]);
    let response = assert_ok!(renderer.render(&mut ctx, "Home", page_props()).await);
    body_bytes(response).await
}

async fn render_with_sidecar(server: &MockServer) -> axum::response::Response {
    let renderer = ssr_renderer(&server.uri(), TIMEOUT);
    let mut ctx = context(&renderer, Method::GET, "/", &[]);
    assert_ok!(renderer.render(&mut ctx, "Home", page_props()).await)
}

#[tokio::test]
async fn test_ssr_markup_is_used() {
    let server = ssr_sidecar(&["<title>Welcome</title>", "<meta name=\"x\" content=\"y\">"], "<div id=\"app\"><h1>Welcome</h1></div>").await;

    let response = render_with_sidecar(&server).await;
    assert_eq!(response.status(), StatusCode::OK);

    let html = body_text(response).await;
    assert_contains!(html, "<title>Welcome</title>\n<meta name=\"x\" content=\"y\">");
    assert_contains!(html, "<div id=\"app\"><h1>Welcome</h1></div>");
    assert!(!html.contains("data-page"));
}

#[tokio::test]
async fn test_sidecar_receives_page_json() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/render"))
        .and(body_partial_json(json!({
            "component": "Home",
            "url": "/",
            "props": { "title": "Welcome", "count": 3 },
            "version": "v1"
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "head": [], "body": "<div>ok</div>" })))
        .expect(1)
        .mount(&server)
        .await;

    let html = body_text(render_with_sidecar(&server).await).await;
    assert_contains!(html, "<div>ok</div>");
}

#[tokio::test]
async fn test_sidecar_error_status_falls_back() {
    let server = ssr_sidecar_with(ResponseTemplate::new(500).set_body_string("crashed")).await;

    let bytes = body_bytes(render_with_sidecar(&server).await).await;
    assert_eq!(bytes, client_side_document().await);
}

#[tokio::test]
async fn test_undecodable_sidecar_body_falls_back() {
    let server = ssr_sidecar_with(ResponseTemplate::new(200).set_body_string("<html>not json</html>")).await;

    let bytes = body_bytes(render_with_sidecar(&server).await).await;
    assert_eq!(bytes, client_side_document().await);
}

#[tokio::test]
async fn test_unreachable_sidecar_falls_back() {
    let renderer = ssr_renderer("http://127.0.0.1:9", TIMEOUT);
    let mut ctx = context(&renderer, Method::GET, "/", &[]);
    let response = assert_ok!(renderer.render(&mut ctx, "Home", page_props()).await);

    assert_eq!(body_bytes(response).await, client_side_document().await);
}

#[tokio::test]
async fn test_slow_sidecar_times_out_and_falls_back() {
    let server = slow_ssr_sidecar(Duration::from_secs(5)).await;
    let renderer = ssr_renderer(&server.uri(), Duration::from_millis(200));
    let mut ctx = context(&renderer, Method::GET, "/", &[]);

    let started = std::time::Instant::now();
    let response = assert_ok!(renderer.render(&mut ctx, "Home", page_props()).await);
    assert!(started.elapsed() < Duration::from_secs(4));

    let html = body_text(response).await;
    assert_contains!(html, "data-page=");
    assert!(!html.contains("late"));
}

#[tokio::test]
async fn test_sidecar_not_called_for_inertia_requests() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/render"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "head": [], "body": "" })))
        .expect(0)
        .mount(&server)
        .await;

    let renderer = ssr_renderer(&server.uri(), TIMEOUT);
    let mut ctx = context(&renderer, Method::GET, "/", &inertia_headers());
    let response = assert_ok!(renderer.render(&mut ctx, "Home", page_props()).await);
    assert_eq!(response.status(), StatusCode::OK);
}
