//! Render negotiation integration tests
//!
//! Drives `Renderer::render` directly with hand-built request contexts.

use crate::common::{body_json, body_text, context, inertia_headers, renderer};
use assert_matches::assert_matches;
use axum::http::{header, Method, StatusCode};
use inertia_render::backend::protocol::{
    X_INERTIA, X_INERTIA_LOCATION, X_INERTIA_PARTIAL_COMPONENT, X_INERTIA_PARTIAL_DATA, X_INERTIA_PARTIAL_EXCEPT,
    X_INERTIA_VERSION,
};
use inertia_render::backend::RenderError;
use inertia_render::props::{LazyProp, Props};
use inertia_render::shared::{BoxError, PropError};
use pretty_assertions::assert_eq;
use serde_json::json;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn partial_headers(component: &'static str, only: &'static str) -> Vec<(axum::http::HeaderName, &'static str)> {
    let mut headers = inertia_headers();
    headers.push((X_INERTIA_PARTIAL_COMPONENT, component));
    headers.push((X_INERTIA_PARTIAL_DATA, only));
    headers
}

#[tokio::test]
async fn test_deferred_and_sync_props_full_visit() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/dashboard", &inertia_headers());

    let props = Props::new()
        .with("visits", LazyProp::deferred(|_| async { Ok::<_, BoxError>(1200) }).group("stats"))
        .with("title", LazyProp::sequential(|_| async { Ok::<_, BoxError>("Dashboard") }));

    let response = assert_ok!(renderer.render(&mut ctx, "Dashboard", props).await);
    let body = body_json(response).await;
    assert_eq!(body["props"], json!({ "title": "Dashboard" }));
    assert_eq!(body["deferredProps"], json!({ "stats": ["visits"] }));
}

#[tokio::test]
async fn test_deferred_group_loaded_by_partial_reload() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/dashboard", &partial_headers("Dashboard", "visits,signups"));

    let props = Props::new()
        .with("title", "Dashboard")
        .with("visits", LazyProp::deferred(|_| async { Ok::<_, BoxError>(1200) }).group("stats"))
        .with("signups", LazyProp::deferred_sequential(|_| async { Ok::<_, BoxError>(34) }).group("stats"));

    let body = body_json(assert_ok!(renderer.render(&mut ctx, "Dashboard", props).await)).await;
    assert_eq!(body["props"], json!({ "signups": 34, "visits": 1200 }));
    assert!(body.get("deferredProps").is_none());
}

#[tokio::test]
async fn test_partial_except_wins_over_only() {
    let renderer = renderer();
    let mut headers = partial_headers("Users", "users,filters");
    headers.push((X_INERTIA_PARTIAL_EXCEPT, "filters"));
    let mut ctx = context(&renderer, Method::GET, "/users", &headers);

    let props = Props::new()
        .with("users", json!(["john"]))
        .with("filters", json!({ "q": "" }))
        .with("title", "Users");

    let body = body_json(assert_ok!(renderer.render(&mut ctx, "Users", props).await)).await;
    assert_eq!(body["props"], json!({ "users": ["john"] }));
}

#[tokio::test]
async fn test_partial_without_data_header_loads_everything() {
    let renderer = renderer();
    let mut headers = inertia_headers();
    headers.push((X_INERTIA_PARTIAL_COMPONENT, "Users"));
    let mut ctx = context(&renderer, Method::GET, "/users", &headers);

    let props = Props::new()
        .with("users", json!(["john"]))
        .with("stats", LazyProp::deferred(|_| async { Ok::<_, BoxError>(7) }));

    let body = body_json(assert_ok!(renderer.render(&mut ctx, "Users", props).await)).await;
    assert_eq!(body["props"], json!({ "stats": 7, "users": ["john"] }));
}

#[tokio::test]
async fn test_version_conflict_never_evaluates() {
    let renderer = renderer();
    let mut ctx = context(
        &renderer,
        Method::GET,
        "/users?page=3",
        &[(X_INERTIA, "true"), (X_INERTIA_VERSION, "outdated")],
    );
    let calls = Arc::new(AtomicUsize::new(0));
    let counter = Arc::clone(&calls);

    let props = Props::new().with(
        "users",
        LazyProp::concurrent(move |_| {
            counter.fetch_add(1, Ordering::SeqCst);
            async { Ok::<_, BoxError>(Vec::<String>::new()) }
        }),
    );

    let response = assert_ok!(renderer.render(&mut ctx, "Users", props).await);
    assert_eq!(response.status(), StatusCode::CONFLICT);
    assert_header!(response, X_INERTIA_LOCATION, "/users?page=3");
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn test_version_mismatch_on_post_is_rendered() {
    let renderer = renderer();
    let mut ctx = context(
        &renderer,
        Method::POST,
        "/users",
        &[(X_INERTIA, "true"), (X_INERTIA_VERSION, "outdated")],
    );

    let response = assert_ok!(renderer.render(&mut ctx, "Users", Props::new()).await);
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_browser_visit_gets_bootstrap_document() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/", &[]);

    let response = assert_ok!(renderer.render(&mut ctx, "Home", Props::new().with("title", "Welcome")).await);
    assert_eq!(response.status(), StatusCode::OK);
    assert_header!(response, header::CONTENT_TYPE, "text/html; charset=utf-8");
    assert!(response.headers().get(X_INERTIA).is_none());

    let html = body_text(response).await;
    assert_contains!(html, "<!DOCTYPE html>");
    assert_contains!(
        html,
        "<div id=\"app\" data-page='{&#34;component&#34;:&#34;Home&#34;,&#34;url&#34;:&#34;/&#34;,&#34;props&#34;:{&#34;title&#34;:&#34;Welcome&#34;},&#34;version&#34;:&#34;v1&#34;,&#34;encryptHistory&#34;:false,&#34;clearHistory&#34;:false}'></div>"
    );
}

#[tokio::test]
async fn test_sequential_error_is_returned() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/reports", &inertia_headers());

    let props = Props::new()
        .with("summary", LazyProp::sequential(|_| async { Err::<u32, _>("warehouse offline") }))
        .with("details", LazyProp::sequential(|_| async { Ok::<_, BoxError>(1) }));

    let err = renderer.render(&mut ctx, "Reports", props).await.unwrap_err();
    assert_matches!(err, RenderError::Evaluation(PropError::Failed { ref name, .. }) if name == "summary");
    assert!(ctx.store().props().get("details").is_none());
}

#[tokio::test]
async fn test_error_page_after_failed_render() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/reports", &inertia_headers());
    ctx.share("auth", json!({ "user": "john" })).unwrap();

    let failing = Props::new()
        .with("chart", LazyProp::concurrent(|_| async { Err::<u32, _>("timeout") }))
        .with("title", "Reports");
    let err = renderer.render(&mut ctx, "Reports", failing).await.unwrap_err();
    assert_matches!(err, RenderError::Evaluation(_));

    ctx.set_status(StatusCode::SERVICE_UNAVAILABLE);
    let response = assert_ok!(renderer.render(&mut ctx, "Error", Props::new().with("status", json!(503))).await);
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);

    let body = body_json(response).await;
    assert_eq!(body["component"], "Error");
    assert_eq!(body["props"], json!({ "auth": { "user": "john" }, "status": 503 }));
}

#[tokio::test]
async fn test_last_prop_with_same_name_wins() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/", &inertia_headers());
    ctx.share("title", "Shared").unwrap();

    let body = body_json(assert_ok!(renderer.render(&mut ctx, "Home", Props::new().with("title", "Page")).await)).await;
    assert_eq!(body["props"], json!({ "title": "Page" }));
}

#[tokio::test]
async fn test_history_flags() {
    let renderer = renderer();
    let mut ctx = context(&renderer, Method::GET, "/account", &inertia_headers());
    ctx.encrypt_history(true);
    ctx.clear_history();

    let body = body_json(assert_ok!(renderer.render(&mut ctx, "Account", Props::new()).await)).await;
    assert_eq!(body["encryptHistory"], true);
    assert_eq!(body["clearHistory"], true);
}
