/**
 * Page Route Handlers
 *
 * Demo handlers covering each way a page can be answered: plain props,
 * lazy and deferred props, re-rendering an error page after a prop failed,
 * and the redirect helpers.
 */

use crate::backend::error::RenderError;
use crate::backend::middleware::Inertia;
use crate::backend::redirect::{back, location, redirect};
use crate::backend::server::state::AppState;
use crate::props::{LazyProp, Props};
use crate::shared::BoxError;
use axum::{
    extract::State,
    http::StatusCode,
    response::Response,
    routing::{get, post},
    Form, Router,
};
use serde::Deserialize;
use std::time::Duration;

/// Form posted to `POST /users`
#[derive(Debug, Deserialize)]
pub struct NewUser {
    pub name: String,
}

/// Configure page routes
pub fn configure_page_routes(router: Router<AppState>) -> Router<AppState> {
    router
        .route("/", get(home))
        .route("/users", get(list_users).post(create_user))
        .route("/reports", get(reports))
        .route("/billing", get(billing))
        .route("/logout", post(logout))
}

async fn home(inertia: Inertia) -> Result<Response, RenderError> {
    inertia
        .render("Home", Props::new().with("title", "Welcome"))
        .await
}

async fn list_users(State(state): State<AppState>, inertia: Inertia) -> Result<Response, RenderError> {
    inertia.share("appName", "Inertia Demo").await?;

    let users = state.users.read().await.clone();
    let count = users.len();

    let props = Props::new()
        .with("users", serde_json::json!(users))
        .with(
            "count",
            LazyProp::concurrent(move |_| async move { Ok::<_, BoxError>(count) }),
        )
        .with(
            "activity",
            LazyProp::deferred(|cancel| async move {
                tokio::select! {
                    _ = cancel.cancelled() => Err::<Vec<u32>, BoxError>("cancelled".into()),
                    _ = tokio::time::sleep(Duration::from_millis(50)) => Ok(vec![3, 1, 4]),
                }
            })
            .group("activity"),
        );

    render_or_error(&inertia, "Users/Index", props).await
}

async fn create_user(
    State(state): State<AppState>,
    Form(new_user): Form<NewUser>,
) -> Response {
    tracing::info!(name = %new_user.name, "Adding user");
    state.users.write().await.push(new_user.name);
    redirect("/users")
}

async fn reports(inertia: Inertia) -> Result<Response, RenderError> {
    let props = Props::new().with(
        "summary",
        LazyProp::sequential(|_| async { Err::<u32, BoxError>("reporting database unavailable".into()) }),
    );
    render_or_error(&inertia, "Reports/Index", props).await
}

async fn billing() -> Response {
    location("https://billing.example.com/portal")
}

async fn logout(inertia: Inertia) -> Response {
    back(&inertia.info().await)
}

/// Render `component`, or an error page when one of its props fails
async fn render_or_error(inertia: &Inertia, component: &str, props: Props) -> Result<Response, RenderError> {
    match inertia.render(component, props).await {
        Err(RenderError::Evaluation(err)) => {
            tracing::warn!(component = %component, error = %err, "Prop failed, rendering error page");
            inertia.set_status(StatusCode::INTERNAL_SERVER_ERROR).await;
            let props = Props::new()
                .with("status", serde_json::json!(500))
                .with("message", format!("Could not load '{}'", err.name()));
            inertia.render("Error", props).await
        }
        other => other,
    }
}
