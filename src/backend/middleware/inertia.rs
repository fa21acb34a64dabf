/**
 * Inertia Middleware
 *
 * Builds the render context of every request before the handler runs and
 * returns its prop store to the pool afterwards. Handlers reach the context
 * through the `Inertia` extractor.
 *
 * Stale client assets are detected here too, so a 409 is answered without
 * running the handler at all.
 */

use crate::backend::error::RenderError;
use crate::backend::protocol::RequestInfo;
use crate::backend::render::{emit, RenderContext, Renderer};
use crate::props::{Prop, Props};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::{request::Parts, StatusCode},
    middleware::{self, Next},
    response::{IntoResponse, Response},
    Router,
};
use std::any::Any;
use std::sync::Arc;
use tokio::sync::Mutex;
use tower_http::catch_panic::CatchPanicLayer;

/// Handle to the render state of the current request
///
/// # Usage
///
/// ```rust,no_run
/// use inertia_render::backend::middleware::Inertia;
/// use inertia_render::backend::error::RenderError;
/// use inertia_render::props::{LazyProp, Props};
/// use inertia_render::shared::BoxError;
///
/// async fn dashboard(inertia: Inertia) -> Result<axum::response::Response, RenderError> {
///     inertia.share("user", "john").await?;
///     let props = Props::new()
///         .with("stats", LazyProp::deferred(|_| async { Ok::<_, BoxError>(vec![1, 2, 3]) }));
///     inertia.render("Dashboard", props).await
/// }
/// ```
#[derive(Clone)]
pub struct Inertia {
    renderer: Renderer,
    context: Arc<Mutex<RenderContext>>,
}

impl Inertia {
    pub fn renderer(&self) -> &Renderer {
        &self.renderer
    }

    /// Negotiation headers of the current request
    pub async fn info(&self) -> RequestInfo {
        self.context.lock().await.info().clone()
    }

    /// Add a prop to every page rendered for this request
    pub async fn share(&self, name: impl Into<String>, prop: impl Into<Prop>) -> Result<(), RenderError> {
        self.context.lock().await.share(name, prop)
    }

    /// Status code for the rendered page
    pub async fn set_status(&self, status: StatusCode) {
        self.context.lock().await.set_status(status);
    }

    pub async fn encrypt_history(&self, encrypt: bool) {
        self.context.lock().await.encrypt_history(encrypt);
    }

    pub async fn clear_history(&self) {
        self.context.lock().await.clear_history();
    }

    /// Render `component` with `props`
    ///
    /// The render context stays locked until the response is built, so a
    /// lazy prop must not call back into this handle. Take what a thunk
    /// needs from the request beforehand, e.g. with [`Inertia::info`].
    pub async fn render(&self, component: &str, props: Props) -> Result<Response, RenderError> {
        let mut context = self.context.lock().await;
        self.renderer.render(&mut context, component, props).await
    }
}

impl std::fmt::Debug for Inertia {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Inertia").field("renderer", &self.renderer).finish_non_exhaustive()
    }
}

impl<S> FromRequestParts<S> for Inertia
where
    S: Send + Sync,
{
    type Rejection = RenderError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        parts.extensions.get::<Inertia>().cloned().ok_or_else(|| {
            tracing::warn!("Inertia context not found in request extensions");
            RenderError::protocol("Inertia context missing, is the middleware installed?")
        })
    }
}

/// Inertia middleware
///
/// 1. Reads the protocol headers
/// 2. Answers 409 on a version conflict
/// 3. Attaches a fresh render context to the request
/// 4. Recycles the context's store once the handler has answered
pub async fn inertia_middleware(State(renderer): State<Renderer>, mut request: Request, next: Next) -> Response {
    let info = RequestInfo::from_parts(request.method(), request.uri(), request.headers());

    if info.is_version_conflict(renderer.manifest_version()) {
        tracing::info!(
            url = %info.url(),
            client = ?info.client_version(),
            server = %renderer.manifest_version(),
            "Asset version changed, forcing a full reload"
        );
        return emit::location(info.url());
    }

    let context = Arc::new(Mutex::new(renderer.new_context(info)));
    request.extensions_mut().insert(Inertia {
        renderer: renderer.clone(),
        context: Arc::clone(&context),
    });

    let response = next.run(request).await;

    match Arc::try_unwrap(context) {
        Ok(context) => renderer.recycle(context.into_inner()),
        Err(_) => tracing::debug!("Render context still referenced after response, not pooled"),
    }

    response
}

/// Install the Inertia middleware and a panic boundary on `router`
pub fn with_inertia<S>(router: Router<S>, renderer: Renderer) -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    router
        .layer(middleware::from_fn_with_state(renderer, inertia_middleware))
        .layer(CatchPanicLayer::custom(handle_panic))
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response {
    let message = if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else {
        "unknown panic".to_string()
    };

    tracing::error!("Handler panicked: {}", message);
    RenderError::panicked(message).into_response()
}
