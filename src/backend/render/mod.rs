//! Render Module
//!
//! The renderer owns everything that is shared between requests: the
//! configuration, the root template, the SSR client and the store pool. Each
//! request gets its own [`RenderContext`] holding the prop store and the
//! response flags a handler can change before rendering.
//!
//! # Module Structure
//!
//! ```text
//! render/
//! ├── mod.rs        - Renderer and RenderContext
//! ├── negotiator.rs - Response selection
//! └── emit.rs       - JSON, HTML and redirect responses
//! ```
//!
//! # Example
//!
//! ```rust,no_run
//! use inertia_render::backend::protocol::RequestInfo;
//! use inertia_render::backend::render::Renderer;
//! use inertia_render::props::Props;
//! use inertia_render::shared::InertiaConfig;
//! use axum::http::{HeaderMap, Method};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = Renderer::new(InertiaConfig::builder().manifest_version("v1").build()?)?;
//! let info = RequestInfo::from_parts(&Method::GET, &"/".parse()?, &HeaderMap::new());
//! let mut context = renderer.new_context(info);
//! let response = renderer.render(&mut context, "Home", Props::new().with("title", "Hi")).await?;
//! renderer.recycle(context);
//! # Ok(())
//! # }
//! ```

pub(crate) mod emit;
mod negotiator;

use super::error::RenderError;
use super::protocol::RequestInfo;
use super::ssr::SsrClient;
use super::template::RootTemplate;
use crate::props::{Prop, PropStore, Props, StorePool};
use crate::shared::InertiaConfig;
use axum::http::StatusCode;
use axum::response::Response;
use std::sync::Arc;
use tokio_util::sync::CancellationToken;

/// Shared page renderer
///
/// Cheap to clone; clones share the same pool and SSR client.
#[derive(Debug, Clone)]
pub struct Renderer {
    inner: Arc<RendererInner>,
}

#[derive(Debug)]
struct RendererInner {
    config: InertiaConfig,
    template: RootTemplate,
    ssr: Option<SsrClient>,
    pool: StorePool,
}

impl Renderer {
    /// Create a renderer with the default root template
    pub fn new(config: InertiaConfig) -> Result<Self, RenderError> {
        Self::with_template(config, RootTemplate::default())
    }

    /// Create a renderer with a custom root template
    pub fn with_template(config: InertiaConfig, template: RootTemplate) -> Result<Self, RenderError> {
        let ssr = match &config.ssr_url {
            Some(url) => Some(SsrClient::new(url, config.ssr_timeout)?),
            None => None,
        };
        let pool = StorePool::new(config.pool_capacity);

        Ok(Self {
            inner: Arc::new(RendererInner {
                config,
                template,
                ssr,
                pool,
            }),
        })
    }

    pub fn config(&self) -> &InertiaConfig {
        &self.inner.config
    }

    pub fn manifest_version(&self) -> &str {
        &self.inner.config.manifest_version
    }

    pub(crate) fn template(&self) -> &RootTemplate {
        &self.inner.template
    }

    pub(crate) fn ssr(&self) -> Option<&SsrClient> {
        self.inner.ssr.as_ref()
    }

    /// Start the render state of one request
    pub fn new_context(&self, info: RequestInfo) -> RenderContext {
        RenderContext {
            info,
            store: self.inner.pool.acquire(),
            status: StatusCode::OK,
            encrypt_history: self.inner.config.encrypt_history,
            clear_history: false,
            cancel: CancellationToken::new(),
        }
    }

    /// Hand a finished request's store back to the pool
    pub fn recycle(&self, context: RenderContext) {
        context.cancel.cancel();
        self.inner.pool.release(context.store);
    }

    /// Number of idle stores in the pool
    pub fn idle_stores(&self) -> usize {
        self.inner.pool.idle()
    }

    /// Render `component` with `props` for the request held by `context`
    ///
    /// Calling this again on the same context after an error discards the
    /// props of the failed attempt, but keeps the shared ones.
    pub async fn render(
        &self,
        context: &mut RenderContext,
        component: &str,
        props: Props,
    ) -> Result<Response, RenderError> {
        negotiator::negotiate(self, context, component, props).await
    }
}

/// Render state of a single request
#[derive(Debug)]
pub struct RenderContext {
    info: RequestInfo,
    store: PropStore,
    status: StatusCode,
    encrypt_history: bool,
    clear_history: bool,
    cancel: CancellationToken,
}

impl RenderContext {
    pub fn info(&self) -> &RequestInfo {
        &self.info
    }

    pub fn store(&self) -> &PropStore {
        &self.store
    }

    /// Add a prop to every page rendered for this request
    ///
    /// Deferred props are rejected: they are only meaningful on the page they
    /// are declared with.
    pub fn share(&mut self, name: impl Into<String>, prop: impl Into<Prop>) -> Result<(), RenderError> {
        let name = name.into();
        let prop = prop.into();
        if prop.as_lazy().is_some_and(|lazy| lazy.is_deferred()) {
            return Err(RenderError::protocol(format!(
                "shared prop '{}' cannot be deferred",
                name
            )));
        }
        self.store.set(name, prop);
        Ok(())
    }

    /// Status code used for page responses, 200 by default
    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    pub fn encrypt_history(&mut self, encrypt: bool) {
        self.encrypt_history = encrypt;
    }

    /// Ask the client to roll its history encryption key
    pub fn clear_history(&mut self) {
        self.clear_history = true;
    }

    /// Token cancelled when the request ends
    pub fn cancel_token(&self) -> &CancellationToken {
        &self.cancel
    }
}
