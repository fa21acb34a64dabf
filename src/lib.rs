//! Inertia Render - Main Library
//!
//! Server-side half of the Inertia protocol for axum: a handler names a page
//! component and hands over its props, and the renderer decides from the
//! request headers whether to answer with a JSON page, a partial JSON page,
//! an HTML bootstrap document, server-rendered HTML or a 409 asking the
//! client to reload its assets.
//!
//! # Module Structure
//!
//! - **`shared`** - Types that do not depend on HTTP
//!   - Resolved page payload
//!   - Prop errors
//!   - Renderer configuration
//!
//! - **`props`** - The prop resolution engine
//!   - Checkpointed per-request prop store
//!   - Concurrent, sequential and deferred lazy props
//!   - Store pool
//!
//! - **`backend`** - HTTP integration (only compiled with `server` feature)
//!   - Response negotiation and emitters
//!   - SSR sidecar client with graceful fallback
//!   - Axum middleware, extractor and redirect helpers
//!
//! # Feature Flags
//!
//! - **`server`** (default) - Enables the `backend` module and the demo
//!   binary. Without it the crate only provides the prop engine.
//!
//! # Usage
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use inertia_render::backend::{with_inertia, Inertia, RenderError, Renderer};
//! use inertia_render::props::{LazyProp, Props};
//! use inertia_render::shared::{BoxError, InertiaConfig};
//!
//! async fn dashboard(inertia: Inertia) -> Result<axum::response::Response, RenderError> {
//!     let props = Props::new()
//!         .with("title", "Dashboard")
//!         .with("users", LazyProp::concurrent(|_| async { Ok::<_, BoxError>(vec!["john"]) }))
//!         .with("stats", LazyProp::deferred(|_| async { Ok::<_, BoxError>(42) }));
//!     inertia.render("Dashboard", props).await
//! }
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = Renderer::new(InertiaConfig::from_env()?)?;
//! let app: Router = with_inertia(Router::new().route("/", get(dashboard)), renderer);
//! let listener = tokio::net::TcpListener::bind("127.0.0.1:3000").await?;
//! axum::serve(listener, app).await?;
//! # Ok(())
//! # }
//! ```
//!
//! # Error Handling
//!
//! - `shared::PropError` for a failed prop
//! - `backend::RenderError` for everything that ends a render
//! - `shared::ConfigError` for invalid configuration
//!
//! A failed render leaves the request context usable: rendering an error page
//! on the same context discards the failed page's props.

/// Shared types and data structures
pub mod shared;

/// Prop resolution engine
pub mod props;

/// Backend server-side code
#[cfg(feature = "server")]
pub mod backend;
