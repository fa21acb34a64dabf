//! Middleware Module
//!
//! Wires the renderer into an axum router.
//!
//! - **`inertia`** - Per-request render context, the `Inertia` extractor and
//!   the panic boundary
//!
//! # Example
//!
//! ```rust,no_run
//! use axum::{routing::get, Router};
//! use inertia_render::backend::middleware::{with_inertia, Inertia};
//! use inertia_render::backend::error::RenderError;
//! use inertia_render::backend::render::Renderer;
//! use inertia_render::props::Props;
//! use inertia_render::shared::InertiaConfig;
//!
//! async fn home(inertia: Inertia) -> Result<axum::response::Response, RenderError> {
//!     inertia.render("Home", Props::new().with("title", "Welcome")).await
//! }
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let renderer = Renderer::new(InertiaConfig::builder().manifest_version("v1").build()?)?;
//! let app: Router = with_inertia(Router::new().route("/", get(home)), renderer);
//! # Ok(())
//! # }
//! ```

pub mod inertia;

pub use inertia::{inertia_middleware, with_inertia, Inertia};
