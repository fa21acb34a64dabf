//! Backend Module
//!
//! The HTTP half of the crate: protocol headers, response negotiation, the
//! SSR bridge and the axum integration. Only compiled with the `server`
//! feature.
//!
//! # Architecture
//!
//! - **`protocol`** - Header names and the per-request `RequestInfo`
//! - **`render`** - `Renderer`, `RenderContext` and the negotiator
//! - **`ssr`** - Client for the SSR sidecar
//! - **`template`** - Root HTML template
//! - **`middleware`** - Axum middleware, `Inertia` extractor, panic boundary
//! - **`redirect`** - 303 and external redirects
//! - **`error`** - `RenderError` and its HTTP conversion
//! - **`server`** / **`routes`** - The demo server
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── protocol.rs     - Inertia headers
//! ├── render/         - Renderer and response negotiation
//! ├── ssr.rs          - SSR sidecar client
//! ├── template.rs     - Root template
//! ├── middleware/     - Axum integration
//! ├── redirect.rs     - Redirect helpers
//! ├── error/          - Error types
//! ├── server/         - Demo server setup
//! └── routes/         - Demo routes
//! ```
//!
//! # Request Flow
//!
//! 1. `inertia_middleware` reads the headers, answers stale clients with 409
//!    and attaches a `RenderContext` to the request.
//! 2. The handler shares props and calls `Inertia::render`.
//! 3. The negotiator evaluates the props and picks JSON, HTML or SSR HTML.
//! 4. The middleware returns the context's prop store to the pool.
//!
//! # Thread Safety
//!
//! `Renderer` is an `Arc` and is shared by every request. A `RenderContext`
//! belongs to one request; the extractor reaches it through a
//! `tokio::sync::Mutex` because rendering holds it across awaits.

/// Inertia protocol headers
pub mod protocol;

/// Renderer and response negotiation
pub mod render;

/// SSR sidecar client
pub mod ssr;

/// Root HTML template
pub mod template;

/// Axum middleware and extractor
pub mod middleware;

/// Redirect helpers
pub mod redirect;

/// Backend error types
pub mod error;

/// Demo server setup
pub mod server;

/// Demo route configuration
pub mod routes;

// Re-export commonly used types
pub use error::RenderError;
pub use middleware::{inertia_middleware, with_inertia, Inertia};
pub use protocol::RequestInfo;
pub use redirect::{back, location, redirect};
pub use render::{RenderContext, Renderer};
pub use ssr::{SsrClient, SsrError, SsrResponse};
pub use template::{RootTemplate, TemplateData};
