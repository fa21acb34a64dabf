//! Integration tests
//!
//! Render negotiation, the SSR bridge and the axum middleware, driven
//! through the public API.

mod render_test;
mod ssr_test;
