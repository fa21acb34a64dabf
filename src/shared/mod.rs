//! Shared Module
//!
//! This module contains types that are shared between the prop engine and the
//! HTTP layer. None of them depend on axum, so the prop engine can be used and
//! tested without the `server` feature.
//!
//! # Overview
//!
//! - **`page`** - The resolved page payload sent to the client
//! - **`error`** - Prop evaluation errors
//! - **`config`** - Renderer configuration and its builder

/// Resolved page payload
pub mod page;

/// Shared error types
pub mod error;

/// Renderer configuration
pub mod config;

/// Re-export commonly used types for convenience
pub use page::ResolvedPage;
pub use error::{BoxError, PropError};
pub use config::{ConfigError, InertiaConfig, InertiaConfigBuilder};
