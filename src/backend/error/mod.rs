//! Backend Error Module
//!
//! This module defines the errors that can end a render. They are returned
//! from handlers and converted to HTTP responses.
//!
//! # Architecture
//!
//! - **`types`** - Error type definitions and constructors
//! - **`conversion`** - `IntoResponse` implementation
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - Error type definitions
//! └── conversion.rs - Error conversion implementations
//! ```
//!
//! # Error Types
//!
//! - `Evaluation` - A prop failed (see `shared::error::PropError`)
//! - `Ssr` - The SSR sidecar failed in a way that is not recoverable
//! - `Protocol` - The request context is missing or misused
//! - `Template` - The root template could not be rendered
//! - `Serialization` - The page could not be serialized
//! - `Panicked` - A handler panicked
//!
//! A version conflict is not an error: it is a regular 409 response.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::RenderError;
