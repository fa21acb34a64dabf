//! Shared Error Types
//!
//! This module defines the errors produced while resolving props. They are
//! independent of the HTTP layer: the render negotiator wraps them in
//! `RenderError::Evaluation` so handlers can tell a failed prop apart from an
//! SSR or protocol failure without matching on strings.
//!
//! # Error Categories
//!
//! - `Failed` - A lazy prop's thunk returned an error
//! - `Serialization` - A thunk's value could not be turned into JSON
//! - `Cancelled` - Evaluation was abandoned before the thunk finished
//! - `Panicked` - A concurrently evaluated thunk panicked
//!
//! # Usage
//!
//! ```rust
//! use inertia_render::shared::error::PropError;
//!
//! let error = PropError::failed("stats", "database unavailable");
//! assert_eq!(error.name(), "stats");
//! ```
use thiserror::Error;

/// Boxed error returned by lazy prop thunks
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Errors that can occur while evaluating a page's props
#[derive(Debug, Error)]
pub enum PropError {
    /// The prop's thunk returned an error
    #[error("Prop '{name}' failed: {source}")]
    Failed {
        /// Name of the prop that failed
        name: String,
        /// Error returned by the thunk
        #[source]
        source: BoxError,
    },

    /// The prop's value could not be serialized to JSON
    #[error("Prop '{name}' could not be serialized: {source}")]
    Serialization {
        /// Name of the prop that failed
        name: String,
        /// Underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Evaluation was cancelled before the prop resolved
    #[error("Prop '{name}' was cancelled")]
    Cancelled {
        /// Name of the cancelled prop
        name: String,
    },

    /// The task evaluating the prop panicked
    #[error("Prop '{name}' panicked during evaluation")]
    Panicked {
        /// Name of the prop whose task panicked
        name: String,
    },
}

impl PropError {
    /// Create a new failure for the named prop
    pub fn failed(name: impl Into<String>, source: impl Into<BoxError>) -> Self {
        Self::Failed {
            name: name.into(),
            source: source.into(),
        }
    }

    /// Create a new serialization error for the named prop
    pub fn serialization(name: impl Into<String>, source: serde_json::Error) -> Self {
        Self::Serialization {
            name: name.into(),
            source,
        }
    }

    /// Create a new cancellation error for the named prop
    pub fn cancelled(name: impl Into<String>) -> Self {
        Self::Cancelled { name: name.into() }
    }

    /// Create a new panic error for the named prop
    pub fn panicked(name: impl Into<String>) -> Self {
        Self::Panicked { name: name.into() }
    }

    /// Name of the prop this error belongs to
    pub fn name(&self) -> &str {
        match self {
            Self::Failed { name, .. }
            | Self::Serialization { name, .. }
            | Self::Cancelled { name }
            | Self::Panicked { name } => name,
        }
    }

    /// Whether this error only reports that work was abandoned
    pub fn is_cancelled(&self) -> bool {
        matches!(self, Self::Cancelled { .. })
    }
}
