/**
 * Render Error Types
 *
 * Every failure the render pipeline can surface to a handler. A failed prop
 * keeps its `PropError` so the handler can still render an error page with
 * the same context; everything else maps to a 5xx response.
 */

use crate::backend::ssr::SsrError;
use crate::shared::PropError;
use axum::http::StatusCode;
use thiserror::Error;

/// Errors that can occur while rendering a page
///
/// # Usage
///
/// ```rust
/// use inertia_render::backend::error::RenderError;
///
/// let err = RenderError::protocol("Inertia context missing");
/// assert_eq!(err.status_code().as_u16(), 500);
/// ```
#[derive(Debug, Error)]
pub enum RenderError {
    /// A prop could not be evaluated
    #[error("Evaluation error: {0}")]
    Evaluation(#[from] PropError),

    /// The SSR sidecar failed with an error that does not allow a fallback
    #[error("SSR error: {0}")]
    Ssr(#[from] SsrError),

    /// The request context is missing or misused
    #[error("Protocol error: {message}")]
    Protocol {
        /// Human-readable error message
        message: String,
    },

    /// The root template could not be rendered
    #[error("Template error: {message}")]
    Template {
        /// Human-readable error message
        message: String,
    },

    /// The page payload could not be serialized
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// A handler panicked while producing the response
    #[error("Handler panicked: {message}")]
    Panicked {
        /// Panic payload, when it was a string
        message: String,
    },
}

impl RenderError {
    /// Create a new protocol error
    pub fn protocol(message: impl Into<String>) -> Self {
        Self::Protocol {
            message: message.into(),
        }
    }

    /// Create a new template error
    pub fn template(message: impl Into<String>) -> Self {
        Self::Template {
            message: message.into(),
        }
    }

    /// Create a new panic error
    pub fn panicked(message: impl Into<String>) -> Self {
        Self::Panicked {
            message: message.into(),
        }
    }

    /// HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Ssr(_) => StatusCode::BAD_GATEWAY,
            Self::Evaluation(_)
            | Self::Protocol { .. }
            | Self::Template { .. }
            | Self::Serialization(_)
            | Self::Panicked { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// A human-readable error message
    pub fn message(&self) -> String {
        match self {
            Self::Evaluation(err) => err.to_string(),
            Self::Ssr(err) => err.to_string(),
            Self::Protocol { message } => message.clone(),
            Self::Template { message } => message.clone(),
            Self::Serialization(err) => err.to_string(),
            Self::Panicked { message } => message.clone(),
        }
    }

    /// The prop error, when a prop caused this failure
    pub fn as_prop_error(&self) -> Option<&PropError> {
        match self {
            Self::Evaluation(err) => Some(err),
            _ => None,
        }
    }
}
