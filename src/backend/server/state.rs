/**
 * Application State
 *
 * State of the demo server. It holds the renderer plus a small in-memory
 * user list the demo pages read from.
 *
 * The `FromRef` implementation lets the Inertia middleware extract the
 * renderer without needing the whole `AppState`.
 */

use crate::backend::render::Renderer;
use axum::extract::FromRef;
use std::sync::Arc;
use tokio::sync::RwLock;

/// Application state for the demo server
#[derive(Clone, Debug)]
pub struct AppState {
    /// Shared page renderer
    pub renderer: Renderer,
    /// Users shown by the demo pages
    pub users: Arc<RwLock<Vec<String>>>,
}

impl AppState {
    pub fn new(renderer: Renderer) -> Self {
        Self {
            renderer,
            users: Arc::new(RwLock::new(vec!["john".to_string(), "jane".to_string()])),
        }
    }
}

impl FromRef<AppState> for Renderer {
    fn from_ref(state: &AppState) -> Self {
        state.renderer.clone()
    }
}
