/**
 * Server Initialization
 *
 * Builds the demo application:
 * 1. Load the renderer configuration
 * 2. Create the renderer and application state
 * 3. Configure the routes with the Inertia middleware installed
 */

use crate::backend::error::RenderError;
use crate::backend::render::Renderer;
use crate::backend::routes::router::create_router;
use crate::backend::server::config::load_config;
use crate::backend::server::state::AppState;
use crate::shared::ConfigError;
use axum::Router;
use thiserror::Error;

/// Errors that prevent the demo server from starting
#[derive(Debug, Error)]
pub enum InitError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Render(#[from] RenderError),
}

/// Create the demo application from the environment
pub async fn create_app() -> Result<Router<()>, InitError> {
    tracing::info!("Initializing Inertia demo server");

    let config = load_config()?;
    let renderer = Renderer::new(config)?;
    Ok(create_app_with(renderer))
}

/// Create the demo application around an existing renderer
pub fn create_app_with(renderer: Renderer) -> Router<()> {
    let state = AppState::new(renderer);
    create_router(state)
}
