/**
 * Router Configuration
 *
 * Combines the page routes into one router and installs the Inertia
 * middleware on it. The middleware must wrap every page route: the
 * `Inertia` extractor fails without it.
 */

use crate::backend::middleware::with_inertia;
use crate::backend::routes::page_routes::configure_page_routes;
use crate::backend::server::state::AppState;
use axum::Router;

/// Create the Axum router with all routes configured
pub fn create_router(app_state: AppState) -> Router<()> {
    let router = configure_page_routes(Router::new());
    let router = with_inertia(router, app_state.renderer.clone());

    tracing::info!("Router configured");
    router.with_state(app_state)
}
