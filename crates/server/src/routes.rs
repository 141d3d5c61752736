//! Route configuration.

use crate::handlers;
use crate::state::AppState;
use axum::Router;
use axum::routing::{get, post};
use tower_http::trace::TraceLayer;

/// Create the application router.
pub fn create_router(state: AppState) -> Router {
    Router::new()
        // Health check (store connectivity)
        .route("/health", get(handlers::health_check))
        // Collection reads are not version-checked
        .route("/products", get(handlers::list_products))
        .route("/product", post(handlers::create_product))
        .route(
            "/product/{id}",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
