//! Application state shared across handlers.

use crate::service::ProductService;
use stockpile_core::config::AppConfig;
use stockpile_store::ProductStore;
use std::sync::Arc;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Application configuration.
    pub config: Arc<AppConfig>,
    /// Product service.
    pub products: ProductService,
}

impl AppState {
    /// Create a new application state.
    pub fn new(config: AppConfig, store: Arc<dyn ProductStore>) -> Self {
        tracing::debug!(
            version_policy = ?config.products.version_policy,
            require_if_match_on_delete = config.products.require_if_match_on_delete,
            "Product protocol configured"
        );

        Self {
            config: Arc::new(config),
            products: ProductService::new(store),
        }
    }
}
