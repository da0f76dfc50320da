use std::sync::Arc;

use configs::AppConfig;
use service::catalog::{fixtures, CatalogService, InMemoryProductRepository};
use tracing::info;

use crate::errors::StartupError;
use crate::metrics::CatalogMetrics;

/// Shared state handed to every handler.
#[derive(Clone)]
pub struct AppState {
    pub catalog: CatalogService,
    pub api_key: Arc<str>,
    pub metrics: Arc<CatalogMetrics>,
}

impl AppState {
    pub fn new(
        catalog: CatalogService,
        api_key: impl Into<Arc<str>>,
    ) -> Result<Self, StartupError> {
        let metrics = CatalogMetrics::new().map_err(|e| StartupError::Runtime(e.to_string()))?;
        Ok(Self { catalog, api_key: api_key.into(), metrics: Arc::new(metrics) })
    }

    /// Build the catalog described by `cfg` (seeded or empty) and wrap it.
    pub fn from_config(cfg: &AppConfig) -> Result<Self, StartupError> {
        cfg.auth
            .validate()
            .map_err(|e| StartupError::InvalidConfig(e.to_string()))?;
        let seed = if cfg.catalog.seed_demo_data {
            fixtures::demo_products()
        } else {
            Vec::new()
        };
        let seeded = seed.len();
        if seeded > 0 {
            info!(products = seeded, "seeding catalog with demo products");
        }
        let catalog =
            CatalogService::new(Arc::new(InMemoryProductRepository::with_products(seed)));
        let state = Self::new(catalog, cfg.auth.api_key.as_str())?;
        state.metrics.set_products(0, seeded);
        Ok(state)
    }
}
