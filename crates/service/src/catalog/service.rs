use std::sync::Arc;

use models::product::{Product, ProductInput};
use serde_json::Value;
use tracing::{info, instrument};
use uuid::Uuid;

use crate::catalog::query::{search_products, ListParams, ProductPage, ProductQuery, SearchResults};
use crate::catalog::repository::{Mutation, ProductRepository};
use crate::catalog::stats::CatalogStats;
use crate::errors::ServiceError;

/// Application service encapsulating catalog business rules.
/// Validation happens here; the repository only stores.
#[derive(Clone)]
pub struct CatalogService {
    repo: Arc<dyn ProductRepository>,
}

impl CatalogService {
    pub fn new(repo: Arc<dyn ProductRepository>) -> Self {
        Self { repo }
    }

    /// Filtered, searched and paginated listing.
    #[instrument(skip(self))]
    pub async fn list(&self, params: &ListParams) -> ProductPage {
        ProductQuery::from(params).run(self.repo.list().await)
    }

    pub async fn get(&self, raw_id: &str) -> Result<Product, ServiceError> {
        self.repo.get(parse_id(raw_id)?).await
    }

    #[instrument(skip(self, raw))]
    pub async fn create(&self, raw: &Value) -> Result<Mutation, ServiceError> {
        let candidate = ProductInput::from_json(raw)?;
        let created = self.repo.insert(candidate).await?;
        info!(product_id = %created.product.id, total = created.total, "product_created");
        Ok(created)
    }

    /// Full replacement; the payload is validated before the id is looked up.
    #[instrument(skip(self, raw))]
    pub async fn update(&self, raw_id: &str, raw: &Value) -> Result<Product, ServiceError> {
        let candidate = ProductInput::from_json(raw)?;
        let product = self.repo.replace(parse_id(raw_id)?, candidate).await?;
        info!(product_id = %product.id, "product_updated");
        Ok(product)
    }

    #[instrument(skip(self))]
    pub async fn delete(&self, raw_id: &str) -> Result<Mutation, ServiceError> {
        let removed = self.repo.remove(parse_id(raw_id)?).await?;
        info!(product_id = %removed.product.id, total = removed.total, "product_deleted");
        Ok(removed)
    }

    #[instrument(skip(self))]
    pub async fn search(&self, q: Option<&str>) -> Result<SearchResults, ServiceError> {
        let term = q
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .ok_or_else(|| ServiceError::Validation("Search query 'q' is required".into()))?;
        Ok(search_products(self.repo.list().await, term))
    }

    pub async fn stats(&self) -> CatalogStats {
        CatalogStats::compute(&self.repo.list().await)
    }
}

/// Ids that are not UUIDs cannot name a stored product.
fn parse_id(raw: &str) -> Result<Uuid, ServiceError> {
    Uuid::parse_str(raw.trim()).map_err(|_| ServiceError::not_found("Product"))
}
