use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use models::product::{Product, ProductInput};
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::catalog::repository::{Mutation, ProductRepository};
use crate::errors::ServiceError;

/// In-memory, insertion-ordered product store.
///
/// Writers are serialized by the lock; readers get cloned snapshots.
#[derive(Clone, Default)]
pub struct InMemoryProductRepository {
    inner: Arc<RwLock<Vec<Product>>>,
    // bumped only while the write lock is held
    revision: Arc<AtomicU64>,
}

impl InMemoryProductRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with `seed`, ids assigned in order.
    pub fn with_products<I>(seed: I) -> Self
    where
        I: IntoIterator<Item = ProductInput>,
    {
        let products = seed
            .into_iter()
            .map(|input| input.into_product(Uuid::new_v4()))
            .collect();
        Self { inner: Arc::new(RwLock::new(products)), revision: Arc::default() }
    }

    fn bump(&self) -> u64 {
        self.revision.fetch_add(1, Ordering::SeqCst) + 1
    }
}

#[async_trait]
impl ProductRepository for InMemoryProductRepository {
    async fn list(&self) -> Vec<Product> {
        self.inner.read().await.clone()
    }

    async fn get(&self, id: Uuid) -> Result<Product, ServiceError> {
        let products = self.inner.read().await;
        products
            .iter()
            .find(|p| p.id == id)
            .cloned()
            .ok_or_else(|| ServiceError::not_found("Product"))
    }

    async fn insert(&self, candidate: ProductInput) -> Result<Mutation, ServiceError> {
        let mut products = self.inner.write().await;
        // Ids are never reused.
        let mut id = Uuid::new_v4();
        while products.iter().any(|p| p.id == id) {
            id = Uuid::new_v4();
        }
        let product = candidate.into_product(id);
        products.push(product.clone());
        Ok(Mutation { product, total: products.len(), revision: self.bump() })
    }

    async fn replace(&self, id: Uuid, candidate: ProductInput) -> Result<Product, ServiceError> {
        let mut products = self.inner.write().await;
        let existing = products
            .iter_mut()
            .find(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found("Product"))?;
        existing.apply(candidate);
        Ok(existing.clone())
    }

    async fn remove(&self, id: Uuid) -> Result<Mutation, ServiceError> {
        let mut products = self.inner.write().await;
        let idx = products
            .iter()
            .position(|p| p.id == id)
            .ok_or_else(|| ServiceError::not_found("Product"))?;
        let product = products.remove(idx);
        Ok(Mutation { product, total: products.len(), revision: self.bump() })
    }
}
