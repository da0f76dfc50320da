use async_trait::async_trait;
use models::product::{Product, ProductInput};
use uuid::Uuid;

use crate::errors::ServiceError;

/// A stored or removed product together with the store size right after the write.
#[derive(Debug, Clone, PartialEq)]
pub struct Mutation {
    pub product: Product,
    pub total: usize,
    /// Strictly increasing across the inserts and removals of one store.
    pub revision: u64,
}

/// Authoritative storage for catalog products.
///
/// Implementations keep insertion order and never hand out references into
/// their backing collection.
#[async_trait]
pub trait ProductRepository: Send + Sync {
    async fn list(&self) -> Vec<Product>;
    async fn get(&self, id: Uuid) -> Result<Product, ServiceError>;
    async fn insert(&self, candidate: ProductInput) -> Result<Mutation, ServiceError>;
    async fn replace(&self, id: Uuid, candidate: ProductInput) -> Result<Product, ServiceError>;
    async fn remove(&self, id: Uuid) -> Result<Mutation, ServiceError>;
}
