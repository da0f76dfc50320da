//! The catalog: storage, query pipeline, search and statistics.

pub mod fixtures;
pub mod memory;
pub mod query;
pub mod repository;
pub mod service;
pub mod stats;

pub use memory::InMemoryProductRepository;
pub use repository::{Mutation, ProductRepository};
pub use service::CatalogService;
