//! Service layer providing the catalog operations on top of `models`.
//! - Separates business rules (validation, query pipeline, statistics) from storage.
//! - Storage sits behind the `ProductRepository` trait; the in-memory store is the only backend.
//! - Failures are `ServiceError`s carrying an `ErrorKind` for the transport to map.

pub mod catalog;
pub mod errors;
pub mod pagination;
