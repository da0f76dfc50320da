//! Prometheus metrics for catalog operations.

use std::sync::Mutex;

use prometheus::{Encoder, IntCounterVec, IntGauge, Opts, Registry, TextEncoder};
use service::errors::ServiceError;

pub struct CatalogMetrics {
    registry: Registry,
    operations: IntCounterVec,
    products: IntGauge,
    // store revision behind the current gauge value
    products_revision: Mutex<u64>,
}

impl CatalogMetrics {
    pub fn new() -> Result<Self, prometheus::Error> {
        let registry = Registry::new();
        let operations = IntCounterVec::new(
            Opts::new("catalog_operations_total", "Catalog operations by outcome"),
            &["operation", "outcome"],
        )?;
        let products = IntGauge::new("catalog_products", "Products currently in the catalog")?;
        registry.register(Box::new(operations.clone()))?;
        registry.register(Box::new(products.clone()))?;
        Ok(Self { registry, operations, products, products_revision: Mutex::new(0) })
    }

    pub fn record(&self, operation: &str, outcome: &str) {
        self.operations.with_label_values(&[operation, outcome]).inc();
    }

    /// Count `result` under `ok` or its error kind name.
    pub fn observe<T>(&self, operation: &str, result: &Result<T, ServiceError>) {
        let outcome = match result {
            Ok(_) => "ok",
            Err(e) => e.kind().as_str(),
        };
        self.record(operation, outcome);
    }

    /// Set the product gauge unless a later store revision already did.
    pub fn set_products(&self, revision: u64, n: usize) {
        let mut last = match self.products_revision.lock() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        if revision < *last {
            return;
        }
        *last = revision;
        self.products.set(i64::try_from(n).unwrap_or(i64::MAX));
    }

    /// Text exposition format.
    pub fn render(&self) -> Result<String, prometheus::Error> {
        let mut buf = Vec::new();
        TextEncoder::new().encode(&self.registry.gather(), &mut buf)?;
        String::from_utf8(buf).map_err(|e| prometheus::Error::Msg(e.to_string()))
    }
}
