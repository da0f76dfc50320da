use std::collections::BTreeMap;

use models::product::Product;
use serde::{Serialize, Serializer};

/// A currency-like figure rendered with exactly two decimals.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TwoDecimals(pub f64);

impl Serialize for TwoDecimals {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(&format_args!("{:.2}", self.0))
    }
}

#[derive(Clone, Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogStats {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub category_counts: BTreeMap<String, usize>,
    pub average_price: TwoDecimals,
    pub total_value: TwoDecimals,
}

impl CatalogStats {
    pub fn compute(products: &[Product]) -> Self {
        let total_products = products.len();
        let in_stock = products.iter().filter(|p| p.in_stock).count();
        let mut category_counts = BTreeMap::new();
        for p in products {
            *category_counts.entry(p.category.clone()).or_insert(0) += 1;
        }
        let total: f64 = products.iter().map(|p| p.price).sum();
        let average = if total_products == 0 { 0.0 } else { total / total_products as f64 };

        Self {
            total_products,
            in_stock,
            out_of_stock: total_products - in_stock,
            category_counts,
            average_price: TwoDecimals(average),
            total_value: TwoDecimals(total),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn product(category: &str, price: f64, in_stock: bool) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: "Item".into(),
            description: "An item".into(),
            price,
            category: category.into(),
            in_stock,
        }
    }

    #[test]
    fn empty_collection_has_zero_average() {
        let stats = CatalogStats::compute(&[]);
        assert_eq!(stats.total_products, 0);
        assert_eq!(stats.average_price, TwoDecimals(0.0));
        assert!(stats.category_counts.is_empty());

        let v = serde_json::to_value(&stats).unwrap();
        assert_eq!(v["averagePrice"], "0.00");
        assert_eq!(v["totalValue"], "0.00");
        assert_eq!(v["categoryCounts"], serde_json::json!({}));
    }

    #[test]
    fn counts_and_totals() {
        let stats = CatalogStats::compute(&[
            product("Electronics", 10.0, true),
            product("Electronics", 20.5, false),
            product("Kitchen", 4.25, true),
        ]);
        assert_eq!(stats.total_products, 3);
        assert_eq!(stats.in_stock, 2);
        assert_eq!(stats.out_of_stock, 1);
        assert_eq!(stats.category_counts.get("Electronics"), Some(&2));
        assert_eq!(stats.category_counts.get("Kitchen"), Some(&1));

        let v = serde_json::to_value(&stats).unwrap();
        assert_eq!(v["totalValue"], "34.75");
        assert_eq!(v["averagePrice"], "11.58");
        assert_eq!(v["inStock"], 2);
        assert_eq!(v["outOfStock"], 1);
    }

    #[test]
    fn categories_are_case_sensitive_keys() {
        let stats =
            CatalogStats::compute(&[product("Books", 1.0, true), product("books", 1.0, true)]);
        assert_eq!(stats.category_counts.len(), 2);
    }
}
