//! Filter → search → paginate pipeline over a product snapshot.

use models::product::Product;
use serde::{Deserialize, Serialize};

use crate::pagination::{PageInfo, Pagination};

/// Raw listing parameters as they arrive on the query string.
///
/// Everything stays a string so malformed numbers can fall back to defaults
/// instead of rejecting the request.
#[derive(Clone, Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListParams {
    pub category: Option<String>,
    pub in_stock: Option<String>,
    pub search: Option<String>,
    pub page: Option<String>,
    pub limit: Option<String>,
}

/// Normalized listing query.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ProductQuery {
    /// Lowercased category to match exactly.
    pub category: Option<String>,
    pub in_stock: Option<bool>,
    /// Lowercased search term.
    pub search: Option<String>,
    pub pagination: Pagination,
}

#[derive(Clone, Debug, Serialize)]
pub struct ProductPage {
    pub products: Vec<Product>,
    pub pagination: PageInfo,
}

impl From<&ListParams> for ProductQuery {
    fn from(p: &ListParams) -> Self {
        Self {
            category: non_empty(p.category.as_deref()).map(str::to_lowercase),
            // Only the literal "true" selects in-stock products.
            in_stock: p.in_stock.as_deref().map(|v| v == "true"),
            search: non_empty(p.search.as_deref()).map(str::to_lowercase),
            pagination: Pagination::from_raw(p.page.as_deref(), p.limit.as_deref()),
        }
    }
}

impl ProductQuery {
    pub fn matches(&self, product: &Product) -> bool {
        if let Some(category) = &self.category {
            if product.category.to_lowercase() != *category {
                return false;
            }
        }
        if let Some(in_stock) = self.in_stock {
            if product.in_stock != in_stock {
                return false;
            }
        }
        if let Some(term) = &self.search {
            let hit = product.name.to_lowercase().contains(term.as_str())
                || product.description.to_lowercase().contains(term.as_str())
                || product.category.to_lowercase().contains(term.as_str());
            if !hit {
                return false;
            }
        }
        true
    }

    /// Filter then paginate. Metadata reflects the filtered set.
    pub fn run(&self, products: Vec<Product>) -> ProductPage {
        let filtered: Vec<Product> = products.into_iter().filter(|p| self.matches(p)).collect();
        let (products, pagination) = self.pagination.paginate(filtered);
        ProductPage { products, pagination }
    }
}

#[derive(Clone, Debug, Serialize)]
pub struct SearchResults {
    pub query: String,
    pub count: usize,
    pub results: Vec<Product>,
}

/// Case-insensitive substring match on name or description. Category is not searched.
pub fn search_products(products: Vec<Product>, term: &str) -> SearchResults {
    let needle = term.to_lowercase();
    let results: Vec<Product> = products
        .into_iter()
        .filter(|p| {
            p.name.to_lowercase().contains(&needle)
                || p.description.to_lowercase().contains(&needle)
        })
        .collect();
    SearchResults { query: term.to_string(), count: results.len(), results }
}

fn non_empty(s: Option<&str>) -> Option<&str> {
    s.filter(|v| !v.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use uuid::Uuid;

    fn product(name: &str, description: &str, category: &str, in_stock: bool) -> Product {
        Product {
            id: Uuid::new_v4(),
            name: name.into(),
            description: description.into(),
            price: 1.0,
            category: category.into(),
            in_stock,
        }
    }

    fn catalog() -> Vec<Product> {
        vec![
            product("Gaming Laptop", "High performance laptop", "Electronics", true),
            product("Wireless Mouse", "Ergonomic mouse", "Electronics", true),
            product("Coffee Mug", "Ceramic mug", "Kitchen", false),
            product("Smartphone", "Latest model phone", "Electronics", false),
            product("Running Shoes", "Lightweight trainers", "Sports", true),
        ]
    }

    fn params(pairs: &[(&str, &str)]) -> ListParams {
        let mut p = ListParams::default();
        for (k, v) in pairs {
            let v = Some(v.to_string());
            match *k {
                "category" => p.category = v,
                "inStock" => p.in_stock = v,
                "search" => p.search = v,
                "page" => p.page = v,
                "limit" => p.limit = v,
                other => panic!("unknown param {other}"),
            }
        }
        p
    }

    fn run(pairs: &[(&str, &str)]) -> ProductPage {
        ProductQuery::from(&params(pairs)).run(catalog())
    }

    #[test]
    fn no_params_returns_first_ten_in_order() {
        let page = run(&[]);
        assert_eq!(page.products.len(), 5);
        assert_eq!(page.products[0].name, "Gaming Laptop");
        assert_eq!(page.products[4].name, "Running Shoes");
        assert_eq!(page.pagination.total_pages, 1);
    }

    #[test]
    fn category_is_case_insensitive_exact() {
        let page = run(&[("category", "electronics")]);
        assert_eq!(page.pagination.total_products, 3);
        let page = run(&[("category", "Electro")]);
        assert_eq!(page.pagination.total_products, 0);
    }

    #[test]
    fn zero_match_category_metadata() {
        let page = run(&[("category", "Garden")]);
        assert!(page.products.is_empty());
        assert_eq!(page.pagination.total_products, 0);
        assert_eq!(page.pagination.total_pages, 0);
        assert!(!page.pagination.has_next);
        assert!(!page.pagination.has_prev);
    }

    #[test]
    fn in_stock_true_and_anything_else() {
        assert_eq!(run(&[("inStock", "true")]).pagination.total_products, 3);
        assert_eq!(run(&[("inStock", "false")]).pagination.total_products, 2);
        assert_eq!(run(&[("inStock", "yes")]).pagination.total_products, 2);
        assert_eq!(run(&[("inStock", "TRUE")]).pagination.total_products, 2);
    }

    #[test]
    fn search_covers_name_description_and_category() {
        assert_eq!(run(&[("search", "LAPTOP")]).pagination.total_products, 1);
        assert_eq!(run(&[("search", "ergonomic")]).pagination.total_products, 1);
        assert_eq!(run(&[("search", "kitchen")]).pagination.total_products, 1);
    }

    #[test]
    fn filters_compose_before_pagination() {
        let page = run(&[
            ("category", "Electronics"),
            ("inStock", "true"),
            ("limit", "1"),
            ("page", "2"),
        ]);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.products[0].name, "Wireless Mouse");
        assert_eq!(page.pagination.total_products, 2);
        assert_eq!(page.pagination.total_pages, 2);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn five_products_limit_two_page_three() {
        let page = run(&[("limit", "2"), ("page", "3")]);
        assert_eq!(page.products.len(), 1);
        assert_eq!(page.pagination.current_page, 3);
        assert_eq!(page.pagination.total_pages, 3);
        assert!(!page.pagination.has_next);
        assert!(page.pagination.has_prev);
    }

    #[test]
    fn malformed_paging_uses_defaults() {
        let page = run(&[("page", "first"), ("limit", "-4")]);
        assert_eq!(page.pagination.current_page, 1);
        assert_eq!(page.products.len(), 5);
    }

    #[test]
    fn empty_category_and_search_are_ignored() {
        assert_eq!(run(&[("category", ""), ("search", "")]).pagination.total_products, 5);
    }

    #[test]
    fn dedicated_search_skips_category() {
        let res = search_products(catalog(), "Kitchen");
        assert_eq!(res.count, 0);
        let res = search_products(catalog(), "MUG");
        assert_eq!(res.count, 1);
        assert_eq!(res.query, "MUG");
        assert_eq!(res.results[0].name, "Coffee Mug");
    }
}
