use std::collections::BTreeMap;

use utoipa::OpenApi;
use utoipa::ToSchema;

#[derive(ToSchema)]
pub struct HealthResponse { pub status: String }

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductDoc {
    pub id: String,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct ProductInputDoc {
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: String,
    pub in_stock: bool,
}

#[derive(ToSchema)]
pub struct ProductEnvelopeDoc {
    pub message: String,
    pub product: ProductDoc,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct PageInfoDoc {
    pub current_page: u64,
    pub total_pages: u64,
    pub total_products: u64,
    pub has_next: bool,
    pub has_prev: bool,
}

#[derive(ToSchema)]
pub struct ProductPageDoc {
    pub products: Vec<ProductDoc>,
    pub pagination: PageInfoDoc,
}

#[derive(ToSchema)]
pub struct SearchResultsDoc {
    pub query: String,
    pub count: usize,
    pub results: Vec<ProductDoc>,
}

#[derive(ToSchema)]
#[schema(rename_all = "camelCase")]
pub struct CatalogStatsDoc {
    pub total_products: usize,
    pub in_stock: usize,
    pub out_of_stock: usize,
    pub category_counts: BTreeMap<String, usize>,
    /// Two decimals, e.g. `"12.50"`.
    pub average_price: String,
    /// Two decimals.
    pub total_value: String,
}

#[derive(ToSchema)]
pub struct ErrorBodyDoc {
    pub error: String,
    pub message: String,
    pub details: Option<Vec<String>>,
}

#[derive(OpenApi)]
#[openapi(
    paths(
        crate::routes::welcome,
        crate::routes::health,
        crate::routes::products::list_products,
        crate::routes::products::search_products,
        crate::routes::products::product_stats,
        crate::routes::products::get_product,
        crate::routes::products::create_product,
        crate::routes::products::update_product,
        crate::routes::products::delete_product,
    ),
    components(
        schemas(
            HealthResponse,
            ProductDoc,
            ProductInputDoc,
            ProductEnvelopeDoc,
            PageInfoDoc,
            ProductPageDoc,
            SearchResultsDoc,
            CatalogStatsDoc,
            ErrorBodyDoc,
        )
    ),
    tags(
        (name = "health"),
        (name = "products")
    )
)]
pub struct ApiDoc;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn document_lists_catalog_paths() {
        let doc = ApiDoc::openapi();
        let paths: Vec<&String> = doc.paths.paths.keys().collect();
        for p in [
            "/api/products",
            "/api/products/search",
            "/api/products/stats",
            "/api/products/{id}",
        ] {
            assert!(paths.iter().any(|k| k.as_str() == p), "missing {p}");
        }
    }
}
