use axum::extract::rejection::{JsonRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use models::product::Product;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use service::catalog::query::{ListParams, ProductPage, SearchResults};
use service::catalog::stats::CatalogStats;

use crate::errors::ApiError;
use crate::state::AppState;

/// Body of the mutating endpoints.
#[derive(Serialize)]
pub struct ProductEnvelope {
    pub message: &'static str,
    pub product: Product,
}

#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

fn query_params<T>(q: Result<Query<T>, QueryRejection>) -> Result<T, ApiError> {
    q.map(|Query(p)| p).map_err(|e| ApiError::validation(e.body_text()))
}

fn json_body(body: Result<Json<Value>, JsonRejection>) -> Result<Value, ApiError> {
    body.map(|Json(v)| v).map_err(|e| ApiError::validation(e.body_text()))
}

#[utoipa::path(
    get, path = "/api/products", tag = "products",
    params(
        ("category" = Option<String>, Query, description = "Exact category, case-insensitive"),
        ("inStock" = Option<String>, Query, description = "\"true\" for in-stock products, anything else for out-of-stock"),
        ("search" = Option<String>, Query, description = "Substring of name, description or category"),
        ("page" = Option<String>, Query, description = "1-based page, default 1"),
        ("limit" = Option<String>, Query, description = "Page size, default 10"),
    ),
    responses((status = 200, description = "Page of products with pagination metadata", body = crate::openapi::ProductPageDoc))
)]
pub async fn list_products(
    State(state): State<AppState>,
    params: Result<Query<ListParams>, QueryRejection>,
) -> Result<Json<ProductPage>, ApiError> {
    let params = query_params(params)?;
    let page = state.catalog.list(&params).await;
    state.metrics.record("list", "ok");
    Ok(Json(page))
}

#[utoipa::path(
    get, path = "/api/products/search", tag = "products",
    params(("q" = String, Query, description = "Substring of name or description")),
    responses(
        (status = 200, description = "All matches", body = crate::openapi::SearchResultsDoc),
        (status = 400, description = "Missing query", body = crate::openapi::ErrorBodyDoc),
    )
)]
pub async fn search_products(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<SearchResults>, ApiError> {
    let params = query_params(params)?;
    let res = state.catalog.search(params.q.as_deref()).await;
    state.metrics.observe("search", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    get, path = "/api/products/stats", tag = "products",
    responses((status = 200, description = "Aggregate statistics", body = crate::openapi::CatalogStatsDoc))
)]
pub async fn product_stats(State(state): State<AppState>) -> Json<CatalogStats> {
    let stats = state.catalog.stats().await;
    state.metrics.record("stats", "ok");
    Json(stats)
}

#[utoipa::path(
    get, path = "/api/products/{id}", tag = "products",
    params(("id" = String, Path, description = "Product id")),
    responses(
        (status = 200, description = "The product", body = crate::openapi::ProductDoc),
        (status = 404, description = "No such product", body = crate::openapi::ErrorBodyDoc),
    )
)]
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    let res = state.catalog.get(&id).await;
    state.metrics.observe("get", &res);
    Ok(Json(res?))
}

#[utoipa::path(
    post, path = "/api/products", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    params(("x-api-key" = String, Header, description = "Shared API key")),
    responses(
        (status = 201, description = "Created", body = crate::openapi::ProductEnvelopeDoc),
        (status = 400, description = "Validation failed", body = crate::openapi::ErrorBodyDoc),
        (status = 401, description = "Missing or invalid API key", body = crate::openapi::ErrorBodyDoc),
    )
)]
pub async fn create_product(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<ProductEnvelope>), ApiError> {
    let raw = json_body(body)?;
    let res = state.catalog.create(&raw).await;
    state.metrics.observe("create", &res);
    let created = res?;
    state.metrics.set_products(created.revision, created.total);
    Ok((
        StatusCode::CREATED,
        Json(ProductEnvelope { message: "Product created successfully", product: created.product }),
    ))
}

#[utoipa::path(
    put, path = "/api/products/{id}", tag = "products",
    request_body = crate::openapi::ProductInputDoc,
    params(
        ("id" = String, Path, description = "Product id"),
        ("x-api-key" = String, Header, description = "Shared API key"),
    ),
    responses(
        (status = 200, description = "Replaced", body = crate::openapi::ProductEnvelopeDoc),
        (status = 400, description = "Validation failed", body = crate::openapi::ErrorBodyDoc),
        (status = 401, description = "Missing or invalid API key", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "No such product", body = crate::openapi::ErrorBodyDoc),
    )
)]
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let raw = json_body(body)?;
    let res = state.catalog.update(&id, &raw).await;
    state.metrics.observe("update", &res);
    Ok(Json(ProductEnvelope { message: "Product updated successfully", product: res? }))
}

#[utoipa::path(
    delete, path = "/api/products/{id}", tag = "products",
    params(
        ("id" = String, Path, description = "Product id"),
        ("x-api-key" = String, Header, description = "Shared API key"),
    ),
    responses(
        (status = 200, description = "Deleted", body = crate::openapi::ProductEnvelopeDoc),
        (status = 401, description = "Missing or invalid API key", body = crate::openapi::ErrorBodyDoc),
        (status = 404, description = "No such product", body = crate::openapi::ErrorBodyDoc),
    )
)]
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductEnvelope>, ApiError> {
    let res = state.catalog.delete(&id).await;
    state.metrics.observe("delete", &res);
    let removed = res?;
    state.metrics.set_products(removed.revision, removed.total);
    Ok(Json(ProductEnvelope { message: "Product deleted successfully", product: removed.product }))
}
