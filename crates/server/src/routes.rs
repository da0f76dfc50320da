pub mod products;

use axum::{
    extract::State,
    http::header,
    middleware,
    response::IntoResponse,
    routing::{get, post, put},
    Json, Router,
};
use tower_http::{
    catch_panic::CatchPanicLayer,
    cors::CorsLayer,
    trace::{DefaultMakeSpan, DefaultOnFailure, DefaultOnRequest, DefaultOnResponse, TraceLayer},
};
use tracing::Level;
use utoipa::OpenApi;

use common::types::{Health, Welcome};

use crate::auth::require_api_key;
use crate::errors::{handle_panic, route_not_found, ApiError};
use crate::openapi::ApiDoc;
use crate::state::AppState;

#[utoipa::path(
    get, path = "/", tag = "health",
    responses((status = 200, description = "Welcome message"))
)]
pub async fn welcome() -> Json<Welcome> {
    Json(Welcome::new(env!("CARGO_PKG_VERSION")))
}

#[utoipa::path(
    get, path = "/health", tag = "health",
    responses((status = 200, description = "OK", body = crate::openapi::HealthResponse))
)]
pub async fn health() -> Json<Health> {
    Json(Health { status: "ok" })
}

pub async fn metrics(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let text = state
        .metrics
        .render()
        .map_err(|e| ApiError::internal(format!("metrics encoding failed: {e}")))?;
    Ok(([(header::CONTENT_TYPE, "text/plain; version=0.0.4")], text))
}

pub async fn openapi_json() -> Json<utoipa::openapi::OpenApi> {
    Json(ApiDoc::openapi())
}

/// Build the full application router: public reads, key-protected writes, system routes.
pub fn build_router(state: AppState) -> Router {
    let api_key = middleware::from_fn_with_state(state.clone(), require_api_key);

    // Known paths answer unsupported methods like unknown paths.
    let products = Router::new()
        .route(
            "/api/products",
            get(products::list_products)
                .merge(post(products::create_product).route_layer(api_key.clone()))
                .fallback(route_not_found),
        )
        .route(
            "/api/products/search",
            get(products::search_products).fallback(route_not_found),
        )
        .route(
            "/api/products/stats",
            get(products::product_stats).fallback(route_not_found),
        )
        .route(
            "/api/products/:id",
            get(products::get_product)
                .merge(
                    put(products::update_product)
                        .delete(products::delete_product)
                        .route_layer(api_key),
                )
                .fallback(route_not_found),
        );

    let system = Router::new()
        .route("/", get(welcome).fallback(route_not_found))
        .route("/health", get(health).fallback(route_not_found))
        .route("/metrics", get(metrics).fallback(route_not_found))
        .route(
            "/api-docs/openapi.json",
            get(openapi_json).fallback(route_not_found),
        );

    system
        .merge(products)
        .fallback(route_not_found)
        .with_state(state)
        .layer(CatchPanicLayer::custom(handle_panic))
        .layer(CorsLayer::very_permissive())
        .layer(
            TraceLayer::new_for_http()
                // one INFO span per request, carrying method and path
                .make_span_with(
                    DefaultMakeSpan::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                .on_request(
                    DefaultOnRequest::new()
                        .level(Level::INFO),
                )
                // status code and latency
                .on_response(
                    DefaultOnResponse::new()
                        .level(Level::INFO)
                        .include_headers(false),
                )
                // 5xx
                .on_failure(
                    DefaultOnFailure::new()
                        .level(Level::ERROR),
                ),
        )
}
