use axum::extract::{Request, State};
use axum::middleware::Next;
use axum::response::Response;
use subtle::ConstantTimeEq;
use tracing::warn;

use crate::errors::ApiError;
use crate::state::AppState;

pub const API_KEY_HEADER: &str = "x-api-key";

/// Middleware: mutating catalog routes require the shared `x-api-key` secret.
pub async fn require_api_key(
    State(state): State<AppState>,
    req: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let provided = req
        .headers()
        .get(API_KEY_HEADER)
        .map(|v| v.as_bytes())
        .filter(|v| !v.is_empty());

    let Some(key) = provided else {
        warn!(method = %req.method(), path = %req.uri().path(), "request without api key");
        return Err(ApiError::unauthenticated("API key is required"));
    };

    if !bool::from(key.ct_eq(state.api_key.as_bytes())) {
        warn!(method = %req.method(), path = %req.uri().path(), "request with invalid api key");
        return Err(ApiError::unauthenticated("Invalid API key"));
    }

    Ok(next.run(req).await)
}
