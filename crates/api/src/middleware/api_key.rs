use crate::{dto::ApiResponse, state::AppState};
use axum::{
    extract::{Request, State},
    http::{Method, StatusCode},
    middleware::Next,
    response::{IntoResponse, Json, Response},
};

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Mutating requests must carry the configured key. Reads are always open,
/// and with no key configured everything passes.
pub async fn require_api_key(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    if is_read_only_method(request.method()) {
        return next.run(request).await;
    }
    match state.api_key.as_deref() {
        None => next.run(request).await,
        Some(expected) => verify_request(request, next, expected).await,
    }
}

pub fn is_read_only_method(method: &Method) -> bool {
    matches!(*method, Method::GET | Method::HEAD | Method::OPTIONS)
}

async fn verify_request(request: Request, next: Next, expected: &str) -> Response {
    let authorized = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|v| v.to_str().ok())
        .is_some_and(|provided| timing_safe_eq(provided.as_bytes(), expected.as_bytes()));

    if !authorized {
        return (
            StatusCode::UNAUTHORIZED,
            Json(ApiResponse::failure("Missing or invalid API key")),
        )
            .into_response();
    }
    next.run(request).await
}

pub fn timing_safe_eq(a: &[u8], b: &[u8]) -> bool {
    a.len() == b.len() && a.iter().zip(b).fold(0u8, |acc, (x, y)| acc | (x ^ y)) == 0
}
