use crate::dto::ApiResponse;
use axum::Json;

pub async fn health_check() -> Json<ApiResponse<()>> {
    Json(ApiResponse::message("API server is healthy"))
}
