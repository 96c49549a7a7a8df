use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
    routing::{delete, get},
    Router,
};
use tracing::{error, warn};

use crate::{
    dto::{ApiResponse, CreateRecordRequest, RecordDto},
    errors::ApiError,
    state::AppState,
};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/records", get(list_records).post(create_record))
        .route("/records/{domain}", delete(delete_record))
}

async fn list_records(
    State(state): State<AppState>,
) -> Result<Json<ApiResponse<Vec<RecordDto>>>, ApiError> {
    let records = state.list_records.execute().map_err(|e| {
        error!(error = %e, "Failed to list directory records");
        e
    })?;

    Ok(Json(ApiResponse::data(
        records.into_iter().map(RecordDto::from).collect(),
    )))
}

async fn create_record(
    State(state): State<AppState>,
    payload: Result<Json<CreateRecordRequest>, JsonRejection>,
) -> Result<Response, ApiError> {
    let Json(req) = match payload {
        Ok(payload) => payload,
        Err(rejection) => {
            warn!(error = %rejection, "Rejected record payload");
            return Ok(ApiError::bad_request(format!(
                "Invalid JSON format: {}",
                rejection.body_text()
            )));
        }
    };

    let entry = state
        .create_record
        .execute(&req.domain, &req.ip, req.ttl)
        .await?;

    Ok((
        StatusCode::CREATED,
        Json(ApiResponse::with_message(
            "DNS record created successfully",
            RecordDto::from(entry),
        )),
    )
        .into_response())
}

async fn delete_record(
    State(state): State<AppState>,
    Path(domain): Path<String>,
) -> Result<Json<ApiResponse<()>>, ApiError> {
    state.delete_record.execute(&domain).await?;
    Ok(Json(ApiResponse::message("DNS record deleted successfully")))
}
