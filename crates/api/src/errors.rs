use crate::dto::ApiResponse;
use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use hearth_dns_domain::DomainError;

pub struct ApiError(pub DomainError);

impl ApiError {
    pub fn bad_request(message: impl Into<String>) -> Response {
        (
            StatusCode::BAD_REQUEST,
            Json(ApiResponse::failure(message)),
        )
            .into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::NotFound(_) => (StatusCode::NOT_FOUND, "DNS record not found".to_string()),

            DomainError::InvalidDomainName(_) | DomainError::InvalidIpAddress(_) => {
                (StatusCode::BAD_REQUEST, self.0.to_string())
            }

            DomainError::DirectoryUnavailable(_) | DomainError::DatabaseError(_) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "Record storage not available".to_string(),
            ),

            DomainError::MalformedQuery(_)
            | DomainError::InvalidDirectoryData { .. }
            | DomainError::LocalMiss(_)
            | DomainError::UpstreamUnreachable { .. } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "internal error".to_string(),
            ),
        };

        (status, Json(ApiResponse::failure(message))).into_response()
    }
}
