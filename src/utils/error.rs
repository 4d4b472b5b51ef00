use axum::{http::StatusCode, response::{IntoResponse, Response}, Json};
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("validation: {0}")]
    Validation(String),
    #[error("not_found: {0}")]
    NotFound(String),
    #[error("location_unresolvable: {0}")]
    LocationUnresolvable(String),
    #[error("conversion_failed: {0}")]
    Conversion(String),
    #[error("save_target_missing: {0}")]
    SaveTarget(String),
    #[error("external_unavailable: {0}")]
    External(String),
    #[error("internal: {0}")]
    Internal(String),
}

#[derive(Serialize)]
pub struct ErrorBody<'a> {
    pub error: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")] pub details: Option<String>,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, error, details) = match self {
            ApiError::Validation(msg) => (StatusCode::BAD_REQUEST, "Validation failed", Some(msg)),
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "Country not found", Some(msg)),
            ApiError::LocationUnresolvable(msg) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                "Could not find location",
                Some(msg),
            ),
            ApiError::Conversion(msg) => (StatusCode::BAD_GATEWAY, "Currency conversion failed", Some(msg)),
            ApiError::SaveTarget(msg) => (StatusCode::CONFLICT, "No map to save", Some(msg)),
            ApiError::External(msg) => (
                StatusCode::SERVICE_UNAVAILABLE,
                "External data source unavailable",
                Some(msg),
            ),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "Internal server error", Some(msg)),
        };
        (status, Json(ErrorBody { error, details })).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_taxonomy_to_status_codes() {
        let cases = [
            (ApiError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ApiError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ApiError::LocationUnresolvable("x".into()), StatusCode::UNPROCESSABLE_ENTITY),
            (ApiError::Conversion("x".into()), StatusCode::BAD_GATEWAY),
            (ApiError::SaveTarget("x".into()), StatusCode::CONFLICT),
            (ApiError::External("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ApiError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];
        for (err, status) in cases {
            assert_eq!(err.into_response().status(), status);
        }
    }
}
