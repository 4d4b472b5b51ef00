use axum::{
    extract::{Path, State},
    http::header,
    response::{IntoResponse, Response},
    Json,
};
use serde::Deserialize;

use crate::config::AppState;
use crate::models::map_view::MapStyle;
use crate::services::currency_service::convert_currency;
use crate::services::explore_service::{explore as run_explore, recent};
use crate::services::flag_service::flag_path;
use crate::services::normalize::normalize_country_name;
use crate::utils::error::ApiError;

#[derive(Deserialize)]
pub struct ExploreParams {
    pub query: String,
    /// Allowed: Roadmap | Satellite | Hybrid | Default
    pub view: Option<String>,
}

pub async fn explore(
    State(state): State<AppState>,
    Json(p): Json<ExploreParams>,
) -> Result<impl IntoResponse, ApiError> {
    let style: MapStyle = p.view.as_deref().unwrap_or_default().parse()?;
    let outcome = run_explore(&state, &p.query, style).await?;
    Ok((axum::http::StatusCode::OK, Json(outcome)))
}

pub async fn history(State(state): State<AppState>) -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(recent(&state)))
}

pub async fn normalize(Path(input): Path<String>) -> impl IntoResponse {
    let name = normalize_country_name(&input);
    Json(serde_json::json!({ "input": input, "name": name }))
}

pub async fn currency(
    State(state): State<AppState>,
    Path(code): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    if code.trim().len() != 3 {
        return Err(ApiError::Validation(
            "currency must be a 3-letter ISO code (e.g., NGN)".into(),
        ));
    }
    let table = convert_currency(&state, &code)
        .await
        .ok_or_else(|| ApiError::Conversion(format!("could not convert {}", code)))?;
    Ok((axum::http::StatusCode::OK, Json(table)))
}

pub async fn get_flag(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let path = flag_path(&state, &name);
    if !path.exists() {
        return Err(ApiError::NotFound("Flag not cached".into()));
    }

    let bytes = tokio::fs::read(&path)
        .await
        .map_err(|e| ApiError::Internal(format!("could not read flag: {}", e)))?;

    let resp = Response::builder()
        .status(axum::http::StatusCode::OK)
        .header(header::CONTENT_TYPE, "image/png")
        .body(axum::body::Body::from(bytes))
        .map_err(|e| ApiError::Internal(format!("response build failed: {}", e)))?;

    Ok(resp)
}
