use axum::{extract::State, response::{Html, IntoResponse}, Json};
use serde::Deserialize;

use crate::config::AppState;
use crate::services::explore_service::save_current_map;
use crate::utils::error::ApiError;

#[derive(Deserialize)]
pub struct SaveParams {
    pub path: String,
}

pub async fn get_map(State(state): State<AppState>) -> Result<impl IntoResponse, ApiError> {
    let path = &state.map_path;
    if !path.exists() {
        return Err(ApiError::NotFound("No map generated yet".into()));
    }

    let html = tokio::fs::read_to_string(path)
        .await
        .map_err(|e| ApiError::Internal(format!("could not read map: {}", e)))?;
    Ok(Html(html))
}

pub async fn save_map(
    State(state): State<AppState>,
    Json(p): Json<SaveParams>,
) -> Result<impl IntoResponse, ApiError> {
    let bytes = save_current_map(&state, &p.path).await?;
    Ok((
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "ok": true, "path": p.path, "bytes": bytes })),
    ))
}
