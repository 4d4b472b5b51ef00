use axum::{extract::State, response::{Html, IntoResponse}, Json};

use crate::config::AppState;
use crate::services::explore_service::session;

const INDEX: &str = include_str!("../../assets/index.html");

pub async fn index() -> Html<&'static str> {
    Html(INDEX)
}

pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    let phase = session(&state).phase;
    (
        axum::http::StatusCode::OK,
        Json(serde_json::json!({ "ok": true, "phase": phase })),
    )
}
