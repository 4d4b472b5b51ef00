use axum::{routing::{get, post}, Router};
use tower_http::trace::TraceLayer;

use crate::config::AppState;
use crate::handlers::countries::{currency, explore, get_flag, history, normalize};
use crate::handlers::map::{get_map, save_map};
use crate::handlers::ui::{health, index};

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/explore", post(explore))
        .route("/history", get(history))
        .route("/map", get(get_map))
        .route("/map/save", post(save_map))
        .route("/flags/:name", get(get_flag))
        .route("/normalize/:input", get(normalize))
        .route("/currency/:code", get(currency))
        .route("/healthz", get(health))
        .with_state(state)
        .layer(TraceLayer::new_for_http())
}
