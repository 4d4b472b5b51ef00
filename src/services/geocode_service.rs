use tracing::{debug, warn};

use crate::config::AppState;
use crate::types::external::NominatimPlace;

/// Latitude and longitude of the best match for `query`.
pub async fn geocode(state: &AppState, query: &str) -> Option<(f64, f64)> {
    let resp = state
        .http
        .get(&state.endpoints.geocode)
        .query(&[("q", query), ("format", "json"), ("limit", "1")])
        .send()
        .await
        .map_err(|e| warn!(query, "geocode request failed: {}", e))
        .ok()?;

    if !resp.status().is_success() {
        warn!(query, status = %resp.status(), "geocoder refused request");
        return None;
    }

    let places: Vec<NominatimPlace> = resp
        .json()
        .await
        .map_err(|e| warn!(query, "could not parse geocoder response: {}", e))
        .ok()?;

    let place = places.into_iter().next()?;
    let coords = parse_coords(&place.lat, &place.lon);
    debug!(query, place = %place.display_name, ?coords, "geocoded");
    coords
}

fn parse_coords(lat: &str, lon: &str) -> Option<(f64, f64)> {
    let lat: f64 = lat.trim().parse().ok()?;
    let lon: f64 = lon.trim().parse().ok()?;
    ((-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon)).then_some((lat, lon))
}
