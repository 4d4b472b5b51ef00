use chrono::Utc;
use serde::Serialize;
use std::path::Path;
use std::sync::MutexGuard;
use tracing::{debug, info, warn};

use crate::config::AppState;
use crate::models::conversion::{ConversionTable, TARGET_CURRENCIES};
use crate::models::country::Country;
use crate::models::history::RecentEntry;
use crate::models::map_view::{MapStyle, MapView};
use crate::models::session::{Phase, Session};
use crate::services::country_service::fetch_country;
use crate::services::currency_service::convert_currency;
use crate::services::flag_service::cache_flag;
use crate::services::geocode_service::geocode;
use crate::services::map_service::create_map;
use crate::services::normalize::apply_alias;
use crate::utils::error::ApiError;

#[derive(Serialize, Debug)]
pub struct ExploreOutcome {
    pub country: Country,
    pub map: MapView,
    pub recent: Vec<RecentEntry>,
    pub conversions: Option<ConversionTable>,
    /// Set when the lookup succeeded but a later step had to be skipped.
    pub message: Option<String>,
    pub searched_at: String,
}

pub fn session(state: &AppState) -> MutexGuard<'_, Session> {
    state.session.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

pub fn recent(state: &AppState) -> Vec<RecentEntry> {
    session(state).recent.entries()
}

/// Runs one "explore" action end to end. A failing step stops the action;
/// steps that already ran are not undone.
pub async fn explore(state: &AppState, query: &str, style: MapStyle) -> Result<ExploreOutcome, ApiError> {
    let input = query.trim();
    if input.is_empty() {
        return Err(ApiError::Validation("Please enter a country name.".into()));
    }

    let guard = SearchGuard::begin(state);
    let result = run(state, input, style).await;
    match &result {
        Ok(_) => guard.finish(),
        Err(e) => warn!(query = input, "explore failed: {}", e),
    }
    result
}

/// Holds the session in `Searching`. Unless finished, dropping it puts the
/// phase back, which also covers a request future dropped mid-search.
struct SearchGuard<'a> {
    state: &'a AppState,
    finished: bool,
}

impl<'a> SearchGuard<'a> {
    fn begin(state: &'a AppState) -> Self {
        session(state).phase = Phase::Searching;
        Self { state, finished: false }
    }

    fn finish(mut self) {
        self.finished = true;
    }
}

impl Drop for SearchGuard<'_> {
    fn drop(&mut self) {
        if self.finished {
            return;
        }
        let mut s = session(self.state);
        if s.phase == Phase::Searching {
            s.phase = if s.current_map.is_some() { Phase::Displaying } else { Phase::Idle };
        }
    }
}

async fn run(state: &AppState, input: &str, style: MapStyle) -> Result<ExploreOutcome, ApiError> {
    let lookup = apply_alias(input);

    let country = fetch_country(state, &lookup)
        .await?
        .ok_or_else(|| ApiError::NotFound(format!("Could not find country '{}'", input)))?;

    let (lat, lon) = geocode(state, &country.name)
        .await
        .ok_or_else(|| ApiError::LocationUnresolvable(format!("Could not find location for {}", country.name)))?;

    let map = create_map(&state.map_path, &country.name, lat, lon, &country, style).await?;
    if state.open_browser {
        open_in_browser(&state.map_path);
    }

    let recent = {
        let mut s = session(state);
        s.current_map = Some(map.clone());
        s.recent.record(&country.name, Some(&country.flag_url));
        s.phase = Phase::Displaying;
        debug!(recent = s.recent.len(), "history updated");
        s.recent.entries()
    };
    cache_flag(state, &country.name, &country.flag_url).await;

    let conversions = match country.currency.iso_code() {
        Some(code) => convert_currency(state, code).await,
        None => None,
    };
    let message = match &conversions {
        None => Some(format!("Currency conversion failed for {}", country.currency.code)),
        Some(t) => {
            let missing: Vec<&str> = TARGET_CURRENCIES
                .into_iter()
                .filter(|code| t.get(code).is_none())
                .collect();
            (!missing.is_empty()).then(|| {
                format!("No {} rate available for {}", missing.join(", "), t.base)
            })
        }
    };

    info!(country = %country.name, lat, lon, "explore complete");
    Ok(ExploreOutcome {
        country,
        map,
        recent,
        conversions,
        message,
        searched_at: Utc::now().to_rfc3339(),
    })
}

fn open_in_browser(path: &Path) {
    let target = std::fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf());
    if let Err(e) = open::that_detached(&target) {
        warn!(path = %target.display(), "could not open map in browser: {}", e);
    }
}

/// Copies the last rendered map to `dest`.
pub async fn save_current_map(state: &AppState, dest: &str) -> Result<u64, ApiError> {
    let dest = dest.trim();
    if dest.is_empty() {
        return Err(ApiError::Validation("path is required".into()));
    }
    let view = session(state)
        .current_map
        .clone()
        .ok_or_else(|| ApiError::SaveTarget("Generate a map before saving.".into()))?;
    let bytes = view.save_map_as(&state.map_path, Path::new(dest)).await?;
    info!(dest, bytes, country = %view.country_name, "map saved");
    Ok(bytes)
}
