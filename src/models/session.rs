use serde::Serialize;

use crate::models::history::RecentSearches;
use crate::models::map_view::MapView;

#[derive(Serialize, Clone, Copy, Debug, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Phase {
    #[default]
    Idle,
    Searching,
    Displaying,
}

/// UI state that survives between requests.
#[derive(Debug, Default)]
pub struct Session {
    pub phase: Phase,
    pub recent: RecentSearches,
    pub current_map: Option<MapView>,
}
