use reqwest::Client;
use std::{
    env,
    path::PathBuf,
    sync::{Arc, Mutex},
};
use tokio::fs;
use tracing::info;

use crate::models::session::Session;

pub const USER_AGENT: &str = concat!("GlobeExplorer/", env!("CARGO_PKG_VERSION"));

#[derive(Clone, Debug)]
pub struct Endpoints {
    pub countries: String,
    pub rates: String,
    pub facts: String,
    pub geocode: String,
}

#[derive(Clone)]
pub struct AppState {
    pub http: Client,
    pub endpoints: Endpoints,
    pub currency_api_key: String,
    pub map_path: PathBuf,
    pub flag_cache_dir: PathBuf,
    pub open_browser: bool,
    pub session: Arc<Mutex<Session>>,
}

pub struct AppConfig {
    pub port: u16,
    pub external_timeout_ms: u64,
    pub endpoints: Endpoints,
    pub currency_api_key: String,
    pub map_path: PathBuf,
    pub flag_cache_dir: PathBuf,
    pub open_browser: bool,
}

fn var_or(key: &str, default: &str) -> String {
    env::var(key).unwrap_or_else(|_| default.into())
}

fn trimmed_url(key: &str, default: &str) -> String {
    var_or(key, default).trim_end_matches('/').to_string()
}

impl AppConfig {
    pub fn from_env() -> Result<Self, anyhow::Error> {
        let port: u16 = var_or("PORT", "8080").parse()?;
        let external_timeout_ms: u64 = env::var("EXTERNAL_TIMEOUT_MS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(12_000);
        let endpoints = Endpoints {
            countries: trimmed_url("COUNTRIES_URL", "https://restcountries.com/v3.1"),
            rates: trimmed_url("RATES_URL", "http://api.exchangerate.host"),
            facts: trimmed_url("FACTS_URL", "https://en.wikipedia.org/api/rest_v1/page/summary"),
            geocode: trimmed_url("GEOCODE_URL", "https://nominatim.openstreetmap.org/search"),
        };
        let currency_api_key = env::var("CURRENCY_API_KEY")
            .or_else(|_| env::var("API_KEY"))
            .unwrap_or_default();
        let map_path = PathBuf::from(var_or("MAP_OUTPUT_PATH", "map.html"));
        let flag_cache_dir = PathBuf::from(var_or("FLAG_CACHE_DIR", "cache/flags"));
        let open_browser = !matches!(
            var_or("OPEN_BROWSER", "true").to_ascii_lowercase().as_str(),
            "0" | "false" | "no" | "off"
        );
        Ok(Self {
            port,
            external_timeout_ms,
            endpoints,
            currency_api_key,
            map_path,
            flag_cache_dir,
            open_browser,
        })
    }

    pub async fn build_state(&self) -> Result<AppState, anyhow::Error> {
        if self.currency_api_key.is_empty() {
            info!("no CURRENCY_API_KEY set; currency conversion will likely be refused upstream");
        }

        // ensure output dirs
        if let Some(parent) = self.map_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).await?;
        }
        fs::create_dir_all(&self.flag_cache_dir).await?;
        info!(map = %self.map_path.display(), flags = %self.flag_cache_dir.display(), "output paths ready");

        // http client
        let http = Client::builder()
            .timeout(std::time::Duration::from_millis(self.external_timeout_ms))
            .user_agent(USER_AGENT)
            .build()?;

        Ok(AppState {
            http,
            endpoints: self.endpoints.clone(),
            currency_api_key: self.currency_api_key.clone(),
            map_path: self.map_path.clone(),
            flag_cache_dir: self.flag_cache_dir.clone(),
            open_browser: self.open_browser,
            session: Arc::new(Mutex::new(Session::default())),
        })
    }
}
